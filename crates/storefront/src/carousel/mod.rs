//! Scroll-driven two-card carousel.
//!
//! A mounted [`Carousel`] listens to [`ViewportEvents`], maps the pinned
//! container's scroll offset to a window start and renders the visible pair
//! as a [`CarouselFrame`]. Unmounting is dropping: the listener guard goes
//! with it.

mod events;
mod feed;
mod geometry;
mod slot;
mod transition;

pub use self::events::{ListenerGuard, ViewportEvent, ViewportEvents};
pub use self::feed::{DEFAULT_TAG, FeaturedCar, featured_cars};
pub use self::geometry::{
    CarouselConfig, CarouselGeometry, DEFAULT_SCROLL_UNITS_PER_INDEX, VISIBLE_SLOTS, Viewport,
    target_indices, window_start_for_progress,
};
pub use self::slot::{HoverController, SLOT_SPRING, SlotEmphasis, Spring};
pub use self::transition::{CardPose, Direction, EASE_IN_OUT, SlideTransition, Tween};

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    NoItems,
    NoOtherItem,
}

impl Placeholder {
    pub fn message(&self) -> &'static str {
        match self {
            Placeholder::NoItems => "Inga bilar tillgängliga",
            Placeholder::NoOtherItem => "Ingen annan bil tillgänglig",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SlotContent<'a, T> {
    Item { index: usize, item: &'a T },
    Placeholder(Placeholder),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlotView<'a, T> {
    pub content: SlotContent<'a, T>,
    pub emphasis: SlotEmphasis,
}

/// Everything needed to draw the carousel at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselFrame<'a, T> {
    pub pin_height: f64,
    pub start: usize,
    pub transition: SlideTransition,
    pub slots: Vec<SlotView<'a, T>>,
}

pub struct Carousel<T> {
    items: Vec<T>,
    geometry: Arc<Mutex<CarouselGeometry>>,
    hover: HoverController,
    _listener: ListenerGuard,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Carousel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("items", &self.items.len())
            .field("geometry", &*self.geometry.lock())
            .field("hover", &self.hover)
            .finish()
    }
}

impl<T> Carousel<T> {
    /// Sizes the pin for `viewport`, applies the current offset and starts
    /// listening for scroll and resize.
    pub fn mount(
        items: Vec<T>,
        config: CarouselConfig,
        events: &ViewportEvents,
        viewport: Viewport,
        pin_top: f64,
    ) -> Self {
        let mut geometry = CarouselGeometry::new(items.len(), config);
        geometry.initialize(viewport);
        geometry.on_scroll(pin_top);
        let geometry = Arc::new(Mutex::new(geometry));

        let tracked = geometry.clone();
        let listener = events.subscribe(move |event| {
            let mut geometry = tracked.lock();
            match *event {
                ViewportEvent::Scroll { pin_top } => {
                    geometry.on_scroll(pin_top);
                }
                ViewportEvent::Resize { viewport, pin_top } => {
                    geometry.on_resize(viewport, pin_top);
                }
            }
        });

        debug!("Carousel mounted with {} items", items.len());

        Self {
            items,
            geometry,
            hover: HoverController::default(),
            _listener: listener,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn geometry(&self) -> CarouselGeometry {
        self.geometry.lock().clone()
    }

    pub fn hover(&mut self, slot: usize) {
        if slot < VISIBLE_SLOTS {
            self.hover.enter(slot);
        }
    }

    pub fn leave(&mut self) {
        self.hover.leave();
    }

    pub fn frame(&self) -> CarouselFrame<'_, T> {
        let geometry = self.geometry.lock();

        let mut slots: Vec<SlotView<'_, T>> = geometry
            .window()
            .map(|index| SlotView {
                content: SlotContent::Item {
                    index,
                    item: &self.items[index],
                },
                emphasis: self.hover.emphasis(index - geometry.start()),
            })
            .collect();

        match self.items.len() {
            0 => slots.push(SlotView {
                content: SlotContent::Placeholder(Placeholder::NoItems),
                emphasis: SlotEmphasis::Normal,
            }),
            1 => slots.push(SlotView {
                content: SlotContent::Placeholder(Placeholder::NoOtherItem),
                emphasis: self.hover.emphasis(1),
            }),
            _ => {}
        }

        CarouselFrame {
            pin_height: geometry.pin_height(),
            start: geometry.start(),
            transition: SlideTransition::new(geometry.direction()),
            slots,
        }
    }
}
