use std::ops::Range;
use tracing::debug;

use crate::carousel::transition::Direction;

/// Cards shown side by side.
pub const VISIBLE_SLOTS: usize = 2;
pub const DEFAULT_SCROLL_UNITS_PER_INDEX: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Scroll distance that advances the window by one card.
    pub scroll_units_per_index: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            scroll_units_per_index: DEFAULT_SCROLL_UNITS_PER_INDEX,
        }
    }
}

/// Measurements reported by the host on mount and on every resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub sticky_height: f64,
    pub window_height: f64,
}

impl Viewport {
    pub fn new(sticky_height: f64, window_height: f64) -> Self {
        Self {
            sticky_height,
            window_height,
        }
    }

    /// A sticky element that has not been laid out yet reports zero.
    pub fn effective_sticky_height(&self) -> f64 {
        if self.sticky_height > 0.0 {
            self.sticky_height
        } else {
            self.window_height
        }
    }
}

pub fn target_indices(len: usize) -> usize {
    len.saturating_sub(VISIBLE_SLOTS)
}

/// Maps scroll progress onto a window start, clamped to the valid range.
pub fn window_start_for_progress(progress: f64, len: usize) -> usize {
    let target = target_indices(len);
    if target == 0 || progress.is_nan() {
        return 0;
    }

    let progress = progress.clamp(0.0, 1.0);
    ((progress * target as f64).round() as usize).min(target)
}

/// Scroll-to-index state for one carousel mount. The item count is fixed
/// for the lifetime of the mount.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselGeometry {
    len: usize,
    config: CarouselConfig,
    target: usize,
    sticky_height: f64,
    pin_height: f64,
    start: usize,
    direction: Direction,
    initialized: bool,
}

impl CarouselGeometry {
    pub fn new(len: usize, config: CarouselConfig) -> Self {
        Self {
            len,
            config,
            target: 0,
            sticky_height: 0.0,
            pin_height: 0.0,
            start: 0,
            direction: Direction::Backward,
            initialized: false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn target_indices(&self) -> usize {
        self.target
    }

    pub fn pin_height(&self) -> f64 {
        self.pin_height
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Indices of the real items currently visible.
    pub fn window(&self) -> Range<usize> {
        let end = (self.start + VISIBLE_SLOTS).min(self.len);
        self.start.min(end)..end
    }

    /// Sizes the pinned container. An empty list pins to the sticky height
    /// and stays uninitialized so no index math runs.
    pub fn initialize(&mut self, viewport: Viewport) {
        self.sticky_height = viewport.effective_sticky_height();

        if self.len == 0 {
            self.target = 0;
            self.pin_height = self.sticky_height;
            self.initialized = false;
            self.set_start(0);
            return;
        }

        self.target = target_indices(self.len);
        self.pin_height =
            self.sticky_height + self.target as f64 * self.config.scroll_units_per_index;
        self.initialized = true;

        debug!(
            "Carousel pinned at {}px for {} items ({} steps)",
            self.pin_height, self.len, self.target
        );
    }

    /// Recomputes the window start from the pin's top offset relative to
    /// the viewport. Returns the new start when it changed.
    pub fn on_scroll(&mut self, pin_top: f64) -> Option<usize> {
        if !self.initialized {
            return None;
        }

        let next = if self.target == 0 {
            0
        } else {
            let distance = self.pin_height - self.sticky_height;
            if pin_top <= 0.0 && distance > 0.0 {
                window_start_for_progress(-pin_top / distance, self.len)
            } else {
                0
            }
        };

        self.set_start(next)
    }

    /// Throws away the old geometry and recomputes it before tracking
    /// resumes.
    pub fn on_resize(&mut self, viewport: Viewport, pin_top: f64) -> Option<usize> {
        self.initialized = false;
        self.pin_height = 0.0;
        self.initialize(viewport);
        self.on_scroll(pin_top)
    }

    fn set_start(&mut self, next: usize) -> Option<usize> {
        let previous = self.start;
        if next == previous {
            return None;
        }

        self.direction = if next > previous {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.start = next;

        debug!("Carousel window moved {} -> {}", previous, next);
        Some(next)
    }
}
