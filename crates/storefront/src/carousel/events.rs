use parking_lot::RwLock;
use std::sync::{
    Arc, Weak,
    atomic::{AtomicU64, Ordering},
};
use tracing::trace;

use crate::carousel::geometry::Viewport;

/// Viewport changes as measured by the host. `pin_top` is the pinned
/// container's top offset relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportEvent {
    Scroll { pin_top: f64 },
    Resize { viewport: Viewport, pin_top: f64 },
}

type Listener = Arc<dyn Fn(&ViewportEvent) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: AtomicU64,
    listeners: RwLock<Vec<(u64, Listener)>>,
}

/// Scroll and resize fan-out. Listeners stay registered only as long as
/// the [`ListenerGuard`] returned from [`ViewportEvents::subscribe`] lives.
#[derive(Clone, Default)]
pub struct ViewportEvents {
    registry: Arc<Registry>,
}

impl std::fmt::Debug for ViewportEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportEvents")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl ViewportEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> ListenerGuard
    where
        F: Fn(&ViewportEvent) + Send + Sync + 'static,
    {
        let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed);
        self.registry
            .listeners
            .write()
            .push((id, Arc::new(listener)));
        trace!("Viewport listener {} registered", id);

        ListenerGuard {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    pub fn emit(&self, event: ViewportEvent) {
        // Snapshot so listeners may subscribe or drop guards while running.
        let listeners: Vec<Listener> = self
            .registry
            .listeners
            .read()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();

        for listener in listeners {
            listener(&event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.listeners.read().len()
    }
}

#[must_use = "dropping the guard deregisters the listener"]
#[derive(Debug)]
pub struct ListenerGuard {
    id: u64,
    registry: Weak<Registry>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.listeners.write().retain(|(id, _)| *id != self.id);
            trace!("Viewport listener {} deregistered", self.id);
        }
    }
}
