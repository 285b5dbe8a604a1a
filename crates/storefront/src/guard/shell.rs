use crate::{
    abstract_trait::navigator::DynNavigator,
    guard::access::{AccessGuard, Guarded},
};
use tracing::debug;

/// Turns guard outcomes into navigation. Each mount yields at most one
/// push, however often the view is re-rendered.
#[derive(Clone)]
pub struct GuardShell {
    navigator: DynNavigator,
}

impl GuardShell {
    pub fn new(navigator: DynNavigator) -> Self {
        Self { navigator }
    }

    pub fn present<V>(&self, guard: &mut AccessGuard, view: V) -> Guarded<V> {
        if let Some(target) = guard.take_redirect() {
            debug!("Redirecting to {}", target.path());
            self.navigator.push(target.path());
        }
        guard.render(view)
    }
}
