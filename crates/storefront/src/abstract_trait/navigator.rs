use std::sync::Arc;

pub type DynNavigator = Arc<dyn NavigatorTrait + Send + Sync>;

/// Router-neutral navigation sink. Whatever hosts the shell (a browser
/// router, a terminal front-end, a test) decides what a push means.
pub trait NavigatorTrait {
    fn push(&self, path: &str);
}
