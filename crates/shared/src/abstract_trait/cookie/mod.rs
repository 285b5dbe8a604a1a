use crate::{cache::CookieOptions, errors::ServiceError};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCookieStore = Arc<dyn CookieStoreTrait + Send + Sync>;

/// Client-side persisted key/value entries with browser-cookie semantics:
/// an entry past its retention window reads as absent.
#[async_trait]
pub trait CookieStoreTrait: Send + Sync {
    async fn get(&self, name: &str) -> Result<Option<String>, ServiceError>;
    async fn set(&self, name: &str, value: &str, options: CookieOptions)
    -> Result<(), ServiceError>;
    async fn remove(&self, name: &str) -> Result<(), ServiceError>;
}
