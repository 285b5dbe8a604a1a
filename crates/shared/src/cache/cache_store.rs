use crate::{abstract_trait::CookieStoreTrait, errors::ServiceError};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CookieOptions {
    /// `None` keeps the entry until it is removed explicitly.
    pub expires: Option<Duration>,
    pub secure: bool,
}

impl CookieOptions {
    pub fn retained_for(expires: Duration, secure: bool) -> Self {
        Self {
            expires: Some(expires),
            secure,
        }
    }

    pub fn persistent() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CookieEntry {
    pub value: String,
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub secure: bool,
}

impl CookieEntry {
    pub fn new(value: &str, options: CookieOptions, now: DateTime<Utc>) -> Self {
        Self {
            value: value.to_string(),
            expires_at: options
                .expires
                .map(|ttl| now.checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC)),
            secure: options.secure,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

#[derive(Clone, Default)]
pub struct MemoryCookieStore {
    entries: Arc<Mutex<HashMap<String, CookieEntry>>>,
}

impl MemoryCookieStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn entry(&self, name: &str) -> Option<CookieEntry> {
        self.entries.lock().await.get(name).cloned()
    }
}

#[async_trait]
impl CookieStoreTrait for MemoryCookieStore {
    async fn get(&self, name: &str) -> Result<Option<String>, ServiceError> {
        let mut entries = self.entries.lock().await;

        match entries.get(name) {
            Some(entry) if entry.is_expired_at(Utc::now()) => {
                debug!("Cookie '{}' expired, evicting", name);
                entries.remove(name);
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value.clone())),
            None => Ok(None),
        }
    }

    async fn set(
        &self,
        name: &str,
        value: &str,
        options: CookieOptions,
    ) -> Result<(), ServiceError> {
        let entry = CookieEntry::new(value, options, Utc::now());
        self.entries.lock().await.insert(name.to_string(), entry);
        debug!("Cookie '{}' set with {:?}", name, options);
        Ok(())
    }

    async fn remove(&self, name: &str) -> Result<(), ServiceError> {
        if self.entries.lock().await.remove(name).is_some() {
            debug!("Cookie '{}' removed", name);
        }
        Ok(())
    }
}
