use crate::{
    abstract_trait::CookieStoreTrait,
    cache::{CookieEntry, CookieOptions},
    errors::ServiceError,
};
use async_trait::async_trait;
use chrono::Utc;
use std::{
    collections::HashMap,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tokio::{fs, sync::Mutex};
use tracing::{debug, warn};

/// Cookie jar persisted as a JSON document, so a session survives process
/// restarts the way browser cookies survive page reloads.
pub struct FileCookieStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileCookieStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> Result<HashMap<String, CookieEntry>, ServiceError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(
                    "Cookie file {} is unreadable, starting empty: {:?}",
                    self.path.display(),
                    e
                );
                Ok(HashMap::new())
            }
        }
    }

    async fn write_entries(&self, entries: &HashMap<String, CookieEntry>) -> Result<(), ServiceError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl CookieStoreTrait for FileCookieStore {
    async fn get(&self, name: &str) -> Result<Option<String>, ServiceError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;

        match entries.get(name) {
            Some(entry) if entry.is_expired_at(Utc::now()) => {
                debug!("Cookie '{}' expired, evicting from {}", name, self.path.display());
                entries.remove(name);
                self.write_entries(&entries).await?;
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
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;
        entries.insert(name.to_string(), CookieEntry::new(value, options, Utc::now()));
        self.write_entries(&entries).await?;
        debug!("Cookie '{}' persisted to {}", name, self.path.display());
        Ok(())
    }

    async fn remove(&self, name: &str) -> Result<(), ServiceError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;
        if entries.remove(name).is_some() {
            self.write_entries(&entries).await?;
            debug!("Cookie '{}' removed from {}", name, self.path.display());
        }
        Ok(())
    }
}
