use serde::{Deserialize, Serialize};
use shared::{abstract_trait::DynCookieStore, cache::CookieOptions, errors::ServiceError};
use tracing::debug;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Light/dark preference, kept without expiry.
#[derive(Clone)]
pub struct ThemePreference {
    store: DynCookieStore,
}

impl ThemePreference {
    pub fn new(store: DynCookieStore) -> Self {
        Self { store }
    }

    /// Anything other than a stored `dark` reads as light.
    pub async fn load(&self) -> Result<Theme, ServiceError> {
        let stored = self.store.get(THEME_KEY).await?;
        Ok(match stored.as_deref() {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        })
    }

    pub async fn save(&self, theme: Theme) -> Result<(), ServiceError> {
        debug!("Theme set to {}", theme.as_str());
        self.store
            .set(THEME_KEY, theme.as_str(), CookieOptions::persistent())
            .await
    }

    pub async fn toggle(&self) -> Result<Theme, ServiceError> {
        let next = self.load().await?.toggled();
        self.save(next).await?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{abstract_trait::CookieStoreTrait, cache::MemoryCookieStore};
    use std::sync::Arc;

    #[tokio::test]
    async fn defaults_to_light_and_toggles() {
        let cookies = MemoryCookieStore::new();
        let theme = ThemePreference::new(Arc::new(cookies.clone()));
        assert_eq!(theme.load().await.unwrap(), Theme::Light);

        assert_eq!(theme.toggle().await.unwrap(), Theme::Dark);
        assert_eq!(cookies.get(THEME_KEY).await.unwrap().as_deref(), Some("dark"));
        assert_eq!(cookies.entry(THEME_KEY).await.unwrap().expires_at, None);

        assert_eq!(theme.toggle().await.unwrap(), Theme::Light);
    }

    #[tokio::test]
    async fn unknown_values_read_as_light() {
        let cookies = MemoryCookieStore::new();
        cookies
            .set(THEME_KEY, "sepia", CookieOptions::persistent())
            .await
            .unwrap();
        let theme = ThemePreference::new(Arc::new(cookies));
        assert_eq!(theme.load().await.unwrap(), Theme::Light);
    }
}
