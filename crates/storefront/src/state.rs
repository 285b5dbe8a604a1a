use crate::{
    abstract_trait::navigator::DynNavigator,
    carousel::{CarouselConfig, ViewportEvents},
    config::Config,
    di::DependenciesInject,
    guard::{AccessGuard, GuardShell},
    routes::required_role,
    service::ApiClient,
    session::{SessionPolicy, SessionStore},
    theme::ThemePreference,
};
use anyhow::{Context, Result};
use chrono::Duration;
use shared::{
    abstract_trait::{DynCookieStore, DynTokenDecoder},
    cache::{FileCookieStore, MemoryCookieStore},
    config::TokenCodec,
};
use std::{fmt, sync::Arc};
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub session: Arc<SessionStore>,
    pub cookies: DynCookieStore,
    pub theme: ThemePreference,
    pub viewport: ViewportEvents,
    pub carousel: CarouselConfig,
    pub shell: GuardShell,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("session", &self.session)
            .field("cookies", &"<dyn CookieStore>")
            .field("viewport", &self.viewport)
            .field("carousel", &self.carousel)
            .finish()
    }
}

impl AppState {
    pub fn new(config: &Config, navigator: DynNavigator) -> Result<Self> {
        let cookies: DynCookieStore = match &config.cookie_store_path {
            Some(path) => {
                info!("Persisting client state in {}", path.display());
                Arc::new(FileCookieStore::new(path.clone()))
            }
            None => Arc::new(MemoryCookieStore::new()),
        };

        let api = ApiClient::new(
            &config.api_base_url,
            config.request_timeout,
            cookies.clone(),
        )
        .context("Failed to build API client")?;

        let di_container = DependenciesInject::new(api);
        let codec = Arc::new(TokenCodec::new()) as DynTokenDecoder;

        let policy = SessionPolicy {
            retention: Duration::days(config.session_retention_days),
            secure: config.production,
        };

        let session = Arc::new(SessionStore::new(
            cookies.clone(),
            codec,
            di_container.auth_client.clone(),
            policy,
        ));

        Ok(Self {
            di_container,
            session,
            theme: ThemePreference::new(cookies.clone()),
            cookies,
            viewport: ViewportEvents::new(),
            carousel: CarouselConfig {
                scroll_units_per_index: config.scroll_units_per_index,
            },
            shell: GuardShell::new(navigator),
        })
    }

    /// A guard for `path`, or `None` when the page is public.
    pub fn guard_for(&self, path: &str) -> Option<AccessGuard> {
        required_role(path).map(|role| AccessGuard::new(self.session.clone(), Some(role)))
    }
}
