use crate::{abstract_trait::auth::DynAuthApiClient, forms::SubmitGate};
use chrono::Duration;
use shared::{
    abstract_trait::{DynCookieStore, DynTokenDecoder},
    cache::CookieOptions,
    config::Claims,
    domain::{requests::AuthRequest, responses::AuthUser},
    errors::ServiceError,
};
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

pub const TOKEN_COOKIE: &str = "token";
pub const USER_COOKIE: &str = "user";

/// A signed-in visitor: the raw token plus the profile cached at login.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: AuthUser,
}

/// What consumers observe. Published on every change.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSnapshot {
    pub user: Option<AuthUser>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

impl AuthSnapshot {
    fn initial() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_loading: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionPolicy {
    pub retention: Duration,
    pub secure: bool,
}

impl SessionPolicy {
    pub const DEFAULT_RETENTION_DAYS: i64 = 7;

    pub fn for_environment(production: bool) -> Self {
        Self {
            retention: Duration::days(Self::DEFAULT_RETENTION_DAYS),
            secure: production,
        }
    }

    fn cookie_options(&self) -> CookieOptions {
        CookieOptions::retained_for(self.retention, self.secure)
    }
}

/// Owns the session token and cached profile. Everything else reads
/// snapshots through [`SessionStore::subscribe`].
pub struct SessionStore {
    cookies: DynCookieStore,
    codec: DynTokenDecoder,
    auth_client: DynAuthApiClient,
    policy: SessionPolicy,
    login_gate: SubmitGate,
    state: watch::Sender<AuthSnapshot>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("policy", &self.policy)
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(
        cookies: DynCookieStore,
        codec: DynTokenDecoder,
        auth_client: DynAuthApiClient,
        policy: SessionPolicy,
    ) -> Self {
        let (state, _) = watch::channel(AuthSnapshot::initial());

        Self {
            cookies,
            codec,
            auth_client,
            policy,
            login_gate: SubmitGate::default(),
            state,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthSnapshot> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> AuthSnapshot {
        self.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn codec(&self) -> &DynTokenDecoder {
        &self.codec
    }

    fn publish(&self, update: impl FnOnce(&mut AuthSnapshot)) {
        self.state.send_if_modified(|snapshot| {
            let before = snapshot.clone();
            update(snapshot);
            *snapshot != before
        });
    }

    /// One-time start-up rehydration. `is_loading` stays set until the
    /// persisted state has been read.
    pub async fn init(&self) -> Result<Option<Session>, ServiceError> {
        self.publish(|s| s.is_loading = true);
        let result = self.load().await;
        self.publish(|s| s.is_loading = false);
        result
    }

    /// Reads the persisted token and profile. Anything stale or unreadable
    /// is cleared and reported as no session.
    pub async fn load(&self) -> Result<Option<Session>, ServiceError> {
        let token = self.cookies.get(TOKEN_COOKIE).await?;
        let user_raw = self.cookies.get(USER_COOKIE).await?;

        let (token, user_raw) = match (token, user_raw) {
            (Some(token), Some(user_raw)) => (token, user_raw),
            (None, None) => {
                self.publish(Self::signed_out);
                return Ok(None);
            }
            _ => {
                warn!("Incomplete persisted session, clearing");
                self.clear().await?;
                return Ok(None);
            }
        };

        match self.codec.decode(&token) {
            Ok(claims) if claims.is_expired() => {
                warn!("Session token expired, signing out");
                self.clear().await?;
                return Ok(None);
            }
            Ok(_) => {}
            Err(e) => {
                error!("Could not decode persisted session token: {}", e);
                self.clear().await?;
                return Ok(None);
            }
        }

        let user = match serde_json::from_str::<AuthUser>(&user_raw) {
            Ok(user) => user,
            Err(e) => {
                error!("Could not parse persisted user profile: {:?}", e);
                self.clear().await?;
                return Ok(None);
            }
        };

        debug!("Session restored for user {}", user.id);
        self.publish(|s| {
            s.user = Some(user.clone());
            s.is_authenticated = true;
        });

        Ok(Some(Session { token, user }))
    }

    /// Authenticates against the API and persists the session. Failures are
    /// returned exactly as the API client produced them. A second call while
    /// one is in flight fails with [`ServiceError::InProgress`] and sends
    /// nothing.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ServiceError> {
        let Some(_ticket) = self.login_gate.try_acquire() else {
            warn!("Login for {} ignored, another is in flight", email);
            return Err(ServiceError::InProgress);
        };

        self.publish(|s| s.is_loading = true);

        let request = AuthRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let result = match self.auth_client.login(&request).await {
            Ok(response) => self.persist(response.token, response.user).await,
            Err(e) => Err(e),
        };

        match &result {
            Ok(session) => {
                info!("User {} logged in", session.user.id);
                self.publish(|s| {
                    s.user = Some(session.user.clone());
                    s.is_authenticated = true;
                    s.is_loading = false;
                });
            }
            Err(e) => {
                warn!("Login failed: {}", e);
                self.publish(|s| s.is_loading = false);
            }
        }

        result
    }

    async fn persist(&self, token: String, user: AuthUser) -> Result<Session, ServiceError> {
        let options = self.policy.cookie_options();
        let user_json = serde_json::to_string(&user)?;

        self.cookies.set(TOKEN_COOKIE, &token, options).await?;
        self.cookies.set(USER_COOKIE, &user_json, options).await?;

        Ok(Session { token, user })
    }

    /// Local sign-out; the API is not contacted.
    pub async fn logout(&self) -> Result<(), ServiceError> {
        info!("Logging out");
        self.clear().await
    }

    async fn clear(&self) -> Result<(), ServiceError> {
        let token = self.cookies.remove(TOKEN_COOKIE).await;
        let user = self.cookies.remove(USER_COOKIE).await;
        self.publish(Self::signed_out);
        token.and(user)
    }

    fn signed_out(snapshot: &mut AuthSnapshot) {
        snapshot.user = None;
        snapshot.is_authenticated = false;
    }

    pub async fn current_token(&self) -> Result<Option<String>, ServiceError> {
        self.cookies.get(TOKEN_COOKIE).await
    }

    /// Claims of the current token, or `None` when signed out. An expired
    /// or undecodable token clears the session.
    pub async fn current_claims(&self) -> Result<Option<Claims>, ServiceError> {
        let Some(token) = self.current_token().await? else {
            return Ok(None);
        };

        match self.codec.decode(&token) {
            Ok(claims) if claims.is_expired() => {
                warn!("Session token expired");
                self.clear().await?;
                Ok(None)
            }
            Ok(claims) => Ok(Some(claims)),
            Err(e) => {
                error!("Could not decode session token: {}", e);
                self.clear().await?;
                Ok(None)
            }
        }
    }
}
