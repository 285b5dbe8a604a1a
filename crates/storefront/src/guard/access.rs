use crate::{
    guard::role::{Role, effective_role},
    routes::{LOGIN_PATH, UNAUTHORIZED_PATH},
    session::SessionStore,
};
use chrono::{DateTime, Utc};
use shared::abstract_trait::TokenDecoderTrait;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    Login,
    Unauthorized,
}

impl RedirectTarget {
    pub fn path(&self) -> &'static str {
        match self {
            RedirectTarget::Login => LOGIN_PATH,
            RedirectTarget::Unauthorized => UNAUTHORIZED_PATH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Resolving,
    Authorized,
    Redirecting(RedirectTarget),
}

/// What a guarded view renders as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guarded<V> {
    /// Full-viewport loading indicator.
    Loading,
    Authorized(V),
    /// Nothing is rendered; the shell navigates to the target.
    Redirect(RedirectTarget),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignOutReason {
    MissingToken,
    Expired,
    Malformed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Authorized(Role),
    Forbidden(Role),
    SignedOut(SignOutReason),
}

impl Verdict {
    pub fn state(&self) -> GuardState {
        match self {
            Verdict::Authorized(_) => GuardState::Authorized,
            Verdict::Forbidden(_) => GuardState::Redirecting(RedirectTarget::Unauthorized),
            Verdict::SignedOut(_) => GuardState::Redirecting(RedirectTarget::Login),
        }
    }

    /// A token that exists but cannot be trusted must be wiped.
    pub fn clears_session(&self) -> bool {
        matches!(
            self,
            Verdict::SignedOut(SignOutReason::Expired | SignOutReason::Malformed)
        )
    }
}

/// Pure authorization decision for a token at a point in time.
pub fn evaluate(
    token: Option<&str>,
    codec: &dyn TokenDecoderTrait,
    required: Option<Role>,
    now: DateTime<Utc>,
) -> Verdict {
    let Some(token) = token else {
        return Verdict::SignedOut(SignOutReason::MissingToken);
    };

    let claims = match codec.decode(token) {
        Ok(claims) => claims,
        Err(_) => return Verdict::SignedOut(SignOutReason::Malformed),
    };

    if claims.is_expired_at(now) {
        return Verdict::SignedOut(SignOutReason::Expired);
    }

    let role = effective_role(&claims);
    if role.admits(required) {
        Verdict::Authorized(role)
    } else {
        Verdict::Forbidden(role)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MountKey {
    route: String,
    required: Option<Role>,
}

/// Wraps a protected view. Resolution runs once per `(route, role)` mount,
/// not on every render.
#[derive(Debug)]
pub struct AccessGuard {
    store: Arc<SessionStore>,
    required: Option<Role>,
    mounted: Option<MountKey>,
    state: GuardState,
    pending_redirect: Option<RedirectTarget>,
}

impl AccessGuard {
    pub fn new(store: Arc<SessionStore>, required: Option<Role>) -> Self {
        Self {
            store,
            required,
            mounted: None,
            state: GuardState::Resolving,
            pending_redirect: None,
        }
    }

    pub fn required(&self) -> Option<Role> {
        self.required
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    pub async fn mount(&mut self, route: &str) -> GuardState {
        let key = MountKey {
            route: route.to_string(),
            required: self.required,
        };

        if self.mounted.as_ref() == Some(&key) && self.state != GuardState::Resolving {
            return self.state;
        }

        self.state = GuardState::Resolving;
        self.pending_redirect = None;

        let token = match self.store.current_token().await {
            Ok(token) => token,
            Err(e) => {
                error!("Could not read session token for '{}': {}", route, e);
                None
            }
        };

        let verdict = evaluate(
            token.as_deref(),
            self.store.codec().as_ref(),
            self.required,
            Utc::now(),
        );

        if verdict.clears_session() {
            warn!("Untrusted session on '{}' ({:?}), signing out", route, verdict);
            if let Err(e) = self.store.logout().await {
                error!("Failed to clear session: {}", e);
            }
        }

        match verdict {
            Verdict::Authorized(role) => debug!("'{}' authorized for {}", route, role),
            Verdict::Forbidden(role) => info!(
                "'{}' requires {:?}, visitor is {}",
                route, self.required, role
            ),
            Verdict::SignedOut(reason) => info!("'{}' needs sign-in ({:?})", route, reason),
        }

        self.state = verdict.state();
        if let GuardState::Redirecting(target) = self.state {
            self.pending_redirect = Some(target);
        }
        self.mounted = Some(key);
        self.state
    }

    /// Hands out the redirect of the current mount exactly once.
    pub fn take_redirect(&mut self) -> Option<RedirectTarget> {
        self.pending_redirect.take()
    }

    pub fn render<V>(&self, view: V) -> Guarded<V> {
        match self.state {
            GuardState::Resolving => Guarded::Loading,
            GuardState::Authorized => Guarded::Authorized(view),
            GuardState::Redirecting(target) => Guarded::Redirect(target),
        }
    }
}
