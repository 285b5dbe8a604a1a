mod store;

pub use self::store::{
    AuthSnapshot, Session, SessionPolicy, SessionStore, TOKEN_COOKIE, USER_COOKIE,
};


#[cfg(test)]
mod tests {
    use super::testing::{StubAuthClient, token, user};
    use super::*;
    use chrono::Duration;
    use shared::{
        abstract_trait::CookieStoreTrait,
        cache::{CookieOptions, MemoryCookieStore},
        config::TokenCodec,
        domain::responses::UserType,
        errors::ServiceError,
    };
    use std::sync::{Arc, atomic::Ordering};
    use tokio::sync::Notify;

    fn store_with(cookies: MemoryCookieStore, auth: StubAuthClient, production: bool) -> SessionStore {
        SessionStore::new(
            Arc::new(cookies),
            Arc::new(TokenCodec::new()),
            Arc::new(auth),
            SessionPolicy::for_environment(production),
        )
    }

    async fn persist(cookies: &MemoryCookieStore, token: &str, user_json: &str) {
        let options = CookieOptions::retained_for(Duration::days(7), false);
        cookies.set(TOKEN_COOKIE, token, options).await.unwrap();
        cookies.set(USER_COOKIE, user_json, options).await.unwrap();
    }

    #[tokio::test]
    async fn starts_loading_until_init_resolves() {
        let store = store_with(MemoryCookieStore::new(), StubAuthClient::rejecting(), false);
        assert!(store.is_loading());

        assert_eq!(store.init().await.unwrap(), None);
        let snapshot = store.snapshot();
        assert!(!snapshot.is_loading);
        assert!(!snapshot.is_authenticated);
    }

    #[tokio::test]
    async fn load_restores_a_valid_session() {
        let cookies = MemoryCookieStore::new();
        let t = token(UserType::Individual, false, Duration::hours(2));
        let u = user(UserType::Individual, false);
        persist(&cookies, &t, &serde_json::to_string(&u).unwrap()).await;

        let store = store_with(cookies, StubAuthClient::rejecting(), false);
        let session = store.init().await.unwrap().unwrap();

        assert_eq!(session.token, t);
        assert_eq!(session.user, u);
        assert!(store.snapshot().is_authenticated);
    }

    #[tokio::test]
    async fn load_is_idempotent() {
        let cookies = MemoryCookieStore::new();
        let t = token(UserType::Company, false, Duration::hours(2));
        let u = user(UserType::Company, false);
        persist(&cookies, &t, &serde_json::to_string(&u).unwrap()).await;
        let store = store_with(cookies, StubAuthClient::rejecting(), false);

        let first = store.load().await.unwrap();
        let second = store.load().await.unwrap();
        assert!(first.is_some());
        assert_eq!(first, second);

        let empty = store_with(MemoryCookieStore::new(), StubAuthClient::rejecting(), false);
        assert_eq!(empty.load().await.unwrap(), None);
        assert_eq!(empty.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn expired_token_is_cleared_on_load() {
        let cookies = MemoryCookieStore::new();
        let t = token(UserType::Individual, false, Duration::seconds(-1));
        let u = user(UserType::Individual, false);
        persist(&cookies, &t, &serde_json::to_string(&u).unwrap()).await;

        let store = store_with(cookies.clone(), StubAuthClient::rejecting(), false);
        assert_eq!(store.load().await.unwrap(), None);

        assert_eq!(cookies.get(TOKEN_COOKIE).await.unwrap(), None);
        assert_eq!(cookies.get(USER_COOKIE).await.unwrap(), None);
    }

    #[tokio::test]
    async fn malformed_token_or_profile_is_cleared_on_load() {
        let cookies = MemoryCookieStore::new();
        persist(&cookies, "garbage", "{}").await;
        let store = store_with(cookies.clone(), StubAuthClient::rejecting(), false);
        assert_eq!(store.load().await.unwrap(), None);
        assert_eq!(cookies.get(USER_COOKIE).await.unwrap(), None);

        let t = token(UserType::Individual, false, Duration::hours(1));
        persist(&cookies, &t, "not json").await;
        assert_eq!(store.load().await.unwrap(), None);
        assert_eq!(cookies.get(TOKEN_COOKIE).await.unwrap(), None);
    }

    #[tokio::test]
    async fn login_persists_token_and_profile_with_retention() {
        let cookies = MemoryCookieStore::new();
        let t = token(UserType::Company, false, Duration::hours(2));
        let u = user(UserType::Company, false);
        let store = store_with(
            cookies.clone(),
            StubAuthClient::accepting(t.clone(), u.clone()),
            true,
        );
        let mut rx = store.subscribe();

        let session = store.login("ada@example.com", "hemligt").await.unwrap();
        assert_eq!(session.user, u);

        let entry = cookies.entry(TOKEN_COOKIE).await.unwrap();
        assert_eq!(entry.value, t);
        assert!(entry.secure);
        assert!(entry.expires_at.is_some());
        let profile = cookies.entry(USER_COOKIE).await.unwrap();
        assert_eq!(serde_json::from_str::<serde_json::Value>(&profile.value).unwrap()["id"], "u-1");

        assert!(rx.has_changed().unwrap());
        let seen = rx.borrow_and_update().clone();
        assert!(seen.is_authenticated);
        assert!(!seen.is_loading);
    }

    #[tokio::test]
    async fn login_failure_propagates_untouched() {
        let cookies = MemoryCookieStore::new();
        let auth = StubAuthClient::rejecting();
        let store = store_with(cookies.clone(), auth, false);
        store.init().await.unwrap();

        let err = store.login("ada@example.com", "fel").await.unwrap_err();
        match err {
            ServiceError::Authentication(msg) => assert_eq!(msg, "Fel e-post eller lösenord"),
            other => panic!("unexpected error {other:?}"),
        }
        assert!(!store.is_loading());
        assert_eq!(cookies.get(TOKEN_COOKIE).await.unwrap(), None);
    }

    #[tokio::test]
    async fn concurrent_login_is_refused_while_one_is_in_flight() {
        let release = Arc::new(Notify::new());
        let t = token(UserType::Individual, false, Duration::hours(2));
        let auth = Arc::new(
            StubAuthClient::accepting(t, user(UserType::Individual, false))
                .holding(release.clone()),
        );
        let store = Arc::new(SessionStore::new(
            Arc::new(MemoryCookieStore::new()),
            Arc::new(TokenCodec::new()),
            auth.clone(),
            SessionPolicy::for_environment(false),
        ));

        let first = tokio::spawn({
            let store = store.clone();
            async move { store.login("ada@example.com", "hemligt").await }
        });
        while auth.calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }

        let err = store.login("ada@example.com", "hemligt").await.unwrap_err();
        assert!(matches!(err, ServiceError::InProgress));
        assert_eq!(auth.calls.load(Ordering::SeqCst), 1);

        release.notify_one();
        assert!(first.await.unwrap().is_ok());
        assert!(store.snapshot().is_authenticated);

        release.notify_one();
        assert!(store.login("ada@example.com", "hemligt").await.is_ok());
    }

    #[tokio::test]
    async fn logout_clears_state_and_notifies_without_network() {
        let cookies = MemoryCookieStore::new();
        let t = token(UserType::Individual, false, Duration::hours(2));
        let auth = Arc::new(StubAuthClient::accepting(t, user(UserType::Individual, false)));
        let store = SessionStore::new(
            Arc::new(cookies.clone()),
            Arc::new(TokenCodec::new()),
            auth.clone(),
            SessionPolicy::for_environment(false),
        );
        store.login("ada@example.com", "hemligt").await.unwrap();
        let mut rx = store.subscribe();

        store.logout().await.unwrap();

        assert_eq!(auth.calls.load(Ordering::SeqCst), 1);
        assert!(rx.has_changed().unwrap());
        assert!(!rx.borrow_and_update().is_authenticated);
        assert_eq!(cookies.get(TOKEN_COOKIE).await.unwrap(), None);
        assert_eq!(cookies.get(USER_COOKIE).await.unwrap(), None);
    }

    #[tokio::test]
    async fn current_claims_clears_expired_tokens() {
        let cookies = MemoryCookieStore::new();
        let t = token(UserType::Individual, false, Duration::minutes(-5));
        persist(&cookies, &t, "{}").await;
        let store = store_with(cookies.clone(), StubAuthClient::rejecting(), false);

        assert_eq!(store.current_claims().await.unwrap(), None);
        assert_eq!(store.current_token().await.unwrap(), None);
    }
}
