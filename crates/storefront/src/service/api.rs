use reqwest::{Client, Method, RequestBuilder, header};
use serde::{Serialize, de::DeserializeOwned};
use shared::{
    abstract_trait::DynCookieStore,
    errors::{ServiceError, api_error},
};
use std::time::Duration;
use tracing::{debug, error};

use crate::session::TOKEN_COOKIE;

/// JSON-over-HTTP client for the rental API. Every request carries the
/// persisted session token as a bearer credential when one exists.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
    cookies: DynCookieStore,
}

impl ApiClient {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        cookies: DynCookieStore,
    ) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(timeout)
            .default_headers({
                let mut headers = header::HeaderMap::new();
                headers.insert(
                    header::CONTENT_TYPE,
                    header::HeaderValue::from_static("application/json"),
                );
                headers
            })
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            cookies,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ServiceError> {
        let builder = self.client.request(method, self.url(path));

        match self.cookies.get(TOKEN_COOKIE).await? {
            Some(token) => Ok(builder.bearer_auth(token)),
            None => Ok(builder),
        }
    }

    async fn send<T>(
        &self,
        builder: RequestBuilder,
        path: &str,
        auth_endpoint: bool,
    ) -> Result<T, ServiceError>
    where
        T: DeserializeOwned,
    {
        let response = builder.send().await.map_err(|e| {
            error!("Request to '{}' failed: {}", path, e);
            ServiceError::Network(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = api_error(status, &body, auth_endpoint);
            error!("Request to '{}' returned {}: {}", path, status, err);
            return Err(err);
        }

        debug!("Request to '{}' succeeded with {}", path, status);
        response.json::<T>().await.map_err(ServiceError::Network)
    }

    pub async fn get<T>(&self, path: &str) -> Result<T, ServiceError>
    where
        T: DeserializeOwned,
    {
        let builder = self.request(Method::GET, path).await?;
        self.send(builder, path, false).await
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ServiceError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let builder = self.request(Method::GET, path).await?.query(query);
        self.send(builder, path, false).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ServiceError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.request(Method::POST, path).await?.json(body);
        self.send(builder, path, false).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ServiceError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.request(Method::PUT, path).await?.json(body);
        self.send(builder, path, false).await
    }

    pub async fn delete<T>(&self, path: &str) -> Result<T, ServiceError>
    where
        T: DeserializeOwned,
    {
        let builder = self.request(Method::DELETE, path).await?;
        self.send(builder, path, false).await
    }

    /// Authentication endpoints are called without a bearer token and map
    /// credential rejections onto [`ServiceError::Authentication`].
    pub async fn post_auth<T, B>(&self, path: &str, body: &B) -> Result<T, ServiceError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.client.post(self.url(path)).json(body);
        self.send(builder, path, true).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::cache::MemoryCookieStore;
    use std::sync::Arc;

    #[test]
    fn joins_paths_onto_the_api_prefix() {
        let client = ApiClient::new(
            "http://localhost:5000/api/",
            Duration::from_secs(5),
            Arc::new(MemoryCookieStore::new()),
        )
        .unwrap();

        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(client.url("/cars/42"), "http://localhost:5000/api/cars/42");
        assert_eq!(
            client.url("rentals/analytics"),
            "http://localhost:5000/api/rentals/analytics"
        );
    }
}
