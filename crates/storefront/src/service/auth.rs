use crate::{abstract_trait::auth::AuthApiClientTrait, service::ApiClient};
use async_trait::async_trait;
use shared::{
    domain::{
        requests::{AuthRequest, RegisterRequest},
        responses::LoginResponse,
    },
    errors::ServiceError,
};
use tracing::{error, info};
use validator::Validate;

#[derive(Clone)]
pub struct AuthApiService {
    api: ApiClient,
}

impl AuthApiService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthApiClientTrait for AuthApiService {
    async fn login(&self, input: &AuthRequest) -> Result<LoginResponse, ServiceError> {
        input.validate()?;
        info!("Logging in {}", input.email);

        let response: LoginResponse = self
            .api
            .post_auth("/auth/login", input)
            .await
            .inspect_err(|e| error!("Login failed for {}: {}", input.email, e))?;

        info!("Login succeeded for user {}", response.user.id);
        Ok(response)
    }

    async fn register(&self, input: &RegisterRequest) -> Result<serde_json::Value, ServiceError> {
        let input = input.clone().normalized();
        input.validate()?;

        info!(
            "Registering {} account for {}",
            input.user_type.as_str(),
            input.email
        );

        self.api
            .post_auth("/auth/register", &input)
            .await
            .inspect_err(|e| error!("Registration failed for {}: {}", input.email, e))
    }
}
