use async_trait::async_trait;
use shared::{
    domain::{
        requests::{AuthRequest, RegisterRequest},
        responses::LoginResponse,
    },
    errors::ServiceError,
};
use std::sync::Arc;

pub type DynAuthApiClient = Arc<dyn AuthApiClientTrait + Send + Sync>;

#[async_trait]
pub trait AuthApiClientTrait {
    async fn login(&self, input: &AuthRequest) -> Result<LoginResponse, ServiceError>;
    async fn register(&self, input: &RegisterRequest) -> Result<serde_json::Value, ServiceError>;
}
