use async_trait::async_trait;
use shared::{
    domain::{
        requests::{CarFilterQuery, CarPayload},
        responses::{Car, MessageResponse},
    },
    errors::ServiceError,
};
use std::sync::Arc;

pub type DynCarApiClient = Arc<dyn CarApiClientTrait + Send + Sync>;

#[async_trait]
pub trait CarApiClientTrait {
    async fn find_all(&self, query: &CarFilterQuery) -> Result<Vec<Car>, ServiceError>;
    async fn find_by_id(&self, id: &str) -> Result<Car, ServiceError>;
    async fn find_by_organization(&self) -> Result<Vec<Car>, ServiceError>;
    async fn create(&self, input: &CarPayload) -> Result<Car, ServiceError>;
    async fn update(&self, id: &str, input: &CarPayload) -> Result<Car, ServiceError>;
    async fn delete(&self, id: &str) -> Result<MessageResponse, ServiceError>;
}
