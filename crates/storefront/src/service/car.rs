use crate::{abstract_trait::car::CarApiClientTrait, service::ApiClient};
use async_trait::async_trait;
use shared::{
    domain::{
        requests::{CarFilterQuery, CarPayload},
        responses::{Car, CarEnvelope, MessageResponse},
    },
    errors::ServiceError,
};
use tracing::{error, info};

#[derive(Clone)]
pub struct CarApiService {
    api: ApiClient,
}

impl CarApiService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CarApiClientTrait for CarApiService {
    async fn find_all(&self, query: &CarFilterQuery) -> Result<Vec<Car>, ServiceError> {
        let cars: Vec<Car> = self
            .api
            .get_with_query("/cars", query)
            .await
            .inspect_err(|e| error!("Failed to fetch cars: {}", e))?;

        info!("Fetched {} cars", cars.len());
        Ok(cars)
    }

    async fn find_by_id(&self, id: &str) -> Result<Car, ServiceError> {
        self.api
            .get(&format!("/cars/{id}"))
            .await
            .inspect_err(|e| error!("Failed to fetch car {}: {}", id, e))
    }

    async fn find_by_organization(&self) -> Result<Vec<Car>, ServiceError> {
        self.api
            .get("/cars/organization")
            .await
            .inspect_err(|e| error!("Failed to fetch organization cars: {}", e))
    }

    async fn create(&self, input: &CarPayload) -> Result<Car, ServiceError> {
        let envelope: CarEnvelope = self
            .api
            .post("/cars", input)
            .await
            .inspect_err(|e| error!("Failed to create car: {}", e))?;

        info!("Created car {}", envelope.car.id);
        Ok(envelope.car)
    }

    async fn update(&self, id: &str, input: &CarPayload) -> Result<Car, ServiceError> {
        let envelope: CarEnvelope = self
            .api
            .put(&format!("/cars/{id}"), input)
            .await
            .inspect_err(|e| error!("Failed to update car {}: {}", id, e))?;

        Ok(envelope.car)
    }

    async fn delete(&self, id: &str) -> Result<MessageResponse, ServiceError> {
        let response: MessageResponse = self
            .api
            .delete(&format!("/cars/{id}"))
            .await
            .inspect_err(|e| error!("Failed to delete car {}: {}", id, e))?;

        info!("Deleted car {}", id);
        Ok(response)
    }
}
