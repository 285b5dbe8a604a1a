use async_trait::async_trait;
use shared::{
    domain::{
        requests::{
            ApproveRentalRequest, CreateRentalRequest, RejectRentalRequest,
            UpdateRentalStatusRequest,
        },
        responses::{Booking, Rental, RentalAnalytics},
    },
    errors::ServiceError,
};
use std::sync::Arc;

pub type DynRentalApiClient = Arc<dyn RentalApiClientTrait + Send + Sync>;

#[async_trait]
pub trait RentalApiClientTrait {
    async fn create(&self, input: &CreateRentalRequest) -> Result<Rental, ServiceError>;
    async fn find_by_id(&self, id: &str) -> Result<Rental, ServiceError>;
    async fn update_status(
        &self,
        id: &str,
        input: &UpdateRentalStatusRequest,
    ) -> Result<Rental, ServiceError>;
    async fn approve(&self, id: &str, input: &ApproveRentalRequest)
    -> Result<Booking, ServiceError>;
    async fn reject(&self, id: &str, input: &RejectRentalRequest) -> Result<Rental, ServiceError>;
    async fn find_all(&self) -> Result<Vec<Rental>, ServiceError>;
    async fn find_rejected(&self) -> Result<Vec<Rental>, ServiceError>;
    async fn find_approved_bookings(&self) -> Result<Vec<Booking>, ServiceError>;
    async fn analytics(&self) -> Result<RentalAnalytics, ServiceError>;
    async fn bookings_by_user(&self, user_id: &str) -> Result<Vec<Booking>, ServiceError>;
    async fn current_rentals_by_user(&self, user_id: &str) -> Result<Vec<Rental>, ServiceError>;
}
