use crate::{abstract_trait::rental::RentalApiClientTrait, service::ApiClient};
use async_trait::async_trait;
use shared::{
    domain::{
        requests::{
            ApproveRentalRequest, CreateRentalRequest, RejectRentalRequest,
            UpdateRentalStatusRequest,
        },
        responses::{
            Booking, BookingEnvelope, BookingsEnvelope, Rental, RentalAnalytics, RentalEnvelope,
            RentalsEnvelope,
        },
    },
    errors::ServiceError,
};
use tracing::{error, info};
use validator::Validate;

#[derive(Clone)]
pub struct RentalApiService {
    api: ApiClient,
}

impl RentalApiService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl RentalApiClientTrait for RentalApiService {
    async fn create(&self, input: &CreateRentalRequest) -> Result<Rental, ServiceError> {
        input.validate()?;

        let envelope: RentalEnvelope = self
            .api
            .post("/rentals", input)
            .await
            .inspect_err(|e| error!("Failed to create rental for car {}: {}", input.car_id, e))?;

        info!("Created rental {}", envelope.rental.id);
        Ok(envelope.rental)
    }

    async fn find_by_id(&self, id: &str) -> Result<Rental, ServiceError> {
        self.api
            .get(&format!("/rentals/{id}"))
            .await
            .inspect_err(|e| error!("Failed to fetch rental {}: {}", id, e))
    }

    async fn update_status(
        &self,
        id: &str,
        input: &UpdateRentalStatusRequest,
    ) -> Result<Rental, ServiceError> {
        let envelope: RentalEnvelope = self
            .api
            .put(&format!("/rentals/{id}"), input)
            .await
            .inspect_err(|e| error!("Failed to update rental {}: {}", id, e))?;

        Ok(envelope.rental)
    }

    async fn approve(
        &self,
        id: &str,
        input: &ApproveRentalRequest,
    ) -> Result<Booking, ServiceError> {
        input.validate()?;

        let envelope: BookingEnvelope = self
            .api
            .put(&format!("/rentals/admin/approve/{id}"), input)
            .await
            .inspect_err(|e| error!("Failed to approve rental {}: {}", id, e))?;

        info!("Approved rental {} as booking {}", id, envelope.booking.id);
        Ok(envelope.booking)
    }

    async fn reject(&self, id: &str, input: &RejectRentalRequest) -> Result<Rental, ServiceError> {
        input.validate()?;

        let envelope: RentalEnvelope = self
            .api
            .put(&format!("/rentals/admin/reject/{id}"), input)
            .await
            .inspect_err(|e| error!("Failed to reject rental {}: {}", id, e))?;

        info!("Rejected rental {}", id);
        Ok(envelope.rental)
    }

    async fn find_all(&self) -> Result<Vec<Rental>, ServiceError> {
        let envelope: RentalsEnvelope = self
            .api
            .get("/rentals")
            .await
            .inspect_err(|e| error!("Failed to fetch rentals: {}", e))?;

        Ok(envelope.rentals)
    }

    async fn find_rejected(&self) -> Result<Vec<Rental>, ServiceError> {
        self.api
            .get("/rentals/rejected")
            .await
            .inspect_err(|e| error!("Failed to fetch rejected rentals: {}", e))
    }

    async fn find_approved_bookings(&self) -> Result<Vec<Booking>, ServiceError> {
        self.api
            .get("/rentals/approved")
            .await
            .inspect_err(|e| error!("Failed to fetch bookings: {}", e))
    }

    async fn analytics(&self) -> Result<RentalAnalytics, ServiceError> {
        self.api
            .get("/rentals/analytics")
            .await
            .inspect_err(|e| error!("Failed to fetch rental analytics: {}", e))
    }

    async fn bookings_by_user(&self, user_id: &str) -> Result<Vec<Booking>, ServiceError> {
        let envelope: BookingsEnvelope = self
            .api
            .get_with_query("/rentals/bookings", &[("userId", user_id)])
            .await
            .inspect_err(|e| error!("Failed to fetch bookings for user {}: {}", user_id, e))?;

        Ok(envelope.bookings)
    }

    async fn current_rentals_by_user(&self, user_id: &str) -> Result<Vec<Rental>, ServiceError> {
        let envelope: RentalsEnvelope = self
            .api
            .get_with_query("/rentals/current-rentals", &[("userId", user_id)])
            .await
            .inspect_err(|e| {
                error!("Failed to fetch current rentals for user {}: {}", user_id, e)
            })?;

        Ok(envelope.rentals)
    }
}
