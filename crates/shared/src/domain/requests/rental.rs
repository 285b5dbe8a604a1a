use crate::domain::responses::RentalStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_rental_period"))]
pub struct CreateRentalRequest {
    #[validate(length(min = 1, message = "Car is required"))]
    pub car_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

fn validate_rental_period(request: &CreateRentalRequest) -> Result<(), ValidationError> {
    if request.start_date >= request.end_date {
        return Err(ValidationError::new("rental_period")
            .with_message("Startdatum måste vara före slutdatum.".into()));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRentalStatusRequest {
    pub status: RentalStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApproveRentalRequest {
    #[validate(length(min = 1, message = "Pickup address is required"))]
    pub pickup_address: String,
    #[validate(length(min = 1, message = "Drop-off address is required"))]
    pub dropoff_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RejectRentalRequest {
    #[validate(length(min = 1, message = "A reason is required"))]
    pub reason: String,
}
