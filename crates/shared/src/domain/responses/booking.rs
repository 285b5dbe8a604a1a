use crate::domain::responses::CarRef;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: String,
    pub rental_id: String,
    pub car_id: CarRef,
    pub renter_id: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub total_price: f64,
    pub pickup_address: String,
    pub dropoff_address: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}
