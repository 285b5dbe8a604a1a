use crate::domain::responses::{Booking, Car};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RentalStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
    Deleted,
}

/// The API either references the car by id or embeds it populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CarRef {
    Id(String),
    Car(Box<Car>),
}

impl CarRef {
    pub fn id(&self) -> &str {
        match self {
            CarRef::Id(id) => id,
            CarRef::Car(car) => &car.id,
        }
    }

    pub fn car(&self) -> Option<&Car> {
        match self {
            CarRef::Id(_) => None,
            CarRef::Car(car) => Some(car),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    #[serde(rename = "_id")]
    pub id: String,
    pub car_id: CarRef,
    pub renter_id: String,
    pub start_date: String,
    pub end_date: String,
    pub status: RentalStatus,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalEnvelope {
    pub rental: Rental,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalsEnvelope {
    pub rentals: Vec<Rental>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingEnvelope {
    pub booking: Booking,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingsEnvelope {
    pub bookings: Vec<Booking>,
}
