use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MostRentedCar {
    #[serde(default, alias = "_id")]
    pub car_id: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalAnalytics {
    #[serde(default)]
    pub total_rentals: u64,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub most_rented_cars: Vec<MostRentedCar>,
}
