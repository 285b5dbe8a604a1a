use serde::{Deserialize, Serialize};

/// ISO-8601 date strings as sent by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub organization_number: String,
    pub model: String,
    pub price_per_day: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_week: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_month: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<DateRange>,
    #[serde(default)]
    pub unavailable: Vec<DateRange>,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarEnvelope {
    pub car: Car,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
