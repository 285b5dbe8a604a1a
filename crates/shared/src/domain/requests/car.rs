use crate::domain::responses::DateRange;
use serde::{Deserialize, Serialize};

/// Partial car body for create and update calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CarPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_day: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_week: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_month: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<DateRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarFilterQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_number: Option<String>,
}
