use chrono::{DateTime, NaiveDate, Utc};

pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    if value.is_empty() {
        None
    } else {
        DateTime::parse_from_rfc3339(value)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
    }
}

/// Accepts plain `YYYY-MM-DD` as well as full RFC 3339 timestamps, which is
/// how the API mixes date fields.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_datetime(value).map(|dt| dt.date_naive()))
}
