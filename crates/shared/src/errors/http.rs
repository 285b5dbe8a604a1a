use crate::errors::{ErrorResponse, ServiceError};
use reqwest::StatusCode;

/// Maps a non-2xx API response onto the client error taxonomy.
///
/// A `401` coming back from an authentication endpoint means the
/// credentials were rejected; everywhere else it is just an API failure
/// the initiating view reports.
pub fn api_error(status: StatusCode, body: &str, auth_endpoint: bool) -> ServiceError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(ErrorResponse::into_message)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unexpected response")
                .to_string()
        });

    if auth_endpoint && matches!(status, StatusCode::UNAUTHORIZED | StatusCode::BAD_REQUEST) {
        return ServiceError::Authentication(message);
    }

    match status {
        StatusCode::FORBIDDEN => ServiceError::Authorization(message),
        _ => ServiceError::Api { status, message },
    }
}
