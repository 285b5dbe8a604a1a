mod error;
mod http;
mod message;
mod service;

pub use self::error::ErrorResponse;
pub use self::http::api_error;
pub use self::message::Locale;
pub use self::service::ServiceError;
