mod api;
mod auth;
mod car;
mod rental;

pub use self::api::ApiClient;
pub use self::auth::AuthApiService;
pub use self::car::CarApiService;
pub use self::rental::RentalApiService;
