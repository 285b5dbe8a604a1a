mod auth;
mod car;
mod rental;

pub use self::auth::{AuthRequest, RegisterRequest};
pub use self::car::{CarFilterQuery, CarPayload};
pub use self::rental::{
    ApproveRentalRequest, CreateRentalRequest, RejectRentalRequest, UpdateRentalStatusRequest,
};
