use crate::{config::Claims, errors::ServiceError};
use std::sync::Arc;

pub type DynTokenDecoder = Arc<dyn TokenDecoderTrait + Send + Sync>;

pub trait TokenDecoderTrait: Send + Sync + std::fmt::Debug {
    /// Reads the claims out of a session token without verifying it.
    fn decode(&self, token: &str) -> Result<Claims, ServiceError>;
}
