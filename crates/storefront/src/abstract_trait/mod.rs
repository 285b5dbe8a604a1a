pub mod auth;
pub mod car;
pub mod navigator;
pub mod rental;
