//! HTTP handlers

pub mod customers;
pub mod error;
pub mod health;

pub use error::ApiError;
pub use health::health;
