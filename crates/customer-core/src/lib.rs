//! Customer Core Library
//!
//! Error taxonomy, validation rules, and the storage port for customer records.

// Re-export pure types from customer-types
pub use customer_types::*;

pub mod error;
pub mod ports;
pub mod validation;

pub use error::{CustomerError, Result};
pub use ports::CustomerStore;
