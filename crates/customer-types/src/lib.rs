//! Customer Types - Pure type definitions
//!
//! This crate contains only the data shapes exchanged over the wire and kept in
//! storage, with no async runtime or database dependencies.

pub mod customer;
pub mod violation;

pub use customer::*;
pub use violation::*;
