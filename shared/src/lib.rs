//! Shared types and models for the CEP weather services
//!
//! This crate contains the pieces both the edge service and the backend
//! service agree on: postal-code validation, the weather result contract,
//! temperature conversion and the wire error body.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
