//! HTTP handlers for the edge service

pub mod cep;
pub mod health;

pub use cep::post_cep;
pub use health::health_check;
