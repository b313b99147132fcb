//! Domain models for the CEP weather lookup

pub mod locality;
pub mod weather;

pub use locality::*;
pub use weather::*;
