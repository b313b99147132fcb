//! Business logic services for the weather backend

pub mod lookup;

pub use lookup::LookupService;
