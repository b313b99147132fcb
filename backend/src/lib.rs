//! CEP Weather - Backend Service (Service B)
//!
//! Resolves a Brazilian postal code to its locality through ViaCEP, then to
//! the current temperature through WeatherAPI, answering in Celsius,
//! Fahrenheit and Kelvin.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use services::LookupService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub lookup: LookupService,
}

impl AppState {
    /// Build state and outbound clients from configuration
    pub fn from_config(config: Config) -> Result<Self, reqwest::Error> {
        let lookup = LookupService::from_config(&config)?;
        Ok(Self {
            config: Arc::new(config),
            lookup,
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    routes::api_routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
