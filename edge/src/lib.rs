//! CEP Weather - Edge Service (Service A)
//!
//! Caller-facing entry point: validates a postal code and forwards it to the
//! weather backend, relaying the result or a reclassified error.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use external::BackendClient;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub backend: BackendClient,
}

impl AppState {
    pub fn from_config(config: Config) -> Result<Self, reqwest::Error> {
        let backend = BackendClient::new(config.service_b.url.clone(), config.http.timeout())?;
        Ok(Self {
            config: Arc::new(config),
            backend,
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    routes::api_routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
