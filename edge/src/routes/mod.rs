//! Route definitions for the edge service

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/cep",
            post(handlers::post_cep).layer(DefaultBodyLimit::max(handlers::cep::MAX_BODY_BYTES)),
        )
}
