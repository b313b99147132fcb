//! Error handling for the weather backend
//!
//! Every failure collapses into one of three kinds, each with a fixed
//! status code and wire message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::{
    ErrorKind, InvalidPostalCode, MessageResponse, MSG_INTERNAL_SERVER_ERROR,
    MSG_INVALID_ZIPCODE, MSG_ZIPCODE_NOT_FOUND,
};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid zipcode")]
    InvalidZipcode,

    #[error("can not find zipcode")]
    ZipcodeNotFound,

    // External service errors
    #[error("Geocoding provider error: {0}")]
    Geocoding(String),

    #[error("Weather provider error: {0}")]
    WeatherProvider(String),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::InvalidZipcode => ErrorKind::InvalidInput,
            AppError::ZipcodeNotFound => ErrorKind::NotFound,
            AppError::Geocoding(_) | AppError::WeatherProvider(_) => ErrorKind::UpstreamFailure,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::InvalidInput => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::UpstreamFailure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message written to the response body
    pub fn public_message(&self) -> &'static str {
        match self.kind() {
            ErrorKind::InvalidInput => MSG_INVALID_ZIPCODE,
            ErrorKind::NotFound => MSG_ZIPCODE_NOT_FOUND,
            ErrorKind::UpstreamFailure => MSG_INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<InvalidPostalCode> for AppError {
    fn from(_: InvalidPostalCode) -> Self {
        AppError::InvalidZipcode
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        match kind {
            ErrorKind::UpstreamFailure => tracing::error!(kind = %kind, "Lookup failed: {}", self),
            _ => tracing::debug!(kind = %kind, "Lookup rejected: {}", self),
        }

        (
            self.status_code(),
            Json(MessageResponse::new(self.public_message())),
        )
            .into_response()
    }
}

/// Result type alias for handlers and services
pub type AppResult<T> = Result<T, AppError>;
