//! Error handling for the edge service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::{
    ErrorKind, InvalidPostalCode, MessageResponse, MSG_INVALID_ZIPCODE, MSG_SERVICE_B_FAILURE,
    MSG_ZIPCODE_NOT_FOUND,
};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid zipcode")]
    InvalidZipcode,

    #[error("can not find zipcode")]
    ZipcodeNotFound,

    #[error("Service B error: {0}")]
    ServiceB(String),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::InvalidZipcode => ErrorKind::InvalidInput,
            AppError::ZipcodeNotFound => ErrorKind::NotFound,
            AppError::ServiceB(_) => ErrorKind::UpstreamFailure,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::InvalidInput => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::UpstreamFailure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self.kind() {
            ErrorKind::InvalidInput => MSG_INVALID_ZIPCODE,
            ErrorKind::NotFound => MSG_ZIPCODE_NOT_FOUND,
            ErrorKind::UpstreamFailure => MSG_SERVICE_B_FAILURE,
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
        if kind == ErrorKind::UpstreamFailure {
            tracing::error!(kind = %kind, "Error: {}", self);
        }

        (
            self.status_code(),
            Json(MessageResponse::new(self.public_message())),
        )
            .into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
