//! Common types used across the edge and backend services

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::is_valid_cep;

/// Wire message for a malformed or ill-formed postal code.
pub const MSG_INVALID_ZIPCODE: &str = "invalid zipcode";

/// Wire message for a postal code unknown to the geocoding provider.
///
/// The edge service matches on this exact string to relay a not-found
/// outcome across the network hop.
pub const MSG_ZIPCODE_NOT_FOUND: &str = "can not find zipcode";

/// Wire message the backend returns for any upstream failure.
pub const MSG_INTERNAL_SERVER_ERROR: &str = "internal server error";

/// Wire message the edge returns when the backend hop fails.
pub const MSG_SERVICE_B_FAILURE: &str = "error communicating with Service B";

/// Classification of a failed lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Client-caused validation failure
    InvalidInput,
    /// The postal code does not exist at the geocoding provider
    NotFound,
    /// Transport, decode or status failure on any outbound hop
    UpstreamFailure,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::NotFound => "not_found",
            ErrorKind::UpstreamFailure => "upstream_failure",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON error body shared by both services: `{"message": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// True when this body relays a not-found outcome from the backend
    pub fn is_zipcode_not_found(&self) -> bool {
        self.message == MSG_ZIPCODE_NOT_FOUND
    }
}

/// Returned when a raw string is not a well-formed postal code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid zipcode")]
pub struct InvalidPostalCode;

/// A validated 8-digit Brazilian postal code (CEP)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    /// Parse a raw postal code, accepting only exactly eight ASCII digits
    pub fn parse(raw: &str) -> Result<Self, InvalidPostalCode> {
        if is_valid_cep(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(InvalidPostalCode)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
