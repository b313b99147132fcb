//! Client for the weather backend (Service B)
//!
//! A successful body is relayed as an opaque JSON object. A failure body is
//! reclassified by its `message`: only `"can not find zipcode"` survives the
//! hop as not-found, everything else becomes a Service B failure.

use std::time::Duration;

use reqwest::Client;
use serde_json::{Map, Value};
use shared::{MessageResponse, PostalCode};
use tracing::field;

use crate::error::{AppError, AppResult};

/// Opaque weather body returned by Service B
pub type WeatherBody = Map<String, Value>;

/// Service B client
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    /// Create a new client against `base_url` (e.g. `http://service-b:8080`)
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Forward a validated postal code to `GET /weather/{cep}`
    #[tracing::instrument(
        name = "forward_to_backend",
        skip(self),
        fields(cep = %cep, error = field::Empty)
    )]
    pub async fn forward(&self, cep: &PostalCode) -> AppResult<WeatherBody> {
        let result = self.fetch_weather(cep).await;
        if let Err(e) = &result {
            tracing::Span::current().record("error", field::display(e));
        }
        result
    }

    async fn fetch_weather(&self, cep: &PostalCode) -> AppResult<WeatherBody> {
        let url = format!("{}/weather/{}", self.base_url, cep);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::ServiceB(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(classify_failure(status.as_u16(), &body));
        }

        response
            .json::<WeatherBody>()
            .await
            .map_err(|e| AppError::ServiceB(format!("failed to parse response: {}", e)))
    }
}

/// Map a non-2xx Service B response onto an edge error
fn classify_failure(status: u16, body: &[u8]) -> AppError {
    match serde_json::from_slice::<MessageResponse>(body) {
        Ok(message) if message.is_zipcode_not_found() => AppError::ZipcodeNotFound,
        Ok(message) => AppError::ServiceB(message.message),
        Err(_) => AppError::ServiceB(format!("unexpected response from Service B: {}", status)),
    }
}
