//! WeatherAPI client for fetching current conditions by locality name

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use shared::TemperatureReading;
use tracing::field;

use crate::error::{AppError, AppResult};

/// WeatherAPI client
#[derive(Clone)]
pub struct WeatherApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// WeatherAPI response for `/current.json`
#[derive(Debug, Deserialize)]
struct CurrentResponse {
    current: Option<CurrentConditions>,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temp_c: Option<f64>,
}

impl CurrentResponse {
    fn celsius(&self) -> Option<f64> {
        self.current.as_ref().and_then(|c| c.temp_c)
    }
}

impl WeatherApiClient {
    /// Create a new client against `base_url` (e.g. `https://api.weatherapi.com/v1`)
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the current temperature for a locality
    ///
    /// A response without `current.temp_c` is an upstream failure; a reading
    /// of exactly zero is a real reading.
    #[tracing::instrument(
        name = "weather_api_request",
        skip(self, locality),
        fields(city = %locality, error = field::Empty)
    )]
    pub async fn current_temperature(&self, locality: &str) -> AppResult<TemperatureReading> {
        let result = self.fetch_current(locality).await;
        if let Err(e) = &result {
            tracing::Span::current().record("error", field::display(e));
        }
        result
    }

    async fn fetch_current(&self, locality: &str) -> AppResult<TemperatureReading> {
        let url = format!("{}/current.json", self.base_url);

        // The query string carries the API key; strip URLs from errors before logging
        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", locality)])
            .send()
            .await
            .map_err(|e| {
                AppError::WeatherProvider(format!("Weather API request failed: {}", e.without_url()))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::WeatherProvider(format!(
                "Weather API error: {} - {}",
                status, body
            )));
        }

        let data: CurrentResponse = response.json().await.map_err(|e| {
            AppError::WeatherProvider(format!(
                "Failed to parse weather response: {}",
                e.without_url()
            ))
        })?;

        data.celsius()
            .map(TemperatureReading::new)
            .ok_or_else(|| {
                AppError::WeatherProvider("weather provider returned no temperature".into())
            })
    }
}
