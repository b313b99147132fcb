//! Lookup service: postal code → locality → current temperature
//!
//! The two provider calls are strictly sequential; the first failure ends
//! the lookup and no partial result is returned.

use shared::{PostalCode, WeatherResult};
use tracing::field;

use crate::config::Config;
use crate::error::AppResult;
use crate::external::{ViaCepClient, WeatherApiClient};

/// Lookup service composing the geocoding and weather providers
#[derive(Clone)]
pub struct LookupService {
    geocoder: ViaCepClient,
    weather: WeatherApiClient,
}

impl LookupService {
    pub fn new(geocoder: ViaCepClient, weather: WeatherApiClient) -> Self {
        Self { geocoder, weather }
    }

    /// Build both provider clients from configuration
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let timeout = config.http.timeout();
        let geocoder = ViaCepClient::new(config.geocoding.api_endpoint.clone(), timeout)?;
        let weather = WeatherApiClient::new(
            config.weather.api_key.clone(),
            config.weather.api_endpoint.clone(),
            timeout,
        )?;
        Ok(Self::new(geocoder, weather))
    }

    /// Resolve a raw postal code to the current temperature of its locality
    #[tracing::instrument(
        name = "lookup",
        skip(self, raw_cep),
        fields(cep = %raw_cep, error = field::Empty)
    )]
    pub async fn lookup(&self, raw_cep: &str) -> AppResult<WeatherResult> {
        let result = self.resolve(raw_cep).await;
        if let Err(e) = &result {
            tracing::Span::current().record("error", field::display(e));
        }
        result
    }

    async fn resolve(&self, raw_cep: &str) -> AppResult<WeatherResult> {
        let cep = PostalCode::parse(raw_cep)?;

        let locality = self.geocoder.resolve_locality(&cep).await?;
        let city = locality.name.as_str();

        let reading = self.weather.current_temperature(city).await?;

        tracing::info!(
            "Resolved {} to {}/{} at {}°C",
            cep,
            city,
            locality.state,
            reading.celsius
        );

        Ok(WeatherResult::from_reading(city, reading))
    }
}
