//! Configuration management for the weather backend (Service B)
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with WEATHER_B__ prefix
//! 4. The plain `PORT` and `WEATHER_API_KEY` variables, which win over everything

use std::collections::HashMap;
use std::time::Duration;

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Weather provider configuration
    pub weather: WeatherConfig,

    /// Geocoding provider configuration
    pub geocoding: GeocodingConfig,

    /// Outbound HTTP client settings
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API base endpoint (without `/current.json`)
    pub api_endpoint: String,

    /// Weather API key
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeocodingConfig {
    /// ViaCEP base endpoint (without the `/{cep}/json/` suffix)
    pub api_endpoint: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    /// Timeout applied to every outbound request, in seconds
    pub timeout_secs: u64,
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Load configuration from files and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_env(std::env::vars().collect())
    }

    /// Load configuration from files and an explicit set of environment variables
    pub fn load_from_env(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let environment = vars
            .get("WEATHER_B_ENVIRONMENT")
            .cloned()
            .unwrap_or_else(|| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 8080)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("weather.api_endpoint", "https://api.weatherapi.com/v1")?
            .set_default("weather.api_key", "")?
            .set_default("geocoding.api_endpoint", "https://viacep.com.br/ws")?
            .set_default("http.timeout_secs", 10)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (WEATHER_B__ prefix)
            .add_source(
                Environment::with_prefix("WEATHER_B")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars.clone())),
            )
            .set_override_option("server.port", vars.get("PORT").cloned())?
            .set_override_option("weather.api_key", vars.get("WEATHER_API_KEY").cloned())?
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.weather.api_key.trim().is_empty() {
            return Err(ConfigError::Message("WEATHER_API_KEY is required".into()));
        }
        Ok(())
    }
}
