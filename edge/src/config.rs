//! Configuration management for the edge service (Service A)
//!
//! Defaults, then `config/<environment>.toml`, then `WEATHER_A__` prefixed
//! variables, then the plain `PORT` and `SERVICE_B_URL` variables.

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

    /// Backend (Service B) location
    pub service_b: ServiceBConfig,

    /// Outbound HTTP client settings
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceBConfig {
    /// Base URL, e.g. `http://service-b:8080`
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
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
            .get("WEATHER_A_ENVIRONMENT")
            .cloned()
            .unwrap_or_else(|| "development".into());

        let config = config::Config::builder()
            .set_default("environment", environment.clone())?
            .set_default("server.port", 8081)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("service_b.url", "http://service-b:8080")?
            // Service B makes two sequential 10s provider calls; stay above their sum
            .set_default("http.timeout_secs", 25)?
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            .add_source(
                Environment::with_prefix("WEATHER_A")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars.clone())),
            )
            .set_override_option("server.port", vars.get("PORT").cloned())?
            .set_override_option("service_b.url", vars.get("SERVICE_B_URL").cloned())?
            .build()?;

        config.try_deserialize()
    }
}
