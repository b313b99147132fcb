//! External API integrations

pub mod viacep;
pub mod weather_api;

pub use viacep::ViaCepClient;
pub use weather_api::WeatherApiClient;
