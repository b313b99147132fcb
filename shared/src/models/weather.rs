//! Weather result models and temperature conversion

use serde::{Deserialize, Serialize, Serializer};

/// Offset used for Kelvin conversion.
///
/// Deliberately 273 rather than 273.15; clients compare against this value.
pub const KELVIN_OFFSET: f64 = 273.0;

/// Convert Celsius to Fahrenheit (`c * 1.8 + 32`)
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 1.8 + 32.0
}

/// Convert Celsius to Kelvin (`c + 273`)
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + KELVIN_OFFSET
}

/// Write whole-number temperatures as JSON integers (`25`, not `25.0`)
pub fn serialize_temperature<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Current temperature reported by the weather provider, in Celsius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureReading {
    pub celsius: f64,
}

impl TemperatureReading {
    pub fn new(celsius: f64) -> Self {
        Self { celsius }
    }

    pub fn fahrenheit(&self) -> f64 {
        celsius_to_fahrenheit(self.celsius)
    }

    pub fn kelvin(&self) -> f64 {
        celsius_to_kelvin(self.celsius)
    }
}

/// Response body of a successful lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub city: String,
    #[serde(serialize_with = "serialize_temperature")]
    pub temp_c: f64,
    #[serde(serialize_with = "serialize_temperature")]
    pub temp_f: f64,
    #[serde(serialize_with = "serialize_temperature")]
    pub temp_k: f64,
}

impl WeatherResult {
    /// Build the result for a city from a Celsius reading
    pub fn from_reading(city: impl Into<String>, reading: TemperatureReading) -> Self {
        Self {
            city: city.into(),
            temp_c: reading.celsius,
            temp_f: reading.fahrenheit(),
            temp_k: reading.kelvin(),
        }
    }
}
