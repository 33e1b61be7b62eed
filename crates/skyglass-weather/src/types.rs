use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::location::LocationError;

/// A temperature, stored in Celsius and rendered in any unit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
pub struct Temperature(f64);

impl Temperature {
    pub fn from_celsius(celsius: f64) -> Self {
        Self(celsius)
    }

    pub fn celsius(self) -> f64 {
        self.0
    }
}

/// Where a snapshot came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Api,
    Cache,
}

impl DataSource {
    pub fn label(self) -> &'static str {
        match self {
            Self::Api => "API",
            Self::Cache => "Cache",
        }
    }
}

/// Geographic location as reported by the weather API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub region: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions at the place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub condition_text: String,
    pub temperature: Temperature,
    pub feels_like: Temperature,
    pub humidity: u8,
    pub wind_kph: f64,
    pub wind_direction: String,
    pub pressure_mb: f64,
    pub visibility_km: f64,
    pub uv_index: Option<f64>,
    pub precipitation_mm: Option<f64>,
    pub is_day: bool,
}

/// Hourly forecast entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecast {
    pub time: NaiveDateTime,
    pub condition_text: String,
    pub temperature: Temperature,
}

/// Daily forecast entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayForecast {
    pub date: NaiveDate,
    pub condition_text: String,
    pub high: Temperature,
    pub low: Temperature,
    pub hourly: Vec<HourlyForecast>,
}

/// One complete fetch result. Immutable; the next fetch replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub place: Place,
    pub local_time: NaiveDateTime,
    pub current: CurrentConditions,
    pub forecast: Vec<DayForecast>,
}

impl WeatherSnapshot {
    pub fn condition_text(&self) -> &str {
        &self.current.condition_text
    }

    /// Hours of the first forecast day, if any
    pub fn today_hours(&self) -> &[HourlyForecast] {
        self.forecast
            .first()
            .map(|day| day.hourly.as_slice())
            .unwrap_or_default()
    }
}

/// A snapshot paired with where it was served from
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched {
    pub snapshot: WeatherSnapshot,
    pub source: DataSource,
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Location error: {0}")]
    Location(#[from] LocationError),
    #[error("Location not found: {0}")]
    NotFound(String),
    #[error("API key rejected: {0}")]
    Unauthorized(String),
    #[error("Weather API returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Empty search query")]
    EmptyQuery,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_source_label() {
        assert_eq!(DataSource::Api.label(), "API");
        assert_eq!(DataSource::Cache.label(), "Cache");
    }
}
