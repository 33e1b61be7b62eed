//! WeatherAPI.com client and the cached provider on top of it.

use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use crate::cache::WeatherCache;
use crate::location::LocationQuery;
use crate::retry::{send_with_backoff, Backoff};
use crate::types::{
    CurrentConditions, DataSource, DayForecast, Fetched, HourlyForecast, Place, Temperature,
    WeatherError, WeatherSnapshot,
};

/// WeatherAPI error code for "No matching location found."
const NO_MATCHING_LOCATION: u32 = 1006;

const LOCAL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    location: ApiLocation,
    current: ApiCurrent,
    #[serde(default)]
    forecast: Option<ApiForecast>,
}

#[derive(Debug, Deserialize)]
struct ApiLocation {
    name: String,
    #[serde(default)]
    region: String,
    #[serde(default)]
    country: String,
    lat: f64,
    lon: f64,
    localtime: String,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiCurrent {
    temp_c: f64,
    feelslike_c: f64,
    is_day: u8,
    condition: ApiCondition,
    wind_kph: f64,
    wind_dir: String,
    pressure_mb: f64,
    #[serde(default)]
    precip_mm: Option<f64>,
    humidity: u8,
    vis_km: f64,
    #[serde(default)]
    uv: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ApiForecast {
    forecastday: Vec<ApiForecastDay>,
}

#[derive(Debug, Deserialize)]
struct ApiForecastDay {
    date: String,
    day: ApiDay,
    #[serde(default)]
    hour: Vec<ApiHour>,
}

#[derive(Debug, Deserialize)]
struct ApiDay {
    maxtemp_c: f64,
    mintemp_c: f64,
    condition: ApiCondition,
}

#[derive(Debug, Deserialize)]
struct ApiHour {
    time: String,
    temp_c: f64,
    condition: ApiCondition,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    code: u32,
    message: String,
}

fn parse_local_time(value: &str) -> Result<NaiveDateTime, WeatherError> {
    NaiveDateTime::parse_from_str(value.trim(), LOCAL_TIME_FORMAT)
        .map_err(|e| WeatherError::Parse(format!("bad timestamp {:?}: {}", value, e)))
}

impl TryFrom<ForecastResponse> for WeatherSnapshot {
    type Error = WeatherError;

    fn try_from(resp: ForecastResponse) -> Result<Self, Self::Error> {
        let forecast = resp
            .forecast
            .map(|f| f.forecastday)
            .unwrap_or_default()
            .into_iter()
            .map(|day| {
                let date = NaiveDate::parse_from_str(&day.date, DATE_FORMAT)
                    .map_err(|e| WeatherError::Parse(format!("bad date {:?}: {}", day.date, e)))?;
                let hourly = day
                    .hour
                    .into_iter()
                    .map(|h| {
                        Ok(HourlyForecast {
                            time: parse_local_time(&h.time)?,
                            condition_text: h.condition.text,
                            temperature: Temperature::from_celsius(h.temp_c),
                        })
                    })
                    .collect::<Result<Vec<_>, WeatherError>>()?;
                Ok(DayForecast {
                    date,
                    condition_text: day.day.condition.text,
                    high: Temperature::from_celsius(day.day.maxtemp_c),
                    low: Temperature::from_celsius(day.day.mintemp_c),
                    hourly,
                })
            })
            .collect::<Result<Vec<_>, WeatherError>>()?;

        Ok(WeatherSnapshot {
            local_time: parse_local_time(&resp.location.localtime)?,
            place: Place {
                name: resp.location.name,
                region: resp.location.region,
                country: resp.location.country,
                latitude: resp.location.lat,
                longitude: resp.location.lon,
            },
            current: CurrentConditions {
                condition_text: resp.current.condition.text,
                temperature: Temperature::from_celsius(resp.current.temp_c),
                feels_like: Temperature::from_celsius(resp.current.feelslike_c),
                humidity: resp.current.humidity,
                wind_kph: resp.current.wind_kph,
                wind_direction: resp.current.wind_dir,
                pressure_mb: resp.current.pressure_mb,
                visibility_km: resp.current.vis_km,
                uv_index: resp.current.uv,
                precipitation_mm: resp.current.precip_mm,
                is_day: resp.current.is_day == 1,
            },
            forecast,
        })
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Thin HTTP client for the `forecast.json` endpoint
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
    backoff: Backoff,
}

impl WeatherClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, WeatherError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            backoff: Backoff::default(),
        })
    }

    pub fn with_backoff(mut self, backoff: Backoff) -> Self {
        self.backoff = backoff;
        self
    }

    /// Current conditions plus `days` of forecast for `query`.
    #[instrument(skip(self), level = "info")]
    pub async fn forecast(
        &self,
        query: &LocationQuery,
        days: u8,
    ) -> Result<WeatherSnapshot, WeatherError> {
        let url = format!("{}/forecast.json", self.base_url);
        let q = query.as_query_param();
        let days = days.to_string();
        let params = [
            ("key", self.api_key.as_str()),
            ("q", q.as_str()),
            ("days", days.as_str()),
            ("aqi", "no"),
            ("alerts", "no"),
        ];

        let response = send_with_backoff(&self.backoff, || {
            self.client.get(&url).query(&params).send()
        })
        .await?;

        let body: ForecastResponse = self.handle_response(response).await?;
        WeatherSnapshot::try_from(body)
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, WeatherError> {
        let status = response.status();

        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| WeatherError::Parse(format!("JSON parse error: {}", e)));
        }

        let text = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ApiErrorBody>(&text)
            .map(|b| b.error)
            .ok();

        match (status.as_u16(), detail) {
            (_, Some(d)) if d.code == NO_MATCHING_LOCATION => {
                Err(WeatherError::NotFound(d.message))
            }
            (401 | 403, d) => Err(WeatherError::Unauthorized(
                d.map(|d| d.message).unwrap_or_else(|| status.to_string()),
            )),
            (code, d) => Err(WeatherError::Api {
                status: code,
                message: d.map(|d| d.message).unwrap_or(text),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Provider
// ---------------------------------------------------------------------------

/// Client plus response cache. Cheap to share behind an `Arc`.
#[derive(Debug)]
pub struct WeatherProvider {
    client: WeatherClient,
    cache: WeatherCache,
    forecast_days: u8,
}

impl WeatherProvider {
    pub fn new(client: WeatherClient, cache: WeatherCache, forecast_days: u8) -> Self {
        Self {
            client,
            cache,
            forecast_days,
        }
    }

    pub fn cache(&self) -> &WeatherCache {
        &self.cache
    }

    /// Serve from cache when fresh, otherwise fetch and cache.
    pub async fn fetch(&self, query: &LocationQuery) -> Result<Fetched, WeatherError> {
        if let LocationQuery::City(city) = query {
            if city.trim().is_empty() {
                return Err(WeatherError::EmptyQuery);
            }
        }

        let key = query.cache_key(self.forecast_days);

        if let Some(snapshot) = self.cache.get(&key) {
            tracing::info!("Serving {} from cache", query);
            return Ok(Fetched {
                snapshot,
                source: DataSource::Cache,
            });
        }

        let snapshot = self.client.forecast(query, self.forecast_days).await?;
        self.cache.insert(key, snapshot.clone());
        tracing::info!(
            "Fetched weather for {}, {}: {}",
            snapshot.place.name,
            snapshot.place.country,
            snapshot.current.condition_text
        );

        Ok(Fetched {
            snapshot,
            source: DataSource::Api,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn sample() -> serde_json::Value {
        serde_json::json!({
            "location": {
                "name": "London", "region": "City of London, Greater London",
                "country": "United Kingdom", "lat": 51.52, "lon": -0.11,
                "localtime": "2025-05-17 9:05"
            },
            "current": {
                "temp_c": 14.2, "temp_f": 57.6, "is_day": 1,
                "condition": { "text": "Partly cloudy", "code": 1003 },
                "wind_kph": 11.2, "wind_dir": "NE", "pressure_mb": 1021.0,
                "precip_mm": 0.0, "humidity": 63, "feelslike_c": 13.1,
                "vis_km": 10.0, "uv": 4.0
            },
            "forecast": { "forecastday": [{
                "date": "2025-05-17",
                "day": { "maxtemp_c": 19.0, "mintemp_c": 8.4, "condition": { "text": "Sunny" } },
                "hour": [
                    { "time": "2025-05-17 00:00", "temp_c": 9.1, "condition": { "text": "Clear " } },
                    { "time": "2025-05-17 13:00", "temp_c": 17.5, "condition": { "text": "Sunny" } }
                ]
            }]}
        })
    }

    #[test]
    fn test_response_to_snapshot() {
        let resp: ForecastResponse = serde_json::from_value(sample()).unwrap();
        let snapshot = WeatherSnapshot::try_from(resp).unwrap();

        assert_eq!(snapshot.place.name, "London");
        assert_eq!(snapshot.current.condition_text, "Partly cloudy");
        assert!(snapshot.current.is_day);
        assert_eq!(snapshot.current.humidity, 63);
        assert_eq!(snapshot.local_time.format("%H:%M").to_string(), "09:05");
        assert_eq!(snapshot.forecast.len(), 1);
        assert_eq!(snapshot.today_hours().len(), 2);
        assert!((snapshot.forecast[0].high.celsius() - 19.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_forecast_is_empty() {
        let mut value = sample();
        value.as_object_mut().unwrap().remove("forecast");
        let resp: ForecastResponse = serde_json::from_value(value).unwrap();
        let snapshot = WeatherSnapshot::try_from(resp).unwrap();
        assert!(snapshot.forecast.is_empty());
        assert!(snapshot.today_hours().is_empty());
    }

    #[test]
    fn test_bad_timestamp_is_parse_error() {
        let mut value = sample();
        value["location"]["localtime"] = serde_json::json!("yesterday");
        let resp: ForecastResponse = serde_json::from_value(value).unwrap();
        assert!(matches!(
            WeatherSnapshot::try_from(resp),
            Err(WeatherError::Parse(_))
        ));
    }
}
