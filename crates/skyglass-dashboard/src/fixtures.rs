//! Snapshots shared by the unit tests.

use chrono::{NaiveDate, NaiveDateTime};
use skyglass_weather::{
    CurrentConditions, DataSource, DayForecast, Fetched, HourlyForecast, Place, Temperature,
    WeatherSnapshot,
};

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 5, day)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .unwrap_or_default()
}

/// London on Saturday 2025-05-17 at 14:05 with a full day of hours
pub fn snapshot(condition: &str, celsius: f64) -> WeatherSnapshot {
    let hourly = (0..24)
        .map(|h| HourlyForecast {
            time: at(17, h),
            condition_text: if h < 18 { "Sunny" } else { "Clear" }.to_string(),
            temperature: Temperature::from_celsius(10.0 + f64::from(h) / 2.0),
        })
        .collect();

    WeatherSnapshot {
        place: Place {
            name: "London".to_string(),
            region: "City of London, Greater London".to_string(),
            country: "United Kingdom".to_string(),
            latitude: 51.52,
            longitude: -0.11,
        },
        local_time: at(17, 14) + chrono::Duration::minutes(5),
        current: CurrentConditions {
            condition_text: condition.to_string(),
            temperature: Temperature::from_celsius(celsius),
            feels_like: Temperature::from_celsius(celsius - 1.0),
            humidity: 63,
            wind_kph: 11.2,
            wind_direction: "NE".to_string(),
            pressure_mb: 1021.0,
            visibility_km: 10.0,
            uv_index: Some(4.0),
            precipitation_mm: Some(0.0),
            is_day: true,
        },
        forecast: vec![
            DayForecast {
                date: at(17, 0).date(),
                condition_text: "Sunny".to_string(),
                high: Temperature::from_celsius(22.0),
                low: Temperature::from_celsius(11.0),
                hourly,
            },
            DayForecast {
                date: at(18, 0).date(),
                condition_text: "Light rain".to_string(),
                high: Temperature::from_celsius(18.0),
                low: Temperature::from_celsius(9.0),
                hourly: Vec::new(),
            },
        ],
    }
}

pub fn fetched(condition: &str, celsius: f64) -> Fetched {
    Fetched {
        snapshot: snapshot(condition, celsius),
        source: DataSource::Api,
    }
}
