//! Display strings derived from a snapshot and the selected unit.
//!
//! Nothing here is cached: a unit toggle simply builds a new view from the
//! same snapshot.

use chrono::Timelike;
use skyglass_weather::{
    format_temperature, recommendations, Fetched, Glyph, IconLookup, Temperature,
    TemperatureUnit, UnitConverter,
};

/// Upcoming hours shown in the hourly strip
pub const MAX_HOURLY_ROWS: usize = 12;

const MISSING: &str = "-";

#[derive(Debug, Clone, PartialEq)]
pub struct HourRow {
    /// `14:00`
    pub time: String,
    pub icon: Glyph,
    pub temperature: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayRow {
    /// Short weekday, `Sat`
    pub weekday: String,
    pub icon: Glyph,
    pub condition: String,
    pub high: String,
    pub low: String,
}

/// Everything the dashboard prints for one snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherView {
    pub city: String,
    pub country: String,
    pub local_time: String,
    pub temperature: String,
    pub feels_like: String,
    pub icon: Glyph,
    pub condition: String,
    pub humidity: String,
    pub wind: String,
    pub pressure: String,
    pub visibility: String,
    pub uv_index: String,
    pub precipitation: String,
    pub data_source: String,
    pub hourly: Vec<HourRow>,
    pub daily: Vec<DayRow>,
    pub recommendations: Vec<&'static str>,
}

/// Formatting collaborators for [`build`]
pub struct ViewContext<'a> {
    pub unit: TemperatureUnit,
    pub icons: &'a dyn IconLookup,
    pub converter: &'a dyn UnitConverter,
    /// Hour of the device clock; hourly rows start after it
    pub device_hour: u32,
}

impl ViewContext<'_> {
    fn temperature(&self, t: Temperature) -> String {
        format_temperature(self.converter.from_celsius(t.celsius(), self.unit), self.unit)
    }
}

pub fn build(fetched: &Fetched, ctx: &ViewContext<'_>) -> WeatherView {
    let snapshot = &fetched.snapshot;
    let current = &snapshot.current;

    let hourly = snapshot
        .today_hours()
        .iter()
        .filter(|h| h.time.hour() > ctx.device_hour)
        .take(MAX_HOURLY_ROWS)
        .map(|h| HourRow {
            time: format!("{}:00", h.time.hour()),
            icon: ctx.icons.icon_for(&h.condition_text),
            temperature: ctx.temperature(h.temperature),
        })
        .collect();

    let daily = snapshot
        .forecast
        .iter()
        .map(|d| DayRow {
            weekday: d.date.format("%a").to_string(),
            icon: ctx.icons.icon_for(&d.condition_text),
            condition: d.condition_text.clone(),
            high: ctx.temperature(d.high),
            low: ctx.temperature(d.low),
        })
        .collect();

    WeatherView {
        city: snapshot.place.name.clone(),
        country: snapshot.place.country.clone(),
        local_time: format!("Local time: {}", snapshot.local_time.format("%Y-%m-%d %H:%M")),
        temperature: ctx.temperature(current.temperature),
        feels_like: format!("Feels like: {}", ctx.temperature(current.feels_like)),
        icon: ctx.icons.icon_for(&current.condition_text),
        condition: current.condition_text.clone(),
        humidity: format!("{}%", current.humidity),
        wind: format!("{} km/h {}", current.wind_kph, current.wind_direction),
        pressure: format!("{} mb", current.pressure_mb),
        visibility: format!("{} km", current.visibility_km),
        uv_index: current
            .uv_index
            .map(|uv| uv.to_string())
            .unwrap_or_else(|| MISSING.to_string()),
        precipitation: current
            .precipitation_mm
            .map(|mm| format!("{} mm", mm))
            .unwrap_or_else(|| MISSING.to_string()),
        data_source: format!("Data source: {}", fetched.source.label()),
        hourly,
        daily,
        recommendations: recommendations(current),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use skyglass_weather::{DataSource, IconTable, StandardConverter};

    fn ctx(unit: TemperatureUnit, device_hour: u32) -> ViewContext<'static> {
        ViewContext {
            unit,
            icons: &IconTable,
            converter: &StandardConverter,
            device_hour,
        }
    }

    #[test]
    fn test_current_strings() {
        let view = build(&fixtures::fetched("Sunny", 21.3), &ctx(TemperatureUnit::Celsius, 14));

        assert_eq!(view.city, "London");
        assert_eq!(view.local_time, "Local time: 2025-05-17 14:05");
        assert_eq!(view.temperature, "21.3°C");
        assert_eq!(view.feels_like, "Feels like: 20.3°C");
        assert_eq!(view.icon, "☀️");
        assert_eq!(view.humidity, "63%");
        assert_eq!(view.wind, "11.2 km/h NE");
        assert_eq!(view.pressure, "1021 mb");
        assert_eq!(view.visibility, "10 km");
        assert_eq!(view.uv_index, "4");
        assert_eq!(view.precipitation, "0 mm");
        assert_eq!(view.data_source, "Data source: API");
    }

    #[test]
    fn test_fahrenheit() {
        let view = build(
            &fixtures::fetched("Sunny", 100.0),
            &ctx(TemperatureUnit::Fahrenheit, 14),
        );
        assert_eq!(view.temperature, "212.0°F");
        assert_eq!(view.daily[0].high, "71.6°F");
    }

    #[test]
    fn test_hourly_starts_after_device_hour() {
        let view = build(&fixtures::fetched("Sunny", 20.0), &ctx(TemperatureUnit::Celsius, 14));
        let times: Vec<_> = view.hourly.iter().map(|h| h.time.as_str()).collect();
        assert_eq!(
            times,
            vec!["15:00", "16:00", "17:00", "18:00", "19:00", "20:00", "21:00", "22:00", "23:00"]
        );
        assert_eq!(view.hourly[3].icon, "🌙");
    }

    #[test]
    fn test_hourly_capped_at_twelve() {
        let view = build(&fixtures::fetched("Sunny", 20.0), &ctx(TemperatureUnit::Celsius, 0));
        assert_eq!(view.hourly.len(), MAX_HOURLY_ROWS);
        assert_eq!(view.hourly[0].time, "1:00");
    }

    #[test]
    fn test_daily_rows() {
        let view = build(&fixtures::fetched("Sunny", 20.0), &ctx(TemperatureUnit::Celsius, 14));
        assert_eq!(view.daily.len(), 2);
        assert_eq!(view.daily[0].weekday, "Sat");
        assert_eq!(view.daily[1].weekday, "Sun");
        assert_eq!(view.daily[1].icon, "🌧️");
        assert_eq!(view.daily[1].low, "9.0°C");
    }

    #[test]
    fn test_missing_optional_values() {
        let mut fetched = fixtures::fetched("Overcast", 12.0);
        fetched.snapshot.current.uv_index = None;
        fetched.snapshot.current.precipitation_mm = None;
        fetched.source = DataSource::Cache;

        let view = build(&fetched, &ctx(TemperatureUnit::Celsius, 14));
        assert_eq!(view.uv_index, "-");
        assert_eq!(view.precipitation, "-");
        assert_eq!(view.data_source, "Data source: Cache");
    }
}
