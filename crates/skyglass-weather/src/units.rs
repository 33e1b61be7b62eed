//! Celsius/Fahrenheit conversion and one-decimal display.

use serde::{Deserialize, Serialize};

/// Temperature unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn toggle(self) -> Self {
        match self {
            Self::Celsius => Self::Fahrenheit,
            Self::Fahrenheit => Self::Celsius,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

pub fn to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// `21.3°C`
pub fn format_temperature(value: f64, unit: TemperatureUnit) -> String {
    format!("{:.1}{}", value, unit.symbol())
}

/// Conversion seam handed to the dashboard
pub trait UnitConverter: Send + Sync {
    fn to_fahrenheit(&self, celsius: f64) -> f64;
    fn to_celsius(&self, fahrenheit: f64) -> f64;

    /// Express a Celsius reading in `unit`
    fn from_celsius(&self, celsius: f64, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => self.to_fahrenheit(celsius),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardConverter;

impl UnitConverter for StandardConverter {
    fn to_fahrenheit(&self, celsius: f64) -> f64 {
        to_fahrenheit(celsius)
    }

    fn to_celsius(&self, fahrenheit: f64) -> f64 {
        to_celsius(fahrenheit)
    }
}
