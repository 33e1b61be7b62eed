use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use skyglass_core::{ThemePreference, UnitPreference};

/// Terminal weather dashboard backed by WeatherAPI.com
#[derive(Parser, Debug)]
#[command(name = "skyglass")]
#[command(version, about)]
pub struct Args {
    /// City name or "lat,lon". Defaults to the most recent search
    pub query: Option<String>,

    /// Latitude, used together with --lon
    #[arg(long, requires = "lon", allow_negative_numbers = true, conflicts_with = "query")]
    pub lat: Option<f64>,

    /// Longitude, used together with --lat
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Temperature unit; remembered for next time
    #[arg(long, short)]
    pub unit: Option<UnitArg>,

    /// Colour theme; remembered for next time
    #[arg(long, short)]
    pub theme: Option<ThemeArg>,

    /// Forecast days to request (overrides the config file)
    #[arg(long, short, value_parser = clap::value_parser!(u8).range(1..=14))]
    pub days: Option<u8>,

    /// Hide the animated backdrop
    #[arg(long)]
    pub no_animations: bool,

    /// Start with animations disabled
    #[arg(long)]
    pub reduce_motion: bool,

    /// Keep running and refresh on the configured interval
    #[arg(long, short)]
    pub watch: bool,

    /// List recent searches and exit
    #[arg(long)]
    pub recent: bool,

    /// Print a one-line shareable summary
    #[arg(long)]
    pub share: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitArg {
    #[value(name = "c", alias = "celsius")]
    Celsius,
    #[value(name = "f", alias = "fahrenheit")]
    Fahrenheit,
}

impl From<UnitArg> for UnitPreference {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Celsius => UnitPreference::Celsius,
            UnitArg::Fahrenheit => UnitPreference::Fahrenheit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for ThemePreference {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => ThemePreference::Light,
            ThemeArg::Dark => ThemePreference::Dark,
        }
    }
}
