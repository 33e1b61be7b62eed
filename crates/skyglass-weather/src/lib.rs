//! Weather domain for Skyglass
//!
//! Fetches current conditions and forecasts from WeatherAPI.com, caches them
//! briefly, and derives everything the dashboard shows from a snapshot:
//! condition categories, icons, animation scenes, unit conversion and
//! activity suggestions.

pub mod animation;
pub mod cache;
pub mod condition;
pub mod icons;
pub mod location;
pub mod provider;
pub mod recommendations;
pub mod retry;
pub mod types;
pub mod units;

pub use animation::{AnimationManager, Background, LayerSink, Layers, Scene};
pub use cache::WeatherCache;
pub use condition::{
    classify, ConditionCategory, ConditionClassifier, DayClock, FixedClock, KeywordClassifier,
    LocalClock,
};
pub use icons::{icon_for, Glyph, IconLookup, IconTable};
pub use location::{LocationError, LocationQuery};
pub use provider::{WeatherClient, WeatherProvider};
pub use recommendations::recommendations;
pub use retry::Backoff;
pub use types::*;
pub use units::{format_temperature, StandardConverter, TemperatureUnit, UnitConverter};
