//! Maps free-text provider condition strings to a closed set of categories.
//!
//! WeatherAPI.com wording varies ("Light rain shower", "Patchy light rain with
//! thunder"), so matching is keyword based. Rules are tried in a fixed order
//! and the first hit wins; "thunder" therefore beats "rain" and "snow".

use chrono::Timelike;

/// First hour counted as daytime
pub const DAY_START_HOUR: u32 = 6;
/// First hour counted as night again
pub const NIGHT_START_HOUR: u32 = 20;

/// Category of a condition string, used to pick presentation assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionCategory {
    Rain,
    Snow,
    Storm,
    Fog,
    Cloudy,
    ClearDay,
    ClearNight,
    /// No rule matched; shown as clear sky for the time of day
    Default,
}

impl ConditionCategory {
    /// Collapse `Default` into the clear-sky category for the time of day.
    pub fn resolve(self, is_day: bool) -> Self {
        match self {
            Self::Default if is_day => Self::ClearDay,
            Self::Default => Self::ClearNight,
            other => other,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Storm => "Storm",
            Self::Fog => "Fog",
            Self::Cloudy => "Cloudy",
            Self::ClearDay => "Clear day",
            Self::ClearNight => "Clear night",
            Self::Default => "Unclassified",
        }
    }
}

const KEYWORD_RULES: &[(&[&str], ConditionCategory)] = &[
    (&["thunder", "storm"], ConditionCategory::Storm),
    (&["rain", "drizzle"], ConditionCategory::Rain),
    (&["snow", "sleet", "ice"], ConditionCategory::Snow),
    (&["fog", "mist"], ConditionCategory::Fog),
    (&["cloud", "overcast"], ConditionCategory::Cloudy),
];

/// Classify a provider condition string.
///
/// Keyword rules ignore case. "Sunny" and "Clear" must match the whole
/// (trimmed) text and split by `is_day`. Anything else is `Default`.
pub fn classify(condition_text: &str, is_day: bool) -> ConditionCategory {
    let lowered = condition_text.to_lowercase();

    for (keywords, category) in KEYWORD_RULES {
        if keywords.iter().any(|k| lowered.contains(k)) {
            return *category;
        }
    }

    let trimmed = condition_text.trim();
    if trimmed.eq_ignore_ascii_case("sunny") || trimmed.eq_ignore_ascii_case("clear") {
        return if is_day {
            ConditionCategory::ClearDay
        } else {
            ConditionCategory::ClearNight
        };
    }

    ConditionCategory::Default
}

/// Daytime check on a plain hour of the day.
///
/// This is a fixed window on the device clock, not sunrise/sunset at the
/// queried place.
pub fn is_day_hour(hour: u32) -> bool {
    (DAY_START_HOUR..NIGHT_START_HOUR).contains(&hour)
}

/// Source of the current local hour
pub trait DayClock: Send + Sync {
    fn local_hour(&self) -> u32;

    fn is_day(&self) -> bool {
        is_day_hour(self.local_hour())
    }
}

/// Reads the device clock
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl DayClock for LocalClock {
    fn local_hour(&self) -> u32 {
        chrono::Local::now().hour()
    }
}

/// Always reports the same hour
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u32);

impl DayClock for FixedClock {
    fn local_hour(&self) -> u32 {
        self.0
    }
}

/// Classification seam handed to the dashboard
pub trait ConditionClassifier: Send + Sync {
    fn classify(&self, condition_text: &str, is_day: bool) -> ConditionCategory;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl ConditionClassifier for KeywordClassifier {
    fn classify(&self, condition_text: &str, is_day: bool) -> ConditionCategory {
        classify(condition_text, is_day)
    }
}
