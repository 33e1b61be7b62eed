//! Glyphs for WeatherAPI.com condition strings.

pub type Glyph = &'static str;

/// Shown for any condition text not in the table
pub const DEFAULT_GLYPH: Glyph = "🌡️";

/// Exact-match glyph lookup; unknown text gets `DEFAULT_GLYPH`.
pub fn icon_for(condition_text: &str) -> Glyph {
    match condition_text {
        "Sunny" => "☀️",
        "Clear" => "🌙",
        "Partly cloudy" => "⛅",
        "Cloudy" | "Overcast" => "☁️",
        "Mist" | "Fog" | "Freezing fog" => "🌫️",
        "Patchy rain possible" => "🌦️",
        "Patchy snow possible" | "Patchy sleet possible" => "🌨️",
        "Thundery outbreaks possible" => "⛈️",
        "Blowing snow" | "Blizzard" => "❄️",
        "Patchy freezing drizzle possible"
        | "Patchy light drizzle"
        | "Light drizzle"
        | "Freezing drizzle"
        | "Heavy freezing drizzle"
        | "Patchy light rain"
        | "Light rain"
        | "Moderate rain at times"
        | "Moderate rain"
        | "Heavy rain at times"
        | "Heavy rain"
        | "Light freezing rain"
        | "Moderate or heavy freezing rain"
        | "Torrential rain shower" => "🌧️",
        "Light sleet"
        | "Moderate or heavy sleet"
        | "Patchy light snow"
        | "Light snow"
        | "Patchy moderate snow"
        | "Moderate snow"
        | "Light sleet showers"
        | "Moderate or heavy sleet showers"
        | "Light snow showers"
        | "Moderate or heavy snow showers" => "🌨️",
        "Patchy heavy snow" | "Heavy snow" => "❄️",
        "Ice pellets"
        | "Light showers of ice pellets"
        | "Moderate or heavy showers of ice pellets" => "🧊",
        "Light rain shower" | "Moderate or heavy rain shower" => "🌦️",
        "Patchy light rain with thunder"
        | "Moderate or heavy rain with thunder"
        | "Patchy light snow with thunder"
        | "Moderate or heavy snow with thunder" => "⛈️",
        _ => DEFAULT_GLYPH,
    }
}

/// Icon seam handed to the dashboard
pub trait IconLookup: Send + Sync {
    fn icon_for(&self, condition_text: &str) -> Glyph;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IconTable;

impl IconLookup for IconTable {
    fn icon_for(&self, condition_text: &str) -> Glyph {
        icon_for(condition_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sunny_and_clear() {
        assert_eq!(icon_for("Sunny"), "☀️");
        assert_eq!(icon_for("Clear"), "🌙");
    }

    #[test]
    fn test_unknown_text_gets_default() {
        assert_eq!(icon_for("unknown-garbage"), DEFAULT_GLYPH);
        assert_eq!(icon_for(""), DEFAULT_GLYPH);
    }

    #[test]
    fn test_lookup_is_exact() {
        // Case and whitespace differences are not matched.
        assert_eq!(icon_for("sunny"), DEFAULT_GLYPH);
        assert_eq!(icon_for("Clear "), DEFAULT_GLYPH);
    }

    #[test]
    fn test_thunder_variants() {
        assert_eq!(icon_for("Moderate or heavy snow with thunder"), "⛈️");
        assert_eq!(icon_for("Thundery outbreaks possible"), "⛈️");
    }

    #[test]
    fn test_table_impl_matches_function() {
        assert_eq!(IconTable.icon_for("Light rain shower"), icon_for("Light rain shower"));
    }
}
