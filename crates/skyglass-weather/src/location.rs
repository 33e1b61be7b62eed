//! What the user asked for: a city name or a coordinate pair.

use serde::{Deserialize, Serialize};

/// A weather lookup target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LocationQuery {
    City(String),
    Coordinates { latitude: f64, longitude: f64 },
}

impl LocationQuery {
    /// Parse free input. `"51.5,-0.12"` becomes coordinates, anything else a
    /// city. Blank input is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        if let Some((lat, lon)) = input.split_once(',') {
            if let (Ok(latitude), Ok(longitude)) =
                (lat.trim().parse::<f64>(), lon.trim().parse::<f64>())
            {
                if let Ok(query) = Self::coordinates(latitude, longitude) {
                    return Some(query);
                }
            }
        }

        Some(Self::City(input.to_string()))
    }

    /// Coordinates, checked for range
    pub fn coordinates(latitude: f64, longitude: f64) -> Result<Self, LocationError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(LocationError::PositionUnavailable);
        }
        Ok(Self::Coordinates {
            latitude,
            longitude,
        })
    }

    /// Value for the API's `q` parameter
    pub fn as_query_param(&self) -> String {
        match self {
            Self::City(city) => city.clone(),
            Self::Coordinates {
                latitude,
                longitude,
            } => format!("{},{}", latitude, longitude),
        }
    }

    /// Response cache key, one per target and forecast length
    pub fn cache_key(&self, days: u8) -> String {
        match self {
            Self::City(city) => format!("weather:{}:{}", city.to_lowercase(), days),
            Self::Coordinates {
                latitude,
                longitude,
            } => format!("weather:coords:{},{}:{}", latitude, longitude, days),
        }
    }
}

impl std::fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::City(city) => f.write_str(city),
            Self::Coordinates {
                latitude,
                longitude,
            } => write!(f, "{:.4}, {:.4}", latitude, longitude),
        }
    }
}

/// Geolocation failures reported by the platform
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location unavailable")]
    PositionUnavailable,
    #[error("Location request timed out")]
    Timeout,
    #[error("Location error: {0}")]
    Other(String),
}

impl LocationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::PermissionDenied => {
                "You denied the request for geolocation. Please enable location access or search manually."
            }
            Self::PositionUnavailable => "Location information is unavailable.",
            Self::Timeout => "The request to get your location timed out.",
            Self::Other(_) => "An unknown error occurred.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_city() {
        assert_eq!(
            LocationQuery::parse("  New York "),
            Some(LocationQuery::City("New York".into()))
        );
    }

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(
            LocationQuery::parse("51.5, -0.12"),
            Some(LocationQuery::Coordinates {
                latitude: 51.5,
                longitude: -0.12
            })
        );
    }

    #[test]
    fn test_parse_out_of_range_pair_is_city() {
        assert_eq!(
            LocationQuery::parse("95,10"),
            Some(LocationQuery::City("95,10".into()))
        );
    }

    #[test]
    fn test_parse_comma_city() {
        assert_eq!(
            LocationQuery::parse("Paris, France"),
            Some(LocationQuery::City("Paris, France".into()))
        );
    }

    #[test]
    fn test_parse_blank() {
        assert_eq!(LocationQuery::parse("   "), None);
    }

    #[test]
    fn test_cache_keys() {
        let city = LocationQuery::City("London".into());
        assert_eq!(city.cache_key(3), "weather:london:3");

        let coords = LocationQuery::Coordinates {
            latitude: 48.85,
            longitude: 2.35,
        };
        assert_eq!(coords.cache_key(0), "weather:coords:48.85,2.35:0");
        assert_eq!(coords.as_query_param(), "48.85,2.35");
    }

    #[test]
    fn test_coordinates_range_check() {
        assert!(LocationQuery::coordinates(0.0, 181.0).is_err());
        assert!(LocationQuery::coordinates(-90.0, 180.0).is_ok());
    }

    #[test]
    fn test_user_messages() {
        assert!(LocationError::PermissionDenied
            .user_message()
            .contains("search manually"));
        assert!(LocationError::Timeout.user_message().contains("timed out"));
    }
}
