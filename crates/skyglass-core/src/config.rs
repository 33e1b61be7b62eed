use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Environment variable that overrides `weather.api_key`.
pub const API_KEY_ENV: &str = "WEATHER_API_KEY";

/// Largest forecast window WeatherAPI.com serves.
pub const MAX_FORECAST_DAYS: u8 = 14;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Weather API settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Dashboard display settings
    #[serde(default)]
    pub display: DisplayConfig,

    /// Search history settings
    #[serde(default)]
    pub history: HistoryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// Base URL of the WeatherAPI.com v1 endpoints
    pub api_url: String,

    /// API key; `WEATHER_API_KEY` takes precedence when set
    pub api_key: Option<String>,

    /// Forecast days to request (1-14)
    pub forecast_days: u8,

    /// How long a fetched response is served from cache
    pub cache_ttl_secs: u64,

    /// Refresh interval in minutes for `--watch`
    pub refresh_minutes: u32,

    /// Per-request timeout
    pub request_timeout_secs: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.weatherapi.com/v1".to_string(),
            api_key: None,
            forecast_days: 3,
            cache_ttl_secs: 600,
            refresh_minutes: 15,
            request_timeout_secs: 10,
        }
    }
}

impl WeatherConfig {
    /// Period between `--watch` refreshes; `None` when `refresh_minutes` is 0,
    /// meaning fetch once and keep the dashboard up.
    pub fn refresh_interval(&self) -> Option<Duration> {
        match self.refresh_minutes {
            0 => None,
            minutes => Some(Duration::from_secs(u64::from(minutes) * 60)),
        }
    }

    /// The API key to use, preferring the environment over the file.
    pub fn resolved_api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| self.api_key.clone().filter(|k| !k.trim().is_empty()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Decorative condition animations
    pub animations: bool,

    /// Treat the terminal as motion-sensitive; animations start disabled
    pub reduce_motion: bool,

    /// Offer the share line under the dashboard
    pub share: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            animations: true,
            reduce_motion: false,
            share: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Number of recent searches to keep
    pub max_recent: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { max_recent: 5 }
    }
}

impl Config {
    /// Load configuration from the default location, creating it if missing
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            tracing::info!("Created default config at {}", path.display());
            return Ok(config);
        }

        let contents = std::fs::read_to_string(path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns an error if validation fails with critical errors; warnings are logged.
    pub fn load_validated(path: Option<&Path>) -> Result<(Self, ValidationResult)> {
        let config = match path {
            Some(path) => Self::load_from(path)?,
            None => Self::load()?,
        };
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(&self.weather.api_url, "weather.api_url", &mut result);

        if self.weather.resolved_api_key().is_none() {
            result.add_warning(
                "weather.api_key",
                format!("No API key configured; set {} or weather.api_key", API_KEY_ENV),
            );
        }

        if self.weather.forecast_days == 0 || self.weather.forecast_days > MAX_FORECAST_DAYS {
            result.add_error(
                "weather.forecast_days",
                format!("Forecast days must be between 1 and {}", MAX_FORECAST_DAYS),
            );
        }

        if self.weather.request_timeout_secs == 0 {
            result.add_error(
                "weather.request_timeout_secs",
                "Request timeout must be greater than 0",
            );
        }

        if self.weather.cache_ttl_secs == 0 {
            result.add_warning("weather.cache_ttl_secs", "Response caching disabled (0 seconds)");
        }

        if self.weather.refresh_minutes == 0 {
            result.add_warning(
                "weather.refresh_minutes",
                "Automatic refresh disabled (0 minutes); --watch fetches once",
            );
        } else if self.weather.refresh_minutes > 1440 {
            result.add_warning(
                "weather.refresh_minutes",
                "Weather refresh interval is more than 24 hours",
            );
        }

        if self.history.max_recent == 0 {
            result.add_warning("history.max_recent", "Recent searches will not be kept");
        }

        result
    }

    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Directory holding the config and preference files
    pub fn config_dir() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Failed to get config directory")?
            .join("skyglass"))
    }

    fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}
