pub mod config;
pub mod error;
pub mod prefs;

pub use config::{Config, DisplayConfig, HistoryConfig, ValidationResult, WeatherConfig};
pub use error::{AppError, NetworkError, StorageError, WeatherServiceError};
pub use prefs::{PreferenceStore, Preferences, ThemePreference, UnitPreference};

use anyhow::Result;

/// Initialize logging with `default_filter` unless `RUST_LOG` is set.
///
/// Logs go to stderr so they never interleave with the dashboard on stdout.
pub fn init(default_filter: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    tracing::debug!("Skyglass core initialized");
    Ok(())
}
