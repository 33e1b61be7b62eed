//! User preferences that survive between runs: temperature unit, theme and
//! recent searches. Stored as JSON next to the config file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// Temperature unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitPreference {
    #[default]
    Celsius,
    Fahrenheit,
}

/// Color theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub unit: UnitPreference,

    /// `None` until the user picks a theme explicitly
    #[serde(default)]
    pub theme: Option<ThemePreference>,

    /// Most recent first
    #[serde(default)]
    pub recent_searches: Vec<String>,
}

impl Preferences {
    /// Put `city` at the front of the recent list, dropping any earlier
    /// entry that differs only by case, and cap the list at `limit`.
    pub fn record_search(&mut self, city: &str, limit: usize) {
        let city = city.trim();
        if city.is_empty() {
            return;
        }

        let lowered = city.to_lowercase();
        self.recent_searches
            .retain(|existing| existing.to_lowercase() != lowered);
        self.recent_searches.insert(0, city.to_string());
        self.recent_searches.truncate(limit);
    }
}

/// File-backed preference storage
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(config_dir: &Path) -> Self {
        Self {
            path: config_dir.join("preferences.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read preferences; a missing file yields defaults.
    pub fn load(&self) -> Result<Preferences, StorageError> {
        if !self.path.exists() {
            return Ok(Preferences::default());
        }

        let json =
            fs::read_to_string(&self.path).map_err(|e| StorageError::Read(e.to_string()))?;

        serde_json::from_str(&json).map_err(|e| StorageError::Corrupted(e.to_string()))
    }

    /// Like `load`, but a corrupted file is logged and replaced by defaults.
    pub fn load_or_default(&self) -> Preferences {
        match self.load() {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::warn!("Ignoring saved preferences at {:?}: {}", self.path, e);
                Preferences::default()
            }
        }
    }

    pub fn save(&self, prefs: &Preferences) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::Write(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(prefs)
            .map_err(|e| StorageError::Write(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| StorageError::Write(e.to_string()))?;

        tracing::debug!("Stored preferences at {:?}", self.path);
        Ok(())
    }

    /// Load, apply `f`, save.
    pub fn update(&self, f: impl FnOnce(&mut Preferences)) -> Result<Preferences, StorageError> {
        let mut prefs = self.load_or_default();
        f(&mut prefs);
        self.save(&prefs)?;
        Ok(prefs)
    }
}
