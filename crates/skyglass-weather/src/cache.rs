//! Short-lived response cache keyed by lookup target.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::types::WeatherSnapshot;

/// Default time a response is served from cache
pub const DEFAULT_TTL: Duration = Duration::from_secs(600);

#[derive(Debug)]
struct Entry {
    snapshot: WeatherSnapshot,
    stored_at: Instant,
}

#[derive(Debug)]
pub struct WeatherCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, Entry>>,
}

impl WeatherCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Fresh snapshot for `key`; expired entries are dropped.
    pub fn get(&self, key: &str) -> Option<WeatherSnapshot> {
        let mut entries = self.entries.lock();
        let expired = match entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => {
                return Some(entry.snapshot.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            tracing::debug!("Cache entry expired: {}", key);
            entries.remove(key);
        }
        None
    }

    pub fn insert(&self, key: impl Into<String>, snapshot: WeatherSnapshot) {
        if self.ttl.is_zero() {
            return;
        }
        self.entries.lock().insert(
            key.into(),
            Entry {
                snapshot,
                stored_at: Instant::now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for WeatherCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
