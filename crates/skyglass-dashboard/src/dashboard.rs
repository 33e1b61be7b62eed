//! Dashboard state: the current snapshot, display preferences and the
//! animation manager, updated by fetch results in request order.

use std::sync::Arc;

use skyglass_core::{Preferences, ThemePreference, UnitPreference};
use skyglass_weather::{
    format_temperature, AnimationManager, ConditionClassifier, DataSource, DayClock, Fetched,
    IconLookup, IconTable, KeywordClassifier, LayerSink, LocalClock, StandardConverter,
    TemperatureUnit, UnitConverter, WeatherError, WeatherSnapshot,
};

use crate::capabilities::Capabilities;
use crate::error_mapping;
use crate::view::{self, ViewContext, WeatherView};

pub fn unit_from_preference(pref: UnitPreference) -> TemperatureUnit {
    match pref {
        UnitPreference::Celsius => TemperatureUnit::Celsius,
        UnitPreference::Fahrenheit => TemperatureUnit::Fahrenheit,
    }
}

pub fn unit_to_preference(unit: TemperatureUnit) -> UnitPreference {
    match unit {
        TemperatureUnit::Celsius => UnitPreference::Celsius,
        TemperatureUnit::Fahrenheit => UnitPreference::Fahrenheit,
    }
}

/// Injected pure helpers
#[derive(Clone)]
pub struct Collaborators {
    pub classifier: Arc<dyn ConditionClassifier>,
    pub icons: Arc<dyn IconLookup>,
    pub converter: Arc<dyn UnitConverter>,
    pub clock: Arc<dyn DayClock>,
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            classifier: Arc::new(KeywordClassifier),
            icons: Arc::new(IconTable),
            converter: Arc::new(StandardConverter),
            clock: Arc::new(LocalClock),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardOptions {
    pub unit: TemperatureUnit,
    pub theme: ThemePreference,
    pub capabilities: Capabilities,
    /// Start with animations off
    pub reduced_motion: bool,
}

/// Ordering token for one fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

/// What `apply` did with a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Updated(DataSource),
    Failed,
    /// A newer result was already applied
    Stale,
}

pub struct Dashboard<S: LayerSink> {
    collaborators: Collaborators,
    animations: AnimationManager<S>,
    capabilities: Capabilities,
    unit: TemperatureUnit,
    theme: ThemePreference,
    current: Option<Fetched>,
    error: Option<&'static str>,
    issued: u64,
    applied: Option<RequestTicket>,
}

impl<S: LayerSink> Dashboard<S> {
    pub fn new(sink: S, collaborators: Collaborators, options: DashboardOptions) -> Self {
        let animations =
            AnimationManager::new(sink, collaborators.clock.clone(), options.reduced_motion);

        Self {
            collaborators,
            animations,
            capabilities: options.capabilities,
            unit: options.unit,
            theme: options.theme,
            current: None,
            error: None,
            issued: 0,
            applied: None,
        }
    }

    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.current.as_ref().map(|f| &f.snapshot)
    }

    pub fn source(&self) -> Option<DataSource> {
        self.current.as_ref().map(|f| f.source)
    }

    /// Message from the most recent failed fetch, cleared by a success
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn animations(&self) -> &AnimationManager<S> {
        &self.animations
    }

    pub fn layers(&self) -> &S {
        self.animations.sink()
    }

    pub fn layers_mut(&mut self) -> &mut S {
        self.animations.sink_mut()
    }

    /// Hand out a ticket for a fetch about to start.
    pub fn begin_request(&mut self) -> RequestTicket {
        self.issued += 1;
        RequestTicket(self.issued)
    }

    /// Apply a fetch result unless a newer one already landed.
    ///
    /// A failure records a message and leaves the snapshot and the
    /// animation state as they were.
    pub fn apply(
        &mut self,
        ticket: RequestTicket,
        result: Result<Fetched, WeatherError>,
    ) -> Outcome {
        if self.applied.is_some_and(|newest| ticket <= newest) {
            tracing::debug!(?ticket, newest = ?self.applied, "Dropping stale weather result");
            return Outcome::Stale;
        }
        self.applied = Some(ticket);

        match result {
            Ok(fetched) => {
                let category = self.collaborators.classifier.classify(
                    fetched.snapshot.condition_text(),
                    self.collaborators.clock.is_day(),
                );
                tracing::debug!(
                    ?category,
                    condition = fetched.snapshot.condition_text(),
                    "Applying weather snapshot"
                );
                self.animations.set_category(category);

                let source = fetched.source;
                self.current = Some(fetched);
                self.error = None;
                Outcome::Updated(source)
            }
            Err(e) => {
                tracing::warn!("Weather lookup failed: {}", e);
                self.error = Some(error_mapping::user_message(e));
                Outcome::Failed
            }
        }
    }

    /// After a lookup that updated the dashboard, put the place name the API
    /// resolved (not the text that was typed) at the front of `prefs`'
    /// recent searches. Returns whether anything was recorded.
    pub fn remember_search(&self, outcome: Outcome, prefs: &mut Preferences, limit: usize) -> bool {
        let Outcome::Updated(_) = outcome else {
            return false;
        };
        match self.snapshot() {
            Some(snapshot) => {
                prefs.record_search(&snapshot.place.name, limit);
                true
            }
            None => false,
        }
    }

    /// Display strings for the current snapshot, in the current unit.
    pub fn view(&self) -> Option<WeatherView> {
        let fetched = self.current.as_ref()?;
        let ctx = ViewContext {
            unit: self.unit,
            icons: self.collaborators.icons.as_ref(),
            converter: self.collaborators.converter.as_ref(),
            device_hour: self.collaborators.clock.local_hour(),
        };
        Some(view::build(fetched, &ctx))
    }

    pub fn set_unit(&mut self, unit: TemperatureUnit) {
        self.unit = unit;
    }

    pub fn toggle_unit(&mut self) -> TemperatureUnit {
        self.unit = self.unit.toggle();
        tracing::debug!(unit = self.unit.symbol(), "Temperature unit toggled");
        self.unit
    }

    pub fn set_theme(&mut self, theme: ThemePreference) {
        self.theme = theme;
    }

    pub fn toggle_theme(&mut self) -> ThemePreference {
        self.theme = match self.theme {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        };
        self.theme
    }

    pub fn toggle_animations(&mut self) -> bool {
        self.animations.toggle_enabled()
    }

    /// `It's currently 21.3°C in London. Sunny.`
    ///
    /// `None` without the share capability or a snapshot.
    pub fn share_text(&self) -> Option<String> {
        if !self.capabilities.share {
            return None;
        }
        let snapshot = self.snapshot()?;
        let celsius = snapshot.current.temperature.celsius();
        let value = self.collaborators.converter.from_celsius(celsius, self.unit);

        Some(format!(
            "It's currently {} in {}. {}.",
            format_temperature(value, self.unit),
            snapshot.place.name,
            snapshot.current.condition_text
        ))
    }
}

impl<S: LayerSink + Default> Dashboard<S> {
    /// Default collaborators and a fresh sink
    pub fn with_defaults(options: DashboardOptions) -> Self {
        Self::new(S::default(), Collaborators::default(), options)
    }
}
