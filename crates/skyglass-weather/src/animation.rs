//! Animation state for the dashboard backdrop.
//!
//! The manager decides *which* background and layers are visible; a
//! [`LayerSink`] decides how they look. Every category switch reaches the sink
//! as `deactivate_all` followed by one `activate`, so two categories are never
//! visible at once.

use std::sync::Arc;

use bitflags::bitflags;

use crate::condition::{ConditionCategory, DayClock};

bitflags! {
    /// Independently toggled animation groups
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Layers: u8 {
        const RAIN = 1 << 0;
        const SNOW = 1 << 1;
        const CLOUD = 1 << 2;
        const SUN = 1 << 3;
        const LIGHTNING = 1 << 4;
        const FOG = 1 << 5;
    }
}

impl Layers {
    pub fn names(self) -> Vec<&'static str> {
        self.iter_names().map(|(name, _)| name).collect()
    }
}

/// Full-screen backdrop, one per scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Background {
    Sunny,
    ClearNight,
    Cloudy,
    Rainy,
    Snowy,
    Stormy,
    Foggy,
}

impl Background {
    pub fn name(self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::ClearNight => "clear-night",
            Self::Cloudy => "cloudy",
            Self::Rainy => "rainy",
            Self::Snowy => "snowy",
            Self::Stormy => "stormy",
            Self::Foggy => "foggy",
        }
    }
}

/// What is visible for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scene {
    pub background: Background,
    pub layers: Layers,
}

impl Scene {
    /// Scene for a category; `Default` is resolved with `is_day` first.
    pub fn for_category(category: ConditionCategory, is_day: bool) -> Self {
        let (background, layers) = match category.resolve(is_day) {
            ConditionCategory::Rain => (Background::Rainy, Layers::RAIN | Layers::CLOUD),
            ConditionCategory::Snow => (Background::Snowy, Layers::SNOW),
            ConditionCategory::Storm => (
                Background::Stormy,
                Layers::RAIN | Layers::CLOUD | Layers::LIGHTNING,
            ),
            ConditionCategory::Fog => (Background::Foggy, Layers::FOG),
            ConditionCategory::Cloudy => (Background::Cloudy, Layers::CLOUD),
            ConditionCategory::ClearNight => (Background::ClearNight, Layers::empty()),
            ConditionCategory::ClearDay | ConditionCategory::Default => {
                (Background::Sunny, Layers::SUN)
            }
        };
        Self { background, layers }
    }
}

/// Receives activation intents; owns how they are drawn.
pub trait LayerSink {
    /// Hide every background and layer
    fn deactivate_all(&mut self);

    /// Show exactly `scene`'s background and layers
    fn activate(&mut self, scene: &Scene);
}

/// Owns the active category and the enabled flag.
pub struct AnimationManager<S: LayerSink> {
    sink: S,
    clock: Arc<dyn DayClock>,
    enabled: bool,
    current: Option<ConditionCategory>,
    visible: Option<Scene>,
}

impl<S: LayerSink> AnimationManager<S> {
    /// Start uninitialized; disabled from the outset when motion is reduced.
    pub fn new(sink: S, clock: Arc<dyn DayClock>, reduced_motion: bool) -> Self {
        if reduced_motion {
            tracing::debug!("Reduced motion requested, animations start disabled");
        }
        Self {
            sink,
            clock,
            enabled: !reduced_motion,
            current: None,
            visible: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Last category applied while enabled
    pub fn current(&self) -> Option<ConditionCategory> {
        self.current
    }

    /// Scene currently shown, `None` when everything is inactive
    pub fn visible(&self) -> Option<Scene> {
        self.visible
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// For sink-local state such as animation frames
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Switch to `category`. Ignored while disabled.
    pub fn set_category(&mut self, category: ConditionCategory) {
        if !self.enabled {
            tracing::debug!(?category, "Animations disabled, ignoring category");
            return;
        }

        let scene = Scene::for_category(category, self.clock.is_day());
        self.current = Some(category);

        if self.visible == Some(scene) {
            return;
        }

        tracing::debug!(
            ?category,
            background = scene.background.name(),
            "Switching animation scene"
        );
        self.sink.deactivate_all();
        self.sink.activate(&scene);
        self.visible = Some(scene);
    }

    /// Flip the enabled flag, returning the new value.
    ///
    /// Disabling hides everything but remembers the category; enabling
    /// re-applies it.
    pub fn toggle_enabled(&mut self) -> bool {
        self.enabled = !self.enabled;

        if self.enabled {
            if let Some(category) = self.current {
                self.set_category(category);
            }
        } else {
            self.sink.deactivate_all();
            self.visible = None;
        }

        tracing::debug!(enabled = self.enabled, "Animations toggled");
        self.enabled
    }
}
