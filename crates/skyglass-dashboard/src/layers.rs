//! Terminal rendition of the animation backdrop.
//!
//! Each active layer contributes one decorative row; frames shift the row
//! pattern so `--watch` redraws look alive.

use skyglass_weather::{Background, LayerSink, Layers, Scene};

/// Repeating pattern for one layer
fn pattern(layer: Layers) -> &'static str {
    if layer == Layers::RAIN {
        "╱  ╱ ╱   ╱  "
    } else if layer == Layers::SNOW {
        "*  ·  ❄  ·  "
    } else if layer == Layers::CLOUD {
        "☁    ☁   ☁   "
    } else if layer == Layers::SUN {
        "☀  ·  ·  ·  "
    } else if layer == Layers::LIGHTNING {
        "   ⚡       ϟ"
    } else {
        "≋≈≋≈≋≈≋≈≋≈≋≈"
    }
}

/// Keeps the visible scene for the renderer.
#[derive(Debug, Default)]
pub struct TerminalLayers {
    visible: Option<Scene>,
    frame: usize,
    /// Count of scene switches, for the status line
    switches: u64,
}

impl TerminalLayers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(&self) -> Option<Scene> {
        self.visible
    }

    pub fn background(&self) -> Option<Background> {
        self.visible.map(|s| s.background)
    }

    pub fn switches(&self) -> u64 {
        self.switches
    }

    /// Advance the pattern offset by one column
    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    /// One row per active layer, `width` columns wide. Empty when hidden.
    pub fn rows(&self, width: usize) -> Vec<String> {
        let Some(scene) = self.visible else {
            return Vec::new();
        };

        scene
            .layers
            .iter()
            .map(|layer| {
                let chars: Vec<char> = pattern(layer).chars().collect();
                let offset = self.frame % chars.len();
                chars
                    .iter()
                    .cycle()
                    .skip(offset)
                    .take(width)
                    .collect::<String>()
            })
            .collect()
    }
}

impl LayerSink for TerminalLayers {
    fn deactivate_all(&mut self) {
        self.visible = None;
    }

    fn activate(&mut self, scene: &Scene) {
        tracing::debug!(
            background = scene.background.name(),
            layers = ?scene.layers.names(),
            "Activating terminal layers"
        );
        self.visible = Some(*scene);
        self.switches += 1;
    }
}
