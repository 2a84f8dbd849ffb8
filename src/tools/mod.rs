use std::f32::consts::TAU;

use egui::Color32;
use egui::ecolor::Hsva;

use crate::config::{MarkerPreset, SketchConfig};
use crate::id_generator::generate_id;

mod cursor;

pub use cursor::CursorPreview;

/// Identifies one selectable tool control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToolId(usize);

impl ToolId {
    fn next() -> Self {
        Self(generate_id())
    }
}

/// Which kind of action the active tool draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Marker,
    Stamp,
}

/// The button group a control belongs to.
pub type ToolGroup = ToolKind;

/// What selecting a control does.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolEffect {
    Marker { thickness: f32 },
    Stamp { symbol: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolControl {
    id: ToolId,
    label: String,
    effect: ToolEffect,
}

impl ToolControl {
    fn marker(preset: &MarkerPreset) -> Self {
        Self {
            id: ToolId::next(),
            label: preset.label.clone(),
            effect: ToolEffect::Marker {
                thickness: preset.thickness,
            },
        }
    }

    fn stamp(symbol: &str) -> Self {
        Self {
            id: ToolId::next(),
            label: symbol.to_owned(),
            effect: ToolEffect::Stamp {
                symbol: symbol.to_owned(),
            },
        }
    }

    pub fn id(&self) -> ToolId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn effect(&self) -> &ToolEffect {
        &self.effect
    }

    pub fn group(&self) -> ToolGroup {
        match self.effect {
            ToolEffect::Marker { .. } => ToolGroup::Marker,
            ToolEffect::Stamp { .. } => ToolGroup::Stamp,
        }
    }
}

/// Result of a successful tool selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolChange {
    /// New thickness and a fresh random color.
    Marker,
    /// New symbol and a fresh random rotation; the cursor preview is stale.
    Stamp,
}

impl ToolChange {
    pub fn requests_preview(self) -> bool {
        matches!(self, ToolChange::Stamp)
    }
}

/// Current drawing style and the set of selectable tool controls.
///
/// Exactly one control is selected at a time; the selection is a single id,
/// so picking a new control deselects every other one.
#[derive(Debug)]
pub struct ToolState {
    controls: Vec<ToolControl>,
    selected: ToolId,
    kind: ToolKind,
    thickness: f32,
    color: Color32,
    rotation: f32,
    symbol: String,
    rng: fastrand::Rng,
}

impl ToolState {
    /// Build the default controls from `config`. The first marker starts
    /// selected with a black marker.
    pub fn new(config: &SketchConfig) -> Self {
        let mut controls: Vec<ToolControl> = config.markers.iter().map(ToolControl::marker).collect();
        controls.extend(config.stamps.iter().map(|s| ToolControl::stamp(s)));

        let (selected, thickness) = match controls.first() {
            Some(ToolControl {
                id,
                effect: ToolEffect::Marker { thickness },
                ..
            }) => (*id, *thickness),
            // Config validation guarantees a marker; fall back to a hidden one.
            _ => (ToolId::next(), 1.0),
        };
        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };

        Self {
            controls,
            selected,
            kind: ToolKind::Marker,
            thickness,
            color: Color32::BLACK,
            rotation: 0.0,
            symbol: config.stamps.first().cloned().unwrap_or_default(),
            rng,
        }
    }

    /// Select a control and apply its effect. Unknown ids change nothing.
    pub fn select(&mut self, id: ToolId) -> Option<ToolChange> {
        let Some(control) = self.controls.iter().find(|c| c.id == id) else {
            log::warn!("Ignoring selection of unknown tool {id:?}");
            return None;
        };
        let effect = control.effect.clone();
        self.selected = id;

        let change = match effect {
            ToolEffect::Marker { thickness } => {
                self.kind = ToolKind::Marker;
                self.thickness = thickness;
                self.color = self.random_color();
                ToolChange::Marker
            }
            ToolEffect::Stamp { symbol } => {
                self.kind = ToolKind::Stamp;
                self.symbol = symbol;
                self.rotation = self.rng.f32() * TAU;
                ToolChange::Stamp
            }
        };
        log::debug!(
            "Selected tool {id:?}: kind={:?} thickness={} rotation={}",
            self.kind,
            self.thickness,
            self.rotation
        );
        Some(change)
    }

    /// Add a user-provided stamp at the front of the stamp group.
    /// Blank input is ignored.
    pub fn register_custom_symbol(&mut self, text: &str) -> Option<ToolId> {
        let symbol = text.trim();
        if symbol.is_empty() {
            log::debug!("Ignoring empty custom sticker");
            return None;
        }
        let control = ToolControl::stamp(symbol);
        let id = control.id;
        let index = self
            .controls
            .iter()
            .position(|c| c.group() == ToolGroup::Stamp)
            .unwrap_or(self.controls.len());
        self.controls.insert(index, control);
        log::info!("Registered custom sticker {symbol:?}");
        Some(id)
    }

    fn random_color(&mut self) -> Color32 {
        Hsva::new(self.rng.f32(), 0.85, 0.85, 1.0).into()
    }

    pub fn controls(&self) -> &[ToolControl] {
        &self.controls
    }

    pub fn controls_in(&self, group: ToolGroup) -> impl Iterator<Item = &ToolControl> {
        self.controls.iter().filter(move |c| c.group() == group)
    }

    pub fn find(&self, label: &str) -> Option<&ToolControl> {
        self.controls.iter().find(|c| c.label == label)
    }

    pub fn selected(&self) -> ToolId {
        self.selected
    }

    pub fn is_selected(&self, id: ToolId) -> bool {
        self.selected == id
    }

    pub fn kind(&self) -> ToolKind {
        self.kind
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl Default for ToolState {
    fn default() -> Self {
        Self::new(&SketchConfig::default())
    }
}
