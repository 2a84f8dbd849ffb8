use egui::Pos2;

mod stamp;
mod stroke;

pub use stamp::Stamp;
pub use stroke::Stroke;

use crate::surface::RenderSurface;
use crate::tools::{ToolKind, ToolState};

/// One recorded unit of drawing.
///
/// Actions are mutable only while their gesture is live. Once committed they
/// are reachable solely through shared references from the history.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Stroke(Stroke),
    Stamp(Stamp),
}

impl Action {
    /// Construct the action the active tool would draw, starting at `at`.
    pub fn begin(tools: &ToolState, at: Pos2) -> Self {
        match tools.kind() {
            ToolKind::Marker => Action::Stroke(Stroke::new(at, tools.thickness(), tools.color())),
            ToolKind::Stamp => Action::Stamp(Stamp::new(tools.symbol(), at, tools.rotation())),
        }
    }

    /// Paint this action with its own style attributes.
    pub fn render(&self, surface: &mut dyn RenderSurface) {
        match self {
            Action::Stroke(stroke) => stroke.render(surface),
            Action::Stamp(stamp) => stamp.render(surface),
        }
    }

    /// Extend live geometry: strokes gain a point, stamps move.
    pub fn relocate(&mut self, x: f32, y: f32) {
        let point = Pos2::new(x, y);
        match self {
            Action::Stroke(stroke) => stroke.push(point),
            Action::Stamp(stamp) => stamp.move_to(point),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Action::Stroke(_) => "stroke",
            Action::Stamp(_) => "stamp",
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Action::Stroke(stroke) => Some(stroke),
            _ => None,
        }
    }

    pub fn as_stamp(&self) -> Option<&Stamp> {
        match self {
            Action::Stamp(stamp) => Some(stamp),
            _ => None,
        }
    }
}

impl From<Stroke> for Action {
    fn from(stroke: Stroke) -> Self {
        Action::Stroke(stroke)
    }
}

impl From<Stamp> for Action {
    fn from(stamp: Stamp) -> Self {
        Action::Stamp(stamp)
    }
}
