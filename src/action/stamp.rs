use egui::Pos2;

use crate::surface::RenderSurface;

/// A symbol stamped at a position with a fixed rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Stamp {
    symbol: String,
    position: Pos2,
    rotation: f32,
}

impl Stamp {
    pub fn new(symbol: impl Into<String>, position: Pos2, rotation: f32) -> Self {
        Self {
            symbol: symbol.into(),
            position,
            rotation,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    /// Rotation in radians, captured when the stamp was created.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub(crate) fn move_to(&mut self, position: Pos2) {
        self.position = position;
    }

    pub(crate) fn render(&self, surface: &mut dyn RenderSurface) {
        surface.draw_glyph(&self.symbol, self.position.x, self.position.y, self.rotation);
    }
}
