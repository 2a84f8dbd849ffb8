use egui::{Color32, Pos2};

mod painter;
mod raster;
mod recording;

pub use painter::PainterSurface;
pub use raster::RasterSurface;
pub use recording::{DisplayList, DrawCommand};

/// Nominal glyph height in logical pixels, before any scaled region applies.
pub const GLYPH_SIZE: f32 = 32.0;

/// Color used for stamped glyphs.
pub const GLYPH_COLOR: Color32 = Color32::BLACK;

/// The painting primitives the scene needs from a drawing target.
///
/// Every action paints itself through this trait using only its own style
/// attributes, so a replay never depends on what a previous paint left behind.
pub trait RenderSurface {
    /// Fill the whole surface with `fill`.
    fn clear(&mut self, fill: Color32);

    /// Stroke a connected path through `points` in order.
    fn draw_path(&mut self, points: &[Pos2], thickness: f32, color: Color32);

    /// Draw `text` centered on (x, y), rotated about that point.
    fn draw_glyph(&mut self, text: &str, x: f32, y: f32, rotation: f32);

    /// Scale everything drawn until the matching [`Self::end_scaled_region`].
    /// Regions nest multiplicatively.
    fn begin_scaled_region(&mut self, scale: f32);

    fn end_scaled_region(&mut self);
}

/// Tracks nested scaled regions. Unbalanced ends are ignored.
#[derive(Debug, Clone, Default)]
pub struct ScaleStack {
    scales: Vec<f32>,
}

impl ScaleStack {
    pub fn push(&mut self, scale: f32) {
        self.scales.push(scale);
    }

    pub fn pop(&mut self) {
        if self.scales.pop().is_none() {
            log::warn!("end_scaled_region without a matching begin");
        }
    }

    /// Product of every open region, 1.0 when none are open.
    pub fn current(&self) -> f32 {
        self.scales.iter().product()
    }

    pub fn depth(&self) -> usize {
        self.scales.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_stack_nests() {
        let mut stack = ScaleStack::default();
        assert_eq!(stack.current(), 1.0);
        stack.push(2.0);
        stack.push(3.0);
        assert_eq!(stack.current(), 6.0);
        stack.pop();
        assert_eq!(stack.current(), 2.0);
        stack.pop();
        stack.pop();
        assert_eq!(stack.current(), 1.0);
        assert_eq!(stack.depth(), 0);
    }
}
