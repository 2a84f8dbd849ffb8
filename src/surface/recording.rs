use egui::{Color32, Pos2};

use super::{GLYPH_SIZE, RenderSurface, ScaleStack};

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color32),
    Path {
        points: Vec<Pos2>,
        thickness: f32,
        color: Color32,
    },
    Glyph {
        text: String,
        position: Pos2,
        rotation: f32,
        /// Glyph height; only differs from [`GLYPH_SIZE`] in resolved output.
        size: f32,
    },
    BeginScale(f32),
    EndScale,
}

/// A surface that records what was drawn instead of painting it.
///
/// The render pipeline rebuilds one of these on every change notification;
/// the UI then replays it onto the real painter each frame.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Paint the recorded calls onto another surface, in order.
    pub fn replay(&self, surface: &mut dyn RenderSurface) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear(fill) => surface.clear(*fill),
                DrawCommand::Path {
                    points,
                    thickness,
                    color,
                } => surface.draw_path(points, *thickness, *color),
                DrawCommand::Glyph {
                    text,
                    position,
                    rotation,
                    ..
                } => surface.draw_glyph(text, position.x, position.y, *rotation),
                DrawCommand::BeginScale(scale) => surface.begin_scaled_region(*scale),
                DrawCommand::EndScale => surface.end_scaled_region(),
            }
        }
    }

    /// The drawing calls with every scaled region applied to their geometry.
    /// Region markers themselves are dropped.
    pub fn resolved(&self) -> Vec<DrawCommand> {
        let mut scales = ScaleStack::default();
        let mut out = Vec::with_capacity(self.commands.len());
        for command in &self.commands {
            let s = scales.current();
            match command {
                DrawCommand::BeginScale(scale) => scales.push(*scale),
                DrawCommand::EndScale => scales.pop(),
                DrawCommand::Clear(fill) => out.push(DrawCommand::Clear(*fill)),
                DrawCommand::Path {
                    points,
                    thickness,
                    color,
                } => out.push(DrawCommand::Path {
                    points: points.iter().map(|p| Pos2::new(p.x * s, p.y * s)).collect(),
                    thickness: thickness * s,
                    color: *color,
                }),
                DrawCommand::Glyph {
                    text,
                    position,
                    rotation,
                    size,
                } => out.push(DrawCommand::Glyph {
                    text: text.clone(),
                    position: Pos2::new(position.x * s, position.y * s),
                    rotation: *rotation,
                    size: size * s,
                }),
            }
        }
        out
    }

    /// Number of recorded path draws.
    pub fn path_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Path { .. }))
            .count()
    }

    /// Number of recorded glyph draws.
    pub fn glyph_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Glyph { .. }))
            .count()
    }
}

impl RenderSurface for DisplayList {
    fn clear(&mut self, fill: Color32) {
        self.commands.push(DrawCommand::Clear(fill));
    }

    fn draw_path(&mut self, points: &[Pos2], thickness: f32, color: Color32) {
        self.commands.push(DrawCommand::Path {
            points: points.to_vec(),
            thickness,
            color,
        });
    }

    fn draw_glyph(&mut self, text: &str, x: f32, y: f32, rotation: f32) {
        self.commands.push(DrawCommand::Glyph {
            text: text.to_owned(),
            position: Pos2::new(x, y),
            rotation,
            size: GLYPH_SIZE,
        });
    }

    fn begin_scaled_region(&mut self, scale: f32) {
        self.commands.push(DrawCommand::BeginScale(scale));
    }

    fn end_scaled_region(&mut self) {
        self.commands.push(DrawCommand::EndScale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_applies_nested_scale() {
        let mut list = DisplayList::new();
        list.begin_scaled_region(2.0);
        list.draw_path(&[Pos2::new(1.0, 2.0), Pos2::new(3.0, 4.0)], 1.5, Color32::RED);
        list.begin_scaled_region(2.0);
        list.draw_glyph("a", 5.0, 5.0, 0.5);
        list.end_scaled_region();
        list.end_scaled_region();
        list.draw_path(&[Pos2::new(1.0, 1.0), Pos2::new(2.0, 2.0)], 1.0, Color32::RED);

        let resolved = list.resolved();
        assert_eq!(resolved.len(), 3);
        assert_eq!(
            resolved[0],
            DrawCommand::Path {
                points: vec![Pos2::new(2.0, 4.0), Pos2::new(6.0, 8.0)],
                thickness: 3.0,
                color: Color32::RED,
            }
        );
        assert_eq!(
            resolved[1],
            DrawCommand::Glyph {
                text: "a".into(),
                position: Pos2::new(20.0, 20.0),
                rotation: 0.5,
                size: GLYPH_SIZE * 4.0,
            }
        );
        // Back outside every region.
        assert!(matches!(&resolved[2], DrawCommand::Path { thickness, .. } if *thickness == 1.0));
    }

    #[test]
    fn test_replay_reproduces_calls() {
        let mut source = DisplayList::new();
        source.clear(Color32::WHITE);
        source.draw_glyph("🐣", 5.0, 5.0, 0.0);
        source.draw_path(&[Pos2::ZERO, Pos2::new(1.0, 1.0)], 2.0, Color32::BLUE);

        let mut copy = DisplayList::new();
        source.replay(&mut copy);
        assert_eq!(copy.commands(), source.commands());
        assert_eq!(copy.path_count(), 1);
        assert_eq!(copy.glyph_count(), 1);
    }
}
