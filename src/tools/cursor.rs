use std::f32::consts::TAU;

use egui::{Color32, Pos2};

use super::{ToolKind, ToolState};
use crate::surface::RenderSurface;

const DOT_SEGMENTS: usize = 16;

/// What the next action would look like at the pointer. Never recorded.
#[derive(Debug, Clone, PartialEq)]
pub enum CursorPreview {
    Marker {
        position: Pos2,
        thickness: f32,
        color: Color32,
    },
    Stamp {
        position: Pos2,
        symbol: String,
        rotation: f32,
    },
}

impl CursorPreview {
    pub fn new(tools: &ToolState, position: Pos2) -> Self {
        match tools.kind() {
            ToolKind::Marker => CursorPreview::Marker {
                position,
                thickness: tools.thickness(),
                color: tools.color(),
            },
            ToolKind::Stamp => CursorPreview::Stamp {
                position,
                symbol: tools.symbol().to_owned(),
                rotation: tools.rotation(),
            },
        }
    }

    pub fn position(&self) -> Pos2 {
        match self {
            CursorPreview::Marker { position, .. } | CursorPreview::Stamp { position, .. } => *position,
        }
    }

    pub fn render(&self, surface: &mut dyn RenderSurface) {
        match self {
            CursorPreview::Marker {
                position,
                thickness,
                color,
            } => {
                // A closed ring of radius t/4 stroked t/2 wide covers a
                // disc the size of the marker tip.
                let radius = thickness / 4.0;
                let ring: Vec<Pos2> = (0..=DOT_SEGMENTS)
                    .map(|i| {
                        let angle = TAU * i as f32 / DOT_SEGMENTS as f32;
                        Pos2::new(
                            position.x + radius * angle.cos(),
                            position.y + radius * angle.sin(),
                        )
                    })
                    .collect();
                surface.draw_path(&ring, thickness / 2.0, *color);
            }
            CursorPreview::Stamp {
                position,
                symbol,
                rotation,
            } => surface.draw_glyph(symbol, position.x, position.y, *rotation),
        }
    }
}
