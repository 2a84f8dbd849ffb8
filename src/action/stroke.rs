use egui::{Color32, Pos2};

use crate::surface::RenderSurface;

/// A freehand marker line.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    thickness: f32,
    color: Color32,
}

impl Stroke {
    /// Start a stroke at `start`.
    pub fn new(start: Pos2, thickness: f32, color: Color32) -> Self {
        Self {
            points: vec![start],
            thickness,
            color,
        }
    }

    /// Build a stroke from an existing point list. Returns `None` when empty.
    pub fn from_points(points: Vec<Pos2>, thickness: f32, color: Color32) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self {
            points,
            thickness,
            color,
        })
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub(crate) fn push(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub(crate) fn render(&self, surface: &mut dyn RenderSurface) {
        // A lone click leaves no mark.
        if self.points.len() < 2 {
            return;
        }
        surface.draw_path(&self.points, self.thickness, self.color);
    }
}
