use egui::emath::Rot2;
use egui::epaint::TextShape;
use egui::{Color32, FontId, Painter, Pos2, Rect, Shape, Stroke};

use super::{GLYPH_COLOR, GLYPH_SIZE, RenderSurface, ScaleStack};

/// Paints onto an egui painter, mapping surface coordinates into `canvas`.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    canvas: Rect,
    scales: ScaleStack,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, canvas: Rect) -> Self {
        Self {
            painter,
            canvas,
            scales: ScaleStack::default(),
        }
    }

    fn to_screen(&self, point: Pos2) -> Pos2 {
        self.canvas.min + point.to_vec2() * self.scales.current()
    }
}

impl RenderSurface for PainterSurface<'_> {
    fn clear(&mut self, fill: Color32) {
        self.painter.rect_filled(self.canvas, 0.0, fill);
    }

    fn draw_path(&mut self, points: &[Pos2], thickness: f32, color: Color32) {
        let scale = self.scales.current();
        let screen_points = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter
            .add(Shape::line(screen_points, Stroke::new(thickness * scale, color)));
    }

    fn draw_glyph(&mut self, text: &str, x: f32, y: f32, rotation: f32) {
        let scale = self.scales.current();
        let galley = self.painter.layout_no_wrap(
            text.to_owned(),
            FontId::proportional(GLYPH_SIZE * scale),
            GLYPH_COLOR,
        );
        // TextShape rotates about its top-left corner, so pull that corner
        // back from the center along the rotated half-extent.
        let center = self.to_screen(Pos2::new(x, y));
        let top_left = center - Rot2::from_angle(rotation) * (galley.size() / 2.0);
        self.painter.add(Shape::Text(
            TextShape::new(top_left, galley, GLYPH_COLOR).with_angle(rotation),
        ));
    }

    fn begin_scaled_region(&mut self, scale: f32) {
        self.scales.push(scale);
    }

    fn end_scaled_region(&mut self) {
        self.scales.pop();
    }
}
