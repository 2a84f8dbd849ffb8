use eframe::egui;

use crate::tools::{ToolControl, ToolGroup};

/// A square-ish button for one tool control, highlighted while selected.
pub struct ToolButton<'a> {
    pub control: &'a ToolControl,
    pub selected: bool,
}

impl<'a> ToolButton<'a> {
    pub fn new(control: &'a ToolControl, selected: bool) -> Self {
        Self { control, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        // Marker labels are words, stamp labels are usually a single glyph.
        let (button_size, font_size) = match self.control.group() {
            ToolGroup::Marker => (egui::vec2(56.0, 32.0), 14.0),
            ToolGroup::Stamp => (egui::vec2(40.0, 40.0), 24.0),
        };
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                egui::Color32::from_rgb(100, 181, 246) // Light blue when selected
            } else if response.hovered() {
                egui::Color32::from_gray(70)
            } else {
                egui::Color32::from_gray(45)
            };

            ui.painter().rect_filled(rect, 4.0, bg_color);

            let text_color = if self.selected {
                egui::Color32::BLACK
            } else {
                egui::Color32::WHITE
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.control.label(),
                egui::FontId::proportional(font_size),
                text_color,
            );

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response.on_hover_text(self.control.label())
    }
}
