use crate::SketchApp;
use crate::components::ToolButton;
use crate::tools::{ToolGroup, ToolId};

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading(crate::APP_NAME);
            ui.separator();

            // Collect the click first; the buttons borrow the tool state.
            let mut clicked: Option<ToolId> = None;
            let tools = app.scene().tools();

            ui.label("Markers");
            ui.horizontal_wrapped(|ui| {
                for control in tools.controls_in(ToolGroup::Marker) {
                    let button = ToolButton::new(control, tools.is_selected(control.id()));
                    if button.show(ui).clicked() {
                        clicked = Some(control.id());
                    }
                }
            });

            ui.label("Stickers");
            ui.horizontal_wrapped(|ui| {
                for control in tools.controls_in(ToolGroup::Stamp) {
                    let button = ToolButton::new(control, tools.is_selected(control.id()));
                    if button.show(ui).clicked() {
                        clicked = Some(control.id());
                    }
                }
            });

            if let Some(id) = clicked {
                log::info!("Tool selected from UI: {id:?}");
                app.select_tool(id);
            }

            if ui.button("Custom sticker…").clicked() {
                app.open_custom_prompt();
            }

            ui.separator();

            // Undo/Redo section
            ui.horizontal(|ui| {
                let can_undo = app.scene().history().can_undo();
                let can_redo = app.scene().history().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.redo();
                }
            });

            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    app.clear();
                }
                if ui.button("Export").clicked() {
                    app.export();
                }
            });

            ui.separator();

            let history = app.scene().history();
            ui.label(format!("Actions: {}", history.committed().len()));
            ui.label(format!("Redo stack size: {}", history.pending_redo().len()));
            ui.label(format!("State: {}", app.scene().interaction().name()));

            if let Some(status) = app.status() {
                ui.separator();
                ui.label(status);
            }
        });
}
