use crate::SketchApp;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let canvas_size = app.config().canvas_size();
        let (response, painter) = ui.allocate_painter(canvas_size, egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        // Feed pointer input to the scene before painting so this frame
        // shows its effect.
        app.input_mut().set_canvas_rect(canvas_rect);
        let events = app.input_mut().process_input(ctx);
        for event in events {
            app.scene_mut().handle_pointer(event);
        }

        // The cursor preview stands in for the system pointer.
        if response.hovered() {
            ctx.set_cursor_icon(egui::CursorIcon::None);
        }

        app.renderer().paint(&painter, canvas_rect);
    });
}
