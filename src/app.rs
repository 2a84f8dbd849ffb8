use std::cell::RefCell;
use std::rc::Rc;

use crate::config::SketchConfig;
use crate::error::Result;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::scene::Scene;
use crate::tools::ToolId;

/// The sketchpad window: tools on the left, canvas in the middle.
pub struct SketchApp {
    config: SketchConfig,
    scene: Scene,
    renderer: Rc<RefCell<Renderer>>,
    input: InputHandler,
    /// Text of the open "custom sticker" prompt, if any.
    custom_prompt: Option<String>,
    status: Option<String>,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: SketchConfig) -> Result<Self> {
        Self::from_config(config)
    }

    pub fn from_config(config: SketchConfig) -> Result<Self> {
        let mut scene = Scene::new(&config)?;
        let renderer = Rc::new(RefCell::new(Renderer::new(scene.background())));
        scene.subscribe(Box::new(Rc::clone(&renderer)));
        let canvas = egui::Rect::from_min_size(egui::Pos2::ZERO, config.canvas_size());

        Ok(Self {
            config,
            scene,
            renderer,
            input: InputHandler::new(canvas),
            custom_prompt: None,
            status: None,
        })
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn renderer(&self) -> std::cell::Ref<'_, Renderer> {
        self.renderer.borrow()
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn select_tool(&mut self, id: ToolId) {
        self.scene.select_tool(id);
    }

    pub fn undo(&mut self) {
        self.scene.undo();
    }

    pub fn redo(&mut self) {
        self.scene.redo();
    }

    pub fn clear(&mut self) {
        self.scene.clear_all();
    }

    pub fn open_custom_prompt(&mut self) {
        self.custom_prompt = Some(String::new());
    }

    /// Render at the configured scale and write the PNG to the export path.
    pub fn export(&mut self) {
        let path = self.config.export_path.clone();
        let result = self
            .scene
            .export_image(self.config.export_scale)
            .and_then(|bytes| std::fs::write(&path, bytes).map_err(Into::into));
        self.status = Some(match result {
            Ok(()) => {
                log::info!("Saved sketch to {}", path.display());
                format!("Saved {}", path.display())
            }
            Err(err) => {
                log::error!("Export to {} failed: {err}", path.display());
                format!("Export failed: {err}")
            }
        });
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        use egui::{Key, KeyboardShortcut, Modifiers};

        let redo_shift = KeyboardShortcut::new(Modifiers::COMMAND | Modifiers::SHIFT, Key::Z);
        let redo_y = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);
        let undo = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);

        // Shift+Z first: the plain undo shortcut would also match it.
        if ctx.input_mut(|i| i.consume_shortcut(&redo_shift) || i.consume_shortcut(&redo_y)) {
            self.redo();
        } else if ctx.input_mut(|i| i.consume_shortcut(&undo)) {
            self.undo();
        }
    }

    fn custom_prompt_window(&mut self, ctx: &egui::Context) {
        let Some(text) = self.custom_prompt.as_mut() else {
            return;
        };
        let mut submit = false;
        let mut cancel = false;

        egui::Window::new("Custom sticker")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Sticker text:");
                let edit = ui.text_edit_singleline(text);
                edit.request_focus();
                if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }
                ui.horizontal(|ui| {
                    submit |= ui.button("Add").clicked();
                    cancel |= ui.button("Cancel").clicked();
                });
            });

        if submit {
            let text = self.custom_prompt.take().unwrap_or_default();
            if let Some(id) = self.scene.register_custom_symbol(&text) {
                self.status = Some(format!("Added sticker {:?}", text.trim()));
                log::debug!("Custom sticker control {id:?} added");
            }
        } else if cancel {
            self.custom_prompt = None;
        }
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.custom_prompt.is_none() {
            self.handle_shortcuts(ctx);
        }
        tools_panel(self, ctx);
        central_panel(self, ctx);
        self.custom_prompt_window(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_renders_initial_frame() {
        let app = SketchApp::from_config(SketchConfig::default()).unwrap();
        // Subscribing triggers the first redraw: just the background clear.
        assert_eq!(app.renderer().redraws(), 1);
        assert_eq!(app.renderer().display_list().len(), 1);
    }

    #[test]
    fn test_zero_canvas_fails_at_startup() {
        let config = SketchConfig {
            canvas_width: 0,
            ..SketchConfig::default()
        };
        assert!(SketchApp::from_config(config).is_err());
    }

    #[test]
    fn test_app_undo_redo_updates_renderer() {
        let mut app = SketchApp::from_config(SketchConfig::default()).unwrap();
        app.scene_mut().on_pointer_down(1.0, 1.0);
        app.scene_mut().on_pointer_move(5.0, 5.0);
        app.scene_mut().on_pointer_up(5.0, 5.0);
        assert_eq!(app.renderer().display_list().path_count(), 1);

        app.undo();
        assert_eq!(app.renderer().display_list().path_count(), 0);
        app.redo();
        assert_eq!(app.renderer().display_list().path_count(), 1);
        app.clear();
        assert_eq!(app.renderer().display_list().path_count(), 0);
    }
}
