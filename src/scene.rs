use egui::{Color32, Pos2};

use crate::config::SketchConfig;
use crate::controller::{Interaction, InteractionController};
use crate::error::{Result, SketchError};
use crate::event::{EventBus, SceneEvent, SceneObserver, SceneView};
use crate::history::SceneHistory;
use crate::input::PointerEvent;
use crate::renderer;
use crate::tools::{ToolId, ToolState};

/// The drawing surface's model: history, tool state and pointer interaction,
/// with observers notified synchronously after every change.
#[derive(Debug)]
pub struct Scene {
    width: u32,
    height: u32,
    background: Color32,
    history: SceneHistory,
    tools: ToolState,
    controller: InteractionController,
    bus: EventBus,
}

impl Scene {
    /// Fails with [`SketchError::MissingRenderTarget`] when the canvas has no
    /// area, since nothing could be drawn.
    pub fn new(config: &SketchConfig) -> Result<Self> {
        let (width, height) = (config.canvas_width, config.canvas_height);
        if width == 0 || height == 0 {
            return Err(SketchError::MissingRenderTarget { width, height });
        }
        config.validate()?;
        log::debug!("Scene created: {width}x{height}");
        Ok(Self {
            width,
            height,
            background: config.background_color(),
            history: SceneHistory::new(),
            tools: ToolState::new(config),
            controller: InteractionController::new(),
            bus: EventBus::new(),
        })
    }

    /// Register an observer. It immediately receives one
    /// [`SceneEvent::DrawingChanged`] so it starts in sync.
    pub fn subscribe(&mut self, mut observer: Box<dyn SceneObserver>) {
        observer.scene_changed(SceneEvent::DrawingChanged, &self.view());
        self.bus.subscribe(observer);
    }

    pub fn view(&self) -> SceneView<'_> {
        SceneView {
            committed: self.history.committed(),
            live: self.controller.live_action(),
            cursor: self.controller.cursor(),
        }
    }

    fn notify(&mut self, event: SceneEvent) {
        let view = SceneView {
            committed: self.history.committed(),
            live: self.controller.live_action(),
            cursor: self.controller.cursor(),
        };
        self.bus.emit(event, &view);
    }

    fn notify_opt(&mut self, event: Option<SceneEvent>) {
        if let Some(event) = event {
            self.notify(event);
        }
    }

    pub fn on_pointer_enter(&mut self, x: f32, y: f32) {
        let event = self.controller.pointer_enter(&self.tools, Pos2::new(x, y));
        self.notify_opt(event);
    }

    pub fn on_pointer_leave(&mut self, _x: f32, _y: f32) {
        let event = self.controller.pointer_leave();
        self.notify_opt(event);
    }

    pub fn on_pointer_down(&mut self, x: f32, y: f32) {
        let event = self.controller.pointer_down(&self.tools, Pos2::new(x, y));
        self.notify_opt(event);
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        let event = self.controller.pointer_move(&self.tools, Pos2::new(x, y));
        self.notify_opt(event);
    }

    /// Finish the gesture and commit its action.
    pub fn on_pointer_up(&mut self, x: f32, y: f32) {
        if let Some(action) = self.controller.pointer_up(Pos2::new(x, y)) {
            self.history.commit(action);
            self.notify(SceneEvent::DrawingChanged);
        }
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        let Pos2 { x, y } = event.position();
        match event {
            PointerEvent::Enter(_) => self.on_pointer_enter(x, y),
            PointerEvent::Leave(_) => self.on_pointer_leave(x, y),
            PointerEvent::Move(_) => self.on_pointer_move(x, y),
            PointerEvent::Down(_) => self.on_pointer_down(x, y),
            PointerEvent::Up(_) => self.on_pointer_up(x, y),
        }
    }

    /// Select a tool control. Stamp selections refresh the cursor preview.
    /// Returns false for unknown ids.
    pub fn select_tool(&mut self, id: ToolId) -> bool {
        let Some(change) = self.tools.select(id) else {
            return false;
        };
        if change.requests_preview() {
            let event = self.controller.refresh_cursor(&self.tools);
            self.notify_opt(event);
        }
        true
    }

    pub fn register_custom_symbol(&mut self, text: &str) -> Option<ToolId> {
        self.tools.register_custom_symbol(text)
    }

    pub fn undo(&mut self) {
        if self.history.undo() {
            self.notify(SceneEvent::DrawingChanged);
        }
    }

    pub fn redo(&mut self) {
        if self.history.redo() {
            self.notify(SceneEvent::DrawingChanged);
        }
    }

    pub fn clear_all(&mut self) {
        self.history.clear();
        self.notify(SceneEvent::DrawingChanged);
    }

    /// Committed actions rendered at `scale`, encoded as PNG. Neither the
    /// live action nor the cursor preview is included.
    pub fn export_image(&self, scale: f32) -> Result<Vec<u8>> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(SketchError::InvalidConfig(format!(
                "export scale must be positive, got {scale}"
            )));
        }
        renderer::export_png(
            self.history.committed(),
            (self.width, self.height),
            self.background,
            scale,
        )
    }

    pub fn history(&self) -> &SceneHistory {
        &self.history
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn interaction(&self) -> &Interaction {
        self.controller.state()
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn background(&self) -> Color32 {
        self.background
    }
}
