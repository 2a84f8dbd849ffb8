use egui::{Color32, Painter, Rect};

use crate::action::Action;
use crate::error::Result;
use crate::event::{SceneEvent, SceneObserver, SceneView};
use crate::surface::{DisplayList, PainterSurface, RasterSurface, RenderSurface};

/// Full-scene redraw: clear, every committed action in order, the live
/// action, then the cursor preview for [`SceneEvent::ToolMoved`] only.
pub fn render_scene(
    surface: &mut dyn RenderSurface,
    background: Color32,
    view: &SceneView<'_>,
    event: SceneEvent,
) {
    surface.clear(background);
    for action in view.committed {
        action.render(surface);
    }
    if let Some(live) = view.live {
        live.render(surface);
    }
    if event == SceneEvent::ToolMoved {
        if let Some(cursor) = view.cursor {
            cursor.render(surface);
        }
    }
}

/// Replay committed actions inside a scaled region. No live action and no
/// cursor preview.
pub fn replay_scaled(
    surface: &mut dyn RenderSurface,
    committed: &[Action],
    background: Color32,
    scale: f32,
) {
    surface.clear(background);
    surface.begin_scaled_region(scale);
    for action in committed {
        action.render(surface);
    }
    surface.end_scaled_region();
}

/// Pixel dimensions of a `width`×`height` canvas exported at `scale`.
pub fn scaled_size(width: u32, height: u32, scale: f32) -> (u32, u32) {
    let scale_dim = |d: u32| (d as f32 * scale).round().max(0.0) as u32;
    (scale_dim(width), scale_dim(height))
}

/// Render `committed` offscreen at `scale` and encode it as PNG.
pub fn export_png(
    committed: &[Action],
    (width, height): (u32, u32),
    background: Color32,
    scale: f32,
) -> Result<Vec<u8>> {
    let (out_w, out_h) = scaled_size(width, height, scale);
    let mut surface = RasterSurface::new(out_w, out_h)?;
    replay_scaled(&mut surface, committed, background, scale);
    let bytes = surface.encode_png()?;
    log::info!(
        "Exported {} actions at {scale}x ({out_w}x{out_h}, {} bytes)",
        committed.len(),
        bytes.len()
    );
    Ok(bytes)
}

/// Observer that rebuilds a cached display list on every notification.
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
    display_list: DisplayList,
    redraws: u64,
    last_event: Option<SceneEvent>,
}

impl Renderer {
    pub fn new(background: Color32) -> Self {
        Self {
            background,
            display_list: DisplayList::new(),
            redraws: 0,
            last_event: None,
        }
    }

    pub fn display_list(&self) -> &DisplayList {
        &self.display_list
    }

    /// How many times the scene has been redrawn.
    pub fn redraws(&self) -> u64 {
        self.redraws
    }

    pub fn last_event(&self) -> Option<SceneEvent> {
        self.last_event
    }

    /// Paint the cached frame into `canvas`.
    pub fn paint(&self, painter: &Painter, canvas: Rect) {
        let mut surface = PainterSurface::new(painter, canvas);
        self.display_list.replay(&mut surface);
    }
}

impl SceneObserver for Renderer {
    fn scene_changed(&mut self, event: SceneEvent, view: &SceneView<'_>) {
        self.display_list.reset();
        render_scene(&mut self.display_list, self.background, view, event);
        self.redraws += 1;
        self.last_event = Some(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Stamp, Stroke};
    use crate::surface::DrawCommand;
    use crate::tools::CursorPreview;
    use egui::Pos2;

    fn line() -> Action {
        Action::Stroke(
            Stroke::from_points(vec![Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0)], 2.0, Color32::RED)
                .unwrap(),
        )
    }

    #[test]
    fn test_cursor_only_on_tool_moved() {
        let committed = vec![line()];
        let cursor = CursorPreview::Stamp {
            position: Pos2::new(9.0, 9.0),
            symbol: "🐣".into(),
            rotation: 0.0,
        };
        let view = SceneView {
            committed: &committed,
            live: None,
            cursor: Some(&cursor),
        };

        let mut drawing = DisplayList::new();
        render_scene(&mut drawing, Color32::WHITE, &view, SceneEvent::DrawingChanged);
        assert_eq!(drawing.glyph_count(), 0);

        let mut moved = DisplayList::new();
        render_scene(&mut moved, Color32::WHITE, &view, SceneEvent::ToolMoved);
        assert_eq!(moved.glyph_count(), 1);
        assert_eq!(moved.commands()[0], DrawCommand::Clear(Color32::WHITE));
    }

    #[test]
    fn test_live_action_drawn_after_committed() {
        let committed = vec![line()];
        let live = Action::Stamp(Stamp::new("🌮", Pos2::new(4.0, 4.0), 1.0));
        let view = SceneView {
            committed: &committed,
            live: Some(&live),
            cursor: None,
        };
        let mut list = DisplayList::new();
        render_scene(&mut list, Color32::WHITE, &view, SceneEvent::DrawingChanged);
        assert!(matches!(list.commands()[1], DrawCommand::Path { .. }));
        assert!(matches!(list.commands()[2], DrawCommand::Glyph { .. }));
    }

    #[test]
    fn test_renderer_rebuilds_instead_of_appending() {
        let committed = vec![line()];
        let mut renderer = Renderer::new(Color32::WHITE);
        let view = SceneView::committed_only(&committed);
        renderer.scene_changed(SceneEvent::DrawingChanged, &view);
        renderer.scene_changed(SceneEvent::DrawingChanged, &view);
        assert_eq!(renderer.display_list().len(), 2);
        assert_eq!(renderer.redraws(), 2);
        assert_eq!(renderer.last_event(), Some(SceneEvent::DrawingChanged));
    }

    #[test]
    fn test_scaled_size_rounds() {
        assert_eq!(scaled_size(256, 256, 4.0), (1024, 1024));
        assert_eq!(scaled_size(3, 5, 1.5), (5, 8));
    }
}
