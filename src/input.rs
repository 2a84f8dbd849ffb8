use egui::{Context, Pos2, Rect};

/// Pointer input in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Enter(Pos2),
    Leave(Pos2),
    Move(Pos2),
    Down(Pos2),
    Up(Pos2),
}

impl PointerEvent {
    pub fn position(&self) -> Pos2 {
        match *self {
            PointerEvent::Enter(p)
            | PointerEvent::Leave(p)
            | PointerEvent::Move(p)
            | PointerEvent::Down(p)
            | PointerEvent::Up(p) => p,
        }
    }
}

/// Raw pointer state for one frame, as read from egui.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerSample {
    pub hover_pos: Option<Pos2>,
    pub primary_pressed: bool,
    pub primary_released: bool,
}

impl PointerSample {
    pub fn from_egui(ctx: &Context) -> Self {
        ctx.input(|input| Self {
            hover_pos: input.pointer.hover_pos(),
            primary_pressed: input.pointer.primary_pressed(),
            primary_released: input.pointer.primary_released(),
        })
    }
}

/// Turns per-frame egui pointer state into enter/leave/move/down/up events
/// for one canvas.
#[derive(Debug, Clone)]
pub struct InputHandler {
    canvas_rect: Rect,
    /// Last pointer position inside the canvas, in screen coordinates.
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            last_pointer_pos: None,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn to_canvas(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    pub fn process_input(&mut self, ctx: &Context) -> Vec<PointerEvent> {
        self.process_sample(PointerSample::from_egui(ctx))
    }

    pub fn process_sample(&mut self, sample: PointerSample) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let inside = sample.hover_pos.filter(|p| self.canvas_rect.contains(*p));

        match (self.last_pointer_pos, inside) {
            (None, Some(pos)) => events.push(PointerEvent::Enter(self.to_canvas(pos))),
            (Some(last), None) => {
                let pos = sample.hover_pos.unwrap_or(last);
                events.push(PointerEvent::Leave(self.to_canvas(pos)));
            }
            (Some(last), Some(pos)) if last != pos => {
                events.push(PointerEvent::Move(self.to_canvas(pos)));
            }
            _ => {}
        }

        if sample.primary_pressed {
            if let Some(pos) = inside {
                events.push(PointerEvent::Down(self.to_canvas(pos)));
            }
        }
        // Releasing anywhere ends the gesture.
        if sample.primary_released {
            if let Some(pos) = sample.hover_pos.or(self.last_pointer_pos) {
                events.push(PointerEvent::Up(self.to_canvas(pos)));
            }
        }

        self.last_pointer_pos = inside;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> InputHandler {
        InputHandler::new(Rect::from_min_size(Pos2::new(100.0, 50.0), egui::vec2(256.0, 256.0)))
    }

    fn hover(x: f32, y: f32) -> PointerSample {
        PointerSample {
            hover_pos: Some(Pos2::new(x, y)),
            ..Default::default()
        }
    }

    #[test]
    fn test_enter_move_leave_sequence() {
        let mut input = handler();
        assert_eq!(
            input.process_sample(hover(110.0, 60.0)),
            vec![PointerEvent::Enter(Pos2::new(10.0, 10.0))]
        );
        assert!(input.process_sample(hover(110.0, 60.0)).is_empty());
        assert_eq!(
            input.process_sample(hover(120.0, 70.0)),
            vec![PointerEvent::Move(Pos2::new(20.0, 20.0))]
        );
        assert_eq!(
            input.process_sample(hover(10.0, 10.0)),
            vec![PointerEvent::Leave(Pos2::new(-90.0, -40.0))]
        );
    }

    #[test]
    fn test_press_outside_canvas_ignored() {
        let mut input = handler();
        let sample = PointerSample {
            hover_pos: Some(Pos2::new(0.0, 0.0)),
            primary_pressed: true,
            ..Default::default()
        };
        assert!(input.process_sample(sample).is_empty());
    }

    #[test]
    fn test_release_outside_canvas_still_reported() {
        let mut input = handler();
        input.process_sample(PointerSample {
            primary_pressed: true,
            ..hover(110.0, 60.0)
        });
        let events = input.process_sample(PointerSample {
            primary_released: true,
            ..hover(500.0, 500.0)
        });
        assert_eq!(
            events,
            vec![
                PointerEvent::Leave(Pos2::new(400.0, 450.0)),
                PointerEvent::Up(Pos2::new(400.0, 450.0)),
            ]
        );
    }
}
