use egui::Pos2;

use crate::action::Action;
use crate::event::SceneEvent;
use crate::tools::{CursorPreview, ToolState};

/// Pointer interaction state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Interaction {
    /// Pointer away from the surface, no gesture.
    #[default]
    Idle,
    /// Pointer over the surface with no button held.
    Hovering { position: Pos2 },
    /// Button held; `action` is the live, uncommitted action.
    Dragging {
        position: Pos2,
        action: Action,
        /// False after the pointer left mid-gesture. The gesture stays live
        /// until release.
        over_surface: bool,
    },
}

impl Interaction {
    pub fn name(&self) -> &'static str {
        match self {
            Interaction::Idle => "Idle",
            Interaction::Hovering { .. } => "Hovering",
            Interaction::Dragging { .. } => "Dragging",
        }
    }
}

/// Drives action creation, live extension and the cursor preview from
/// pointer events. Each handler reports which notification, if any, the
/// scene should raise.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    state: Interaction,
    cursor: Option<CursorPreview>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &Interaction {
        &self.state
    }

    pub fn cursor(&self) -> Option<&CursorPreview> {
        self.cursor.as_ref()
    }

    /// The action of the gesture in progress.
    pub fn live_action(&self) -> Option<&Action> {
        match &self.state {
            Interaction::Dragging { action, .. } => Some(action),
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, Interaction::Dragging { .. })
    }

    pub fn pointer_enter(&mut self, tools: &ToolState, at: Pos2) -> Option<SceneEvent> {
        match &mut self.state {
            Interaction::Dragging {
                position,
                over_surface,
                ..
            } => {
                *position = at;
                *over_surface = true;
            }
            state => *state = Interaction::Hovering { position: at },
        }
        self.cursor = Some(CursorPreview::new(tools, at));
        log::trace!("Pointer entered at {at:?} ({})", self.state.name());
        Some(SceneEvent::ToolMoved)
    }

    pub fn pointer_leave(&mut self) -> Option<SceneEvent> {
        match self.state {
            Interaction::Idle => return None,
            Interaction::Hovering { .. } => self.state = Interaction::Idle,
            Interaction::Dragging {
                ref mut over_surface,
                ..
            } => *over_surface = false,
        }
        self.cursor = None;
        log::trace!("Pointer left ({})", self.state.name());
        Some(SceneEvent::ToolMoved)
    }

    pub fn pointer_down(&mut self, tools: &ToolState, at: Pos2) -> Option<SceneEvent> {
        if self.is_dragging() {
            log::debug!("Ignoring press during an active gesture");
            return None;
        }
        let action = Action::begin(tools, at);
        log::debug!("Gesture started: {} at {at:?}", action.kind_name());
        self.state = Interaction::Dragging {
            position: at,
            action,
            over_surface: true,
        };
        self.cursor = Some(CursorPreview::new(tools, at));
        Some(SceneEvent::DrawingChanged)
    }

    pub fn pointer_move(&mut self, tools: &ToolState, at: Pos2) -> Option<SceneEvent> {
        match self.state {
            // Moving onto the surface without an enter counts as one.
            Interaction::Idle => self.pointer_enter(tools, at),
            Interaction::Hovering { ref mut position } => {
                *position = at;
                self.cursor = Some(CursorPreview::new(tools, at));
                Some(SceneEvent::ToolMoved)
            }
            Interaction::Dragging {
                ref mut position,
                ref mut action,
                over_surface,
            } => {
                *position = at;
                action.relocate(at.x, at.y);
                if over_surface {
                    self.cursor = Some(CursorPreview::new(tools, at));
                }
                Some(SceneEvent::DrawingChanged)
            }
        }
    }

    /// End the gesture. Returns the finished action, ready to commit.
    pub fn pointer_up(&mut self, at: Pos2) -> Option<Action> {
        // A stray release changes nothing.
        if !self.is_dragging() {
            return None;
        }
        let Interaction::Dragging {
            action,
            over_surface,
            ..
        } = std::mem::take(&mut self.state)
        else {
            return None;
        };
        if over_surface {
            self.state = Interaction::Hovering { position: at };
        } else {
            self.cursor = None;
        }
        log::debug!("Gesture finished: {} ({})", action.kind_name(), self.state.name());
        Some(action)
    }

    /// Rebuild the cursor preview from the current tool state.
    pub fn refresh_cursor(&mut self, tools: &ToolState) -> Option<SceneEvent> {
        if let Some(cursor) = &mut self.cursor {
            *cursor = CursorPreview::new(tools, cursor.position());
        }
        Some(SceneEvent::ToolMoved)
    }
}
