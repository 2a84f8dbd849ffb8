use crate::action::Action;
use crate::tools::CursorPreview;

/// Why the scene needs repainting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    /// The committed history or the live action changed.
    DrawingChanged,
    /// Only the cursor preview moved or changed.
    ToolMoved,
}

/// Read-only snapshot handed to observers with each notification.
#[derive(Debug, Clone, Copy)]
pub struct SceneView<'a> {
    pub committed: &'a [Action],
    /// The action of the gesture in progress, not yet committed.
    pub live: Option<&'a Action>,
    pub cursor: Option<&'a CursorPreview>,
}

impl<'a> SceneView<'a> {
    pub fn committed_only(committed: &'a [Action]) -> Self {
        Self {
            committed,
            live: None,
            cursor: None,
        }
    }
}
