use std::collections::VecDeque;

use crate::action::Action;

/// Committed actions plus the redo buffer.
#[derive(Debug, Clone, Default)]
pub struct SceneHistory {
    /// Chronological; later actions draw over earlier ones.
    committed: Vec<Action>,
    /// Most recently undone first.
    pending_redo: VecDeque<Action>,
}

impl SceneHistory {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished action. Any pending redo is lost.
    pub fn commit(&mut self, action: Action) {
        self.committed.push(action);
        self.pending_redo.clear();
    }

    /// Move the newest committed action to the front of the redo buffer.
    /// Returns false when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(action) => {
                self.pending_redo.push_front(action);
                true
            }
            None => false,
        }
    }

    /// Move the front of the redo buffer back onto the committed list.
    /// Returns false when there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.pending_redo.pop_front() {
            Some(action) => {
                self.committed.push(action);
                true
            }
            None => false,
        }
    }

    /// Empty the committed list. The redo buffer is left alone, so a redo
    /// right after a clear brings back the most recently undone action.
    pub fn clear(&mut self) {
        self.committed.clear();
    }

    pub fn committed(&self) -> &[Action] {
        &self.committed
    }

    pub fn pending_redo(&self) -> &VecDeque<Action> {
        &self.pending_redo
    }

    /// Returns true if there are actions that can be undone
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Returns true if there are actions that can be redone
    pub fn can_redo(&self) -> bool {
        !self.pending_redo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Stamp, Stroke};
    use egui::{Color32, Pos2};

    fn stroke(x: f32) -> Action {
        let mut action = Action::Stroke(Stroke::new(Pos2::new(x, x), 2.0, Color32::BLACK));
        action.relocate(x + 1.0, x + 1.0);
        action
    }

    #[test]
    fn test_undo_redo_on_empty_is_noop() {
        let mut history = SceneHistory::new();
        assert!(!history.undo());
        assert!(!history.redo());
        assert!(history.committed().is_empty());
        assert!(history.pending_redo().is_empty());
    }

    #[test]
    fn test_undo_orders_redo_most_recent_first() {
        let mut history = SceneHistory::new();
        for i in 0..5 {
            history.commit(stroke(i as f32));
        }
        for _ in 0..3 {
            assert!(history.undo());
        }
        assert_eq!(history.committed().len(), 2);
        assert_eq!(history.pending_redo().len(), 3);
        let redo: Vec<_> = history.pending_redo().iter().cloned().collect();
        assert_eq!(redo, vec![stroke(2.0), stroke(3.0), stroke(4.0)]);
    }

    #[test]
    fn test_commit_after_undo_drops_redo() {
        let mut history = SceneHistory::new();
        history.commit(stroke(0.0));
        history.commit(Action::Stamp(Stamp::new("🐣", Pos2::new(5.0, 5.0), 0.0)));
        history.undo();
        history.commit(stroke(9.0));
        assert!(!history.can_redo());
        assert_eq!(history.committed(), &[stroke(0.0), stroke(9.0)]);
    }

    #[test]
    fn test_clear_keeps_redo_buffer() {
        let mut history = SceneHistory::new();
        history.commit(stroke(0.0));
        history.commit(stroke(1.0));
        history.undo();
        history.clear();

        assert!(history.committed().is_empty());
        assert!(!history.undo());
        assert!(history.redo());
        assert_eq!(history.committed(), &[stroke(1.0)]);
    }
}
