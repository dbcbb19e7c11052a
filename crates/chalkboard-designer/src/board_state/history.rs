//! Undo/redo operations for board state.

use super::BoardState;
use crate::tool::ToolState;

impl BoardState {
    /// Steps back one snapshot. Returns false when there is nothing to undo.
    ///
    /// An open gesture is abandoned; its uncommitted preview is discarded
    /// with the live scene.
    pub fn undo(&mut self) -> bool {
        let Some(scene) = self.history.undo().cloned() else {
            return false;
        };
        self.scene = scene;
        self.state = ToolState::Idle;
        self.transform.set_active(false);
        self.reconcile_selection();
        tracing::debug!(
            "Undo: history {}/{}",
            self.history.cursor() + 1,
            self.history.len()
        );
        true
    }

    /// Steps forward one snapshot. Returns false at the top of the stack.
    pub fn redo(&mut self) -> bool {
        let Some(scene) = self.history.redo().cloned() else {
            return false;
        };
        self.scene = scene;
        self.state = ToolState::Idle;
        self.transform.set_active(false);
        self.reconcile_selection();
        tracing::debug!(
            "Redo: history {}/{}",
            self.history.cursor() + 1,
            self.history.len()
        );
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Empties the board and resets history. This cannot be undone.
    pub fn clear(&mut self) {
        self.state = ToolState::Idle;
        self.transform.clear();
        self.scene = crate::scene::Scene::new();
        self.history.clear();
        tracing::debug!("Board cleared");
    }
}
