//! Snapshot-based undo/redo history.
//!
//! The stack always holds at least the empty initial scene. Committing after
//! an undo discards the redo branch. The stack is capped; when full, the
//! oldest snapshot is dropped and the cursor shifts with it.

use crate::scene::Scene;
use chalkboard_core::constants::DEFAULT_HISTORY_DEPTH;

#[derive(Debug, Clone)]
pub struct History {
    stack: Vec<Scene>,
    cursor: usize,
    max_depth: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_HISTORY_DEPTH)
    }

    /// A history keeping at most `max_depth` snapshots (at least 1).
    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            stack: vec![Scene::new()],
            cursor: 0,
            max_depth: max_depth.max(1),
        }
    }

    /// Records `scene` as the new current snapshot.
    pub fn push(&mut self, scene: Scene) {
        self.stack.truncate(self.cursor + 1);
        self.stack.push(scene);
        if self.stack.len() > self.max_depth {
            let overflow = self.stack.len() - self.max_depth;
            self.stack.drain(..overflow);
        }
        self.cursor = self.stack.len() - 1;
    }

    pub fn undo(&mut self) -> Option<&Scene> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        Some(&self.stack[self.cursor])
    }

    pub fn redo(&mut self) -> Option<&Scene> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        Some(&self.stack[self.cursor])
    }

    /// Resets to a single empty snapshot.
    pub fn clear(&mut self) {
        self.stack.clear();
        self.stack.push(Scene::new());
        self.cursor = 0;
    }

    pub fn current(&self) -> &Scene {
        &self.stack[self.cursor]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.stack.len()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}
