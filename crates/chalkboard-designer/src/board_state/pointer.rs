//! Pointer events and the gesture state machine.

use super::BoardState;
use crate::model::{Shape, ShapeId};
use crate::tool::{Tool, ToolState};
use crate::transform;
use chalkboard_core::Point;

impl BoardState {
    /// Handles a pointer press in canvas coordinates.
    pub fn pointer_down(&mut self, pos: Point) {
        if !pos.is_finite() {
            tracing::warn!("Ignoring non-finite pointer_down at {:?}", pos);
            return;
        }
        self.finish_gesture();

        match self.tool {
            Tool::Select => self.begin_select(pos),
            Tool::Eraser => {
                self.state = ToolState::Erasing;
                self.erase_sample(pos);
            }
            tool => {
                let Some(kind) = tool.draw_kind() else {
                    return;
                };
                let press = self.canvas.clamp(pos);
                let id = self.allocate_id();
                let Some(shape) = Shape::create(id, kind, press, self.stroke) else {
                    return;
                };
                tracing::trace!("Drawing {} {} from {:?}", kind, id, press);
                self.scene = self.scene.with_pushed(shape);
                self.state = ToolState::Drawing { id, press };
            }
        }
    }

    /// Handles pointer motion. Only meaningful while a gesture is open.
    pub fn pointer_move(&mut self, pos: Point) {
        if !pos.is_finite() {
            tracing::warn!("Ignoring non-finite pointer_move at {:?}", pos);
            return;
        }
        if matches!(self.state, ToolState::Erasing) {
            self.erase_sample(pos);
            return;
        }

        match &mut self.state {
            ToolState::Drawing { id, press } => {
                let (id, press) = (*id, *press);
                let Some(last) = self.scene.last().filter(|s| s.id == id) else {
                    return;
                };
                let updated = last.updated(press, pos, &self.canvas);
                tracing::trace!("Live update of {} to {:?}", id, pos);
                self.scene = self.scene.with_last_replaced(updated);
            }
            ToolState::Selecting {
                id,
                grab,
                original,
                moved,
            } => {
                let delta = pos - *grab;
                let proposed = original.drag_anchor() + delta;
                let preview = transform::apply_drag(original, proposed, &self.canvas);
                let displaced = preview != **original;
                if let Some(next) = self.scene.with_replaced(preview) {
                    tracing::trace!("Drag preview of {} to {:?}", id, proposed);
                    self.scene = next;
                    *moved = displaced;
                }
            }
            ToolState::Idle | ToolState::Erasing | ToolState::Transforming { .. } => {}
        }
    }

    /// Handles a pointer release, closing the open gesture.
    pub fn pointer_up(&mut self) {
        if matches!(self.state, ToolState::Transforming { .. }) {
            return;
        }
        self.finish_gesture();
    }

    /// The pointer left the canvas; treated like a release.
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    /// Closes whatever gesture is open, committing its result if it changed
    /// the scene. Leaves the machine idle.
    pub(super) fn finish_gesture(&mut self) {
        match std::mem::take(&mut self.state) {
            ToolState::Idle | ToolState::Erasing => {}
            ToolState::Drawing { id, .. } => {
                if self.scene.contains(id) {
                    self.commit("draw");
                }
            }
            ToolState::Selecting { moved, .. } => {
                if moved {
                    self.commit("move");
                }
            }
            ToolState::Transforming { .. } => self.transform.set_active(false),
        }
    }

    fn begin_select(&mut self, pos: Point) {
        match self.pick(pos) {
            Some(id) => {
                let Some(original) = self.scene.get(id).cloned() else {
                    return;
                };
                tracing::debug!("Selected {}", id);
                self.transform.select(id);
                self.state = ToolState::Selecting {
                    id,
                    grab: pos,
                    original: Box::new(original),
                    moved: false,
                };
            }
            None => {
                if self.transform.selection().is_some() {
                    tracing::debug!("Selection cleared");
                }
                self.transform.clear();
            }
        }
    }

    /// Topmost shape whose outline is within the select tolerance of `pos`.
    fn pick(&self, pos: Point) -> Option<ShapeId> {
        self.scene
            .iter_topmost()
            .find(|shape| shape.boundary_distance(pos) <= self.select_tolerance)
            .map(|shape| shape.id)
    }

    fn erase_sample(&mut self, pos: Point) {
        if let Some((next, id)) = self.eraser.erase_at(&self.scene, pos) {
            self.scene = next;
            tracing::debug!("Erased {} at {:?}", id, pos);
            self.commit("erase");
            self.reconcile_selection();
        }
    }
}
