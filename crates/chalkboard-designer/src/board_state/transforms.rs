//! Drag and transform-handle callbacks for the selected shape.

use super::BoardState;
use crate::model::{Shape, ShapeId};
use crate::tool::{Tool, ToolState};
use crate::transform;
use chalkboard_core::Point;

impl BoardState {
    /// Clamps a proposed drag anchor for `id` so its outline stays on the
    /// canvas. Unknown ids get `proposed` back unchanged.
    pub fn drag_bound(&self, id: ShapeId, proposed: Point) -> Point {
        match self.scene.get(id) {
            Some(shape) => transform::drag_bound(shape, proposed, &self.canvas),
            None => proposed,
        }
    }

    /// Finishes a drag of the selected shape at `new_pos`.
    ///
    /// For point-list kinds `new_pos` is the translation of the origin
    /// reference. No-op unless the handle is attached to `id`.
    pub fn on_drag_end(&mut self, id: ShapeId, new_pos: Point) {
        if !new_pos.is_finite() {
            tracing::warn!("Ignoring non-finite drag end for {}", id);
            return;
        }
        let Some(base) = self.drag_base(id) else {
            return;
        };
        let moved = transform::apply_drag(&base, new_pos, &self.canvas);
        if let Some(next) = self.scene.with_replaced(moved) {
            self.scene = next;
            self.state = ToolState::Idle;
            self.commit("drag");
        }
    }

    /// Marks the start of a resize/rotate through the handle attached to `id`.
    /// Returns false when the handle is not attached to `id`.
    pub fn begin_transform(&mut self, id: ShapeId) -> bool {
        if self.transformable(id).is_none() {
            return false;
        }
        self.finish_gesture();
        self.state = ToolState::Transforming { id };
        self.transform.set_active(true);
        true
    }

    /// Folds a finished handle transform into the shape and commits.
    ///
    /// `rotation` is the absolute rotation in degrees. No-op unless the
    /// handle is attached to `id`.
    pub fn on_transform_end(&mut self, id: ShapeId, scale_x: f64, scale_y: f64, rotation: f64) {
        if ![scale_x, scale_y, rotation].iter().all(|v| v.is_finite()) {
            tracing::warn!("Ignoring non-finite transform for {}", id);
            return;
        }
        let Some(shape) = self.transformable(id).cloned() else {
            return;
        };
        let transformed =
            transform::apply_transform(&shape, scale_x, scale_y, rotation, &self.canvas);
        if let Some(next) = self.scene.with_replaced(transformed) {
            self.scene = next;
            self.state = ToolState::Idle;
            self.transform.set_active(false);
            self.commit("transform");
        }
    }

    /// The selected shape, if the select tool is active and the handle is
    /// attached to `id`.
    fn transformable(&self, id: ShapeId) -> Option<&Shape> {
        if self.tool != Tool::Select || !self.transform.is_attached(id) {
            return None;
        }
        self.scene.get(id)
    }

    /// The record a drag of `id` starts from: the pre-preview original when a
    /// pointer drag of it is in flight, otherwise the current record.
    fn drag_base(&self, id: ShapeId) -> Option<Shape> {
        let current = self.transformable(id)?;
        match &self.state {
            ToolState::Selecting {
                id: sid, original, ..
            } if *sid == id => Some(original.as_ref().clone()),
            _ => Some(current.clone()),
        }
    }
}
