//! Selection and transform-handle bookkeeping, plus the pure geometry of
//! dragging and resizing a selected shape.

use crate::model::{Shape, ShapeId};
use chalkboard_core::{CanvasBounds, Point};
use serde::Serialize;

const FIT_PASSES: usize = 4;

/// The transform handle: which shape it is attached to and whether a
/// resize/rotate gesture is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransformHandle {
    pub target: ShapeId,
    pub active: bool,
}

/// Tracks the single selected shape and the handle attached to it.
///
/// The handle is attached exactly when a selection exists; clearing one
/// detaches the other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformController {
    handle: Option<TransformHandle>,
}

impl TransformController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Option<ShapeId> {
        self.handle.map(|h| h.target)
    }

    pub fn handle(&self) -> Option<TransformHandle> {
        self.handle
    }

    /// Selects `id` and attaches the handle to it.
    pub fn select(&mut self, id: ShapeId) {
        self.handle = Some(TransformHandle {
            target: id,
            active: false,
        });
    }

    /// Clears the selection and detaches the handle.
    pub fn clear(&mut self) {
        self.handle = None;
    }

    pub fn is_attached(&self, id: ShapeId) -> bool {
        self.selection() == Some(id)
    }

    pub fn set_active(&mut self, active: bool) {
        if let Some(handle) = self.handle.as_mut() {
            handle.active = active;
        }
    }
}

/// Clamps a proposed drag anchor so the shape's outline stays on the canvas.
///
/// The outline's extent around the current anchor is kept fixed; a shape
/// wider than the canvas is pinned to the left (or top) edge.
pub fn drag_bound(shape: &Shape, proposed: Point, canvas: &CanvasBounds) -> Point {
    let anchor = shape.drag_anchor();
    let bounds = shape.bounds();
    let bound_axis = |value: f64, before: f64, after: f64, limit: f64| {
        let low = before;
        let high = limit - after;
        if high < low {
            low
        } else {
            value.clamp(low, high)
        }
    };
    Point::new(
        bound_axis(
            proposed.x,
            anchor.x - bounds.min_x,
            bounds.max_x - anchor.x,
            canvas.width,
        ),
        bound_axis(
            proposed.y,
            anchor.y - bounds.min_y,
            bounds.max_y - anchor.y,
            canvas.height,
        ),
    )
}

/// Moves `shape` to the bounded `new_pos`.
///
/// Point-list kinds read `new_pos` as a translation from the origin
/// reference, and their drag anchor stays at the origin reference afterwards.
pub fn apply_drag(shape: &Shape, new_pos: Point, canvas: &CanvasBounds) -> Shape {
    shape.dragged_to(drag_bound(shape, new_pos, canvas))
}

/// Folds a handle transform into the record and re-bounds it on the canvas.
///
/// A scale that would make the rotated outline larger than the canvas is
/// reduced until it fits, before the anchor is bounded.
pub fn apply_transform(
    shape: &Shape,
    scale_x: f64,
    scale_y: f64,
    rotation: f64,
    canvas: &CanvasBounds,
) -> Shape {
    let mut factor = 1.0;
    let mut transformed = shape.resized(scale_x, scale_y).with_rotation(rotation);
    // size floors make shrinking slightly non-linear, so refit a few times
    for _ in 0..FIT_PASSES {
        let bounds = transformed.bounds();
        let fit = (canvas.width / bounds.width()).min(canvas.height / bounds.height());
        if fit.is_nan() || fit >= 1.0 {
            break;
        }
        factor *= fit;
        transformed = shape
            .resized(scale_x * factor, scale_y * factor)
            .with_rotation(rotation);
    }
    let anchor = transformed.drag_anchor();
    transformed.dragged_to(drag_bound(&transformed, anchor, canvas))
}
