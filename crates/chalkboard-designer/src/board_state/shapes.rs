//! Image import and deletion.

use super::BoardState;
use crate::model::{Geometry, ImageShape, Placement, RasterImage, Shape, ShapeId};
use crate::tool::ToolState;
use chalkboard_core::constants::MIN_SHAPE_SIZE;

impl BoardState {
    /// Places an image on top of the board and commits.
    ///
    /// The placement is floored at the minimum size, shrunk to fit the
    /// canvas and moved inside it. Returns the new id, or `None` when the
    /// placement is not finite.
    pub fn import_image(&mut self, image: RasterImage, placement: Placement) -> Option<ShapeId> {
        if !placement.is_finite() {
            tracing::warn!("Ignoring image import with non-finite placement {:?}", placement);
            return None;
        }
        self.finish_gesture();

        let width = placement
            .width
            .abs()
            .max(MIN_SHAPE_SIZE)
            .min(self.canvas.width.max(MIN_SHAPE_SIZE));
        let height = placement
            .height
            .abs()
            .max(MIN_SHAPE_SIZE)
            .min(self.canvas.height.max(MIN_SHAPE_SIZE));
        let x = placement.x.clamp(0.0, (self.canvas.width - width).max(0.0));
        let y = placement.y.clamp(0.0, (self.canvas.height - height).max(0.0));

        let id = self.allocate_id();
        let shape = Shape::from_geometry(
            id,
            Geometry::Image(ImageShape::new(image, x, y, width, height)),
            self.stroke,
        );
        self.scene = self.scene.with_pushed(shape);
        self.commit("import image");
        Some(id)
    }

    /// Removes the selected shape and commits. No-op without a selection.
    pub fn delete_selected(&mut self) {
        let Some(id) = self.transform.selection() else {
            return;
        };
        if matches!(self.state, ToolState::Selecting { .. } | ToolState::Transforming { .. }) {
            self.state = ToolState::Idle;
        }
        self.transform.clear();
        if let Some(next) = self.scene.without(id) {
            self.scene = next;
            tracing::debug!("Deleted {}", id);
            self.commit("delete");
        }
    }
}
