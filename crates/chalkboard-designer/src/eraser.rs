//! Object eraser: removes whole shapes whose outline passes near the pointer.

use crate::model::ShapeId;
use crate::scene::Scene;
use chalkboard_core::constants::DEFAULT_ERASER_RADIUS;
use chalkboard_core::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Eraser {
    radius: f64,
}

impl Default for Eraser {
    fn default() -> Self {
        Self::new(DEFAULT_ERASER_RADIUS)
    }
}

impl Eraser {
    pub fn new(radius: f64) -> Self {
        Self {
            radius: radius.max(0.0),
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius.max(0.0);
    }

    /// Topmost shape whose outline lies within the radius of `p`.
    ///
    /// Only the boundary counts: a pointer deep inside a closed shape misses.
    pub fn hit_test(&self, scene: &Scene, p: Point) -> Option<ShapeId> {
        scene
            .iter_topmost()
            .find(|shape| shape.boundary_distance(p) <= self.radius)
            .map(|shape| shape.id)
    }

    /// Removes at most one shape. Returns the new scene and the removed id.
    pub fn erase_at(&self, scene: &Scene, p: Point) -> Option<(Scene, ShapeId)> {
        let id = self.hit_test(scene, p)?;
        scene.without(id).map(|next| (next, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Circle, Freehand, Geometry, Rectangle, Shape, StrokeStyle};

    fn shape(id: u64, geometry: Geometry) -> Shape {
        Shape::from_geometry(ShapeId(id), geometry, StrokeStyle::default())
    }

    #[test]
    fn test_interior_point_does_not_erase() {
        let scene: Scene = [shape(
            1,
            Geometry::Circle(Circle::new(Point::new(100.0, 100.0), 50.0)),
        )]
        .into_iter()
        .collect();
        let eraser = Eraser::new(5.0);
        assert!(eraser.erase_at(&scene, Point::new(100.0, 100.0)).is_none());
        let (after, id) = eraser.erase_at(&scene, Point::new(150.0, 100.0)).unwrap();
        assert_eq!(id, ShapeId(1));
        assert!(after.is_empty());
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_topmost_removed_first() {
        let scene: Scene = [
            shape(1, Geometry::Rectangle(Rectangle::new(0.0, 0.0, 50.0, 50.0))),
            shape(2, Geometry::Rectangle(Rectangle::new(0.0, 0.0, 50.0, 50.0))),
        ]
        .into_iter()
        .collect();
        let (after, id) = Eraser::new(2.0)
            .erase_at(&scene, Point::new(25.0, 0.0))
            .unwrap();
        assert_eq!(id, ShapeId(2));
        assert_eq!(after.len(), 1);
        assert!(after.contains(ShapeId(1)));
    }

    #[test]
    fn test_single_point_stroke_uses_point_distance() {
        let scene: Scene = [shape(
            1,
            Geometry::Freehand(Freehand::new(Point::new(40.0, 40.0))),
        )]
        .into_iter()
        .collect();
        let eraser = Eraser::new(3.0);
        assert!(eraser.hit_test(&scene, Point::new(45.0, 40.0)).is_none());
        assert_eq!(
            eraser.hit_test(&scene, Point::new(42.0, 41.0)),
            Some(ShapeId(1))
        );
    }
}
