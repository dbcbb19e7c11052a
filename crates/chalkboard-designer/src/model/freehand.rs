use super::{BoardShape, Polyline};
use chalkboard_core::{CanvasBounds, Point};
use serde::Serialize;

/// A pen stroke: absolute canvas points in sampling order.
///
/// Like lines, the drag anchor is the origin reference and dragging
/// translates every point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Freehand {
    pub points: Vec<Point>,
}

impl Freehand {
    pub fn new(start: Point) -> Self {
        Self {
            points: vec![start],
        }
    }
}

impl BoardShape for Freehand {
    fn anchor(&self) -> Point {
        Point::ORIGIN
    }

    fn set_anchor(&mut self, anchor: Point) {
        let delta = anchor - Point::ORIGIN;
        for p in &mut self.points {
            *p = *p + delta;
        }
    }

    fn pivot(&self) -> Point {
        self.points.first().copied().unwrap_or(Point::ORIGIN)
    }

    fn outline(&self) -> Vec<Polyline> {
        vec![Polyline::open(self.points.clone())]
    }

    /// Appends the clamped pointer sample; repeats of the last sample are dropped.
    fn update(&mut self, _press: Point, current: Point, canvas: &CanvasBounds) {
        let sample = canvas.clamp(current);
        if self.points.last() != Some(&sample) {
            self.points.push(sample);
        }
    }

    fn resize(&mut self, scale_x: f64, scale_y: f64) {
        let first = self.pivot();
        for p in &mut self.points {
            *p = Point::new(
                first.x + (p.x - first.x) * scale_x.abs(),
                first.y + (p.y - first.y) * scale_y.abs(),
            );
        }
    }
}
