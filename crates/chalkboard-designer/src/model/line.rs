//! Straight lines, arrows and dashed lines.

use super::{BoardShape, Polyline};
use chalkboard_core::{CanvasBounds, Point};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Plain,
    /// Arrow head at the last point, added at render time.
    Arrow,
    Dashed,
}

/// A line stored as points local to `origin`, the press point.
///
/// The drag anchor is the origin reference `(0, 0)`: dragging to `d` shifts
/// every local point by `d`, and the frame origin never moves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub origin: Point,
    pub points: Vec<Point>,
    pub style: LineStyle,
}

impl Line {
    pub fn new(origin: Point, style: LineStyle) -> Self {
        Self {
            origin,
            points: vec![Point::ORIGIN, Point::ORIGIN],
            style,
        }
    }

    /// Points in canvas coordinates.
    pub fn absolute_points(&self) -> Vec<Point> {
        self.points.iter().map(|p| self.origin + *p).collect()
    }
}

impl BoardShape for Line {
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
        self.absolute_points()
            .first()
            .copied()
            .unwrap_or(self.origin)
    }

    fn outline(&self) -> Vec<Polyline> {
        vec![Polyline::open(self.absolute_points())]
    }

    fn update(&mut self, _press: Point, current: Point, canvas: &CanvasBounds) {
        let end = canvas.clamp(current) - self.origin;
        let start = self.points.first().copied().unwrap_or(Point::ORIGIN);
        self.points = vec![start, end];
    }

    /// Scales the local points about the first point.
    fn resize(&mut self, scale_x: f64, scale_y: f64) {
        let Some(first) = self.points.first().copied() else {
            return;
        };
        for p in &mut self.points {
            *p = Point::new(
                first.x + (p.x - first.x) * scale_x.abs(),
                first.y + (p.y - first.y) * scale_y.abs(),
            );
        }
    }
}
