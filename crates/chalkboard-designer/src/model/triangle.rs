use super::{scaled_size, BoardShape, Polyline};
use chalkboard_core::{CanvasBounds, Point};
use serde::Serialize;

/// Isosceles triangle anchored at its apex.
///
/// The base sits `height` below the apex, or above it when `inverted`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Triangle {
    pub apex: Point,
    pub width: f64,
    pub height: f64,
    pub inverted: bool,
}

impl Triangle {
    pub fn new(apex: Point, width: f64, height: f64) -> Self {
        Self {
            apex,
            width,
            height,
            inverted: false,
        }
    }
}

impl BoardShape for Triangle {
    fn anchor(&self) -> Point {
        self.apex
    }

    fn set_anchor(&mut self, anchor: Point) {
        self.apex = anchor;
    }

    fn outline(&self) -> Vec<Polyline> {
        let half = self.width / 2.0;
        let base_y = if self.inverted {
            self.apex.y - self.height
        } else {
            self.apex.y + self.height
        };
        vec![Polyline::closed(vec![
            self.apex,
            Point::new(self.apex.x + half, base_y),
            Point::new(self.apex.x - half, base_y),
        ])]
    }

    fn update(&mut self, press: Point, current: Point, canvas: &CanvasBounds) {
        let p = canvas.clamp(press);
        let c = canvas.clamp(current);
        let dy = c.y - p.y;
        let half = (c.x - p.x).abs().min(p.x).min(canvas.width - p.x);

        self.apex = p;
        self.width = 2.0 * half;
        self.inverted = dy < 0.0;
        self.height = if self.inverted {
            (-dy).min(p.y)
        } else {
            dy.min(canvas.height - p.y)
        };
    }

    fn resize(&mut self, scale_x: f64, scale_y: f64) {
        self.width = scaled_size(self.width, scale_x);
        self.height = scaled_size(self.height, scale_y);
    }
}
