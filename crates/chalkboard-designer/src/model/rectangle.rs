//! Box-framed shapes: rectangle, square, rhombus and trapezium.

use super::{normalized_box, scaled_size, uniform_factor, BoardShape, Polyline};
use chalkboard_core::constants::TRAPEZIUM_INSET_RATIO;
use chalkboard_core::{CanvasBounds, Point};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl BoardShape for Rectangle {
    fn anchor(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn set_anchor(&mut self, anchor: Point) {
        self.x = anchor.x;
        self.y = anchor.y;
    }

    fn outline(&self) -> Vec<Polyline> {
        vec![Polyline::closed(corners(self.x, self.y, self.width, self.height))]
    }

    fn update(&mut self, press: Point, current: Point, canvas: &CanvasBounds) {
        let (x, y, width, height) = normalized_box(press, current, canvas);
        *self = Self::new(x, y, width, height);
    }

    fn resize(&mut self, scale_x: f64, scale_y: f64) {
        self.width = scaled_size(self.width, scale_x);
        self.height = scaled_size(self.height, scale_y);
    }
}

/// Square with a top-left anchor.
///
/// Dragging uses the larger of the two pointer deltas, limited by the room
/// left between the press point and the canvas edges in the drag direction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Square {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl Square {
    pub fn new(x: f64, y: f64, size: f64) -> Self {
        Self { x, y, size }
    }
}

impl BoardShape for Square {
    fn anchor(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn set_anchor(&mut self, anchor: Point) {
        self.x = anchor.x;
        self.y = anchor.y;
    }

    fn outline(&self) -> Vec<Polyline> {
        vec![Polyline::closed(corners(self.x, self.y, self.size, self.size))]
    }

    fn update(&mut self, press: Point, current: Point, canvas: &CanvasBounds) {
        let p = canvas.clamp(press);
        let c = canvas.clamp(current);
        let dx = c.x - p.x;
        let dy = c.y - p.y;
        let room_x = if dx >= 0.0 { canvas.width - p.x } else { p.x };
        let room_y = if dy >= 0.0 { canvas.height - p.y } else { p.y };
        let size = dx.abs().max(dy.abs()).min(room_x).min(room_y).max(0.0);

        self.x = if dx >= 0.0 { p.x } else { p.x - size };
        self.y = if dy >= 0.0 { p.y } else { p.y - size };
        self.size = size;
    }

    fn resize(&mut self, scale_x: f64, scale_y: f64) {
        self.size = scaled_size(self.size, uniform_factor(scale_x, scale_y));
    }
}

/// Rhombus inscribed in its top-left anchored frame (edge midpoints).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rhombus {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rhombus {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl BoardShape for Rhombus {
    fn anchor(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn set_anchor(&mut self, anchor: Point) {
        self.x = anchor.x;
        self.y = anchor.y;
    }

    fn outline(&self) -> Vec<Polyline> {
        let (x, y, w, h) = (self.x, self.y, self.width, self.height);
        vec![Polyline::closed(vec![
            Point::new(x + w / 2.0, y),
            Point::new(x + w, y + h / 2.0),
            Point::new(x + w / 2.0, y + h),
            Point::new(x, y + h / 2.0),
        ])]
    }

    fn update(&mut self, press: Point, current: Point, canvas: &CanvasBounds) {
        let (x, y, width, height) = normalized_box(press, current, canvas);
        *self = Self::new(x, y, width, height);
    }

    fn resize(&mut self, scale_x: f64, scale_y: f64) {
        self.width = scaled_size(self.width, scale_x);
        self.height = scaled_size(self.height, scale_y);
    }
}

/// Trapezium whose top edge is inset from both sides of its frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trapezium {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Trapezium {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl BoardShape for Trapezium {
    fn anchor(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn set_anchor(&mut self, anchor: Point) {
        self.x = anchor.x;
        self.y = anchor.y;
    }

    fn outline(&self) -> Vec<Polyline> {
        let (x, y, w, h) = (self.x, self.y, self.width, self.height);
        let inset = w * TRAPEZIUM_INSET_RATIO;
        vec![Polyline::closed(vec![
            Point::new(x + inset, y),
            Point::new(x + w - inset, y),
            Point::new(x + w, y + h),
            Point::new(x, y + h),
        ])]
    }

    fn update(&mut self, press: Point, current: Point, canvas: &CanvasBounds) {
        let (x, y, width, height) = normalized_box(press, current, canvas);
        *self = Self::new(x, y, width, height);
    }

    fn resize(&mut self, scale_x: f64, scale_y: f64) {
        self.width = scaled_size(self.width, scale_x);
        self.height = scaled_size(self.height, scale_y);
    }
}

pub(crate) fn corners(x: f64, y: f64, width: f64, height: f64) -> Vec<Point> {
    vec![
        Point::new(x, y),
        Point::new(x + width, y),
        Point::new(x + width, y + height),
        Point::new(x, y + height),
    ]
}
