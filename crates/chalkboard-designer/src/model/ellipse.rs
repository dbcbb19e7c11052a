//! Center-anchored round shapes.

use super::{sample_arc, scaled_size, uniform_factor, BoardShape, Polyline};
use chalkboard_core::{CanvasBounds, Point};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ellipse {
    pub center: Point,
    pub radius_x: f64,
    pub radius_y: f64,
}

impl Ellipse {
    pub fn new(center: Point, radius_x: f64, radius_y: f64) -> Self {
        Self {
            center,
            radius_x,
            radius_y,
        }
    }
}

impl BoardShape for Ellipse {
    fn anchor(&self) -> Point {
        self.center
    }

    fn set_anchor(&mut self, anchor: Point) {
        self.center = anchor;
    }

    fn outline(&self) -> Vec<Polyline> {
        vec![Polyline::closed(sample_arc(
            self.center,
            self.radius_x,
            self.radius_y,
            0.0,
            360.0,
        ))]
    }

    /// Each radius is limited independently by the horizontal and vertical
    /// distance from the center to the canvas edges.
    fn update(&mut self, press: Point, current: Point, canvas: &CanvasBounds) {
        let p = canvas.clamp(press);
        let c = canvas.clamp(current);
        self.center = p;
        self.radius_x = (c.x - p.x).abs().min(p.x).min(canvas.width - p.x);
        self.radius_y = (c.y - p.y).abs().min(p.y).min(canvas.height - p.y);
    }

    fn resize(&mut self, scale_x: f64, scale_y: f64) {
        self.radius_x = scaled_size(self.radius_x, scale_x);
        self.radius_y = scaled_size(self.radius_y, scale_y);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl BoardShape for Circle {
    fn anchor(&self) -> Point {
        self.center
    }

    fn set_anchor(&mut self, anchor: Point) {
        self.center = anchor;
    }

    fn outline(&self) -> Vec<Polyline> {
        vec![Polyline::closed(sample_arc(
            self.center,
            self.radius,
            self.radius,
            0.0,
            360.0,
        ))]
    }

    fn update(&mut self, press: Point, current: Point, canvas: &CanvasBounds) {
        let p = canvas.clamp(press);
        let c = canvas.clamp(current);
        self.center = p;
        self.radius = p.distance_to(&c).min(canvas.edge_distance(p));
    }

    fn resize(&mut self, scale_x: f64, scale_y: f64) {
        self.radius = scaled_size(self.radius, uniform_factor(scale_x, scale_y));
    }
}
