//! Pseudo-3D solids drawn as flat wireframes.
//!
//! Receding faces are approximated with an oblique offset (cube, pyramid)
//! or with ellipses squashed by `ELLIPSE_DEPTH_RATIO` (sphere, cylinder,
//! cone, hemisphere). Extents are clamped so that the whole wireframe,
//! not just the anchor, stays inside the canvas.

use super::rectangle::corners;
use super::{sample_arc, scaled_size, uniform_factor, BoardShape, Polyline};
use chalkboard_core::constants::ELLIPSE_DEPTH_RATIO;
use chalkboard_core::{CanvasBounds, Point};
use serde::Serialize;

fn edge(a: Point, b: Point) -> Polyline {
    Polyline::open(vec![a, b])
}

fn depth_ellipse(center: Point, radius: f64) -> Polyline {
    Polyline::closed(sample_arc(
        center,
        radius,
        radius * ELLIPSE_DEPTH_RATIO,
        0.0,
        360.0,
    ))
}

/// Cube anchored at the top-left of its front face. The back face is offset
/// by half the edge up and to the right.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cube {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl Cube {
    pub fn new(x: f64, y: f64, size: f64) -> Self {
        Self { x, y, size }
    }
}

impl BoardShape for Cube {
    fn anchor(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn set_anchor(&mut self, anchor: Point) {
        self.x = anchor.x;
        self.y = anchor.y;
    }

    fn outline(&self) -> Vec<Polyline> {
        let offset = self.size / 2.0;
        let front = corners(self.x, self.y, self.size, self.size);
        let back = corners(self.x + offset, self.y - offset, self.size, self.size);
        let mut runs: Vec<Polyline> = front
            .iter()
            .zip(back.iter())
            .map(|(f, b)| edge(*f, *b))
            .collect();
        runs.insert(0, Polyline::closed(back));
        runs.insert(0, Polyline::closed(front));
        runs
    }

    fn update(&mut self, press: Point, current: Point, canvas: &CanvasBounds) {
        let p = canvas.clamp(press);
        let c = canvas.clamp(current);
        self.x = p.x;
        self.y = p.y;
        self.size = (c.x - p.x)
            .abs()
            .max((c.y - p.y).abs())
            .min((canvas.width - p.x) / 1.5)
            .min(canvas.height - p.y)
            .min(2.0 * p.y);
    }

    fn resize(&mut self, scale_x: f64, scale_y: f64) {
        self.size = scaled_size(self.size, uniform_factor(scale_x, scale_y));
    }
}

/// Sphere: a circle with an equator ellipse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sphere {
    pub center: Point,
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl BoardShape for Sphere {
    fn anchor(&self) -> Point {
        self.center
    }

    fn set_anchor(&mut self, anchor: Point) {
        self.center = anchor;
    }

    fn outline(&self) -> Vec<Polyline> {
        vec![
            Polyline::closed(sample_arc(
                self.center,
                self.radius,
                self.radius,
                0.0,
                360.0,
            )),
            depth_ellipse(self.center, self.radius),
        ]
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

/// Upright cylinder centered on its anchor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cylinder {
    pub center: Point,
    pub radius: f64,
    pub height: f64,
}

impl Cylinder {
    pub fn new(center: Point, radius: f64, height: f64) -> Self {
        Self {
            center,
            radius,
            height,
        }
    }
}

impl BoardShape for Cylinder {
    fn anchor(&self) -> Point {
        self.center
    }

    fn set_anchor(&mut self, anchor: Point) {
        self.center = anchor;
    }

    fn outline(&self) -> Vec<Polyline> {
        let Point { x, y } = self.center;
        let (r, half) = (self.radius, self.height / 2.0);
        vec![
            depth_ellipse(Point::new(x, y - half), r),
            depth_ellipse(Point::new(x, y + half), r),
            edge(Point::new(x - r, y - half), Point::new(x - r, y + half)),
            edge(Point::new(x + r, y - half), Point::new(x + r, y + half)),
        ]
    }

    /// Radius follows the horizontal drag and height the vertical drag; the
    /// cap ellipses count toward the vertical room.
    fn update(&mut self, press: Point, current: Point, canvas: &CanvasBounds) {
        let p = canvas.clamp(press);
        let c = canvas.clamp(current);
        let vertical_room = p.y.min(canvas.height - p.y);
        let radius = (c.x - p.x)
            .abs()
            .min(p.x)
            .min(canvas.width - p.x)
            .min(vertical_room / ELLIPSE_DEPTH_RATIO);
        let half = (c.y - p.y)
            .abs()
            .min(vertical_room - radius * ELLIPSE_DEPTH_RATIO)
            .max(0.0);

        self.center = p;
        self.radius = radius;
        self.height = 2.0 * half;
    }

    fn resize(&mut self, scale_x: f64, scale_y: f64) {
        let factor = uniform_factor(scale_x, scale_y);
        self.radius = scaled_size(self.radius, factor);
        self.height = scaled_size(self.height, factor);
    }
}

/// Cone anchored at its apex, base ellipse `height` below.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cone {
    pub apex: Point,
    pub radius: f64,
    pub height: f64,
}

impl Cone {
    pub fn new(apex: Point, radius: f64, height: f64) -> Self {
        Self {
            apex,
            radius,
            height,
        }
    }
}

impl BoardShape for Cone {
    fn anchor(&self) -> Point {
        self.apex
    }

    fn set_anchor(&mut self, anchor: Point) {
        self.apex = anchor;
    }

    fn outline(&self) -> Vec<Polyline> {
        let base = Point::new(self.apex.x, self.apex.y + self.height);
        let r = self.radius;
        vec![
            depth_ellipse(base, r),
            edge(self.apex, Point::new(base.x - r, base.y)),
            edge(self.apex, Point::new(base.x + r, base.y)),
        ]
    }

    fn update(&mut self, press: Point, current: Point, canvas: &CanvasBounds) {
        let p = canvas.clamp(press);
        let c = canvas.clamp(current);
        let radius = (c.x - p.x)
            .abs()
            .min(p.x)
            .min(canvas.width - p.x)
            .min((canvas.height - p.y) / ELLIPSE_DEPTH_RATIO);
        let height = (c.y - p.y)
            .abs()
            .min(canvas.height - p.y - radius * ELLIPSE_DEPTH_RATIO)
            .max(0.0);

        self.apex = p;
        // the far rim of the base must not rise above the top edge
        self.radius = radius.min((p.y + height) / ELLIPSE_DEPTH_RATIO);
        self.height = height;
    }

    fn resize(&mut self, scale_x: f64, scale_y: f64) {
        let factor = uniform_factor(scale_x, scale_y);
        self.radius = scaled_size(self.radius, factor);
        self.height = scaled_size(self.height, factor);
    }
}

/// Square-based pyramid anchored at its apex. The base is drawn as a
/// parallelogram receding up and to the right by half its half-width.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pyramid {
    pub apex: Point,
    pub width: f64,
    pub height: f64,
}

impl Pyramid {
    pub fn new(apex: Point, width: f64, height: f64) -> Self {
        Self {
            apex,
            width,
            height,
        }
    }

    fn base(&self) -> [Point; 4] {
        let half = self.width / 2.0;
        let depth = half / 2.0;
        let base_y = self.apex.y + self.height;
        [
            Point::new(self.apex.x - half, base_y),
            Point::new(self.apex.x + half, base_y),
            Point::new(self.apex.x + half + depth, base_y - depth),
            Point::new(self.apex.x - half + depth, base_y - depth),
        ]
    }
}

impl BoardShape for Pyramid {
    fn anchor(&self) -> Point {
        self.apex
    }

    fn set_anchor(&mut self, anchor: Point) {
        self.apex = anchor;
    }

    fn outline(&self) -> Vec<Polyline> {
        let base = self.base();
        let mut runs = vec![Polyline::closed(base.to_vec())];
        runs.extend(base.iter().map(|corner| edge(self.apex, *corner)));
        runs
    }

    fn update(&mut self, press: Point, current: Point, canvas: &CanvasBounds) {
        let p = canvas.clamp(press);
        let c = canvas.clamp(current);
        let height = (c.y - p.y).abs().min(canvas.height - p.y);
        let half = (c.x - p.x)
            .abs()
            .min(p.x)
            .min((canvas.width - p.x) / 1.5)
            .min(2.0 * (p.y + height));

        self.apex = p;
        self.width = 2.0 * half;
        self.height = height;
    }

    fn resize(&mut self, scale_x: f64, scale_y: f64) {
        let factor = uniform_factor(scale_x, scale_y);
        self.width = scaled_size(self.width, factor);
        self.height = scaled_size(self.height, factor);
    }
}

/// Dome over an elliptical base; the anchor is the center of the base.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hemisphere {
    pub center: Point,
    pub radius: f64,
}

impl Hemisphere {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl BoardShape for Hemisphere {
    fn anchor(&self) -> Point {
        self.center
    }

    fn set_anchor(&mut self, anchor: Point) {
        self.center = anchor;
    }

    fn outline(&self) -> Vec<Polyline> {
        vec![
            Polyline::open(sample_arc(
                self.center,
                self.radius,
                self.radius,
                180.0,
                180.0,
            )),
            depth_ellipse(self.center, self.radius),
        ]
    }

    fn update(&mut self, press: Point, current: Point, canvas: &CanvasBounds) {
        let p = canvas.clamp(press);
        let c = canvas.clamp(current);
        self.center = p;
        self.radius = p
            .distance_to(&c)
            .min(p.x)
            .min(canvas.width - p.x)
            .min(p.y)
            .min((canvas.height - p.y) / ELLIPSE_DEPTH_RATIO);
    }

    fn resize(&mut self, scale_x: f64, scale_y: f64) {
        self.radius = scaled_size(self.radius, uniform_factor(scale_x, scale_y));
    }
}
