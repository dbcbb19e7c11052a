//! Regular polygons and the five-pointed star.

use super::{regular_vertices, scaled_size, uniform_factor, BoardShape, Polyline};
use chalkboard_core::constants::{STAR_INNER_RATIO, STAR_POINTS};
use chalkboard_core::{CanvasBounds, Point};
use serde::Serialize;

/// Which regular polygon a [`RegularPolygon`] draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PolygonKind {
    Pentagon,
    Hexagon,
}

impl PolygonKind {
    pub fn sides(self) -> usize {
        match self {
            Self::Pentagon => 5,
            Self::Hexagon => 6,
        }
    }
}

/// Regular polygon centered on its anchor; `radius` is the circumradius.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegularPolygon {
    pub center: Point,
    pub radius: f64,
    pub kind: PolygonKind,
}

impl RegularPolygon {
    pub fn new(center: Point, radius: f64, kind: PolygonKind) -> Self {
        Self {
            center,
            radius,
            kind,
        }
    }

    pub fn sides(&self) -> usize {
        self.kind.sides()
    }
}

impl BoardShape for RegularPolygon {
    fn anchor(&self) -> Point {
        self.center
    }

    fn set_anchor(&mut self, anchor: Point) {
        self.center = anchor;
    }

    fn outline(&self) -> Vec<Polyline> {
        vec![Polyline::closed(regular_vertices(
            self.center,
            self.radius,
            self.sides(),
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

/// Star with a fixed inner/outer radius ratio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Star {
    pub center: Point,
    /// Outer radius.
    pub radius: f64,
}

impl Star {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn inner_radius(&self) -> f64 {
        self.radius * STAR_INNER_RATIO
    }
}

impl BoardShape for Star {
    fn anchor(&self) -> Point {
        self.center
    }

    fn set_anchor(&mut self, anchor: Point) {
        self.center = anchor;
    }

    fn outline(&self) -> Vec<Polyline> {
        let outer = regular_vertices(self.center, self.radius, STAR_POINTS);
        let inner_radius = self.inner_radius();
        let points = outer
            .into_iter()
            .enumerate()
            .flat_map(|(i, tip)| {
                let theta = (-90.0 + 360.0 * (i as f64 + 0.5) / STAR_POINTS as f64).to_radians();
                let valley = Point::new(
                    self.center.x + inner_radius * theta.cos(),
                    self.center.y + inner_radius * theta.sin(),
                );
                [tip, valley]
            })
            .collect();
        vec![Polyline::closed(points)]
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
