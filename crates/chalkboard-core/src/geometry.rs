//! Canvas-local geometry primitives.
//!
//! All coordinates are floating-point canvas units with the origin at the
//! top-left corner and `y` growing downward, matching pointer events.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point (or offset) in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin reference `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Rotates this point about `center` by `angle_deg` (clockwise on screen).
    pub fn rotated_about(&self, center: Point, angle_deg: f64) -> Point {
        if angle_deg == 0.0 {
            return *self;
        }
        let (s, c) = angle_deg.to_radians().sin_cos();
        let dx = self.x - center.x;
        let dy = self.y - center.y;
        Point {
            x: center.x + dx * c - dy * s,
            y: center.y + dx * s + dy * c,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Bounding box of a point cloud. Returns `None` for an empty iterator.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Bounds::new(first.x, first.y, first.x, first.y);
        for p in iter {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        Some(bounds)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

/// The drawable area `[0, width] × [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
    pub width: f64,
    pub height: f64,
}

impl CanvasBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Clamps `p` into the canvas rectangle.
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(p.x.clamp(0.0, self.width), p.y.clamp(0.0, self.height))
    }

    /// Distance from `p` to the nearest of the four canvas edges.
    pub fn edge_distance(&self, p: Point) -> f64 {
        p.x.min(self.width - p.x)
            .min(p.y)
            .min(self.height - p.y)
            .max(0.0)
    }

    pub fn contains(&self, p: &Point) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self::new(
            crate::constants::DEFAULT_CANVAS_WIDTH,
            crate::constants::DEFAULT_CANVAS_HEIGHT,
        )
    }
}

/// Distance from `p` to the segment `a`–`b`.
///
/// A zero-length segment degrades to the distance to `a`.
pub fn point_to_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let seg = b - a;
    let len_sq = seg.x * seg.x + seg.y * seg.y;
    if len_sq < 1e-12 {
        return p.distance_to(&a);
    }
    let t = (((p.x - a.x) * seg.x + (p.y - a.y) * seg.y) / len_sq).clamp(0.0, 1.0);
    let closest = Point::new(a.x + t * seg.x, a.y + t * seg.y);
    p.distance_to(&closest)
}
