//! Shape geometry library.
//!
//! Every drawable kind is a small struct implementing [`BoardShape`]; the
//! closed [`Geometry`] enum tags which kind a record holds. Records are
//! treated as values: every edit produces a new [`Shape`] rather than
//! mutating one that a snapshot may still reference.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use chalkboard_core::constants::{BOUNDARY_SAMPLES, MIN_SHAPE_SIZE};
use chalkboard_core::{point_to_segment_distance, Bounds, CanvasBounds, Color, Point};

mod ellipse;
mod freehand;
mod image;
mod line;
mod polygon;
mod rectangle;
mod solid;
mod triangle;

pub use self::image::{ImageShape, Placement, RasterImage};
pub use ellipse::{Circle, Ellipse};
pub use freehand::Freehand;
pub use line::{Line, LineStyle};
pub use polygon::{PolygonKind, RegularPolygon, Star};
pub use rectangle::{Rectangle, Rhombus, Square, Trapezium};
pub use solid::{Cone, Cube, Cylinder, Hemisphere, Pyramid, Sphere};
pub use triangle::Triangle;

/// Identifier of a shape record, unique for the lifetime of a board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ShapeId(pub u64);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The kind tag of a shape record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Freehand,
    Rectangle,
    Square,
    Ellipse,
    Circle,
    Triangle,
    Pentagon,
    Hexagon,
    Star,
    Rhombus,
    Trapezium,
    Line,
    Arrow,
    DashedLine,
    Cube,
    Sphere,
    Cylinder,
    Cone,
    Pyramid,
    Hemisphere,
    Image,
}

impl ShapeKind {
    /// Kinds that a pointer gesture can draw. Images only arrive by import.
    pub const DRAWABLE: [ShapeKind; 20] = [
        ShapeKind::Freehand,
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::Ellipse,
        ShapeKind::Circle,
        ShapeKind::Triangle,
        ShapeKind::Pentagon,
        ShapeKind::Hexagon,
        ShapeKind::Star,
        ShapeKind::Rhombus,
        ShapeKind::Trapezium,
        ShapeKind::Line,
        ShapeKind::Arrow,
        ShapeKind::DashedLine,
        ShapeKind::Cube,
        ShapeKind::Sphere,
        ShapeKind::Cylinder,
        ShapeKind::Cone,
        ShapeKind::Pyramid,
        ShapeKind::Hemisphere,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Freehand => "freehand",
            Self::Rectangle => "rectangle",
            Self::Square => "square",
            Self::Ellipse => "ellipse",
            Self::Circle => "circle",
            Self::Triangle => "triangle",
            Self::Pentagon => "pentagon",
            Self::Hexagon => "hexagon",
            Self::Star => "star",
            Self::Rhombus => "rhombus",
            Self::Trapezium => "trapezium",
            Self::Line => "line",
            Self::Arrow => "arrow",
            Self::DashedLine => "dashed_line",
            Self::Cube => "cube",
            Self::Sphere => "sphere",
            Self::Cylinder => "cylinder",
            Self::Cone => "cone",
            Self::Pyramid => "pyramid",
            Self::Hemisphere => "hemisphere",
            Self::Image => "image",
        }
    }

    /// Whether a resize scales this kind uniformly to keep it regular.
    pub fn is_isotropic(self) -> bool {
        matches!(
            self,
            Self::Square
                | Self::Circle
                | Self::Pentagon
                | Self::Hexagon
                | Self::Star
                | Self::Cube
                | Self::Sphere
                | Self::Cylinder
                | Self::Cone
                | Self::Pyramid
                | Self::Hemisphere
        )
    }

    /// Whether this kind is stored as a list of points.
    pub fn is_point_list(self) -> bool {
        matches!(
            self,
            Self::Freehand | Self::Line | Self::Arrow | Self::DashedLine
        )
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        let kind = match normalized.as_str() {
            "freehand" | "pen" | "stroke" => Self::Freehand,
            "image" => Self::Image,
            "trapezoid" => Self::Trapezium,
            "diamond" => Self::Rhombus,
            "dashed" => Self::DashedLine,
            other => {
                return Self::DRAWABLE
                    .iter()
                    .copied()
                    .find(|kind| kind.name() == other)
                    .ok_or_else(|| format!("Unknown shape kind: {}", s))
            }
        };
        Ok(kind)
    }
}

/// Stroke color and width of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: chalkboard_core::constants::DEFAULT_STROKE_WIDTH,
        }
    }
}

/// One connected run of a shape's outline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub closed: bool,
}

impl Polyline {
    pub fn open(points: Vec<Point>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    pub fn closed(points: Vec<Point>) -> Self {
        Self {
            points,
            closed: true,
        }
    }

    /// Consecutive point pairs, including the closing edge of a closed run.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let closing = match (self.closed, self.points.first(), self.points.last()) {
            (true, Some(first), Some(last)) if self.points.len() > 2 => Some((*last, *first)),
            _ => None,
        };
        self.points
            .windows(2)
            .map(|w| (w[0], w[1]))
            .chain(closing)
    }

    /// Minimum distance from `p` to this run. A single point counts as a run.
    pub fn distance_to(&self, p: Point) -> f64 {
        match self.points.as_slice() {
            [] => f64::INFINITY,
            [only] => p.distance_to(only),
            _ => self
                .segments()
                .map(|(a, b)| point_to_segment_distance(p, a, b))
                .fold(f64::INFINITY, f64::min),
        }
    }

    /// True when every point coincides, so the run renders as a dot.
    pub fn is_degenerate(&self) -> bool {
        match self.points.first() {
            Some(first) => self.points.iter().all(|p| p.distance_to(first) < 1e-9),
            None => true,
        }
    }
}

/// Per-kind geometry behaviour.
///
/// `update` and `resize` mutate in place; callers work on a clone so stored
/// records are never touched.
pub trait BoardShape {
    /// The draggable anchor: top-left, center or apex for anchored kinds,
    /// the origin reference `(0, 0)` for point-list kinds.
    fn anchor(&self) -> Point;

    /// Moves the shape so that `anchor()` becomes `anchor`.
    fn set_anchor(&mut self, anchor: Point);

    /// The point rotation is applied about.
    fn pivot(&self) -> Point {
        self.anchor()
    }

    /// Unrotated boundary runs in canvas coordinates.
    fn outline(&self) -> Vec<Polyline>;

    /// Derives live extents from the press point and the current pointer.
    fn update(&mut self, press: Point, current: Point, canvas: &CanvasBounds);

    /// Folds a transient transform scale into the persistent size fields.
    fn resize(&mut self, scale_x: f64, scale_y: f64);
}

/// Kind-specific geometry of a shape record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Geometry {
    Freehand(Freehand),
    Rectangle(Rectangle),
    Square(Square),
    Ellipse(Ellipse),
    Circle(Circle),
    Triangle(Triangle),
    Polygon(RegularPolygon),
    Star(Star),
    Rhombus(Rhombus),
    Trapezium(Trapezium),
    Line(Line),
    Cube(Cube),
    Sphere(Sphere),
    Cylinder(Cylinder),
    Cone(Cone),
    Pyramid(Pyramid),
    Hemisphere(Hemisphere),
    Image(ImageShape),
}

impl Geometry {
    /// Zero-size geometry of `kind` at `press`. `None` for images.
    pub fn at(kind: ShapeKind, press: Point) -> Option<Self> {
        let geometry = match kind {
            ShapeKind::Freehand => Self::Freehand(Freehand::new(press)),
            ShapeKind::Rectangle => Self::Rectangle(Rectangle::new(press.x, press.y, 0.0, 0.0)),
            ShapeKind::Square => Self::Square(Square::new(press.x, press.y, 0.0)),
            ShapeKind::Ellipse => Self::Ellipse(Ellipse::new(press, 0.0, 0.0)),
            ShapeKind::Circle => Self::Circle(Circle::new(press, 0.0)),
            ShapeKind::Triangle => Self::Triangle(Triangle::new(press, 0.0, 0.0)),
            ShapeKind::Pentagon => {
                Self::Polygon(RegularPolygon::new(press, 0.0, PolygonKind::Pentagon))
            }
            ShapeKind::Hexagon => {
                Self::Polygon(RegularPolygon::new(press, 0.0, PolygonKind::Hexagon))
            }
            ShapeKind::Star => Self::Star(Star::new(press, 0.0)),
            ShapeKind::Rhombus => Self::Rhombus(Rhombus::new(press.x, press.y, 0.0, 0.0)),
            ShapeKind::Trapezium => Self::Trapezium(Trapezium::new(press.x, press.y, 0.0, 0.0)),
            ShapeKind::Line => Self::Line(Line::new(press, LineStyle::Plain)),
            ShapeKind::Arrow => Self::Line(Line::new(press, LineStyle::Arrow)),
            ShapeKind::DashedLine => Self::Line(Line::new(press, LineStyle::Dashed)),
            ShapeKind::Cube => Self::Cube(Cube::new(press.x, press.y, 0.0)),
            ShapeKind::Sphere => Self::Sphere(Sphere::new(press, 0.0)),
            ShapeKind::Cylinder => Self::Cylinder(Cylinder::new(press, 0.0, 0.0)),
            ShapeKind::Cone => Self::Cone(Cone::new(press, 0.0, 0.0)),
            ShapeKind::Pyramid => Self::Pyramid(Pyramid::new(press, 0.0, 0.0)),
            ShapeKind::Hemisphere => Self::Hemisphere(Hemisphere::new(press, 0.0)),
            ShapeKind::Image => return None,
        };
        Some(geometry)
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Freehand(_) => ShapeKind::Freehand,
            Self::Rectangle(_) => ShapeKind::Rectangle,
            Self::Square(_) => ShapeKind::Square,
            Self::Ellipse(_) => ShapeKind::Ellipse,
            Self::Circle(_) => ShapeKind::Circle,
            Self::Triangle(_) => ShapeKind::Triangle,
            Self::Polygon(p) => match p.kind {
                PolygonKind::Pentagon => ShapeKind::Pentagon,
                PolygonKind::Hexagon => ShapeKind::Hexagon,
            },
            Self::Star(_) => ShapeKind::Star,
            Self::Rhombus(_) => ShapeKind::Rhombus,
            Self::Trapezium(_) => ShapeKind::Trapezium,
            Self::Line(l) => match l.style {
                LineStyle::Plain => ShapeKind::Line,
                LineStyle::Arrow => ShapeKind::Arrow,
                LineStyle::Dashed => ShapeKind::DashedLine,
            },
            Self::Cube(_) => ShapeKind::Cube,
            Self::Sphere(_) => ShapeKind::Sphere,
            Self::Cylinder(_) => ShapeKind::Cylinder,
            Self::Cone(_) => ShapeKind::Cone,
            Self::Pyramid(_) => ShapeKind::Pyramid,
            Self::Hemisphere(_) => ShapeKind::Hemisphere,
            Self::Image(_) => ShapeKind::Image,
        }
    }

    pub fn as_shape(&self) -> &dyn BoardShape {
        match self {
            Self::Freehand(s) => s,
            Self::Rectangle(s) => s,
            Self::Square(s) => s,
            Self::Ellipse(s) => s,
            Self::Circle(s) => s,
            Self::Triangle(s) => s,
            Self::Polygon(s) => s,
            Self::Star(s) => s,
            Self::Rhombus(s) => s,
            Self::Trapezium(s) => s,
            Self::Line(s) => s,
            Self::Cube(s) => s,
            Self::Sphere(s) => s,
            Self::Cylinder(s) => s,
            Self::Cone(s) => s,
            Self::Pyramid(s) => s,
            Self::Hemisphere(s) => s,
            Self::Image(s) => s,
        }
    }

    pub fn as_shape_mut(&mut self) -> &mut dyn BoardShape {
        match self {
            Self::Freehand(s) => s,
            Self::Rectangle(s) => s,
            Self::Square(s) => s,
            Self::Ellipse(s) => s,
            Self::Circle(s) => s,
            Self::Triangle(s) => s,
            Self::Polygon(s) => s,
            Self::Star(s) => s,
            Self::Rhombus(s) => s,
            Self::Trapezium(s) => s,
            Self::Line(s) => s,
            Self::Cube(s) => s,
            Self::Sphere(s) => s,
            Self::Cylinder(s) => s,
            Self::Cone(s) => s,
            Self::Pyramid(s) => s,
            Self::Hemisphere(s) => s,
            Self::Image(s) => s,
        }
    }
}

/// A shape record: identity, kind-specific geometry, rotation and style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    pub id: ShapeId,
    pub geometry: Geometry,
    /// Rotation in degrees about the kind's pivot.
    pub rotation: f64,
    pub stroke: StrokeStyle,
}

impl Shape {
    /// Creates a zero-size record of `kind` at `press`. `None` for images.
    pub fn create(id: ShapeId, kind: ShapeKind, press: Point, stroke: StrokeStyle) -> Option<Self> {
        Geometry::at(kind, press).map(|geometry| Self::from_geometry(id, geometry, stroke))
    }

    pub fn from_geometry(id: ShapeId, geometry: Geometry, stroke: StrokeStyle) -> Self {
        Self {
            id,
            geometry,
            rotation: 0.0,
            stroke,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    /// Live update while drawing: a new record with extents derived from the
    /// press and current points, clamped inside `canvas`.
    pub fn updated(&self, press: Point, current: Point, canvas: &CanvasBounds) -> Shape {
        let mut next = self.clone();
        next.geometry.as_shape_mut().update(press, current, canvas);
        next
    }

    /// Boundary runs with rotation applied.
    pub fn outline(&self) -> Vec<Polyline> {
        let shape = self.geometry.as_shape();
        let mut runs = shape.outline();
        if self.rotation != 0.0 {
            let pivot = shape.pivot();
            for run in &mut runs {
                for p in &mut run.points {
                    *p = p.rotated_about(pivot, self.rotation);
                }
            }
        }
        runs
    }

    /// Axis-aligned bounds of the rotated outline.
    pub fn bounds(&self) -> Bounds {
        let runs = self.outline();
        let pivot = self.geometry.as_shape().pivot();
        Bounds::from_points(runs.iter().flat_map(|run| run.points.iter()))
            .unwrap_or_else(|| Bounds::new(pivot.x, pivot.y, pivot.x, pivot.y))
    }

    /// Minimum distance from `p` to the outline.
    pub fn boundary_distance(&self, p: Point) -> f64 {
        self.outline()
            .iter()
            .map(|run| run.distance_to(p))
            .fold(f64::INFINITY, f64::min)
    }

    pub fn drag_anchor(&self) -> Point {
        self.geometry.as_shape().anchor()
    }

    /// A new record moved so its drag anchor sits at `anchor`.
    pub fn dragged_to(&self, anchor: Point) -> Shape {
        let mut next = self.clone();
        next.geometry.as_shape_mut().set_anchor(anchor);
        next
    }

    /// A new record with the scale folded into its size fields.
    pub fn resized(&self, scale_x: f64, scale_y: f64) -> Shape {
        let mut next = self.clone();
        next.geometry.as_shape_mut().resize(scale_x, scale_y);
        next
    }

    pub fn with_rotation(&self, rotation: f64) -> Shape {
        Shape {
            rotation: rotation.rem_euclid(360.0),
            ..self.clone()
        }
    }
}

/// Uniform factor that keeps a regular shape regular under `(sx, sy)`.
pub(crate) fn uniform_factor(scale_x: f64, scale_y: f64) -> f64 {
    (scale_x * scale_x + scale_y * scale_y).sqrt() / std::f64::consts::SQRT_2
}

/// Applies `factor` to a size and floors the result at the visible minimum.
pub(crate) fn scaled_size(size: f64, factor: f64) -> f64 {
    (size * factor.abs()).max(MIN_SHAPE_SIZE)
}

/// Evenly spaced samples along an elliptical arc.
///
/// Angles are in degrees, measured clockwise on screen from the +x axis.
/// A full sweep returns `BOUNDARY_SAMPLES` points without repeating the first.
pub(crate) fn sample_arc(
    center: Point,
    radius_x: f64,
    radius_y: f64,
    start_deg: f64,
    sweep_deg: f64,
) -> Vec<Point> {
    let full = (sweep_deg.abs() - 360.0).abs() < 1e-9;
    let count = if full {
        BOUNDARY_SAMPLES
    } else {
        ((BOUNDARY_SAMPLES as f64 * sweep_deg.abs() / 360.0).ceil() as usize).max(2) + 1
    };
    let divisor = if full { count } else { count - 1 } as f64;
    (0..count)
        .map(|i| {
            let theta = (start_deg + sweep_deg * i as f64 / divisor).to_radians();
            Point::new(
                center.x + radius_x * theta.cos(),
                center.y + radius_y * theta.sin(),
            )
        })
        .collect()
}

/// Vertices of a regular `n`-gon with the first vertex pointing up.
pub(crate) fn regular_vertices(center: Point, radius: f64, n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let theta = (-90.0 + 360.0 * i as f64 / n as f64).to_radians();
            Point::new(
                center.x + radius * theta.cos(),
                center.y + radius * theta.sin(),
            )
        })
        .collect()
}

/// Normalized box spanned by two canvas-clamped points: `(x, y, w, h)`.
pub(crate) fn normalized_box(
    press: Point,
    current: Point,
    canvas: &CanvasBounds,
) -> (f64, f64, f64, f64) {
    let p = canvas.clamp(press);
    let c = canvas.clamp(current);
    (
        p.x.min(c.x),
        p.y.min(c.y),
        (c.x - p.x).abs(),
        (c.y - p.y).abs(),
    )
}
