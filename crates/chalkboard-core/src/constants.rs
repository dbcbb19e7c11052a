//! Shared numeric constants for the whiteboard.

// ── Sizes ───────────────────────────────────────────────────────

/// Smallest radius/width/height a shape keeps after a resize.
pub const MIN_SHAPE_SIZE: f64 = 5.0;

/// Default canvas width in canvas units.
pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;

/// Default canvas height in canvas units.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;

// ── Outline sampling ────────────────────────────────────────────

/// Number of evenly spaced samples used to approximate a curved outline.
pub const BOUNDARY_SAMPLES: usize = 64;

/// Inner-to-outer radius ratio for the five-point star.
pub const STAR_INNER_RATIO: f64 = 0.5;

/// Number of points on the star.
pub const STAR_POINTS: usize = 5;

/// Vertical squash of the ellipses that fake depth on projected solids.
pub const ELLIPSE_DEPTH_RATIO: f64 = 0.3;

/// Inset of the trapezium's top edge as a fraction of its width.
pub const TRAPEZIUM_INSET_RATIO: f64 = 0.25;

// ── Arrow heads ─────────────────────────────────────────────────

/// Length of an arrow head in canvas units.
pub const ARROW_HEAD_LENGTH: f64 = 12.0;

/// Half-angle of an arrow head in degrees.
pub const ARROW_HEAD_ANGLE_DEG: f64 = 25.0;

/// Dash pattern (on, off) for dashed lines.
pub const DASH_PATTERN: [f32; 2] = [10.0, 6.0];

// ── Interaction ─────────────────────────────────────────────────

/// Default eraser radius in canvas units.
pub const DEFAULT_ERASER_RADIUS: f64 = 10.0;

/// Distance from a shape's outline within which a select click picks it.
pub const SELECT_TOLERANCE: f64 = 8.0;

/// Default stroke width in canvas units.
pub const DEFAULT_STROKE_WIDTH: f64 = 3.0;

/// Default number of snapshots kept by the history.
pub const DEFAULT_HISTORY_DEPTH: usize = 500;
