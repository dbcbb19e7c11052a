//! # Chalkboard
//!
//! A vector whiteboard editing core: freehand pen strokes, twenty shape
//! kinds including pseudo-3D solids, an object eraser, selection with
//! bounded dragging and transforms, and a linear undo/redo history.
//!
//! ## Architecture
//!
//! 1. **chalkboard-core** - Points, bounds, colors, import errors
//! 2. **chalkboard-settings** - Canvas, stroke, and interaction settings
//! 3. **chalkboard-designer** - Shapes, scene, history, eraser, tools, rendering
//! 4. **chalkboard** - Script replay and the headless binary

pub mod replay;

pub use chalkboard_designer as designer;

pub use chalkboard_core::{Bounds, CanvasBounds, Color, ImportError, Point};

pub use chalkboard_designer::{
    render_to_raster, BoardShape, BoardState, Eraser, Geometry, History, LineStyle, Placement,
    RasterImage, Scene, Shape, ShapeId, ShapeKind, StrokeStyle, Tool, ToolState,
    TransformController, TransformHandle,
};

pub use chalkboard_settings::{default_config_path, Settings, SettingsError};

pub use replay::{load_script, replay, ReplayError, ScriptEvent};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty console output on stderr, leaving stdout for scene output
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
