//! Headless gesture replay.
//!
//! A script is a JSON array of events, each tagged by `op`:
//!
//! ```json
//! [
//!   { "op": "tool", "name": "rectangle" },
//!   { "op": "down", "x": 10, "y": 10 },
//!   { "op": "move", "x": 210, "y": 110 },
//!   { "op": "up" },
//!   { "op": "undo" }
//! ]
//! ```

use chalkboard_core::{Color, ImportError, Point};
use chalkboard_designer::{BoardState, Placement, RasterImage, ShapeId};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or replaying a script.
#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid script: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid color at event {index}: {reason}")]
    InvalidColor { index: usize, reason: String },

    #[error("Failed to import image at event {index}: {source}")]
    Import {
        index: usize,
        #[source]
        source: ImportError,
    },
}

/// One recorded UI event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptEvent {
    Down {
        x: f64,
        y: f64,
    },
    Move {
        x: f64,
        y: f64,
    },
    Up,
    Leave,
    Tool {
        name: String,
    },
    Color {
        value: String,
    },
    Width {
        value: f64,
    },
    EraserRadius {
        value: f64,
    },
    Undo,
    Redo,
    Clear,
    DeleteSelected,
    /// Image file path, relative to the script's directory.
    Image {
        path: PathBuf,
        x: f64,
        y: f64,
        #[serde(default)]
        width: Option<f64>,
        #[serde(default)]
        height: Option<f64>,
    },
    DragEnd {
        id: u64,
        x: f64,
        y: f64,
    },
    BeginTransform {
        id: u64,
    },
    TransformEnd {
        id: u64,
        scale_x: f64,
        scale_y: f64,
        #[serde(default)]
        rotation: f64,
    },
}

/// Reads a script file.
pub fn load_script(path: &Path) -> Result<Vec<ScriptEvent>, ReplayError> {
    let content = std::fs::read_to_string(path).map_err(|source| ReplayError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// Applies `events` in order. Image paths resolve against `base_dir`.
pub fn replay(
    board: &mut BoardState,
    events: &[ScriptEvent],
    base_dir: &Path,
) -> Result<(), ReplayError> {
    for (index, event) in events.iter().enumerate() {
        tracing::trace!("Replaying event {}: {:?}", index, event);
        apply(board, index, event, base_dir)?;
    }
    tracing::info!(
        "Replayed {} events; {} shapes on the board",
        events.len(),
        board.scene().len()
    );
    Ok(())
}

fn apply(
    board: &mut BoardState,
    index: usize,
    event: &ScriptEvent,
    base_dir: &Path,
) -> Result<(), ReplayError> {
    match event {
        ScriptEvent::Down { x, y } => board.pointer_down(Point::new(*x, *y)),
        ScriptEvent::Move { x, y } => board.pointer_move(Point::new(*x, *y)),
        ScriptEvent::Up => board.pointer_up(),
        ScriptEvent::Leave => board.pointer_leave(),
        ScriptEvent::Tool { name } => board.set_tool_by_name(name),
        ScriptEvent::Color { value } => {
            let color = value
                .parse::<Color>()
                .map_err(|reason| ReplayError::InvalidColor { index, reason })?;
            board.set_stroke_color(color);
        }
        ScriptEvent::Width { value } => board.set_stroke_width(*value),
        ScriptEvent::EraserRadius { value } => board.set_eraser_radius(*value),
        ScriptEvent::Undo => {
            board.undo();
        }
        ScriptEvent::Redo => {
            board.redo();
        }
        ScriptEvent::Clear => board.clear(),
        ScriptEvent::DeleteSelected => board.delete_selected(),
        ScriptEvent::Image {
            path,
            x,
            y,
            width,
            height,
        } => {
            let full = base_dir.join(path);
            let bytes = std::fs::read(&full).map_err(|source| ReplayError::Io {
                path: full.clone(),
                source,
            })?;
            let image = RasterImage::decode(&bytes)
                .map_err(|source| ReplayError::Import { index, source })?;
            let natural = Placement::natural(&image, *x, *y);
            let placement = Placement {
                width: width.unwrap_or(natural.width),
                height: height.unwrap_or(natural.height),
                ..natural
            };
            board.import_image(image, placement);
        }
        ScriptEvent::DragEnd { id, x, y } => board.on_drag_end(ShapeId(*id), Point::new(*x, *y)),
        ScriptEvent::BeginTransform { id } => {
            board.begin_transform(ShapeId(*id));
        }
        ScriptEvent::TransformEnd {
            id,
            scale_x,
            scale_y,
            rotation,
        } => board.on_transform_end(ShapeId(*id), *scale_x, *scale_y, *rotation),
    }
    Ok(())
}
