//! Active tool and gesture state.

use crate::model::{Shape, ShapeId, ShapeKind};
use chalkboard_core::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The tool the next pointer-down applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Tool {
    #[default]
    Pen,
    Eraser,
    Select,
    Shape(ShapeKind),
}

impl Tool {
    /// The kind a pointer-down with this tool creates, if any.
    pub fn draw_kind(self) -> Option<ShapeKind> {
        match self {
            Tool::Pen => Some(ShapeKind::Freehand),
            Tool::Shape(kind) if kind != ShapeKind::Image => Some(kind),
            _ => None,
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tool::Pen => f.write_str("pen"),
            Tool::Eraser => f.write_str("eraser"),
            Tool::Select => f.write_str("select"),
            Tool::Shape(kind) => f.write_str(kind.name()),
        }
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pen" | "pencil" | "freehand" => Ok(Tool::Pen),
            "eraser" => Ok(Tool::Eraser),
            "select" | "pointer" => Ok(Tool::Select),
            _ => match s.parse::<ShapeKind>() {
                Ok(ShapeKind::Image) | Err(_) => Err(format!("Unknown tool: {}", s)),
                Ok(kind) => Ok(Tool::Shape(kind)),
            },
        }
    }
}

impl TryFrom<String> for Tool {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Tool> for String {
    fn from(tool: Tool) -> Self {
        tool.to_string()
    }
}

/// Gesture state machine. At most one gesture is open at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ToolState {
    #[default]
    Idle,
    /// A new shape is being sized; it is the last element of the scene.
    Drawing { id: ShapeId, press: Point },
    /// The eraser is down; every sample may remove one shape.
    Erasing,
    /// A selected shape is being dragged by the pointer.
    Selecting {
        id: ShapeId,
        grab: Point,
        original: Box<Shape>,
        moved: bool,
    },
    /// The transform handle owns the gesture until `on_transform_end`.
    Transforming { id: ShapeId },
}

impl ToolState {
    pub fn name(&self) -> &'static str {
        match self {
            ToolState::Idle => "idle",
            ToolState::Drawing { .. } => "drawing",
            ToolState::Erasing => "erasing",
            ToolState::Selecting { .. } => "selecting",
            ToolState::Transforming { .. } => "transforming",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ToolState::Idle)
    }
}
