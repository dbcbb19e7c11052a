//! # Chalkboard Designer
//!
//! The whiteboard editing core: shape geometry, the pointer-driven tool state
//! machine, the object eraser, the transform handle, snapshot undo/redo and a
//! raster renderer.
//!
//! Everything is driven through [`BoardState`]:
//!
//! ```
//! use chalkboard_designer::{BoardState, Point, ShapeKind, Tool};
//!
//! let mut board = BoardState::new();
//! board.set_tool(Tool::Shape(ShapeKind::Rectangle));
//! board.pointer_down(Point::new(10.0, 10.0));
//! board.pointer_move(Point::new(210.0, 110.0));
//! board.pointer_up();
//! assert_eq!(board.scene().len(), 1);
//! assert!(board.undo());
//! assert!(board.scene().is_empty());
//! ```

pub mod board_state;
pub mod eraser;
pub mod history;
pub mod model;
pub mod renderer;
pub mod scene;
pub mod tool;
pub mod transform;

pub use board_state::BoardState;
pub use eraser::Eraser;
pub use history::History;
pub use model::{
    BoardShape, Geometry, LineStyle, Placement, Polyline, RasterImage, Shape, ShapeId, ShapeKind,
    StrokeStyle,
};
pub use renderer::render_to_raster;
pub use scene::Scene;
pub use tool::{Tool, ToolState};
pub use transform::{drag_bound, TransformController, TransformHandle};

pub use chalkboard_core::{Bounds, CanvasBounds, Color, Point};
