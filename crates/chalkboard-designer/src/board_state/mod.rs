//! Board state manager for UI integration.
//!
//! Owns the live scene, the undo history, the active tool and the gesture
//! state machine. Every UI callback funnels through `&mut BoardState`.
//!
//! This module is split into submodules:
//! - `pointer`: pointer events and the gesture state machine
//! - `transforms`: drag and transform-handle callbacks
//! - `history`: undo, redo, clear
//! - `shapes`: image import and deletion
//! - `style`: stroke and eraser setters

mod history;
mod pointer;
mod shapes;
mod style;
mod transforms;

use crate::eraser::Eraser;
use crate::history::History;
use crate::model::{Shape, ShapeId, StrokeStyle};
use crate::scene::Scene;
use crate::tool::{Tool, ToolState};
use crate::transform::{TransformController, TransformHandle};
use chalkboard_core::constants::SELECT_TOLERANCE;
use chalkboard_core::CanvasBounds;
use chalkboard_settings::Settings;

/// Editing state of one whiteboard.
#[derive(Debug, Clone)]
pub struct BoardState {
    canvas: CanvasBounds,
    scene: Scene,
    history: History,
    tool: Tool,
    state: ToolState,
    transform: TransformController,
    stroke: StrokeStyle,
    eraser: Eraser,
    select_tolerance: f64,
    next_id: u64,
}

impl BoardState {
    /// Creates a board on the default canvas.
    pub fn new() -> Self {
        Self::with_canvas(CanvasBounds::default())
    }

    pub fn with_canvas(canvas: CanvasBounds) -> Self {
        Self {
            canvas,
            scene: Scene::new(),
            history: History::new(),
            tool: Tool::default(),
            state: ToolState::Idle,
            transform: TransformController::new(),
            stroke: StrokeStyle::default(),
            eraser: Eraser::default(),
            select_tolerance: SELECT_TOLERANCE,
            next_id: 1,
        }
    }

    /// Creates a board configured from loaded settings.
    pub fn with_settings(settings: &Settings) -> Self {
        let mut board = Self::with_canvas(settings.canvas_bounds());
        board.history = History::with_depth(settings.interaction.history_depth);
        board.stroke = StrokeStyle {
            color: settings.stroke.color,
            width: settings.stroke.width,
        };
        board.eraser = Eraser::new(settings.interaction.eraser_radius);
        board.select_tolerance = settings.interaction.select_tolerance;
        board
    }

    pub fn canvas(&self) -> CanvasBounds {
        self.canvas
    }

    /// The live scene, including any uncommitted gesture preview.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn state(&self) -> &ToolState {
        &self.state
    }

    pub fn selection(&self) -> Option<ShapeId> {
        self.transform.selection()
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selection().and_then(|id| self.scene.get(id))
    }

    pub fn transform_handle(&self) -> Option<TransformHandle> {
        self.transform.handle()
    }

    pub fn stroke(&self) -> StrokeStyle {
        self.stroke
    }

    pub fn eraser_radius(&self) -> f64 {
        self.eraser.radius()
    }

    pub fn select_tolerance(&self) -> f64 {
        self.select_tolerance
    }

    /// Switches the active tool.
    ///
    /// An open gesture is finalized first. Leaving `Select` clears the
    /// selection and detaches the handle.
    pub fn set_tool(&mut self, tool: Tool) {
        self.finish_gesture();
        if tool != Tool::Select {
            self.transform.clear();
        }
        if tool != self.tool {
            tracing::debug!("Tool changed: {} -> {}", self.tool, tool);
        }
        self.tool = tool;
    }

    /// Switches tool by name; unknown names are ignored.
    pub fn set_tool_by_name(&mut self, name: &str) {
        match name.parse::<Tool>() {
            Ok(tool) => self.set_tool(tool),
            Err(_) => tracing::warn!("Ignoring unknown tool name {:?}", name),
        }
    }

    fn allocate_id(&mut self) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Pushes the live scene as a new history snapshot.
    fn commit(&mut self, action: &str) {
        self.history.push(self.scene.clone());
        tracing::debug!(
            "Committed {}: {} shapes, history {}/{}",
            action,
            self.scene.len(),
            self.history.cursor() + 1,
            self.history.len()
        );
    }

    /// Drops a selection whose shape is no longer on the board.
    fn reconcile_selection(&mut self) {
        let Some(id) = self.transform.selection() else {
            return;
        };
        if self.scene.contains(id) {
            return;
        }
        tracing::debug!("Selected shape {} left the scene; detaching handle", id);
        self.transform.clear();
        if matches!(
            self.state,
            ToolState::Selecting { id: sid, .. } | ToolState::Transforming { id: sid } if sid == id
        ) {
            self.state = ToolState::Idle;
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
