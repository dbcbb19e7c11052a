use chalkboard_designer::{
    BoardState, CanvasBounds, Color, Geometry, Point, ShapeKind, Tool, ToolState,
};
use chalkboard_settings::Settings;

fn draw(board: &mut BoardState, tool: Tool, from: Point, to: Point) {
    board.set_tool(tool);
    board.pointer_down(from);
    board.pointer_move(to);
    board.pointer_up();
}

#[test]
fn test_board_state_new() {
    let board = BoardState::new();
    assert!(board.scene().is_empty());
    assert_eq!(board.tool(), Tool::Pen);
    assert_eq!(*board.state(), ToolState::Idle);
    assert_eq!(board.canvas(), CanvasBounds::new(800.0, 600.0));
    assert_eq!(board.history().len(), 1);
}

#[test]
fn test_with_settings() {
    let mut settings = Settings::default();
    settings.canvas.width = 320.0;
    settings.canvas.height = 240.0;
    settings.stroke.color = Color::rgb(0, 128, 0);
    settings.interaction.eraser_radius = 2.5;
    settings.interaction.history_depth = 4;

    let board = BoardState::with_settings(&settings);
    assert_eq!(board.canvas(), CanvasBounds::new(320.0, 240.0));
    assert_eq!(board.stroke().color, Color::rgb(0, 128, 0));
    assert_eq!(board.eraser_radius(), 2.5);
    assert_eq!(board.history().max_depth(), 4);
}

#[test]
fn test_rectangle_draw_undo_redo() {
    let mut board = BoardState::new();
    draw(
        &mut board,
        Tool::Shape(ShapeKind::Rectangle),
        Point::new(10.0, 10.0),
        Point::new(210.0, 110.0),
    );
    let rect = board.scene().last().unwrap().clone();
    match &rect.geometry {
        Geometry::Rectangle(r) => {
            assert_eq!((r.x, r.y, r.width, r.height), (10.0, 10.0, 200.0, 100.0))
        }
        other => panic!("unexpected geometry {other:?}"),
    }

    assert!(board.undo());
    assert!(board.scene().is_empty());
    assert!(board.redo());
    assert_eq!(board.scene().last(), Some(&rect));
}

#[test]
fn test_n_commits_round_trip_through_history() {
    let mut board = BoardState::new();
    let mut snapshots = vec![board.scene().clone()];
    for i in 0..5 {
        let y = 20.0 + 40.0 * i as f64;
        draw(
            &mut board,
            Tool::Shape(ShapeKind::Hexagon),
            Point::new(100.0, y),
            Point::new(115.0, y),
        );
        snapshots.push(board.scene().clone());
    }

    for expected in snapshots.iter().rev().skip(1) {
        assert!(board.undo());
        assert_eq!(board.scene(), expected);
    }
    for expected in snapshots.iter().skip(1) {
        assert!(board.redo());
        assert_eq!(board.scene(), expected);
    }
}

#[test]
fn test_mixed_gestures_round_trip_through_history() {
    let mut board = BoardState::new();
    let mut snapshots = vec![board.scene().clone()];

    draw(
        &mut board,
        Tool::Shape(ShapeKind::Rectangle),
        Point::new(100.0, 100.0),
        Point::new(200.0, 150.0),
    );
    snapshots.push(board.scene().clone());
    let rect = board.scene().last().unwrap().id;

    draw(
        &mut board,
        Tool::Shape(ShapeKind::Circle),
        Point::new(500.0, 300.0),
        Point::new(540.0, 300.0),
    );
    snapshots.push(board.scene().clone());

    board.set_tool(Tool::Select);
    board.pointer_down(Point::new(100.0, 120.0));
    assert_eq!(board.selection(), Some(rect));
    board.pointer_move(Point::new(130.0, 140.0));
    board.pointer_up();
    snapshots.push(board.scene().clone());

    board.on_drag_end(rect, Point::new(300.0, 400.0));
    snapshots.push(board.scene().clone());

    board.on_transform_end(rect, 1.5, 2.0, 30.0);
    snapshots.push(board.scene().clone());

    board.set_tool(Tool::Eraser);
    board.pointer_down(Point::new(540.0, 300.0));
    board.pointer_up();
    snapshots.push(board.scene().clone());

    assert_eq!(board.scene().len(), 1);
    assert_eq!(board.history().len(), snapshots.len());
    for pair in snapshots.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }

    for expected in snapshots.iter().rev().skip(1) {
        assert!(board.undo());
        assert_eq!(board.scene(), expected);
    }
    assert!(!board.undo());
    for expected in snapshots.iter().skip(1) {
        assert!(board.redo());
        assert_eq!(board.scene(), expected);
    }
    assert!(!board.redo());
}

#[test]
fn test_create_after_undo_discards_redo() {
    let mut board = BoardState::new();
    draw(&mut board, Tool::Pen, Point::new(10.0, 10.0), Point::new(40.0, 40.0));
    draw(&mut board, Tool::Pen, Point::new(60.0, 10.0), Point::new(90.0, 40.0));
    board.undo();
    assert!(board.can_redo());

    draw(&mut board, Tool::Pen, Point::new(10.0, 80.0), Point::new(40.0, 90.0));
    assert!(!board.can_redo());
    assert_eq!(board.scene().len(), 2);
}

#[test]
fn test_history_matches_scene_after_each_commit() {
    let mut board = BoardState::new();
    draw(
        &mut board,
        Tool::Shape(ShapeKind::Cube),
        Point::new(100.0, 100.0),
        Point::new(150.0, 150.0),
    );
    assert_eq!(board.history().current(), board.scene());

    board.set_tool(Tool::Eraser);
    board.pointer_down(Point::new(100.0, 125.0));
    board.pointer_up();
    assert!(board.scene().is_empty());
    assert_eq!(board.history().current(), board.scene());
}

#[test]
fn test_erase_scenarios() {
    let mut board = BoardState::new();
    board.set_eraser_radius(5.0);
    draw(
        &mut board,
        Tool::Shape(ShapeKind::Circle),
        Point::new(100.0, 100.0),
        Point::new(150.0, 100.0),
    );

    board.set_tool(Tool::Eraser);
    board.pointer_down(Point::new(100.0, 100.0));
    board.pointer_up();
    assert_eq!(board.scene().len(), 1);

    board.pointer_down(Point::new(150.0, 100.0));
    board.pointer_up();
    assert!(board.scene().is_empty());
}

#[test]
fn test_freehand_erased_whole() {
    let mut board = BoardState::new();
    board.pointer_down(Point::new(0.0, 0.0));
    board.pointer_move(Point::new(10.0, 0.0));
    board.pointer_move(Point::new(20.0, 0.0));
    board.pointer_up();
    assert!(matches!(
        &board.scene().last().unwrap().geometry,
        Geometry::Freehand(f) if f.points.len() == 3
    ));

    board.set_eraser_radius(3.0);
    board.set_tool(Tool::Eraser);
    board.pointer_down(Point::new(10.0, 0.0));
    board.pointer_up();
    assert!(board.scene().is_empty());
}

#[test]
fn test_erase_sweep_makes_one_commit_per_removal() {
    let mut board = BoardState::new();
    for x in [100.0, 200.0, 300.0] {
        draw(
            &mut board,
            Tool::Shape(ShapeKind::Line),
            Point::new(x, 100.0),
            Point::new(x, 300.0),
        );
    }
    assert_eq!(board.history().len(), 4);

    board.set_tool(Tool::Eraser);
    board.pointer_down(Point::new(50.0, 200.0));
    for x in (50..=350).step_by(10) {
        board.pointer_move(Point::new(x as f64, 200.0));
    }
    board.pointer_leave();
    assert!(board.scene().is_empty());
    assert_eq!(board.history().len(), 7);
}

#[test]
fn test_switching_tool_clears_selection() {
    let mut board = BoardState::new();
    draw(
        &mut board,
        Tool::Shape(ShapeKind::Square),
        Point::new(100.0, 100.0),
        Point::new(160.0, 160.0),
    );
    board.set_tool(Tool::Select);
    board.pointer_down(Point::new(100.0, 130.0));
    board.pointer_up();
    assert!(board.selection().is_some());
    assert!(board.transform_handle().is_some());

    board.set_tool_by_name("eraser");
    assert_eq!(board.tool(), Tool::Eraser);
    assert_eq!(board.selection(), None);
    assert_eq!(board.transform_handle(), None);
}

#[test]
fn test_unknown_tool_name_is_ignored() {
    let mut board = BoardState::new();
    board.set_tool_by_name("ellipse");
    board.set_tool_by_name("spray-can");
    assert_eq!(board.tool(), Tool::Shape(ShapeKind::Ellipse));
}

#[test]
fn test_switching_tool_mid_gesture_commits() {
    let mut board = BoardState::new();
    board.pointer_down(Point::new(10.0, 10.0));
    board.pointer_move(Point::new(30.0, 30.0));
    board.set_tool(Tool::Select);
    assert!(board.state().is_idle());
    assert_eq!(board.history().len(), 2);
    assert_eq!(board.history().current(), board.scene());
}

#[test]
fn test_undo_of_selected_creation_clears_selection() {
    let mut board = BoardState::new();
    draw(
        &mut board,
        Tool::Shape(ShapeKind::Rectangle),
        Point::new(100.0, 100.0),
        Point::new(200.0, 200.0),
    );
    board.set_tool(Tool::Select);
    board.pointer_down(Point::new(100.0, 150.0));
    board.pointer_up();
    assert!(board.selection().is_some());

    board.undo();
    assert_eq!(board.selection(), None);
    assert_eq!(board.transform_handle(), None);
}

#[test]
fn test_line_drag_keeps_origin_reference() {
    let mut board = BoardState::new();
    draw(
        &mut board,
        Tool::Shape(ShapeKind::Arrow),
        Point::new(100.0, 100.0),
        Point::new(200.0, 100.0),
    );
    let id = board.scene().last().unwrap().id;
    board.set_tool(Tool::Select);
    board.pointer_down(Point::new(150.0, 101.0));
    board.pointer_move(Point::new(170.0, 121.0));
    board.pointer_up();

    let shape = board.scene().get(id).unwrap();
    assert_eq!(shape.drag_anchor(), Point::ORIGIN);
    match &shape.geometry {
        Geometry::Line(line) => {
            assert_eq!(line.origin, Point::new(100.0, 100.0));
            assert_eq!(
                line.absolute_points(),
                vec![Point::new(120.0, 120.0), Point::new(220.0, 120.0)]
            );
        }
        other => panic!("unexpected geometry {other:?}"),
    }
}
