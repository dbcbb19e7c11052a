use chalkboard_designer::model::{
    Circle, Ellipse, PolygonKind, Rectangle, RegularPolygon, Triangle,
};
use chalkboard_designer::transform::{apply_drag, apply_transform};
use chalkboard_designer::{
    drag_bound, BoardState, CanvasBounds, Geometry, Point, Shape, ShapeId, ShapeKind,
    StrokeStyle, Tool,
};

fn shape(geometry: Geometry) -> Shape {
    Shape::from_geometry(ShapeId(1), geometry, StrokeStyle::default())
}

#[test]
fn test_circle_scale_examples() {
    let canvas = CanvasBounds::default();
    let doubled = apply_transform(
        &shape(Geometry::Circle(Circle::new(Point::new(300.0, 300.0), 40.0))),
        2.0,
        2.0,
        0.0,
        &canvas,
    );
    assert!(matches!(&doubled.geometry, Geometry::Circle(c) if (c.radius - 80.0).abs() < 1e-9));

    let floored = apply_transform(
        &shape(Geometry::Circle(Circle::new(Point::new(300.0, 300.0), 3.0))),
        0.1,
        0.1,
        0.0,
        &canvas,
    );
    assert!(matches!(&floored.geometry, Geometry::Circle(c) if c.radius == 5.0));
}

#[test]
fn test_anisotropic_kinds_scale_axes_independently() {
    let canvas = CanvasBounds::default();
    let ellipse = apply_transform(
        &shape(Geometry::Ellipse(Ellipse::new(Point::new(300.0, 300.0), 20.0, 10.0))),
        3.0,
        0.5,
        0.0,
        &canvas,
    );
    assert!(matches!(&ellipse.geometry,
        Geometry::Ellipse(e) if e.radius_x == 60.0 && e.radius_y == 5.0));

    let triangle = apply_transform(
        &shape(Geometry::Triangle(Triangle::new(Point::new(300.0, 100.0), 40.0, 40.0))),
        1.0,
        2.0,
        0.0,
        &canvas,
    );
    assert!(matches!(&triangle.geometry,
        Geometry::Triangle(t) if t.width == 40.0 && t.height == 80.0));
}

#[test]
fn test_isotropic_kinds_stay_regular() {
    let canvas = CanvasBounds::default();
    let hex = apply_transform(
        &shape(Geometry::Polygon(RegularPolygon::new(
            Point::new(300.0, 300.0),
            10.0,
            PolygonKind::Hexagon,
        ))),
        3.0,
        1.0,
        0.0,
        &canvas,
    );
    match &hex.geometry {
        Geometry::Polygon(p) => {
            assert_eq!(p.kind, PolygonKind::Hexagon);
            assert!((p.radius - 10.0 * 5.0_f64.sqrt()).abs() < 1e-9);
        }
        other => panic!("unexpected geometry {other:?}"),
    }
}

#[test]
fn test_transform_rebounds_into_canvas() {
    let canvas = CanvasBounds::default();
    let grown = apply_transform(
        &shape(Geometry::Circle(Circle::new(Point::new(30.0, 570.0), 20.0))),
        3.0,
        3.0,
        0.0,
        &canvas,
    );
    let b = grown.bounds();
    assert!(b.min_x >= -1e-9 && b.max_y <= 600.0 + 1e-9);
}

#[test]
fn test_oversized_scale_is_capped_to_canvas() {
    let canvas = CanvasBounds::default();
    let grown = apply_transform(
        &shape(Geometry::Circle(Circle::new(Point::new(400.0, 300.0), 40.0))),
        20.0,
        20.0,
        0.0,
        &canvas,
    );
    match &grown.geometry {
        Geometry::Circle(c) => {
            assert!((c.radius - 300.0).abs() < 1e-6);
            assert!((c.center.x - 400.0).abs() < 1e-6);
        }
        other => panic!("unexpected geometry {other:?}"),
    }
    let b = grown.bounds();
    assert!(b.min_x >= -1e-6 && b.min_y >= -1e-6);
    assert!(b.max_x <= 800.0 + 1e-6 && b.max_y <= 600.0 + 1e-6);
}

#[test]
fn test_rotated_oversized_rectangle_fits() {
    let canvas = CanvasBounds::default();
    let grown = apply_transform(
        &shape(Geometry::Rectangle(Rectangle::new(300.0, 200.0, 100.0, 50.0))),
        12.0,
        9.0,
        45.0,
        &canvas,
    );
    let b = grown.bounds();
    assert!(b.min_x >= -1e-6 && b.min_y >= -1e-6);
    assert!(b.max_x <= 800.0 + 1e-6 && b.max_y <= 600.0 + 1e-6);
    assert_eq!(grown.rotation, 45.0);
}

#[test]
fn test_drag_bound_never_leaves_canvas() {
    let canvas = CanvasBounds::default();
    let circle = shape(Geometry::Circle(Circle::new(Point::new(100.0, 100.0), 25.0)));
    for proposed in [
        Point::new(-100.0, -100.0),
        Point::new(1000.0, 50.0),
        Point::new(400.0, 2000.0),
    ] {
        let moved = apply_drag(&circle, proposed, &canvas);
        let b = moved.bounds();
        assert!(b.min_x >= -1e-9 && b.min_y >= -1e-9);
        assert!(b.max_x <= 800.0 + 1e-9 && b.max_y <= 600.0 + 1e-9);
        assert_eq!(drag_bound(&circle, proposed, &canvas), moved.drag_anchor());
    }
}

#[test]
fn test_board_drag_bound_matches_free_function() {
    let mut board = BoardState::new();
    board.set_tool(Tool::Shape(ShapeKind::Star));
    board.pointer_down(Point::new(400.0, 300.0));
    board.pointer_move(Point::new(400.0, 250.0));
    board.pointer_up();
    let id = board.scene().last().unwrap().id;

    let proposed = Point::new(10.0, 10.0);
    let expected = drag_bound(board.scene().get(id).unwrap(), proposed, &board.canvas());
    assert_eq!(board.drag_bound(id, proposed), expected);
    assert_eq!(board.drag_bound(ShapeId(77), proposed), proposed);
}

#[test]
fn test_point_list_resize_through_board() {
    let mut board = BoardState::new();
    board.set_tool(Tool::Shape(ShapeKind::Line));
    board.pointer_down(Point::new(100.0, 100.0));
    board.pointer_move(Point::new(150.0, 100.0));
    board.pointer_up();
    let id = board.scene().last().unwrap().id;

    board.set_tool(Tool::Select);
    board.pointer_down(Point::new(120.0, 100.0));
    board.pointer_up();
    board.on_transform_end(id, 2.0, 1.0, 0.0);

    match &board.scene().get(id).unwrap().geometry {
        Geometry::Line(line) => assert_eq!(
            line.absolute_points(),
            vec![Point::new(100.0, 100.0), Point::new(200.0, 100.0)]
        ),
        other => panic!("unexpected geometry {other:?}"),
    }
}
