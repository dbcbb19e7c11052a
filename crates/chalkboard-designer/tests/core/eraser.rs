use chalkboard_designer::model::{Cone, Freehand, Line, LineStyle, Rectangle, Sphere};
use chalkboard_designer::{Eraser, Geometry, Point, Scene, Shape, ShapeId, StrokeStyle};

fn scene(geometries: Vec<Geometry>) -> Scene {
    geometries
        .into_iter()
        .enumerate()
        .map(|(i, g)| Shape::from_geometry(ShapeId(i as u64 + 1), g, StrokeStyle::default()))
        .collect()
}

#[test]
fn test_misses_leave_scene_unchanged() {
    let scene = scene(vec![Geometry::Rectangle(Rectangle::new(
        100.0, 100.0, 100.0, 100.0,
    ))]);
    let eraser = Eraser::new(5.0);
    assert!(eraser.erase_at(&scene, Point::new(150.0, 150.0)).is_none());
    assert!(eraser.erase_at(&scene, Point::new(300.0, 300.0)).is_none());
}

#[test]
fn test_removes_at_most_one_per_sample() {
    let scene = scene(vec![
        Geometry::Rectangle(Rectangle::new(100.0, 100.0, 100.0, 100.0)),
        Geometry::Rectangle(Rectangle::new(100.0, 100.0, 50.0, 50.0)),
        Geometry::Rectangle(Rectangle::new(100.0, 100.0, 20.0, 20.0)),
    ]);
    let (after, id) = Eraser::new(3.0)
        .erase_at(&scene, Point::new(100.0, 110.0))
        .unwrap();
    assert_eq!(id, ShapeId(3));
    assert_eq!(after.len(), 2);
}

#[test]
fn test_line_hit_uses_absolute_points() {
    let mut line = Line::new(Point::new(200.0, 200.0), LineStyle::Dashed);
    line.points = vec![Point::ORIGIN, Point::new(100.0, 0.0)];
    let scene = scene(vec![Geometry::Line(line)]);
    let eraser = Eraser::new(4.0);
    assert!(eraser.hit_test(&scene, Point::new(50.0, 0.0)).is_none());
    assert_eq!(
        eraser.hit_test(&scene, Point::new(250.0, 203.0)),
        Some(ShapeId(1))
    );
}

#[test]
fn test_solids_erase_on_any_edge() {
    let scene = scene(vec![
        Geometry::Sphere(Sphere::new(Point::new(100.0, 100.0), 40.0)),
        Geometry::Cone(Cone::new(Point::new(300.0, 100.0), 30.0, 80.0)),
    ]);
    let eraser = Eraser::new(2.0);
    // equator ellipse of the sphere passes through its center line
    assert_eq!(
        eraser.hit_test(&scene, Point::new(140.0, 100.0)),
        Some(ShapeId(1))
    );
    // cone side from apex to the left base corner
    assert_eq!(
        eraser.hit_test(&scene, Point::new(285.0, 140.0)),
        Some(ShapeId(2))
    );
}

#[test]
fn test_zero_radius_needs_exact_contact() {
    let mut stroke = Freehand::new(Point::new(10.0, 10.0));
    stroke.points.push(Point::new(20.0, 10.0));
    let scene = scene(vec![Geometry::Freehand(stroke)]);
    let eraser = Eraser::new(0.0);
    assert!(eraser.hit_test(&scene, Point::new(15.0, 10.5)).is_none());
    assert_eq!(
        eraser.hit_test(&scene, Point::new(15.0, 10.0)),
        Some(ShapeId(1))
    );
}
