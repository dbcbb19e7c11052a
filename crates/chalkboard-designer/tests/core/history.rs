use chalkboard_designer::{Geometry, History, Scene, Shape, ShapeId, StrokeStyle};
use chalkboard_designer::model::Circle;
use chalkboard_designer::Point;

fn scene_of(ids: &[u64]) -> Scene {
    ids.iter()
        .map(|&id| {
            Shape::from_geometry(
                ShapeId(id),
                Geometry::Circle(Circle::new(Point::new(50.0, 50.0), 10.0)),
                StrokeStyle::default(),
            )
        })
        .collect()
}

#[test]
fn test_history_creation() {
    let history = History::new();
    assert_eq!(history.len(), 1);
    assert_eq!(history.cursor(), 0);
    assert_eq!(history.max_depth(), 500);
}

#[test]
fn test_undo_at_start_is_noop() {
    let mut history = History::new();
    assert!(history.undo().is_none());
    assert_eq!(history.cursor(), 0);
}

#[test]
fn test_redo_at_top_is_noop() {
    let mut history = History::new();
    history.push(scene_of(&[1]));
    assert!(history.redo().is_none());
    assert_eq!(history.current(), &scene_of(&[1]));
}

#[test]
fn test_current_tracks_cursor() {
    let mut history = History::new();
    history.push(scene_of(&[1]));
    history.push(scene_of(&[1, 2]));

    assert_eq!(history.undo(), Some(&scene_of(&[1])));
    assert_eq!(history.current(), &scene_of(&[1]));
    assert_eq!(history.redo(), Some(&scene_of(&[1, 2])));
    assert_eq!(history.current(), &scene_of(&[1, 2]));
}

#[test]
fn test_snapshots_are_independent() {
    let mut history = History::new();
    let first = scene_of(&[1]);
    history.push(first.clone());
    let moved = first
        .with_replaced(Shape::from_geometry(
            ShapeId(1),
            Geometry::Circle(Circle::new(Point::new(90.0, 90.0), 10.0)),
            StrokeStyle::default(),
        ))
        .unwrap();
    history.push(moved);

    assert_eq!(history.undo(), Some(&first));
}

#[test]
fn test_depth_one_keeps_only_latest() {
    let mut history = History::with_depth(1);
    history.push(scene_of(&[1]));
    history.push(scene_of(&[1, 2]));
    assert_eq!(history.len(), 1);
    assert!(!history.can_undo());
    assert_eq!(history.current(), &scene_of(&[1, 2]));
}
