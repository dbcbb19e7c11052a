use chalkboard_designer::{CanvasBounds, Point, Shape, ShapeId, ShapeKind, StrokeStyle};
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = ShapeKind> {
    prop::sample::select(ShapeKind::DRAWABLE.to_vec())
}

fn point_strategy() -> impl Strategy<Value = Point> {
    (-200.0f64..1200.0, -200.0f64..1000.0).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn updated_outline_stays_on_canvas(
        kind in kind_strategy(),
        width in 50.0f64..1200.0,
        height in 50.0f64..900.0,
        press in point_strategy(),
        moves in prop::collection::vec(point_strategy(), 1..6),
    ) {
        let canvas = CanvasBounds::new(width, height);
        let press = canvas.clamp(press);
        let mut shape = Shape::create(ShapeId(1), kind, press, StrokeStyle::default()).unwrap();
        for current in moves {
            shape = shape.updated(press, current, &canvas);
            prop_assert_eq!(shape.kind(), kind);
            let eps = 1e-6;
            for run in shape.outline() {
                for p in run.points {
                    prop_assert!(p.x >= -eps && p.x <= width + eps, "{} x={} w={}", kind, p.x, width);
                    prop_assert!(p.y >= -eps && p.y <= height + eps, "{} y={} h={}", kind, p.y, height);
                }
            }
        }
    }

    #[test]
    fn resize_never_goes_below_minimum(
        kind in kind_strategy(),
        sx in -3.0f64..3.0,
        sy in -3.0f64..3.0,
    ) {
        let canvas = CanvasBounds::default();
        let press = Point::new(400.0, 300.0);
        let shape = Shape::create(ShapeId(1), kind, press, StrokeStyle::default())
            .unwrap()
            .updated(press, Point::new(430.0, 340.0), &canvas)
            .resized(sx, sy);
        let size = serde_json::to_value(&shape.geometry).unwrap();
        for key in ["width", "height", "size", "radius", "radius_x", "radius_y"] {
            if let Some(v) = size.get(key).and_then(|v| v.as_f64()) {
                prop_assert!(v >= 5.0, "{} {}={}", kind, key, v);
            }
        }
    }
}

#[test]
fn test_rectangle_drag_example() {
    let canvas = CanvasBounds::new(800.0, 600.0);
    let press = Point::new(10.0, 10.0);
    let rect = Shape::create(ShapeId(1), ShapeKind::Rectangle, press, StrokeStyle::default())
        .unwrap()
        .updated(press, Point::new(210.0, 110.0), &canvas);
    let bounds = rect.bounds();
    assert_eq!(
        (bounds.min_x, bounds.min_y, bounds.width(), bounds.height()),
        (10.0, 10.0, 200.0, 100.0)
    );
}

#[test]
fn test_shape_serializes_with_type_tag() {
    let canvas = CanvasBounds::new(800.0, 600.0);
    let press = Point::new(100.0, 100.0);
    let star = Shape::create(ShapeId(3), ShapeKind::Star, press, StrokeStyle::default())
        .unwrap()
        .updated(press, Point::new(130.0, 140.0), &canvas);
    let json = serde_json::to_value(&star).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["geometry"]["type"], "star");
    assert_eq!(json["geometry"]["radius"], 50.0);
    assert_eq!(json["stroke"]["color"], "#000000");
}
