use chalkboard_designer::{
    render_to_raster, BoardState, Color, Placement, Point, RasterImage, ShapeKind, Tool,
};

#[test]
fn test_render_board_strokes_in_stroke_color() {
    let mut board = BoardState::new();
    board.set_stroke_color(Color::rgb(255, 0, 0));
    board.set_stroke_width(4.0);
    board.set_tool(Tool::Shape(ShapeKind::Line));
    board.pointer_down(Point::new(10.0, 50.0));
    board.pointer_move(Point::new(90.0, 50.0));
    board.pointer_up();

    let img = render_to_raster(board.scene(), 100, 100, Color::WHITE);
    assert_eq!(img.dimensions(), (100, 100));
    let on_line = img.get_pixel(50, 50).0;
    assert!(on_line[0] > 200 && on_line[1] < 60 && on_line[2] < 60);
    assert_eq!(img.get_pixel(50, 80).0, [255, 255, 255, 255]);
}

#[test]
fn test_dashed_line_has_gaps() {
    let mut board = BoardState::new();
    board.set_stroke_width(2.0);
    board.set_tool(Tool::Shape(ShapeKind::DashedLine));
    board.pointer_down(Point::new(0.0, 20.0));
    board.pointer_move(Point::new(100.0, 20.0));
    board.pointer_up();

    let img = render_to_raster(board.scene(), 100, 40, Color::WHITE);
    let row: Vec<u8> = (0..100).map(|x| img.get_pixel(x, 20).0[0]).collect();
    assert!(row.iter().any(|&v| v < 64));
    assert!(row.iter().any(|&v| v == 255));
}

#[test]
fn test_imported_image_is_blitted() {
    let mut board = BoardState::new();
    let blue = RasterImage::from_rgba(2, 2, [0, 0, 255, 255].repeat(4)).unwrap();
    board.import_image(blue, Placement::new(10.0, 10.0, 20.0, 20.0));

    let img = render_to_raster(board.scene(), 40, 40, Color::WHITE);
    let inside = img.get_pixel(20, 20).0;
    assert!(inside[0] < 16 && inside[1] < 16 && inside[2] > 240);
    assert_eq!(img.get_pixel(35, 35).0, [255, 255, 255, 255]);
}

#[test]
fn test_transparent_background() {
    let img = render_to_raster(&Default::default(), 8, 8, Color::TRANSPARENT);
    assert!(img.pixels().all(|p| p.0[3] == 0));
}
