//! Rasterizer for board scenes.
//!
//! Strokes every shape outline onto a `tiny-skia` pixmap and hands the
//! result back as an `RgbaImage`. Canvas units map 1:1 to pixels.
//!
//! Features:
//! - Anti-aliased strokes with round caps and joins
//! - Dash pattern for dashed lines and arrow heads for arrows
//! - Degenerate shapes (zero-length drags) drawn as dots
//! - Imported images blitted with bilinear filtering

use crate::model::{Geometry, ImageShape, LineStyle, Polyline, Shape};
use crate::scene::Scene;
use chalkboard_core::constants::{ARROW_HEAD_ANGLE_DEG, ARROW_HEAD_LENGTH, DASH_PATTERN};
use chalkboard_core::{Color, Point};
use image::{Rgba, RgbaImage};
use tiny_skia::{
    FillRule, FilterQuality, IntSize, LineCap, LineJoin, Paint, PathBuilder, Pixmap, PixmapPaint,
    Stroke, StrokeDash, Transform,
};

fn to_skia(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

/// Render `scene` into a `width` x `height` image over `background`.
pub fn render_to_raster(scene: &Scene, width: u32, height: u32, background: Color) -> RgbaImage {
    let Some(mut pixmap) = Pixmap::new(width, height) else {
        return RgbaImage::from_pixel(
            width,
            height,
            Rgba([background.r, background.g, background.b, background.a]),
        );
    };
    pixmap.fill(to_skia(background));

    for shape in scene.iter() {
        match &shape.geometry {
            Geometry::Image(image) => draw_image(&mut pixmap, shape, image),
            _ => draw_outline(&mut pixmap, shape),
        }
    }

    let mut out = RgbaImage::new(width, height);
    for (pixel, src) in out.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *pixel = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    out
}

fn draw_outline(pixmap: &mut Pixmap, shape: &Shape) {
    let mut paint = Paint::default();
    paint.set_color(to_skia(shape.stroke.color));
    paint.anti_alias = true;

    let style = match &shape.geometry {
        Geometry::Line(line) => line.style,
        _ => LineStyle::Plain,
    };
    let mut stroke = Stroke {
        width: shape.stroke.width as f32,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Default::default()
    };
    if style == LineStyle::Dashed {
        stroke.dash = StrokeDash::new(DASH_PATTERN.to_vec(), 0.0);
    }

    for run in shape.outline() {
        if run.is_degenerate() {
            if let Some(p) = run.points.first() {
                draw_dot(pixmap, &paint, *p, shape.stroke.width);
            }
            continue;
        }
        if let Some(path) = polyline_path(&run) {
            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
        if style == LineStyle::Arrow {
            draw_arrow_head(pixmap, &paint, &run, shape.stroke.width);
        }
    }
}

fn polyline_path(run: &Polyline) -> Option<tiny_skia::Path> {
    let (first, rest) = run.points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for p in rest {
        pb.line_to(p.x as f32, p.y as f32);
    }
    if run.closed {
        pb.close();
    }
    pb.finish()
}

fn draw_dot(pixmap: &mut Pixmap, paint: &Paint, at: Point, stroke_width: f64) {
    let radius = (stroke_width / 2.0).max(0.5) as f32;
    if let Some(path) = PathBuilder::from_circle(at.x as f32, at.y as f32, radius) {
        pixmap.fill_path(&path, paint, FillRule::Winding, Transform::identity(), None);
    }
}

/// Two barbs at the last point, pointing back along the final segment.
fn draw_arrow_head(pixmap: &mut Pixmap, paint: &Paint, run: &Polyline, stroke_width: f64) {
    let Some(tip) = run.points.last().copied() else {
        return;
    };
    let Some(from) = run.points.iter().rev().find(|p| p.distance_to(&tip) > 1e-9) else {
        return;
    };
    let heading = (tip.y - from.y).atan2(tip.x - from.x);
    let spread = ARROW_HEAD_ANGLE_DEG.to_radians();
    let length = ARROW_HEAD_LENGTH.max(stroke_width * 3.0);

    let mut pb = PathBuilder::new();
    for angle in [heading + spread, heading - spread] {
        pb.move_to(tip.x as f32, tip.y as f32);
        pb.line_to(
            (tip.x - length * angle.cos()) as f32,
            (tip.y - length * angle.sin()) as f32,
        );
    }
    let Some(path) = pb.finish() else {
        return;
    };
    let stroke = Stroke {
        width: stroke_width as f32,
        line_cap: LineCap::Round,
        ..Default::default()
    };
    pixmap.stroke_path(&path, paint, &stroke, Transform::identity(), None);
}

fn draw_image(pixmap: &mut Pixmap, shape: &Shape, image: &ImageShape) {
    let pixels = image.image.pixels();
    let Some(size) = IntSize::from_wh(pixels.width(), pixels.height()) else {
        return;
    };
    // tiny-skia expects premultiplied alpha
    let data: Vec<u8> = pixels
        .pixels()
        .flat_map(|p| {
            let [r, g, b, a] = p.0;
            let premultiply = |c: u8| ((u16::from(c) * u16::from(a) + 127) / 255) as u8;
            [premultiply(r), premultiply(g), premultiply(b), a]
        })
        .collect();
    let Some(src) = Pixmap::from_vec(data, size) else {
        return;
    };

    let scale_x = (image.width / f64::from(pixels.width())) as f32;
    let scale_y = (image.height / f64::from(pixels.height())) as f32;
    let transform = Transform::from_scale(scale_x, scale_y)
        .post_translate(image.x as f32, image.y as f32)
        .post_rotate_at(shape.rotation as f32, image.x as f32, image.y as f32);

    let paint = PixmapPaint {
        quality: FilterQuality::Bilinear,
        ..Default::default()
    };
    pixmap.draw_pixmap(0, 0, src.as_ref(), &paint, transform, None);
}
