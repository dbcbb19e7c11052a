//! Imported raster images.

use super::rectangle::corners;
use super::{normalized_box, scaled_size, BoardShape, Polyline};
use chalkboard_core::{CanvasBounds, ImportError, Point};
use image::RgbaImage;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Shared, immutable handle to decoded RGBA pixels.
///
/// Cloning is cheap; snapshots that keep an image alive share its pixels.
#[derive(Clone)]
pub struct RasterImage {
    pixels: Arc<RgbaImage>,
}

impl RasterImage {
    /// Decodes any format the `image` crate recognizes.
    pub fn decode(bytes: &[u8]) -> Result<Self, ImportError> {
        let decoded = image::load_from_memory(bytes)?.to_rgba8();
        Self::from_image(decoded)
    }

    /// Wraps a raw, row-major RGBA8 buffer.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, ImportError> {
        let expected = width as usize * height as usize * 4;
        let actual = data.len();
        match RgbaImage::from_raw(width, height, data) {
            Some(img) if actual == expected => Self::from_image(img),
            _ => Err(ImportError::BufferSize { expected, actual }),
        }
    }

    pub fn from_image(img: RgbaImage) -> Result<Self, ImportError> {
        if img.width() == 0 || img.height() == 0 {
            return Err(ImportError::EmptyImage {
                width: img.width(),
                height: img.height(),
            });
        }
        Ok(Self {
            pixels: Arc::new(img),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl PartialEq for RasterImage {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels) || *self.pixels == *other.pixels
    }
}

impl fmt::Debug for RasterImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RasterImage")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

/// Only the pixel dimensions are serialized.
impl Serialize for RasterImage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RasterImage", 2)?;
        state.serialize_field("width", &self.width())?;
        state.serialize_field("height", &self.height())?;
        state.end()
    }
}

/// Target rectangle for an imported image, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Placement {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Natural pixel size of `image` at `(x, y)`.
    pub fn natural(image: &RasterImage, x: f64, y: f64) -> Self {
        Self::new(x, y, f64::from(image.width()), f64::from(image.height()))
    }

    pub fn is_finite(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
    }
}

/// A placed image: top-left anchor and display size in canvas units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageShape {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub image: RasterImage,
}

impl ImageShape {
    pub fn new(image: RasterImage, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            image,
        }
    }
}

impl BoardShape for ImageShape {
    fn anchor(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn set_anchor(&mut self, anchor: Point) {
        self.x = anchor.x;
        self.y = anchor.y;
    }

    fn outline(&self) -> Vec<Polyline> {
        vec![Polyline::closed(corners(self.x, self.y, self.width, self.height))]
    }

    fn update(&mut self, press: Point, current: Point, canvas: &CanvasBounds) {
        let (x, y, width, height) = normalized_box(press, current, canvas);
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
    }

    fn resize(&mut self, scale_x: f64, scale_y: f64) {
        self.width = scaled_size(self.width, scale_x);
        self.height = scaled_size(self.height, scale_y);
    }
}
