//! # Chalkboard Core
//!
//! Core types shared by every Chalkboard crate: canvas-local geometry
//! primitives, stroke colors, numeric constants, and the image import error.

pub mod color;
pub mod constants;
pub mod error;
pub mod geometry;

pub use color::Color;
pub use error::ImportError;
pub use geometry::{point_to_segment_distance, Bounds, CanvasBounds, Point};
