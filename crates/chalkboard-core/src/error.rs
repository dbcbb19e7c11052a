//! Error handling for Chalkboard
//!
//! Interactive board operations never fail; they degrade to no-ops or clamp
//! their inputs. The core only fails when decoding imported raster images;
//! settings and replay files carry their own error types.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Image import error type
///
/// Represents failures turning encoded bytes into a raster handle that can be
/// placed on the board.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The bytes could not be decoded as a supported image format
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The decoded image has no pixels
    #[error("Image has zero size ({width}x{height})")]
    EmptyImage {
        /// Decoded width in pixels.
        width: u32,
        /// Decoded height in pixels.
        height: u32,
    },

    /// A raw RGBA buffer does not match its stated dimensions
    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}
