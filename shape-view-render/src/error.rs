//! Typed error types for shape-view-render.
//!
//! Callers at the crate boundary can match on specific error variants
//! instead of relying on opaque `anyhow` strings.

use thiserror::Error;

/// Top-level error type for the rendering engine.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A canvas or surface was requested with a zero (or oversized) dimension.
    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvasSize {
        /// Requested width in physical pixels.
        width: u32,
        /// Requested height in physical pixels.
        height: u32,
    },

    /// The pixel destination does not match the canvas dimensions.
    #[error("pixel buffer holds {actual} pixels, canvas needs {expected}")]
    BufferSizeMismatch {
        /// Pixel count of the canvas.
        expected: usize,
        /// Pixel count of the destination.
        actual: usize,
    },

    /// softbuffer failed to create, resize or present the window surface.
    #[error("window surface error: {details}")]
    Surface {
        /// softbuffer error description.
        details: String,
    },

    /// The canvas could not be written as a PNG file.
    #[error("PNG export to '{path}' failed: {details}")]
    Png {
        /// Destination path.
        path: String,
        /// Encoder or I/O error description.
        details: String,
    },
}

impl From<softbuffer::SoftBufferError> for RenderError {
    fn from(e: softbuffer::SoftBufferError) -> Self {
        RenderError::Surface {
            details: e.to_string(),
        }
    }
}
