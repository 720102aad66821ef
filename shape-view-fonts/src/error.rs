//! Typed error types for shape-view-fonts.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading a font file or shaping text with it.
#[derive(Debug, Error)]
pub enum FontError {
    /// The font file could not be read from disk.
    #[error("failed to read font file '{}': {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file was read but contains no face that could be parsed.
    #[error("'{}' is not a usable TrueType/OpenType font", path.display())]
    InvalidFont {
        /// Path of the rejected file (empty for in-memory data).
        path: PathBuf,
    },

    /// A face index past the end of a font collection was requested.
    #[error("face index {index} out of range: '{}' contains {face_count} face(s)", path.display())]
    FaceIndexOutOfRange {
        /// Path of the font collection.
        path: PathBuf,
        /// Requested face index.
        index: u32,
        /// Number of faces the file actually contains.
        face_count: usize,
    },
}
