//! Font loading and text shaping for shape-view.
//!
//! This crate provides:
//! - Loading a single face from a TTF/OTF/TTC file on disk
//! - Face inspection (family names, face count) via fontdb
//! - Pixel-scaled font metrics via swash
//! - HarfBuzz-based text shaping via rustybuzz
//!
//! # Architecture
//!
//! The `FontManager` owns the loaded `FontData` and hands it to the
//! `TextShaper`, which converts rustybuzz output from font units into pixels
//! so downstream code never sees design units.

pub mod error;
pub mod font_manager;
pub mod text_shaper;

// Re-export main types for convenience
pub use error::FontError;
pub use font_manager::{FaceSummary, FontData, FontManager, FontMetrics};
pub use text_shaper::{ShapedGlyph, ShapedRun, ShapingOptions, TextShaper};
