//! CPU rendering engine for shape-view.
//!
//! This crate turns a shaped run into pixels on screen:
//!
//! - Single-line glyph placement centered in a viewport
//! - Glyph rasterization via swash (outline and color glyphs)
//! - Compositing onto a tiny-skia canvas, with PNG export
//! - Presentation into a winit window through softbuffer

pub mod canvas;
pub mod error;
pub mod glyph;
pub mod layout;
pub mod presenter;
pub mod scene;

// Re-export main public types
pub use canvas::{BLACK, Canvas, Rgb, WHITE};
pub use error::RenderError;
pub use glyph::{GlyphRasterizer, RasterizedGlyph};
pub use layout::{PositionedGlyph, Viewport, layout_line, snapped_width};
pub use presenter::Presenter;
pub use scene::TextScene;
