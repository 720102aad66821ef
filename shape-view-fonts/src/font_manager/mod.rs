//! Font management for a single user-supplied face.
//!
//! This module loads one face from a font file, records what fontdb knows
//! about it, and exposes metrics and shaping for that face. There is no
//! fallback chain: glyphs missing from the face shape to glyph id 0.

mod loader;
mod types;

use std::path::{Path, PathBuf};

use crate::error::FontError;
use crate::text_shaper::{ShapedRun, ShapingOptions, TextShaper};

pub use types::{FaceSummary, FontData, FontMetrics};

/// Owns the loaded face and the shaper that works on it.
pub struct FontManager {
    /// Path the font was loaded from
    path: PathBuf,

    /// The loaded face
    font: FontData,

    /// Face description from fontdb
    summary: FaceSummary,

    /// Text shaper for ligatures and complex scripts
    text_shaper: TextShaper,
}

impl FontManager {
    /// Load face `face_index` from the font file at `path`.
    ///
    /// # Errors
    /// * `FontError::Io` when the file cannot be read
    /// * `FontError::InvalidFont` when the file holds no parseable face
    /// * `FontError::FaceIndexOutOfRange` when the collection is too short
    pub fn load(path: impl AsRef<Path>, face_index: u32) -> Result<Self, FontError> {
        let path = path.as_ref();
        log::info!("Loading font {} (face {})", path.display(), face_index);

        let data = loader::read_font_file(path)?;
        let summary = loader::inspect_faces(path, &data, face_index)?;
        let font =
            FontData::new_with_index(data, face_index).ok_or_else(|| FontError::InvalidFont {
                path: path.to_path_buf(),
            })?;

        log::info!(
            "Loaded font family '{}' ({}), {} face(s) in file, units_per_em={}",
            summary.family,
            summary.post_script_name,
            summary.face_count,
            font.units_per_em()
        );

        Ok(FontManager {
            path: path.to_path_buf(),
            font,
            summary,
            text_shaper: TextShaper::new(),
        })
    }

    /// Wrap already-loaded font data, e.g. an embedded font.
    pub fn from_font_data(font: FontData, summary: FaceSummary) -> Self {
        FontManager {
            path: PathBuf::new(),
            font,
            summary,
            text_shaper: TextShaper::new(),
        }
    }

    /// Path the font was loaded from (empty for in-memory fonts).
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The loaded face.
    pub fn font(&self) -> &FontData {
        &self.font
    }

    /// Face description gathered while loading.
    pub fn summary(&self) -> &FaceSummary {
        &self.summary
    }

    /// Metrics of the face scaled to `font_size_pixels`.
    pub fn metrics(&self, font_size_pixels: f32) -> FontMetrics {
        let metrics = self.font.as_swash().metrics(&[]);
        let scaled = metrics.scale(font_size_pixels);
        FontMetrics {
            font_size_pixels,
            ascent: scaled.ascent,
            descent: scaled.descent,
            leading: scaled.leading,
            units_per_em: metrics.units_per_em,
        }
    }

    /// Shape a line of text with the loaded face.
    ///
    /// Uses HarfBuzz (via rustybuzz) for ligatures, kerning, and complex script support.
    pub fn shape_text(
        &self,
        text: &str,
        font_size_pixels: f32,
        options: &ShapingOptions,
    ) -> Result<ShapedRun, FontError> {
        self.text_shaper
            .shape_text(&self.font, text, font_size_pixels, options)
    }
}
