/// Text shaping module using HarfBuzz via rustybuzz
///
/// This module provides text shaping capabilities for:
/// - Ligatures (fi, fl, ffi, ffl, etc.)
/// - Complex scripts (Arabic, Devanagari, etc.)
/// - Kerning and contextual alternates
///
/// # Architecture
///
/// The text shaping pipeline:
/// 1. Grapheme cluster detection (unicode-segmentation)
/// 2. Direction, script and language selection (from `ShapingOptions`)
/// 3. Font feature selection
/// 4. Text shaping (rustybuzz)
/// 5. Conversion of advances and offsets from font units to pixels
///
/// # Usage
///
/// ```ignore
/// let shaper = TextShaper::new();
/// let shaped = shaper.shape_text(&font, "Hello world", 32.0, &ShapingOptions::default())?;
/// ```
use rustybuzz::{Direction, Feature, GlyphBuffer, Language, Script, UnicodeBuffer};
use std::path::PathBuf;
use std::str::FromStr;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::FontError;
use crate::font_manager::FontData;

/// ISO 15924 tag of the Common script, the default script hint.
pub const COMMON_SCRIPT_TAG: &str = "Zyyy";

/// A single shaped glyph with positioning information
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapedGlyph {
    /// Glyph ID from the font
    pub glyph_id: u32,

    /// Cluster index (byte offset of the input character(s) this glyph represents)
    pub cluster: u32,

    /// Horizontal advance width in pixels
    pub x_advance: f32,

    /// Vertical advance (usually 0 for horizontal text)
    pub y_advance: f32,

    /// Horizontal offset from the current position
    pub x_offset: f32,

    /// Vertical offset from the baseline (y up)
    pub y_offset: f32,
}

/// Options for text shaping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapingOptions {
    /// Enable standard and contextual ligatures (liga, clig)
    pub enable_ligatures: bool,

    /// Enable discretionary ligatures (dlig)
    pub enable_discretionary_ligatures: bool,

    /// Enable kerning adjustments
    pub enable_kerning: bool,

    /// Enable contextual alternates
    pub enable_contextual_alternates: bool,

    /// Script hint as an ISO 15924 tag (e.g., "Zyyy" for Common, "Arab" for Arabic).
    /// `None` lets rustybuzz guess from the text.
    pub script: Option<String>,

    /// Language hint (e.g., "en" for English, "ar" for Arabic)
    pub language: Option<String>,

    /// Text direction (true = RTL, false = LTR)
    pub rtl: bool,
}

impl Default for ShapingOptions {
    fn default() -> Self {
        Self {
            enable_ligatures: true,
            enable_discretionary_ligatures: false,
            enable_kerning: true,
            enable_contextual_alternates: true,
            script: Some(COMMON_SCRIPT_TAG.to_string()),
            language: None,
            rtl: false,
        }
    }
}

impl ShapingOptions {
    /// OpenType features to request from the shaper.
    fn features(&self) -> Vec<Feature> {
        let mut tags: Vec<&str> = Vec::new();
        if self.enable_ligatures {
            tags.extend(["liga", "clig"]);
        }
        if self.enable_discretionary_ligatures {
            tags.push("dlig");
        }
        if self.enable_kerning {
            tags.push("kern");
        }
        if self.enable_contextual_alternates {
            tags.push("calt");
        }
        // Glyph composition and localized forms are always wanted
        tags.extend(["ccmp", "locl"]);

        tags.into_iter()
            .filter_map(|tag| Feature::from_str(tag).ok())
            .collect()
    }
}

/// Result of shaping a text run
#[derive(Debug, Clone, PartialEq)]
pub struct ShapedRun {
    /// The input text that was shaped
    pub text: String,

    /// The shaped glyphs, in visual order
    pub glyphs: Vec<ShapedGlyph>,

    /// Total advance width in pixels
    pub total_advance: f32,

    /// Grapheme cluster boundaries (byte indices into the text)
    pub cluster_boundaries: Vec<usize>,
}

impl ShapedRun {
    /// A run with no glyphs for `text`.
    pub fn empty(text: &str) -> Self {
        ShapedRun {
            text: text.to_string(),
            glyphs: Vec::new(),
            total_advance: 0.0,
            cluster_boundaries: Vec::new(),
        }
    }

    /// Number of shaped glyphs.
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Number of glyphs that fell back to `.notdef` (glyph id 0).
    pub fn missing_glyph_count(&self) -> usize {
        self.glyphs.iter().filter(|g| g.glyph_id == 0).count()
    }
}

/// Text shaper using HarfBuzz via rustybuzz
#[derive(Debug, Default, Clone, Copy)]
pub struct TextShaper;

impl TextShaper {
    /// Create a new text shaper
    pub fn new() -> Self {
        TextShaper
    }

    /// Detect grapheme clusters in the input text
    ///
    /// This is crucial for:
    /// - Regional indicator pairs (flag emoji like 🇺🇸)
    /// - ZWJ sequences (emoji like 👨‍👩‍👧‍👦)
    /// - Combining characters (diacritics like é)
    pub fn detect_grapheme_clusters<'a>(&self, text: &'a str) -> Vec<(usize, &'a str)> {
        text.grapheme_indices(true).collect()
    }

    /// Shape a text run using rustybuzz
    ///
    /// # Arguments
    /// * `font` - The face to shape with
    /// * `text` - The text to shape
    /// * `font_size_pixels` - Pixel size the output positions are scaled to
    /// * `options` - Shaping options
    pub fn shape_text(
        &self,
        font: &FontData,
        text: &str,
        font_size_pixels: f32,
        options: &ShapingOptions,
    ) -> Result<ShapedRun, FontError> {
        let face = font
            .as_shaping_face()
            .ok_or_else(|| FontError::InvalidFont {
                path: PathBuf::new(),
            })?;

        if text.is_empty() {
            return Ok(ShapedRun::empty(text));
        }

        let cluster_boundaries: Vec<usize> = self
            .detect_grapheme_clusters(text)
            .iter()
            .map(|(idx, _)| *idx)
            .collect();

        let mut unicode_buffer = UnicodeBuffer::new();
        unicode_buffer.push_str(text);

        unicode_buffer.set_direction(if options.rtl {
            Direction::RightToLeft
        } else {
            Direction::LeftToRight
        });

        match options.script.as_deref().map(Script::from_str) {
            Some(Ok(script)) => unicode_buffer.set_script(script),
            Some(Err(_)) => {
                log::warn!("Unknown script hint {:?}, guessing", options.script);
                unicode_buffer.guess_segment_properties();
            }
            None => unicode_buffer.guess_segment_properties(),
        }

        if let Some(ref lang_str) = options.language {
            match Language::from_str(lang_str) {
                Ok(lang) => unicode_buffer.set_language(lang),
                Err(_) => log::warn!("Ignoring invalid language hint '{}'", lang_str),
            }
        }

        let glyph_buffer = rustybuzz::shape(&face, &options.features(), unicode_buffer);

        let scale = font_size_pixels / f32::from(font.units_per_em().max(1));
        let glyphs = Self::extract_shaped_glyphs(&glyph_buffer, scale);
        let total_advance = glyphs.iter().map(|g| g.x_advance).sum();

        log::debug!(
            "Shaped {:?} into {} glyphs, advance {:.2}px at {}px",
            text,
            glyphs.len(),
            total_advance,
            font_size_pixels
        );

        Ok(ShapedRun {
            text: text.to_string(),
            glyphs,
            total_advance,
            cluster_boundaries,
        })
    }

    /// Extract shaped glyphs from HarfBuzz glyph buffer, scaling font units to pixels
    fn extract_shaped_glyphs(buffer: &GlyphBuffer, scale: f32) -> Vec<ShapedGlyph> {
        let glyph_infos = buffer.glyph_infos();
        let glyph_positions = buffer.glyph_positions();

        glyph_infos
            .iter()
            .zip(glyph_positions.iter())
            .map(|(info, pos)| ShapedGlyph {
                glyph_id: info.glyph_id,
                cluster: info.cluster,
                x_advance: pos.x_advance as f32 * scale,
                y_advance: pos.y_advance as f32 * scale,
                x_offset: pos.x_offset as f32 * scale,
                y_offset: pos.y_offset as f32 * scale,
            })
            .collect()
    }
}
