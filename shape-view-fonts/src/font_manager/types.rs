//! Font data types and structures for font management.

use std::sync::Arc;

use swash::{CacheKey, FontRef};

/// Stores font data with lifetime management.
///
/// This struct owns the font data bytes together with the swash offset and
/// cache key of one face. Borrowed `FontRef` / `rustybuzz::Face` views are
/// rebuilt on demand, which is cheap and keeps the struct free of
/// self-references.
#[derive(Clone)]
pub struct FontData {
    /// Raw font data bytes (TTF/OTF/TTC)
    pub data: Arc<Vec<u8>>,
    /// Face index within the data (0 for single-face fonts)
    pub face_index: u32,
    /// Offset of the face table directory, as located by swash
    offset: u32,
    /// Swash cache key identifying this face for scaler caches
    key: CacheKey,
}

impl std::fmt::Debug for FontData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontData")
            .field("data_len", &self.data.len())
            .field("face_index", &self.face_index)
            .finish()
    }
}

impl FontData {
    /// Create a new FontData from bytes using face index 0.
    ///
    /// # Returns
    /// `Some(FontData)` if the font data is valid, `None` otherwise.
    pub fn new(data: Vec<u8>) -> Option<Self> {
        Self::new_with_index(Arc::new(data), 0)
    }

    /// Create a new FontData from shared bytes with a specific face index.
    ///
    /// This is needed for TrueType Collection (.ttc) files where multiple
    /// font faces share the same data but have different face indices.
    pub fn new_with_index(data: Arc<Vec<u8>>, face_index: u32) -> Option<Self> {
        let font_ref = FontRef::from_index(data.as_slice(), face_index as usize)?;
        let (offset, key) = (font_ref.offset, font_ref.key);
        Some(FontData {
            data,
            face_index,
            offset,
            key,
        })
    }

    /// Swash view of this face, used for metrics and rasterization.
    pub fn as_swash(&self) -> FontRef<'_> {
        FontRef {
            data: self.data.as_slice(),
            offset: self.offset,
            key: self.key,
        }
    }

    /// Rustybuzz view of this face, used for shaping.
    pub fn as_shaping_face(&self) -> Option<rustybuzz::Face<'_>> {
        rustybuzz::Face::from_slice(self.data.as_slice(), self.face_index)
    }

    /// Design units per em of this face.
    pub fn units_per_em(&self) -> u16 {
        self.as_swash().metrics(&[]).units_per_em
    }

    /// Map a character to a glyph id, 0 when the face has no glyph for it.
    pub fn glyph_for_char(&self, character: char) -> u16 {
        self.as_swash().charmap().map(character)
    }
}

/// Descriptive information about the loaded face.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaceSummary {
    /// First family name recorded in the face's name table
    pub family: String,
    /// PostScript name of the face
    pub post_script_name: String,
    /// Number of faces in the file (greater than 1 for collections)
    pub face_count: usize,
    /// Whether the face declares itself monospaced
    pub monospaced: bool,
}

/// Font metrics scaled to a pixel size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Font size in pixels these metrics were scaled to
    pub font_size_pixels: f32,
    /// Distance from baseline to the top of the tallest glyphs
    pub ascent: f32,
    /// Distance from baseline to the bottom of the lowest glyphs (positive)
    pub descent: f32,
    /// Recommended extra spacing between lines
    pub leading: f32,
    /// Design units per em of the face
    pub units_per_em: u16,
}

impl FontMetrics {
    /// Total line height (ascent + descent + leading).
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.leading
    }
}
