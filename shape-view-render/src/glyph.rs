//! Glyph rasterization with swash.

use shape_view_fonts::FontData;
use swash::scale::image::Content;
use swash::scale::{Render, ScaleContext, Source, StrikeWith};
use swash::zeno::{Format, Vector};

use crate::canvas::Rgb;

/// A rasterized glyph ready to be composited.
#[derive(Debug, Clone)]
pub struct RasterizedGlyph {
    pub width: u32,
    pub height: u32,
    /// Offset from the pen position to the left edge of the image
    pub bearing_x: i32,
    /// Offset from the baseline up to the top edge of the image
    pub bearing_y: i32,
    /// Premultiplied RGBA, row-major, `width * height * 4` bytes
    pub pixels: Vec<u8>,
    pub is_colored: bool,
}

/// Rasterizes glyphs of one face, reusing swash's scaler caches across calls.
pub struct GlyphRasterizer {
    font: FontData,
    context: ScaleContext,
    hinting: bool,
}

impl GlyphRasterizer {
    pub fn new(font: FontData) -> Self {
        GlyphRasterizer {
            font,
            context: ScaleContext::new(),
            hinting: true,
        }
    }

    /// Enable or disable TrueType hinting.
    pub fn with_hinting(mut self, hinting: bool) -> Self {
        self.hinting = hinting;
        self
    }

    /// Rasterize `glyph_id` at `size_px`, tinting outline glyphs with `color`.
    ///
    /// Returns `None` when the glyph has no image (e.g. space) or when no
    /// source could render it.
    pub fn rasterize(
        &mut self,
        glyph_id: u16,
        size_px: f32,
        color: Rgb,
    ) -> Option<RasterizedGlyph> {
        self.rasterize_at(glyph_id, size_px, color, 0.0, 0.0)
    }

    /// Rasterize with the outline shifted by a sub-pixel pen fraction.
    ///
    /// `fract_x` and `fract_y` are in `[0, 1)` pixels, y pointing down. The
    /// returned bearings already include the shift, so the image is placed
    /// relative to the whole-pixel part of the pen position.
    pub fn rasterize_at(
        &mut self,
        glyph_id: u16,
        size_px: f32,
        color: Rgb,
        fract_x: f32,
        fract_y: f32,
    ) -> Option<RasterizedGlyph> {
        let font = self.font.as_swash();
        let mut scaler = self
            .context
            .builder(font)
            .size(size_px)
            .hint(self.hinting)
            .build();

        // Color sources first so emoji fonts render as colored bitmaps.
        // Regular text fonts have no color data and fall through to Outline.
        let image = Render::new(&[
            Source::ColorBitmap(StrikeWith::BestFit),
            Source::ColorOutline(0),
            Source::Outline,
        ])
        .format(Format::Alpha)
        // swash outlines are y-up
        .offset(Vector::new(fract_x, -fract_y))
        .render(&mut scaler, glyph_id)?;

        if image.placement.width == 0 || image.placement.height == 0 {
            return None;
        }

        let (pixels, is_colored) = match image.content {
            Content::Color => (premultiply_rgba(&image.data), true),
            Content::Mask => (tint_mask(&image.data, color), false),
            Content::SubpixelMask => {
                // Alpha format never yields subpixel masks; keep green coverage if it does
                let mask: Vec<u8> = image.data.chunks_exact(4).map(|px| px[1]).collect();
                (tint_mask(&mask, color), false)
            }
        };

        Some(RasterizedGlyph {
            width: image.placement.width,
            height: image.placement.height,
            bearing_x: image.placement.left,
            bearing_y: image.placement.top,
            pixels,
            is_colored,
        })
    }
}

fn premultiply_channel(channel: u8, alpha: u8) -> u8 {
    ((channel as u32 * alpha as u32 + 127) / 255) as u8
}

/// Expand an 8-bit coverage mask into premultiplied RGBA of `color`.
fn tint_mask(mask: &[u8], color: Rgb) -> Vec<u8> {
    let [r, g, b] = color;
    let mut pixels = Vec::with_capacity(mask.len() * 4);
    for &alpha in mask {
        pixels.extend_from_slice(&[
            premultiply_channel(r, alpha),
            premultiply_channel(g, alpha),
            premultiply_channel(b, alpha),
            alpha,
        ]);
    }
    pixels
}

/// Premultiply straight-alpha RGBA pixels.
fn premultiply_rgba(data: &[u8]) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(data.len());
    for px in data.chunks_exact(4) {
        let alpha = px[3];
        pixels.extend_from_slice(&[
            premultiply_channel(px[0], alpha),
            premultiply_channel(px[1], alpha),
            premultiply_channel(px[2], alpha),
            alpha,
        ]);
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tint_mask_premultiplies() {
        let pixels = tint_mask(&[0, 255, 128], [255, 0, 100]);
        assert_eq!(&pixels[0..4], &[0, 0, 0, 0]);
        assert_eq!(&pixels[4..8], &[255, 0, 100, 255]);
        assert_eq!(&pixels[8..12], &[128, 0, 50, 128]);
    }

    #[test]
    fn test_premultiply_rgba_keeps_opaque_pixels() {
        let pixels = premultiply_rgba(&[10, 20, 30, 255, 200, 200, 200, 0]);
        assert_eq!(pixels, vec![10, 20, 30, 255, 0, 0, 0, 0]);
    }
}
