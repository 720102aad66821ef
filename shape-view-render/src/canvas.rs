//! CPU canvas backed by a tiny-skia pixmap.
//!
//! The canvas is sized in physical pixels. Glyph positions and the font size
//! arrive in logical pixels and are multiplied by the canvas scale factor,
//! so HiDPI windows render at native resolution.

use std::path::Path;

use tiny_skia::{Color, IntSize, Pixmap, PixmapPaint, Transform};

use crate::error::RenderError;
use crate::glyph::GlyphRasterizer;
use crate::layout::{PositionedGlyph, Viewport};

/// An opaque RGB color.
pub type Rgb = [u8; 3];

pub const BLACK: Rgb = [0, 0, 0];
pub const WHITE: Rgb = [255, 255, 255];

pub struct Canvas {
    pixmap: Pixmap,
    scale: f32,
}

impl Canvas {
    /// Create a canvas of `width` x `height` physical pixels.
    ///
    /// `scale` is the ratio of physical to logical pixels; non-positive or
    /// non-finite values are treated as 1.0.
    pub fn new(width: u32, height: u32, scale: f32) -> Result<Self, RenderError> {
        let pixmap =
            Pixmap::new(width, height).ok_or(RenderError::InvalidCanvasSize { width, height })?;
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };
        Ok(Canvas { pixmap, scale })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Canvas size in logical pixels.
    pub fn logical_viewport(&self) -> Viewport {
        Viewport::new(
            (self.width() as f32 / self.scale).round() as u32,
            (self.height() as f32 / self.scale).round() as u32,
        )
    }

    /// Fill the whole canvas with `color`.
    pub fn clear(&mut self, color: Rgb) {
        let [r, g, b] = color;
        self.pixmap.fill(Color::from_rgba8(r, g, b, 255));
    }

    /// Rasterize and composite `glyphs`, returning how many produced an image.
    pub fn draw_glyphs(
        &mut self,
        rasterizer: &mut GlyphRasterizer,
        glyphs: &[PositionedGlyph],
        font_size: f32,
        color: Rgb,
    ) -> usize {
        let size_px = font_size * self.scale;
        let mut drawn = 0;

        for glyph in glyphs {
            let x = glyph.x * self.scale;
            let y = glyph.y * self.scale;
            let (pen_x, pen_y) = (x.floor(), y.floor());
            let Some(raster) =
                rasterizer.rasterize_at(glyph.glyph_id, size_px, color, x - pen_x, y - pen_y)
            else {
                continue;
            };
            let Some(size) = IntSize::from_wh(raster.width, raster.height) else {
                continue;
            };
            let Some(image) = Pixmap::from_vec(raster.pixels, size) else {
                log::warn!("Glyph {} produced malformed pixels", glyph.glyph_id);
                continue;
            };

            self.pixmap.draw_pixmap(
                pen_x as i32 + raster.bearing_x,
                pen_y as i32 - raster.bearing_y,
                image.as_ref(),
                &PixmapPaint::default(),
                Transform::identity(),
                None,
            );
            drawn += 1;
        }

        drawn
    }

    /// Color of one pixel with alpha removed, `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        // tiny-skia only bounds-checks the flat index, so x past the row end wraps
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some([color.red(), color.green(), color.blue()])
    }

    /// Copy the canvas into a `0x00RRGGBB` framebuffer of the same size.
    pub fn copy_to_xrgb(&self, out: &mut [u32]) -> Result<(), RenderError> {
        let pixels = self.pixmap.pixels();
        if out.len() != pixels.len() {
            return Err(RenderError::BufferSizeMismatch {
                expected: pixels.len(),
                actual: out.len(),
            });
        }
        for (dst, src) in out.iter_mut().zip(pixels) {
            let c = src.demultiply();
            *dst = (u32::from(c.red()) << 16) | (u32::from(c.green()) << 8) | u32::from(c.blue());
        }
        Ok(())
    }

    /// Write the canvas to `path` as PNG.
    pub fn save_png(&self, path: &Path) -> Result<(), RenderError> {
        self.pixmap
            .save_png(path)
            .map_err(|e| RenderError::Png {
                path: path.display().to_string(),
                details: e.to_string(),
            })?;
        log::info!(
            "Saved {}x{} canvas to {}",
            self.width(),
            self.height(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_is_rejected() {
        assert!(matches!(
            Canvas::new(0, 10, 1.0),
            Err(RenderError::InvalidCanvasSize { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_clear_and_export() {
        let mut canvas = Canvas::new(3, 2, 1.0).unwrap();
        canvas.clear([0x12, 0x34, 0x56]);
        assert_eq!(canvas.pixel(2, 1), Some([0x12, 0x34, 0x56]));
        assert_eq!(canvas.pixel(3, 0), None);

        let mut buffer = vec![0u32; 6];
        canvas.copy_to_xrgb(&mut buffer).unwrap();
        assert!(buffer.iter().all(|&px| px == 0x0012_3456));
    }

    #[test]
    fn test_pixel_outside_row_does_not_wrap() {
        let mut canvas = Canvas::new(3, 2, 1.0).unwrap();
        canvas.clear(WHITE);
        assert_eq!(canvas.pixel(0, 1), Some(WHITE));
        assert_eq!(canvas.pixel(3, 0), None);
        assert_eq!(canvas.pixel(5, 0), None);
        assert_eq!(canvas.pixel(0, 2), None);
    }

    #[test]
    fn test_export_checks_buffer_size() {
        let canvas = Canvas::new(4, 4, 1.0).unwrap();
        let mut buffer = vec![0u32; 15];
        assert!(matches!(
            canvas.copy_to_xrgb(&mut buffer),
            Err(RenderError::BufferSizeMismatch {
                expected: 16,
                actual: 15
            })
        ));
    }

    #[test]
    fn test_logical_viewport_divides_scale() {
        let canvas = Canvas::new(400, 200, 2.0).unwrap();
        assert_eq!(canvas.logical_viewport(), Viewport::new(200, 100));
        let fallback = Canvas::new(40, 20, f32::NAN).unwrap();
        assert_eq!(fallback.scale(), 1.0);
    }
}
