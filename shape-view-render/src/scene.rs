//! The single line of shaped text drawn every frame.

use shape_view_fonts::ShapedRun;

use crate::canvas::{BLACK, Canvas, Rgb, WHITE};
use crate::glyph::GlyphRasterizer;
use crate::layout::layout_line;

#[derive(Debug, Clone)]
pub struct TextScene {
    run: ShapedRun,
    font_size: f32,
    foreground: Rgb,
    background: Rgb,
}

impl TextScene {
    /// Black text on a white background.
    pub fn new(run: ShapedRun, font_size: f32) -> Self {
        TextScene {
            run,
            font_size,
            foreground: BLACK,
            background: WHITE,
        }
    }

    pub fn with_colors(mut self, foreground: Rgb, background: Rgb) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }

    pub fn run(&self) -> &ShapedRun {
        &self.run
    }

    /// Clear `canvas` and draw the line centered in its logical size.
    ///
    /// Returns the number of glyphs that produced an image.
    pub fn paint(&self, canvas: &mut Canvas, rasterizer: &mut GlyphRasterizer) -> usize {
        canvas.clear(self.background);
        let glyphs = layout_line(&self.run, canvas.logical_viewport());
        let drawn = canvas.draw_glyphs(rasterizer, &glyphs, self.font_size, self.foreground);
        log::trace!(
            "Painted {}/{} glyphs on {}x{} canvas (scale {})",
            drawn,
            glyphs.len(),
            canvas.width(),
            canvas.height(),
            canvas.scale()
        );
        drawn
    }
}
