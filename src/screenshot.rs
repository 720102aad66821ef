//! Headless rendering of one frame to a PNG file.

use std::path::Path;

use anyhow::{Context, Result};
use shape_view_render::{Canvas, GlyphRasterizer, TextScene};

/// Paint `scene` on a `width` x `height` canvas at scale 1 and save it to `path`.
pub fn render_to_png(
    scene: &TextScene,
    rasterizer: &mut GlyphRasterizer,
    width: u32,
    height: u32,
    path: &Path,
) -> Result<()> {
    let mut canvas = Canvas::new(width, height, 1.0)?;
    let drawn = scene.paint(&mut canvas, rasterizer);
    log::info!(
        "Screenshot: {} of {} glyphs drawn",
        drawn,
        scene.run().glyph_count()
    );
    canvas
        .save_png(path)
        .with_context(|| format!("failed to write screenshot {}", path.display()))
}
