//! Single-line glyph placement.
//!
//! Converts a shaped run (y-up advances in pixels) into absolute y-down
//! baseline positions centered in a viewport. The pen moves in whole pixels:
//! every advance is truncated before it is added, and the centering width is
//! accumulated the same way.

use shape_view_fonts::ShapedRun;

/// A glyph with its absolute baseline origin, in logical pixels (y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedGlyph {
    /// Glyph ID in the shaped face
    pub glyph_id: u16,
    /// Horizontal origin of the glyph
    pub x: f32,
    /// Baseline position of the glyph
    pub y: f32,
}

/// Logical size of the area the line is centered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Viewport { width, height }
    }
}

/// Line width in whole pixels, truncating after every advance.
pub fn snapped_width(run: &ShapedRun) -> i32 {
    run.glyphs
        .iter()
        .fold(0i32, |width, glyph| (width as f32 + glyph.x_advance) as i32)
}

/// Place every glyph of `run` on one baseline centered in `viewport`.
///
/// The baseline sits at half the viewport height. A line wider than the
/// viewport gets a negative origin and is clipped by the canvas.
pub fn layout_line(run: &ShapedRun, viewport: Viewport) -> Vec<PositionedGlyph> {
    let origin_x = viewport.width as i32 / 2 - snapped_width(run) / 2;
    let baseline_y = viewport.height as i32 / 2;

    let mut pen_x = 0i32;
    let mut pen_y = 0i32;
    let mut placed = Vec::with_capacity(run.glyphs.len());

    for glyph in &run.glyphs {
        let Ok(glyph_id) = u16::try_from(glyph.glyph_id) else {
            log::warn!("Skipping glyph id {} outside u16 range", glyph.glyph_id);
            continue;
        };
        placed.push(PositionedGlyph {
            glyph_id,
            x: (origin_x + pen_x) as f32 + glyph.x_offset,
            // Shaper offsets are y-up, the canvas is y-down
            y: baseline_y as f32 - (pen_y as f32 + glyph.y_offset),
        });
        pen_x = (pen_x as f32 + glyph.x_advance) as i32;
        pen_y = (pen_y as f32 + glyph.y_advance) as i32;
    }

    placed
}
