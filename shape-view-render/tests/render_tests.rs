//! Integration tests for shape-view-render crate.

use shape_view_fonts::{FontData, ShapingOptions, TextShaper};
use shape_view_render::{BLACK, Canvas, GlyphRasterizer, TextScene, WHITE};

/// Embedded DejaVu Sans Mono for testing.
const TEST_FONT: &[u8] = include_bytes!("../../shape-view-fonts/fonts/DejaVuSansMono.ttf");

fn test_font() -> FontData {
    FontData::new(TEST_FONT.to_vec()).unwrap()
}

fn scene_for(text: &str, font_size: f32) -> TextScene {
    let run = TextShaper::new()
        .shape_text(&test_font(), text, font_size, &ShapingOptions::default())
        .unwrap();
    TextScene::new(run, font_size)
}

/// Horizontal extent of non-background pixels, if any.
fn ink_columns(canvas: &Canvas) -> Option<(u32, u32)> {
    let mut extent: Option<(u32, u32)> = None;
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            if canvas.pixel(x, y) != Some(WHITE) {
                extent = Some(match extent {
                    Some((lo, hi)) => (lo.min(x), hi.max(x)),
                    None => (x, x),
                });
            }
        }
    }
    extent
}

#[test]
fn test_rasterize_letter() {
    let font = test_font();
    let glyph_id = font.glyph_for_char('A');
    let mut rasterizer = GlyphRasterizer::new(font);
    let raster = rasterizer.rasterize(glyph_id, 32.0, BLACK).unwrap();
    assert!(raster.width > 0 && raster.height > 0);
    assert!(raster.bearing_y > 0, "'A' sits above the baseline");
    assert!(!raster.is_colored);
    assert_eq!(raster.pixels.len(), (raster.width * raster.height * 4) as usize);
}

#[test]
fn test_rasterize_keeps_subpixel_offset() {
    let font = test_font();
    let glyph_id = font.glyph_for_char('l');
    let mut rasterizer = GlyphRasterizer::new(font);
    let whole = rasterizer.rasterize(glyph_id, 32.0, BLACK).unwrap();
    let half = rasterizer
        .rasterize_at(glyph_id, 32.0, BLACK, 0.5, 0.0)
        .unwrap();
    assert!(
        (whole.bearing_x, &whole.pixels) != (half.bearing_x, &half.pixels),
        "half-pixel shift must change the coverage"
    );
}

#[test]
fn test_rasterize_space_has_no_image() {
    let font = test_font();
    let glyph_id = font.glyph_for_char(' ');
    let mut rasterizer = GlyphRasterizer::new(font);
    assert!(rasterizer.rasterize(glyph_id, 32.0, BLACK).is_none());
}

#[test]
fn test_paint_draws_centered_text() {
    let mut canvas = Canvas::new(200, 100, 1.0).unwrap();
    let mut rasterizer = GlyphRasterizer::new(test_font());
    let drawn = scene_for("Hi", 32.0).paint(&mut canvas, &mut rasterizer);
    assert_eq!(drawn, 2);

    let (left, right) = ink_columns(&canvas).expect("text should leave ink");
    // Two 19px-wide cells centered at x = 100
    assert!(left >= 60 && left < 100, "left edge at {left}");
    assert!(right > 100 && right <= 140, "right edge at {right}");

    // Corners stay background
    assert_eq!(canvas.pixel(0, 0), Some(WHITE));
    assert_eq!(canvas.pixel(199, 99), Some(WHITE));
}

#[test]
fn test_paint_uses_scene_colors() {
    let mut canvas = Canvas::new(200, 100, 1.0).unwrap();
    let mut rasterizer = GlyphRasterizer::new(test_font());
    scene_for("█", 32.0)
        .with_colors([255, 0, 0], [0, 0, 255])
        .paint(&mut canvas, &mut rasterizer);

    assert_eq!(canvas.pixel(0, 0), Some([0, 0, 255]));
    // The full block covers the center column just above the baseline
    assert_eq!(canvas.pixel(100, 45), Some([255, 0, 0]));
}

#[test]
fn test_paint_empty_scene_only_clears() {
    let mut canvas = Canvas::new(50, 20, 1.0).unwrap();
    let mut rasterizer = GlyphRasterizer::new(test_font());
    let drawn = scene_for("", 32.0).paint(&mut canvas, &mut rasterizer);
    assert_eq!(drawn, 0);
    assert!(ink_columns(&canvas).is_none());
}

#[test]
fn test_hidpi_canvas_scales_layout() {
    let mut rasterizer = GlyphRasterizer::new(test_font());
    let scene = scene_for("Hi", 32.0);

    let mut normal = Canvas::new(200, 100, 1.0).unwrap();
    scene.paint(&mut normal, &mut rasterizer);
    let mut retina = Canvas::new(400, 200, 2.0).unwrap();
    scene.paint(&mut retina, &mut rasterizer);

    let (normal_left, normal_right) = ink_columns(&normal).unwrap();
    let (retina_left, retina_right) = ink_columns(&retina).unwrap();
    assert!((retina_left as i64 - 2 * normal_left as i64).abs() <= 3);
    assert!((retina_right as i64 - 2 * normal_right as i64).abs() <= 3);
}

#[test]
fn test_save_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.png");

    let mut canvas = Canvas::new(200, 100, 1.0).unwrap();
    let mut rasterizer = GlyphRasterizer::new(test_font());
    scene_for("png", 32.0).paint(&mut canvas, &mut rasterizer);
    canvas.save_png(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn test_save_png_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let canvas = Canvas::new(10, 10, 1.0).unwrap();
    let result = canvas.save_png(&dir.path().join("nope").join("frame.png"));
    assert!(result.is_err());
}
