//! Plain-text glyph report printed before the window opens.

use std::io::{self, Write};

use shape_view_fonts::ShapedRun;
use shape_view_render::snapped_width;

/// Write the glyph count, snapped line width and one line per glyph.
pub fn write_glyph_report(run: &ShapedRun, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "glyph_count={}", run.glyph_count())?;
    writeln!(out, "string_width={} ", snapped_width(run))?;
    for glyph in &run.glyphs {
        writeln!(
            out,
            "glyph_codepoint={} size=({}, {}) advance=({}, {})",
            glyph.glyph_id,
            format_g(glyph.x_advance),
            format_g(glyph.y_advance),
            format_g(glyph.x_advance),
            format_g(glyph.y_advance)
        )?;
    }
    Ok(())
}

/// Format like printf's `%g`: 6 significant digits, trailing zeros dropped,
/// scientific notation below 1e-4 or from 1e6 up.
fn format_g(value: f32) -> String {
    const PRECISION: i32 = 6;

    let value = f64::from(value);
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }

    // Rounding to the target precision first decides the exponent, as C does
    let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..PRECISION).contains(&exponent) {
        let decimals = (PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shape_view_fonts::ShapedGlyph;

    #[test]
    fn test_report_lines() {
        let glyph = |glyph_id, x_advance| ShapedGlyph {
            glyph_id,
            cluster: 0,
            x_advance,
            y_advance: 0.0,
            x_offset: 0.0,
            y_offset: 0.0,
        };
        let run = ShapedRun {
            text: "ab".to_string(),
            glyphs: vec![glyph(68, 19.5), glyph(69, 19.5)],
            total_advance: 39.0,
            cluster_boundaries: vec![0, 1],
        };

        let mut out = Vec::new();
        write_glyph_report(&run, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "glyph_count=2");
        // 19 + 19 after per-glyph truncation
        assert_eq!(lines[1], "string_width=38 ");
        assert_eq!(lines[2], "glyph_codepoint=68 size=(19.5, 0) advance=(19.5, 0)");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_report_rounds_like_printf() {
        let font = shape_view_fonts::FontData::new(
            include_bytes!("../shape-view-fonts/fonts/DejaVuSansMono.ttf").to_vec(),
        )
        .unwrap();
        let run = shape_view_fonts::TextShaper::new()
            .shape_text(&font, "ab", 32.0, &shape_view_fonts::ShapingOptions::default())
            .unwrap();

        let mut out = Vec::new();
        write_glyph_report(&run, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        // 1233 * 32 / 2048 = 19.265625
        assert_eq!(lines[1], "string_width=38 ");
        assert_eq!(
            lines[2],
            "glyph_codepoint=68 size=(19.2656, 0) advance=(19.2656, 0)"
        );
    }

    #[test]
    fn test_format_g() {
        assert_eq!(format_g(0.0), "0");
        assert_eq!(format_g(19.5), "19.5");
        assert_eq!(format_g(19.265625), "19.2656");
        assert_eq!(format_g(-2.5), "-2.5");
        assert_eq!(format_g(100000.0), "100000");
        assert_eq!(format_g(1234567.0), "1.23457e+06");
        assert_eq!(format_g(0.0001), "0.0001");
        assert_eq!(format_g(0.00001), "1e-05");
    }

    #[test]
    fn test_empty_report() {
        let mut out = Vec::new();
        write_glyph_report(&ShapedRun::empty(""), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "glyph_count=0\nstring_width=0 \n");
    }
}
