//! Validated runtime configuration.
//!
//! `ViewConfig` is resolved once from the CLI options; nothing is read from
//! disk or the environment here.

use std::path::PathBuf;

use shape_view_fonts::ShapingOptions;
use shape_view_render::Rgb;
use thiserror::Error;

use crate::cli::RuntimeOptions;

/// Window title.
pub const WINDOW_TITLE: &str = "rustybuzz + winit + tiny-skia + swash";

/// Errors produced while validating CLI values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid color '{0}': expected #rrggbb")]
    InvalidColor(String),

    #[error("invalid font size {0}: must be a positive number")]
    InvalidFontSize(f32),

    #[error("invalid window size {width}x{height}: both dimensions must be positive")]
    InvalidWindowSize { width: u32, height: u32 },

    #[error("invalid --exit-after {0}: must be a non-negative number of seconds")]
    InvalidExitAfter(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    pub font_file: PathBuf,
    pub face_index: u32,
    pub text: String,
    /// Font size in logical pixels
    pub font_size: f32,
    /// Window size in logical pixels
    pub width: u32,
    pub height: u32,
    pub foreground: Rgb,
    pub background: Rgb,
    pub shaping: ShapingOptions,
    pub screenshot: Option<PathBuf>,
    pub exit_after: Option<std::time::Duration>,
}

impl ViewConfig {
    pub fn from_options(options: &RuntimeOptions) -> Result<Self, ConfigError> {
        if !options.font_size.is_finite() || options.font_size <= 0.0 {
            return Err(ConfigError::InvalidFontSize(options.font_size));
        }
        if options.width == 0 || options.height == 0 {
            return Err(ConfigError::InvalidWindowSize {
                width: options.width,
                height: options.height,
            });
        }
        let exit_after = match options.exit_after {
            Some(secs) if secs.is_finite() && secs >= 0.0 => {
                Some(std::time::Duration::from_secs_f64(secs))
            }
            Some(secs) => return Err(ConfigError::InvalidExitAfter(secs)),
            None => None,
        };

        Ok(ViewConfig {
            font_file: options.font_file.clone(),
            face_index: options.face_index,
            text: options.text.clone(),
            font_size: options.font_size,
            width: options.width,
            height: options.height,
            foreground: parse_hex_color(&options.foreground)?,
            background: parse_hex_color(&options.background)?,
            shaping: ShapingOptions::default(),
            screenshot: options.screenshot.clone(),
            exit_after,
        })
    }
}

/// Parse `#rrggbb` or `rrggbb` into an RGB triple.
pub fn parse_hex_color(value: &str) -> Result<Rgb, ConfigError> {
    let invalid = || ConfigError::InvalidColor(value.to_string());
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok([channel(0)?, channel(2)?, channel(4)?])
}
