//! Command-line interface for shape-view.
//!
//! Two positional arguments are required: the font file and the text to
//! shape. Every option has a default matching the classic 200x100 window
//! with 32px black-on-white text.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};

/// Usage line printed on any argument error.
pub const USAGE: &str = "usage: shape-view font-file.ttf text";

/// shape-view - shape a line of text with rustybuzz and display it
#[derive(Parser, Debug)]
#[command(name = "shape-view")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Font file to load (TTF, OTF or TTC)
    #[arg(value_name = "FONT_FILE")]
    pub font_file: PathBuf,

    /// Text to shape and display
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub text: String,

    /// Font size in logical pixels
    #[arg(long, value_name = "PX", default_value_t = 32.0)]
    pub font_size: f32,

    /// Window width in logical pixels
    #[arg(long, value_name = "PX", default_value_t = 200)]
    pub width: u32,

    /// Window height in logical pixels
    #[arg(long, value_name = "PX", default_value_t = 100)]
    pub height: u32,

    /// Face to load from a font collection (.ttc)
    #[arg(long, value_name = "INDEX", default_value_t = 0)]
    pub face_index: u32,

    /// Text color as #rrggbb
    #[arg(long, value_name = "HEX", default_value = "#000000")]
    pub foreground: String,

    /// Background color as #rrggbb
    #[arg(long, value_name = "HEX", default_value = "#ffffff")]
    pub background: String,

    /// Render one frame to a PNG file instead of opening a window
    #[arg(long, value_name = "PATH")]
    pub screenshot: Option<PathBuf>,

    /// Close the window after the specified number of seconds
    #[arg(long, value_name = "SECONDS")]
    pub exit_after: Option<f64>,

    /// Log level (overrides RUST_LOG)
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log levels accepted by `--log-level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Runtime options passed from CLI to the application
#[derive(Clone, Debug)]
pub struct RuntimeOptions {
    pub font_file: PathBuf,
    pub text: String,
    pub font_size: f32,
    pub width: u32,
    pub height: u32,
    pub face_index: u32,
    pub foreground: String,
    pub background: String,
    /// Render headless to this PNG path instead of opening a window
    pub screenshot: Option<PathBuf>,
    pub exit_after: Option<f64>,
    pub log_level: Option<log::LevelFilter>,
}

impl From<Cli> for RuntimeOptions {
    fn from(cli: Cli) -> Self {
        RuntimeOptions {
            font_file: cli.font_file,
            text: cli.text,
            font_size: cli.font_size,
            width: cli.width,
            height: cli.height,
            face_index: cli.face_index,
            foreground: cli.foreground,
            background: cli.background,
            screenshot: cli.screenshot,
            exit_after: cli.exit_after,
            log_level: cli.log_level.map(LogLevel::to_level_filter),
        }
    }
}

/// Result of CLI processing
#[derive(Debug)]
pub enum CliResult {
    /// Continue with normal application startup
    Continue(Box<RuntimeOptions>),
    /// Exit with the given code (help, version, or usage error)
    Exit(i32),
}

/// Process the process's own CLI arguments
pub fn process_cli() -> CliResult {
    process_args(std::env::args_os())
}

/// Process an explicit argument list (first item is the program name).
///
/// `--help` and `--version` exit with 0; any other parse failure, including a
/// wrong number of positional arguments, prints the usage line and exits with 1.
pub fn process_args<I, T>(args: I) -> CliResult
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => CliResult::Continue(Box::new(cli.into())),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            CliResult::Exit(0)
        }
        Err(e) => {
            eprintln!("{USAGE}");
            eprintln!("{}", e.render());
            CliResult::Exit(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["shape-view", "font.ttf", "hello"]).unwrap();
        assert_eq!(cli.font_file, PathBuf::from("font.ttf"));
        assert_eq!(cli.text, "hello");
        assert_eq!(cli.font_size, 32.0);
        assert_eq!((cli.width, cli.height), (200, 100));
        assert_eq!(cli.face_index, 0);
        assert!(cli.screenshot.is_none());
        assert!(cli.log_level.is_none());
    }

    #[test]
    fn test_log_level_maps_to_filter() {
        let cli =
            Cli::try_parse_from(["shape-view", "--log-level", "debug", "f.ttf", "x"]).unwrap();
        let options = RuntimeOptions::from(cli);
        assert_eq!(options.log_level, Some(log::LevelFilter::Debug));
    }
}
