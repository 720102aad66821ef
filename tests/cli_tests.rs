//! End-to-end tests for argument handling and headless rendering.

use std::path::PathBuf;

use shape_view::app::App;
use shape_view::cli::{CliResult, RuntimeOptions, process_args};
use shape_view::config::ViewConfig;

fn test_font_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("shape-view-fonts/fonts/DejaVuSansMono.ttf")
}

fn parse(args: &[&str]) -> CliResult {
    process_args(std::iter::once("shape-view").chain(args.iter().copied()))
}

fn options(args: &[&str]) -> RuntimeOptions {
    match parse(args) {
        CliResult::Continue(options) => *options,
        CliResult::Exit(code) => panic!("unexpected exit {code}"),
    }
}

#[test]
fn test_missing_arguments_exit_with_one() {
    assert!(matches!(parse(&[]), CliResult::Exit(1)));
    assert!(matches!(parse(&["font.ttf"]), CliResult::Exit(1)));
}

#[test]
fn test_extra_argument_exits_with_one() {
    assert!(matches!(
        parse(&["font.ttf", "text", "surplus"]),
        CliResult::Exit(1)
    ));
}

#[test]
fn test_help_exits_with_zero() {
    assert!(matches!(parse(&["--help"]), CliResult::Exit(0)));
}

#[test]
fn test_two_arguments_continue() {
    let options = options(&["font.ttf", "Hello world"]);
    assert_eq!(options.font_file, PathBuf::from("font.ttf"));
    assert_eq!(options.text, "Hello world");
}

#[test]
fn test_text_may_start_with_dash() {
    let options = options(&["font.ttf", "-x-"]);
    assert_eq!(options.text, "-x-");
}

#[test]
fn test_screenshot_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("shot.png");
    let font = test_font_path();

    let options = options(&[
        "--screenshot",
        png.to_str().unwrap(),
        "--foreground",
        "#203040",
        font.to_str().unwrap(),
        "hello",
    ]);
    let config = ViewConfig::from_options(&options).unwrap();
    let app = App::new(config).unwrap();
    assert_eq!(app.scene().run().glyph_count(), 5);
    app.run().unwrap();

    let bytes = std::fs::read(&png).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn test_missing_font_fails_with_context() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.ttf");
    let options = options(&[missing.to_str().unwrap(), "text"]);
    let config = ViewConfig::from_options(&options).unwrap();

    let err = App::new(config).err().unwrap();
    let message = format!("{err:#}");
    assert!(message.contains("failed to load font"));
    assert!(message.contains("missing.ttf"));
}

#[test]
fn test_invalid_color_is_rejected() {
    let options = options(&["--background", "white", "font.ttf", "text"]);
    assert!(ViewConfig::from_options(&options).is_err());
}
