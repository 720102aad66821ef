use anyhow::Result;
use shape_view::app::App;
use shape_view::cli;
use shape_view::config::ViewConfig;

fn main() -> Result<()> {
    // Process CLI arguments first (before logging init for cleaner output)
    let runtime_options = match cli::process_cli() {
        cli::CliResult::Exit(code) => {
            if code == 0 {
                return Ok(());
            }
            // Non-zero exit: use process::exit so the shell sees the correct
            // exit code. No app state exists yet, so no destructors are skipped.
            std::process::exit(code);
        }
        cli::CliResult::Continue(options) => options,
    };
    // CLI --log-level flag takes precedence over RUST_LOG.
    shape_view::debug::init_log_bridge(runtime_options.log_level);

    log::info!("Starting shape-view {}", shape_view::VERSION);

    let result = ViewConfig::from_options(&runtime_options)
        .map_err(anyhow::Error::from)
        .and_then(App::new)
        .and_then(App::run);

    log::info!("shape-view exiting");
    log::logger().flush();

    match result {
        Ok(_) => Ok(()),
        Err(ref e) => {
            eprintln!("shape-view: error: {e:#}");
            // On Linux, provide a hint when the error looks like a missing display server
            #[cfg(target_os = "linux")]
            {
                let msg = format!("{e:?}").to_lowercase();
                if msg.contains("display")
                    || msg.contains("wayland")
                    || msg.contains("xcb")
                    || msg.contains("x server")
                {
                    eprintln!(
                        "shape-view: hint: no display server found; ensure DISPLAY (X11) or \
                         WAYLAND_DISPLAY (Wayland) is set, or use --screenshot"
                    );
                }
            }
            // Return the original error so main exits with code 1 (anyhow default)
            result
        }
    }
}
