/// Logging bridge for shape-view
///
/// Routes every `log::info!()` etc. to a debug log file in the temp
/// directory (`/tmp/shape_view_debug.log` on Unix) and mirrors it to stderr.
/// Both are only active when a level is requested explicitly, via
/// `--log-level` or `RUST_LOG`; otherwise no file is touched.
///
/// Level precedence: `--log-level` > `RUST_LOG` > `info`.
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{LevelFilter, Log, Metadata, Record};

const LOG_FILE_NAME: &str = "shape_view_debug.log";

/// Path of the debug log file.
pub fn log_path() -> PathBuf {
    #[cfg(unix)]
    let dir = PathBuf::from("/tmp");
    #[cfg(not(unix))]
    let dir = std::env::temp_dir();
    dir.join(LOG_FILE_NAME)
}

struct LogBridge {
    level: LevelFilter,
    file: Mutex<Option<File>>,
    mirror_stderr: bool,
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(
            &get_timestamp(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );

        if let Some(file) = self.file.lock().as_mut() {
            // A failing log file must never take the demo down
            let _ = file.write_all(line.as_bytes());
        }
        if self.mirror_stderr {
            eprint!("{line}");
        }
    }

    fn flush(&self) {
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.flush();
        }
    }
}

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

fn format_record(timestamp: &str, level: log::Level, target: &str, msg: &str) -> String {
    format!("[{timestamp}] [{level:<5}] [{target}] {msg}\n")
}

/// Resolve the effective level and whether it was requested explicitly.
fn resolve_level(cli_level: Option<LevelFilter>, rust_log: Option<&str>) -> (LevelFilter, bool) {
    if let Some(level) = cli_level {
        return (level, true);
    }
    match rust_log.map(|v| LevelFilter::from_str(v.trim())) {
        Some(Ok(level)) => (level, true),
        _ => (LevelFilter::Info, false),
    }
}

/// Truncate and open the log file when logging was requested explicitly.
/// `None` when it was not, or when the file cannot be created.
fn log_file_for(explicit: bool, path: &Path) -> Option<File> {
    if !explicit {
        return None;
    }
    OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)
        .ok()
}

/// Install the logging bridge. Safe to call more than once; later calls are ignored.
pub fn init_log_bridge(cli_level: Option<LevelFilter>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let (level, explicit) = resolve_level(cli_level, rust_log.as_deref());

    let file = log_file_for(explicit, &log_path());

    let bridge = LogBridge {
        level,
        file: Mutex::new(file),
        mirror_stderr: explicit,
    };
    if log::set_boxed_logger(Box::new(bridge)).is_ok() {
        log::set_max_level(level);
        log::debug!(
            "shape-view {} logging at {} to {}",
            crate::VERSION,
            level,
            log_path().display()
        );
    }
}
