// Library exports for testing and potential library use

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod app;
pub mod cli;
pub mod config;
pub mod debug;
pub mod report;
pub mod screenshot;

pub use app::App;
pub use config::{ConfigError, ViewConfig};
