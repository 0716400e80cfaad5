use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Log file used when the config names none.
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("buffet-demo.log")
}

/// Install the global subscriber, appending to `log_file`.
///
/// The TUI owns the screen, so nothing is written to stdout/stderr.
/// Verbosity comes from `RUST_LOG` (default `info`).
pub fn init_tracing(log_file: &Path) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
