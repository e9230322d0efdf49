//! File-backed tracing setup.
//!
//! The TUI owns the screen, so diagnostics go to a log file under the data
//! directory instead of stderr. Load failures, parse errors and storage
//! problems are visible only here; the UI stays silent about them.
//!
//! The filter is read from `TRACEVIEW_LOG` (standard env-filter syntax) and
//! defaults to `traceview=info`.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable controlling the log filter.
pub const LOG_ENV_VAR: &str = "TRACEVIEW_LOG";

/// Default log file location: `<data-dir>/traceview/traceview.log`.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("traceview").join("traceview.log"))
}

/// Initialize file-backed logging.
///
/// Returns the log file path on success. Failures (no data directory,
/// unwritable file, subscriber already set) are swallowed: the app must
/// start even when it cannot log.
pub fn init() -> Option<PathBuf> {
    let path = default_log_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok()?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new("traceview=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(path)
}
