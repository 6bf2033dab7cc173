//! Tracing setup.
//!
//! Logging is off unless `TRI_STATE_LOG` names a file. Writing to the
//! terminal would corrupt the interactive form, so logs only ever go to
//! that file. `RUST_LOG` controls the filter (default `info`).

use std::path::Path;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log file path.
pub const LOG_ENV_VAR: &str = "TRI_STATE_LOG";

/// Initialize tracing from the environment. No-op when `TRI_STATE_LOG` is unset.
pub fn init_tracing() {
    let Some(log_path) = std::env::var_os(LOG_ENV_VAR) else {
        return;
    };
    init_file_tracing(Path::new(&log_path));
}

/// Send tracing output to `path`, appending.
fn init_file_tracing(path: &Path) {
    let file = match std::fs::OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: Failed to open log file {}: {}", path.display(), e);
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    // A second init (e.g. from tests) is harmless; keep the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}
