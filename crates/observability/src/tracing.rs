//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Filter directives used when `RUST_LOG` is unset.
///
/// Scan-format rejections log at `debug` and would flood a busy station;
/// everything a station operator's support team cares about sits at `info`
/// and above.
const DEFAULT_DIRECTIVES: &str = "info";

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with_directives(DEFAULT_DIRECTIVES);
}

/// Initialize with explicit filter directives.
///
/// `RUST_LOG` still wins when it is set, so a deployed station can be turned
/// up to `debug` without a rebuild.
pub fn init_with_directives(directives: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
