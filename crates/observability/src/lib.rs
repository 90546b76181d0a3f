//! Logging setup for processes that embed the workflow core.
//!
//! The workflow crates only emit through the `tracing` macros and assume
//! something else owns the subscriber. A hosting binary calls [`init`] once
//! at startup; tests skip it entirely.

/// Tracing configuration (filter, output format).
pub mod tracing;

/// Initialize process-wide logging with the default filter.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
