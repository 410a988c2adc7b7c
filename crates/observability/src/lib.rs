//! Tracing/logging setup shared by binaries and tests.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing_setup::init();
}

/// Tracing configuration (filters, output format).
pub mod tracing_setup;
