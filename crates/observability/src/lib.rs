//! Tracing/logging setup shared by stockdesk binaries.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::LogFormat;

/// Initialize process-wide tracing with human-readable output.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(LogFormat::Text);
}

/// Initialize process-wide tracing with an explicit output format.
pub fn init_with(format: LogFormat) {
    tracing::init(format);
}
