// LogTally - util/constants.rs
//
// Single source of truth for named formats, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogTally";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Line Source
// =============================================================================

/// File suffixes accepted by the Line Source. Anything else is rejected
/// with a diagnostic and an empty collection.
pub const ACCEPTED_EXTENSIONS: &[&str] = &[".log", ".txt"];

// =============================================================================
// Statistics Engine
// =============================================================================

/// chrono format for the leading `YYYY-MM-DD HH:MM:SS` timestamp that
/// recency ordering depends on.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Number of recent entries included in a compiled summary when the caller
/// does not ask for a specific count.
pub const DEFAULT_RECENT_COUNT: i64 = 5;

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG nor --debug is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";
