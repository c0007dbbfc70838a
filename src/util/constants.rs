// logtriage - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "logtriage";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG nor --debug is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Classification output naming
// =============================================================================

/// Filename prefix for the error bucket output file.
/// Full name: `error_messages_from_<source-stem>.txt`.
pub const ERROR_OUTPUT_PREFIX: &str = "error_messages_from_";

/// Filename prefix for the warning bucket output file.
pub const WARNING_OUTPUT_PREFIX: &str = "warning_messages_from_";

/// Extension for bucket output files.
pub const OUTPUT_EXTENSION: &str = "txt";

// =============================================================================
// Input limits
// =============================================================================

/// Blob size in bytes above which a "large input" warning is logged.
/// The whole blob is held in memory and scanned in full, so very large
/// inputs cost proportional memory.
pub const LARGE_BLOB_WARN_BYTES: u64 = 100 * 1024 * 1024; // 100 MB

// =============================================================================
// Epoch conversion
// =============================================================================

/// Integer epoch values at or above this magnitude are interpreted as
/// milliseconds rather than seconds. 100_000_000_000 seconds is the year
/// 5138, so any plausible millisecond timestamp clears the threshold while
/// any plausible second timestamp stays below it.
pub const EPOCH_MILLIS_THRESHOLD: i64 = 100_000_000_000;
