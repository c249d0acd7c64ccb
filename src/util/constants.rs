// Word of the Day - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Word of the Day";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "wotd";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Store
// =============================================================================

/// Store file name used when neither the CLI nor config.toml names one.
pub const DEFAULT_STORE_FILE_NAME: &str = "words.csv";

/// Default header for the date column.
pub const DEFAULT_DATE_COLUMN: &str = "date";

/// Default header for the word column.
pub const DEFAULT_WORD_COLUMN: &str = "word";

/// Default header for the submitter column.
pub const DEFAULT_SUBMITTER_COLUMN: &str = "submitter";

/// Date format used when writing dates back to the store.
pub const STORE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepted date formats when reading the store, tried in order.
///
/// The first entry is the canonical write format. The datetime forms cover
/// files written by spreadsheet tools that append a midnight time.
pub const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y.%m.%d",
    "%Y/%m/%d",
];

/// Label used in error messages for CSV content that did not come from disk.
pub const UPLOAD_ORIGIN: &str = "<upload>";

/// Maximum size of a CSV file accepted through the import dialog.
pub const MAX_IMPORT_BYTES: u64 = 64 * 1024 * 1024; // 64 MiB

// =============================================================================
// Pagination
// =============================================================================

/// Rows per page in the records table.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Smallest accepted page size.
pub const MIN_PAGE_SIZE: usize = 1;

/// Largest accepted page size (prevents configuration mistakes).
pub const MAX_PAGE_SIZE: usize = 10_000;

// =============================================================================
// UI
// =============================================================================

/// Maximum number of warnings retained for display.
pub const MAX_WARNINGS: usize = 100;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Valid values for `[logging] level`.
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Session persistence file name (stored in the platform data directory).
pub const SESSION_FILE_NAME: &str = "session.json";
