// Word of the Day - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.
//
// A missing store file, an unparseable date cell, and deletion positions
// outside the table are not errors: each is handled where it occurs.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all application operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum WotdError {
    /// Reading or writing the CSV store failed.
    Store(StoreError),

    /// Export operation failed.
    Export(ExportError),

    /// A new entry was rejected before it reached the store.
    Entry(EntryError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for WotdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store(e) => write!(f, "Store error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Entry(e) => write!(f, "{e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for WotdError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Entry(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Store errors
// ---------------------------------------------------------------------------

/// Errors raised while reading or writing the CSV store.
#[derive(Debug)]
pub enum StoreError {
    /// I/O error other than "file not found" on read, or any write failure.
    Io { path: PathBuf, source: io::Error },

    /// The CSV content is malformed or could not be serialised.
    Csv { path: PathBuf, source: csv::Error },

    /// The header row lacks one of the configured column names.
    MissingColumn { path: PathBuf, column: String },

    /// The store failed to load, so writing it would discard its contents.
    /// Cleared by a successful reload or import.
    ReadOnly { path: PathBuf },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot access store '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "malformed CSV in '{}': {source}", path.display())
            }
            Self::MissingColumn { path, column } => write!(
                f,
                "'{}' has no '{column}' column. \
                 Check the [store] column names in config.toml.",
                path.display()
            ),
            Self::ReadOnly { path } => write!(
                f,
                "'{}' could not be read, so it will not be overwritten. \
                 Reload or import the store first.",
                path.display()
            ),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::MissingColumn { .. } | Self::ReadOnly { .. } => None,
        }
    }
}

impl From<StoreError> for WotdError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export destination.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for WotdError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Entry errors
// ---------------------------------------------------------------------------

/// Reasons a new word-of-the-day entry is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryError {
    /// The word field was empty or whitespace.
    EmptyWord,

    /// The submitter field was empty or whitespace.
    EmptySubmitter,
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWord => write!(f, "Enter the word before adding it."),
            Self::EmptySubmitter => write!(f, "Enter the submitter's name before adding."),
        }
    }
}

impl std::error::Error for EntryError {}

impl From<EntryError> for WotdError {
    fn from(e: EntryError) -> Self {
        Self::Entry(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for application results.
pub type Result<T> = std::result::Result<T, WotdError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_missing_column_message_names_column() {
        let err = StoreError::MissingColumn {
            path: PathBuf::from("words.csv"),
            column: "datum".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("words.csv"));
        assert!(msg.contains("'datum'"));
    }

    #[test]
    fn test_store_error_chain_preserved() {
        let err: WotdError = StoreError::Io {
            path: PathBuf::from("words.csv"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        let store = err.source().expect("store error as source");
        assert!(store.source().is_some(), "io error must stay in the chain");
    }

    #[test]
    fn test_read_only_store_has_no_io_source() {
        let err: WotdError = StoreError::ReadOnly {
            path: PathBuf::from("words.csv"),
        }
        .into();
        let store = err.source().expect("store error as source");
        assert!(store.source().is_none());
        assert!(err.to_string().contains("will not be overwritten"));
    }

    #[test]
    fn test_entry_error_display_is_user_facing() {
        let err: WotdError = EntryError::EmptySubmitter.into();
        assert_eq!(err.to_string(), "Enter the submitter's name before adding.");
    }
}
