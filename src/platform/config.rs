// Word of the Day - platform/config.rs
//
// Platform-specific configuration, data directory resolution, and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::model::Columns;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for application data and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/wotd/ or %APPDATA%\wotd\config\)
    pub config_dir: PathBuf,

    /// Data directory for the default store and the session file.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }

    /// Default store location when neither CLI nor config names one.
    pub fn default_store_path(&self) -> PathBuf {
        self.data_dir.join(constants::DEFAULT_STORE_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[store]` section.
    pub store: StoreSection,
    /// `[view]` section.
    pub view: ViewSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[store]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct StoreSection {
    /// Path of the CSV store.
    pub path: Option<String>,
    /// Header of the date column.
    pub date_column: Option<String>,
    /// Header of the word column.
    pub word_column: Option<String>,
    /// Header of the submitter column.
    pub submitter_column: Option<String>,
}

/// `[view]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ViewSection {
    /// Rows per page in the records table.
    pub page_size: Option<usize>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
    /// Log file path (empty = stderr only).
    pub file: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    // -- Store --
    /// Store path from config; `None` means the platform default.
    pub store_path: Option<PathBuf>,
    /// CSV column headers.
    pub columns: Columns,

    // -- View --
    /// Rows per page.
    pub page_size: usize,

    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Log file path.
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: None,
            columns: Columns::default(),
            page_size: constants::DEFAULT_PAGE_SIZE,
            log_level: None,
            log_file: None,
        }
    }
}

/// Location of config.toml inside `config_dir`.
pub fn config_path(config_dir: &Path) -> PathBuf {
    config_dir.join(constants::CONFIG_FILE_NAME)
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unreadable or unparseable, returns defaults with a warning
/// so the application still starts but the user is informed.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let path = config_path(config_dir);
    let mut warnings: Vec<String> = Vec::new();

    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let raw = match read_raw(&path) {
        Ok(raw) => raw,
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %path.display(), "Loaded config.toml");

    let (config, errors) = validate(raw);
    warnings.extend(errors.iter().map(|e| format!("{e}. Using default.")));

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}

fn read_raw(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Validate each field, accumulating every error rather than stopping at
/// the first one.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<ConfigError>) {
    let mut config = AppConfig::default();
    let mut errors = Vec::new();

    // -- Store: path --
    if let Some(path) = raw.store.path.filter(|p| !p.trim().is_empty()) {
        config.store_path = Some(PathBuf::from(path));
    }

    // -- Store: column names --
    let column_fields = [
        ("[store] date_column", raw.store.date_column, &mut config.columns.date),
        ("[store] word_column", raw.store.word_column, &mut config.columns.word),
        (
            "[store] submitter_column",
            raw.store.submitter_column,
            &mut config.columns.submitter,
        ),
    ];
    for (field, value, slot) in column_fields {
        let Some(value) = value else { continue };
        let trimmed = value.trim();
        if trimmed.is_empty() {
            errors.push(ConfigError::ValueOutOfRange {
                field: field.to_string(),
                value,
                expected: "a non-empty column header".to_string(),
            });
        } else {
            *slot = trimmed.to_string();
        }
    }

    let c = &config.columns;
    if c.date == c.word || c.date == c.submitter || c.word == c.submitter {
        errors.push(ConfigError::ValueOutOfRange {
            field: "[store] columns".to_string(),
            value: format!("{}, {}, {}", c.date, c.word, c.submitter),
            expected: "three distinct column headers".to_string(),
        });
        config.columns = Columns::default();
    }

    // -- View: page_size --
    if let Some(size) = raw.view.page_size {
        if (constants::MIN_PAGE_SIZE..=constants::MAX_PAGE_SIZE).contains(&size) {
            config.page_size = size;
        } else {
            errors.push(ConfigError::ValueOutOfRange {
                field: "[view] page_size".to_string(),
                value: size.to_string(),
                expected: format!(
                    "{}-{} (default {})",
                    constants::MIN_PAGE_SIZE,
                    constants::MAX_PAGE_SIZE,
                    constants::DEFAULT_PAGE_SIZE
                ),
            });
        }
    }

    // -- Logging: level --
    if let Some(level) = raw.logging.level {
        if constants::LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            errors.push(ConfigError::ValueOutOfRange {
                field: "[logging] level".to_string(),
                value: level,
                expected: constants::LOG_LEVELS.join(", "),
            });
        }
    }

    // -- Logging: file --
    if let Some(file) = raw.logging.file.filter(|f| !f.is_empty()) {
        config.log_file = Some(PathBuf::from(file));
    }

    (config, errors)
}
