// Word of the Day - app/session.rs
//
// Session persistence: save and restore the user's search inputs and the
// records page between application restarts.
//
// Written with the same temp-and-rename helper as the store. A session
// that cannot be read is ignored and the app starts fresh.
//
// Records and selections are not persisted: positions are reassigned on
// every load, so a saved selection could point at different rows.

use crate::core::store;
use crate::util::constants::SESSION_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Version stamp for forward-compatibility checks.
///
/// Version mismatches silently discard the session.
pub const SESSION_VERSION: u32 = 1;

/// Persistent session snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    /// Schema version; must equal `SESSION_VERSION` to be accepted.
    pub version: u32,

    /// Text in the word search box.
    #[serde(default)]
    pub word_query: String,

    /// Month and day last used for day search.
    #[serde(default)]
    pub day: Option<(u32, u32)>,

    /// Whether the day search results were showing.
    #[serde(default)]
    pub day_search_active: bool,

    /// Keyword filter over the records table.
    #[serde(default)]
    pub keyword: String,

    /// 1-based records page. Clamped against the table on restore.
    #[serde(default = "default_page")]
    pub page: usize,
}

fn default_page() -> usize {
    1
}

/// Resolve the session file path from the platform data directory.
pub fn session_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SESSION_FILE_NAME)
}

/// Write `data` to `path`, replacing any previous session atomically.
///
/// The error is a one-line description for the warnings list.
pub fn save(data: &SessionData, path: &Path) -> Result<(), String> {
    let json = serde_json::to_vec_pretty(data).map_err(|e| format!("cannot encode session: {e}"))?;
    store::write_atomic(path, &json)
        .map_err(|e| format!("cannot write session '{}': {e}", path.display()))?;

    tracing::debug!(path = %path.display(), "Session saved");
    Ok(())
}

/// Read the session at `path`.
///
/// `None` means "start fresh": no file yet, unreadable JSON, or a file
/// written by a different `SESSION_VERSION`.
pub fn load(path: &Path) -> Option<SessionData> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return None,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Session unreadable");
            return None;
        }
    };

    match serde_json::from_slice::<SessionData>(&bytes) {
        Ok(data) if data.version == SESSION_VERSION => {
            tracing::info!(path = %path.display(), page = data.page, "Session restored");
            Some(data)
        }
        Ok(data) => {
            tracing::warn!(
                found = data.version,
                expected = SESSION_VERSION,
                "Ignoring session from another version"
            );
            None
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Ignoring malformed session");
            None
        }
    }
}
