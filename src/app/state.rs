// Word of the Day - app/state.rs
//
// The session context: the loaded table, the user's search inputs, derived
// views, the records page, and the deletion selection. Owned by the
// eframe::App implementation and passed explicitly to every panel; there is
// no global state.
//
// Every handler is one synchronous pass (load or compute, then persist if
// needed). Derived views are recomputed from the table after any change to
// it, and the selection is page-scoped: it is cleared whenever the page,
// the keyword filter, or the table changes.

use crate::app::session::{self, SessionData, SESSION_VERSION};
use crate::core::export;
use crate::core::model::Table;
use crate::core::paging::{self, Page, Selection};
use crate::core::query::{self, FilteredView};
use crate::core::store;
use crate::platform::config::AppConfig;
use crate::platform::fs;
use crate::util::constants;
use crate::util::error::{EntryError, Result, StoreError, WotdError};
use chrono::Datelike;
use std::path::{Path, PathBuf};

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Validated configuration.
    pub config: AppConfig,

    /// CSV store backing the table.
    pub store_path: PathBuf,

    /// Where the session snapshot is persisted (None disables persistence).
    pub session_path: Option<PathBuf>,

    /// All records loaded from the store.
    pub table: Table,

    /// True when the store could not be read. Writes that would overwrite it
    /// (add, delete) are refused until a successful reload or import.
    pub store_unreadable: bool,

    /// Word search input.
    pub word_query: String,

    /// Word search results; `None` when no search has been performed.
    pub word_results: Option<FilteredView>,

    /// Day search month input (1-12).
    pub day_month: u32,

    /// Day search day input (1-31).
    pub day_day: u32,

    /// Day search results; `None` until the user runs a day search.
    pub day_results: Option<FilteredView>,

    /// Keyword filter over the records table.
    pub keyword: String,

    /// Records matching `keyword`, in table order.
    pub records_view: FilteredView,

    /// Current 1-based records page.
    pub page: usize,

    /// Rows ticked for deletion on the current page.
    pub selection: Selection,

    /// New entry: word input.
    pub new_word: String,

    /// New entry: submitter input.
    pub new_submitter: String,

    /// Status message for the status bar.
    pub status_message: String,

    /// Non-fatal warnings (config problems, failed session saves).
    pub warnings: Vec<String>,

    /// Whether the About dialog is open.
    pub show_about: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state with an empty table. Call [`AppState::open`] to
    /// load the store.
    pub fn new(config: AppConfig, store_path: PathBuf, debug_mode: bool) -> Self {
        let today = store::today();
        Self {
            table: Table::empty(config.columns.clone()),
            config,
            store_path,
            session_path: None,
            store_unreadable: false,
            word_query: String::new(),
            word_results: None,
            day_month: today.month(),
            day_day: today.day(),
            day_results: None,
            keyword: String::new(),
            records_view: FilteredView::default(),
            page: 1,
            selection: Selection::new(),
            new_word: String::new(),
            new_submitter: String::new(),
            status_message: "Ready.".to_string(),
            warnings: Vec::new(),
            show_about: false,
            debug_mode,
        }
    }

    // =========================================================================
    // Store
    // =========================================================================

    /// Load the store from `store_path`.
    ///
    /// On failure the table is left empty, writes are blocked, and the error
    /// is shown in the status bar.
    pub fn open(&mut self) -> Result<()> {
        let result = store::load(&self.store_path, &self.config.columns);
        match result {
            Ok(table) => {
                self.store_unreadable = false;
                self.replace_table(table);
                self.status_message = format!(
                    "Loaded {} word(s) from {}.",
                    self.table.len(),
                    self.store_path.display()
                );
                Ok(())
            }
            Err(e) => {
                self.store_unreadable = true;
                self.replace_table(Table::empty(self.config.columns.clone()));
                self.report("Loading the store", Err(e.into()))
            }
        }
    }

    /// Swap in a new table and rebuild every derived view.
    fn replace_table(&mut self, table: Table) {
        self.table = table;
        self.selection.clear();
        self.refresh_views();
    }

    /// Recompute all views from the current table and inputs.
    pub fn refresh_views(&mut self) {
        self.word_results = query::search_by_word(&self.table, &self.word_query);
        if self.day_results.is_some() {
            self.day_results = Some(query::search_by_day(
                &self.table,
                self.day_month,
                self.day_day,
            ));
        }
        self.records_view = query::keyword_filter(&self.table, &self.keyword);
        self.page = self.current_page().number;
    }

    fn ensure_writable(&self) -> Result<()> {
        if self.store_unreadable {
            return Err(StoreError::ReadOnly {
                path: self.store_path.clone(),
            }
            .into());
        }
        Ok(())
    }

    // =========================================================================
    // Searches
    // =========================================================================

    /// Re-run the word search for the current `word_query`.
    pub fn run_word_search(&mut self) {
        self.word_results = query::search_by_word(&self.table, &self.word_query);
    }

    /// Run the day search for `day_month`/`day_day`.
    pub fn run_day_search(&mut self) {
        self.day_month = self.day_month.clamp(1, 12);
        self.day_day = self.day_day.clamp(1, 31);
        self.day_results = Some(query::search_by_day(
            &self.table,
            self.day_month,
            self.day_day,
        ));
    }

    /// Set the keyword filter; returns to page 1 and clears the selection.
    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
        self.records_view = query::keyword_filter(&self.table, &self.keyword);
        self.page = 1;
        self.selection.clear();
    }

    // =========================================================================
    // Paging & selection
    // =========================================================================

    /// The records page currently shown.
    pub fn current_page(&self) -> Page<'_> {
        paging::paginate(&self.records_view, self.page, self.config.page_size)
    }

    /// Jump to `page` (clamped). Clears the selection if the page changes.
    pub fn set_page(&mut self, page: usize) {
        let clamped = paging::paginate(&self.records_view, page, self.config.page_size).number;
        if clamped != self.page {
            self.selection.clear();
        }
        self.page = clamped;
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// Tick or untick one table position. Returns the new state.
    pub fn toggle_selected(&mut self, position: usize) -> bool {
        self.selection.toggle(position)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Validate and append the new entry with today's date, then persist.
    pub fn add_entry(&mut self) -> Result<()> {
        let result = self.try_add_entry();
        self.report("Adding the word", result)
    }

    fn try_add_entry(&mut self) -> Result<()> {
        let word = self.new_word.trim().to_string();
        let submitter = self.new_submitter.trim().to_string();
        if word.is_empty() {
            return Err(EntryError::EmptyWord.into());
        }
        if submitter.is_empty() {
            return Err(EntryError::EmptySubmitter.into());
        }
        self.ensure_writable()?;

        let table = store::append(self.table.clone(), None, &word, &submitter);
        store::save(&table, &self.store_path)?;

        self.replace_table(table);
        self.new_word.clear();
        self.new_submitter.clear();
        tracing::info!(records = self.table.len(), "Word added");
        self.status_message = format!("Added '{word}' ({submitter}).");
        Ok(())
    }

    /// Delete every selected row from the full table and persist.
    ///
    /// Returns how many rows were removed. The table is only replaced once
    /// the store has been written successfully.
    pub fn delete_selected(&mut self) -> Result<usize> {
        let result = self.try_delete_selected();
        self.report("Deleting rows", result)
    }

    fn try_delete_selected(&mut self) -> Result<usize> {
        if self.selection.is_empty() {
            self.status_message = "No rows selected.".to_string();
            return Ok(0);
        }
        self.ensure_writable()?;

        let requested = self.selection.len();
        let deletion = export::delete(&self.table, self.selection.positions());
        store::save(&deletion.table, &self.store_path)?;

        self.replace_table(deletion.table);
        if deletion.removed == requested {
            self.status_message = format!("Deleted {} row(s).", deletion.removed);
        } else {
            tracing::warn!(
                requested,
                removed = deletion.removed,
                "Some selected rows no longer existed"
            );
            self.status_message = format!(
                "Deleted {} of {requested} selected row(s); the rest no longer existed.",
                deletion.removed
            );
        }
        Ok(deletion.removed)
    }

    /// Write the full table as CSV to `dest`.
    pub fn export_to(&mut self, dest: &Path) -> Result<usize> {
        let result = export::export_to_file(&self.table, dest).map_err(WotdError::from);
        if let Ok(n) = &result {
            self.status_message = format!("Exported {n} word(s) to {}.", dest.display());
        }
        self.report("Export", result)
    }

    /// Replace the table with the CSV at `src` and persist it.
    ///
    /// On any failure the current table is left untouched.
    pub fn import_from(&mut self, src: &Path) -> Result<usize> {
        let result = self.try_import_from(src);
        self.report("Import", result)
    }

    fn try_import_from(&mut self, src: &Path) -> Result<usize> {
        let bytes =
            fs::read_capped(src, constants::MAX_IMPORT_BYTES).map_err(|e| WotdError::Io {
                path: src.to_path_buf(),
                operation: "import",
                source: e,
            })?;
        let table = store::import_bytes(&bytes, &self.config.columns)?;
        store::save(&table, &self.store_path)?;

        let n = table.len();
        self.store_unreadable = false;
        self.replace_table(table);
        self.page = 1;
        tracing::info!(path = %src.display(), records = n, "Store replaced by import");
        self.status_message = format!("Imported {n} word(s) from {}.", src.display());
        Ok(n)
    }

    /// Surface a failed handler in the status bar; pass the result through.
    fn report<T>(&mut self, action: &str, result: Result<T>) -> Result<T> {
        if let Err(ref e) = result {
            tracing::warn!(error = %e, action, "Interaction failed");
            self.status_message = match e {
                WotdError::Entry(entry) => entry.to_string(),
                other => format!("{action} failed: {other}"),
            };
        }
        result
    }

    /// Record a non-fatal warning, keeping the list bounded.
    pub fn push_warning(&mut self, warning: String) {
        if self.warnings.len() >= constants::MAX_WARNINGS {
            self.warnings.remove(0);
        }
        self.warnings.push(warning);
    }

    // =========================================================================
    // Session persistence
    // =========================================================================

    /// The persistable subset of this state.
    pub fn snapshot(&self) -> SessionData {
        SessionData {
            version: SESSION_VERSION,
            word_query: self.word_query.clone(),
            day: Some((self.day_month, self.day_day)),
            day_search_active: self.day_results.is_some(),
            keyword: self.keyword.clone(),
            page: self.page,
        }
    }

    /// Apply a previously saved snapshot and recompute every view.
    pub fn restore(&mut self, data: SessionData) {
        self.word_query = data.word_query;
        if let Some((month, day)) = data.day {
            self.day_month = month.clamp(1, 12);
            self.day_day = day.clamp(1, 31);
        }
        self.keyword = data.keyword;
        self.page = data.page;
        self.selection.clear();
        self.day_results = if data.day_search_active {
            Some(FilteredView::default())
        } else {
            None
        };
        self.refresh_views();
    }

    /// Restore the session from `session_path`, if one was saved.
    pub fn load_session(&mut self) {
        if let Some(data) = self.session_path.as_deref().and_then(session::load) {
            self.restore(data);
        }
    }

    /// Persist the session snapshot. Failures are logged, never surfaced.
    pub fn save_session(&mut self) {
        let Some(path) = self.session_path.clone() else {
            return;
        };
        if let Err(e) = session::save(&self.snapshot(), &path) {
            tracing::warn!(error = %e, "Failed to save session");
            self.push_warning(e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Columns, Record};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn state_with(dir: &TempDir, records: Vec<Record>, page_size: usize) -> AppState {
        let path = dir.path().join("words.csv");
        store::save(&Table::with_records(Columns::default(), records), &path).unwrap();
        let config = AppConfig {
            page_size,
            ..AppConfig::default()
        };
        let mut state = AppState::new(config, path, false);
        state.open().unwrap();
        state
    }

    fn numbered(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| Record::new(ymd(2024, 1, 1), format!("w{i}"), "Anna"))
            .collect()
    }

    #[test]
    fn test_open_missing_store_is_empty_and_writable() {
        let dir = TempDir::new().unwrap();
        let mut state = AppState::new(AppConfig::default(), dir.path().join("none.csv"), false);
        state.open().unwrap();
        assert!(state.table.is_empty());
        assert!(!state.store_unreadable);
        assert_eq!(state.current_page().total, 1);
    }

    #[test]
    fn test_open_unreadable_store_blocks_writes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words.csv");
        std::fs::write(&path, "foo,bar\n1,2\n").unwrap();

        let mut state = AppState::new(AppConfig::default(), path.clone(), false);
        assert!(state.open().is_err());
        assert!(state.store_unreadable);
        assert!(state.status_message.contains("failed"));

        state.new_word = "alma".to_string();
        state.new_submitter = "Anna".to_string();
        let err = state.add_entry().unwrap_err();
        assert!(matches!(err, WotdError::Store(StoreError::ReadOnly { .. })));
        assert!(state.status_message.contains("will not be overwritten"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "foo,bar\n1,2\n");
    }

    #[test]
    fn test_add_entry_persists_and_clears_inputs() {
        let dir = TempDir::new().unwrap();
        let mut state = state_with(&dir, Vec::new(), 100);
        state.new_word = "  szó ".to_string();
        state.new_submitter = "Anna".to_string();
        state.add_entry().unwrap();

        assert_eq!(state.table.len(), 1);
        assert_eq!(state.table.records[0].word, "szó");
        assert!(state.new_word.is_empty());

        let reloaded = store::load(&state.store_path, &Columns::default()).unwrap();
        assert_eq!(reloaded, state.table);
    }

    #[test]
    fn test_add_entry_requires_word_and_submitter() {
        let dir = TempDir::new().unwrap();
        let mut state = state_with(&dir, Vec::new(), 100);
        state.new_word = "alma".to_string();
        let err = state.add_entry().unwrap_err();
        assert!(matches!(err, WotdError::Entry(EntryError::EmptySubmitter)));
        assert_eq!(state.status_message, EntryError::EmptySubmitter.to_string());
        assert!(state.table.is_empty());
    }

    #[test]
    fn test_word_search_refreshes_after_add() {
        let dir = TempDir::new().unwrap();
        let mut state = state_with(&dir, vec![Record::new(ymd(2024, 1, 5), "alma", "Anna")], 100);
        state.word_query = "ALMA".to_string();
        state.run_word_search();
        assert_eq!(state.word_results.as_ref().unwrap().len(), 1);

        state.new_word = "Álmos".to_string();
        state.new_submitter = "Bob".to_string();
        state.add_entry().unwrap();
        // "almos" contains "alm" but not "alma".
        assert_eq!(state.word_results.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_day_search() {
        let dir = TempDir::new().unwrap();
        let mut state = state_with(
            &dir,
            vec![
                Record::new(ymd(2024, 1, 5), "alma", "Anna"),
                Record::new(ymd(2024, 2, 10), "ALMA", "Bob"),
            ],
            100,
        );
        state.day_month = 1;
        state.day_day = 5;
        state.run_day_search();
        assert_eq!(state.day_results.as_ref().unwrap().positions(), &[0]);
    }

    #[test]
    fn test_page_change_clears_selection() {
        let dir = TempDir::new().unwrap();
        let mut state = state_with(&dir, numbered(25), 10);
        state.toggle_selected(3);
        state.next_page();
        assert_eq!(state.page, 2);
        assert!(state.selection.is_empty());

        state.set_page(99);
        assert_eq!(state.page, 3);
        state.prev_page();
        state.prev_page();
        state.prev_page();
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_keyword_resets_page_and_selection() {
        let dir = TempDir::new().unwrap();
        let mut state = state_with(&dir, numbered(25), 10);
        state.set_page(2);
        state.toggle_selected(12);
        state.set_keyword("w1");
        assert_eq!(state.page, 1);
        assert!(state.selection.is_empty());
        // w1, w10..w19
        assert_eq!(state.records_view.len(), 11);
    }

    #[test]
    fn test_delete_selected_removes_from_full_table() {
        let dir = TempDir::new().unwrap();
        let mut state = state_with(&dir, numbered(5), 2);
        state.set_keyword("w");
        state.set_page(2);
        let page_positions = state.current_page().positions.to_vec();
        assert_eq!(page_positions, vec![2, 3]);
        for pos in page_positions {
            state.toggle_selected(pos);
        }

        assert_eq!(state.delete_selected().unwrap(), 2);
        let words: Vec<_> = state.table.records.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["w0", "w1", "w4"]);
        assert!(state.selection.is_empty());
        assert_eq!(state.records_view.len(), 3);

        let reloaded = store::load(&state.store_path, &Columns::default()).unwrap();
        assert_eq!(reloaded.len(), 3);
    }

    #[test]
    fn test_delete_with_nothing_selected_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut state = state_with(&dir, numbered(2), 10);
        assert_eq!(state.delete_selected().unwrap(), 0);
        assert_eq!(state.table.len(), 2);
        assert_eq!(state.status_message, "No rows selected.");
    }

    #[test]
    fn test_delete_reports_stale_positions() {
        let dir = TempDir::new().unwrap();
        let mut state = state_with(&dir, numbered(2), 10);
        state.toggle_selected(1);
        state.toggle_selected(40);
        assert_eq!(state.delete_selected().unwrap(), 1);
        assert!(state.status_message.contains("1 of 2"));
    }

    #[test]
    fn test_page_clamped_after_delete_shrinks_table() {
        let dir = TempDir::new().unwrap();
        let mut state = state_with(&dir, numbered(11), 10);
        state.set_page(2);
        state.toggle_selected(10);
        state.delete_selected().unwrap();
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_export_and_import() {
        let dir = TempDir::new().unwrap();
        let mut state = state_with(&dir, numbered(3), 10);
        let dest = dir.path().join("export.csv");
        assert_eq!(state.export_to(&dest).unwrap(), 3);

        let other_dir = TempDir::new().unwrap();
        let mut other = state_with(&other_dir, Vec::new(), 10);
        assert_eq!(other.import_from(&dest).unwrap(), 3);
        assert_eq!(other.table, state.table);
        let reloaded = store::load(&other.store_path, &Columns::default()).unwrap();
        assert_eq!(reloaded, state.table);
    }

    #[test]
    fn test_failed_import_keeps_table() {
        let dir = TempDir::new().unwrap();
        let mut state = state_with(&dir, numbered(3), 10);
        let bad = dir.path().join("bad.csv");
        std::fs::write(&bad, "x,y\n1,2\n").unwrap();
        assert!(state.import_from(&bad).is_err());
        assert_eq!(state.table.len(), 3);
        assert!(state.status_message.starts_with("Import failed"));
    }

    #[test]
    fn test_snapshot_restore_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut state = state_with(&dir, numbered(25), 10);
        state.word_query = "w2".to_string();
        state.day_month = 1;
        state.day_day = 1;
        state.run_day_search();
        state.set_keyword("w");
        state.set_page(3);
        let snap = state.snapshot();

        let mut fresh = state_with(&dir, numbered(25), 10);
        fresh.restore(snap);
        assert_eq!(fresh.page, 3);
        assert_eq!(fresh.word_results.as_ref().unwrap().len(), 6);
        assert_eq!(fresh.day_results.as_ref().unwrap().len(), 25);
        assert_eq!(fresh.keyword, "w");
    }

    #[test]
    fn test_session_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut state = state_with(&dir, numbered(3), 10);
        state.session_path = Some(dir.path().join("session.json"));
        state.set_keyword("w1");
        state.save_session();

        let mut fresh = state_with(&dir, numbered(3), 10);
        fresh.session_path = state.session_path.clone();
        fresh.load_session();
        assert_eq!(fresh.keyword, "w1");
        assert_eq!(fresh.records_view.positions(), &[1]);
    }
}
