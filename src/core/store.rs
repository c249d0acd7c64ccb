// Word of the Day - core/store.rs
//
// CSV-backed record store: load, append, save, and import of uploaded bytes.
//
// The store file is the single source of truth between launches. A missing
// file is the normal first-run state and yields an empty table; every other
// read failure is returned to the caller and no partial table is produced.

use crate::core::model::{Columns, Record, RecordDate, Table};
use crate::util::constants;
use crate::util::error::StoreError;
use chrono::NaiveDate;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Load the table stored at `path`.
///
/// Returns an empty table with `columns` as its header when the file does
/// not exist.
pub fn load(path: &Path, columns: &Columns) -> Result<Table, StoreError> {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "Store file not found; starting with an empty table");
            return Ok(Table::empty(columns.clone()));
        }
        Err(e) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    let table = load_from_reader(io::BufReader::new(file), columns, path)?;
    tracing::info!(
        path = %path.display(),
        records = table.len(),
        "Store loaded"
    );
    Ok(table)
}

/// Parse CSV from any reader.
///
/// `origin` only labels errors. Columns are located by header name, so
/// their order in the file does not matter. Short rows are padded with empty
/// cells; unparseable date cells are kept as [`RecordDate::Invalid`].
pub fn load_from_reader<R: Read>(
    reader: R,
    columns: &Columns,
    origin: &Path,
) -> Result<Table, StoreError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| csv_error(origin, e))?
        .clone();

    // A zero-byte file has no header row at all.
    if headers.is_empty() {
        tracing::debug!(origin = %origin.display(), "Store content is empty");
        return Ok(Table::empty(columns.clone()));
    }

    let date_idx = column_index(&headers, &columns.date, origin)?;
    let word_idx = column_index(&headers, &columns.word, origin)?;
    let submitter_idx = column_index(&headers, &columns.submitter, origin)?;

    let extra = extra_columns(&headers, columns);
    if !extra.is_empty() {
        tracing::warn!(
            origin = %origin.display(),
            columns = ?extra,
            "Store has columns outside [store]; they are not kept on the next save"
        );
    }

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row.map_err(|e| csv_error(origin, e))?;
        let cell = |idx: usize| row.get(idx).unwrap_or("");
        records.push(Record {
            date: RecordDate::parse(cell(date_idx)),
            word: cell(word_idx).to_string(),
            submitter: cell(submitter_idx).to_string(),
        });
    }

    let table = Table::with_records(columns.clone(), records);
    let invalid = table.invalid_date_count();
    if invalid > 0 {
        tracing::debug!(
            origin = %origin.display(),
            invalid_dates = invalid,
            "Rows with unparseable dates are excluded from day search"
        );
    }
    Ok(table)
}

/// Parse an uploaded CSV byte buffer.
pub fn import_bytes(bytes: &[u8], columns: &Columns) -> Result<Table, StoreError> {
    load_from_reader(bytes, columns, Path::new(constants::UPLOAD_ORIGIN))
}

/// Return a new table with one record appended at the end.
///
/// `date = None` stamps the record with today's local date. The caller is
/// responsible for persisting the result.
pub fn append(mut table: Table, date: Option<NaiveDate>, word: &str, submitter: &str) -> Table {
    let date = date.unwrap_or_else(today);
    table.records.push(Record::new(date, word, submitter));
    tracing::debug!(%date, records = table.len(), "Record appended");
    table
}

/// Today's date in the local time zone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Serialise `table` as CSV into `writer`: header row, then one row per
/// record, no index column. Returns the number of records written.
pub fn write_records<W: Write>(table: &Table, writer: W) -> Result<usize, csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(table.columns.header())?;
    for record in &table.records {
        csv_writer.write_record(record.cells())?;
    }
    csv_writer.flush()?;
    Ok(table.records.len())
}

/// Overwrite `path` with the CSV form of `table`.
///
/// Written atomically (temp file, then rename) so a crash mid-save never
/// leaves a truncated store. Parent directories are created as needed.
pub fn save(table: &Table, path: &Path) -> Result<(), StoreError> {
    let mut buf = Vec::new();
    write_records(table, &mut buf).map_err(|e| csv_error(path, e))?;
    write_atomic(path, &buf).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), records = table.len(), "Store saved");
    Ok(())
}

/// Replace the contents of `path` with `bytes` through a sibling temp file
/// and a rename. Parent directories are created as needed.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let tmp = temp_path(path);
    std::fs::write(&tmp, bytes)?;
    std::fs::rename(&tmp, path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        e
    })
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn column_index(headers: &csv::StringRecord, name: &str, origin: &Path) -> Result<usize, StoreError> {
    headers
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
        .ok_or_else(|| StoreError::MissingColumn {
            path: origin.to_path_buf(),
            column: name.to_string(),
        })
}

/// Header names that are not one of the configured columns.
fn extra_columns(headers: &csv::StringRecord, columns: &Columns) -> Vec<String> {
    let known = columns.header();
    headers
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim())
        .filter(|h| !h.is_empty() && !known.contains(&h))
        .map(str::to_string)
        .collect()
}

fn csv_error(origin: &Path, source: csv::Error) -> StoreError {
    StoreError::Csv {
        path: origin.to_path_buf(),
        source,
    }
}
