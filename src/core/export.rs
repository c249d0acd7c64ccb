// Word of the Day - core/export.rs
//
// Row deletion and CSV export of the full table.
// Core layer: writes to any Write trait object.

use crate::core::model::Table;
use crate::core::store::write_records;
use crate::util::error::ExportError;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

/// Result of [`delete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deletion {
    /// The table without the deleted rows, positions reassigned from 0.
    pub table: Table,

    /// How many rows were actually removed.
    pub removed: usize,
}

/// Remove the records at `positions` from `table`.
///
/// Positions are treated as a set, so duplicates are harmless, and any
/// position outside the table is ignored. Compare `removed` with the
/// requested count to detect stale selections.
pub fn delete(table: &Table, positions: impl IntoIterator<Item = usize>) -> Deletion {
    let doomed: BTreeSet<usize> = positions
        .into_iter()
        .filter(|&pos| pos < table.len())
        .collect();

    let records = table
        .records
        .iter()
        .enumerate()
        .filter(|(pos, _)| !doomed.contains(pos))
        .map(|(_, record)| record.clone())
        .collect();

    tracing::info!(
        removed = doomed.len(),
        remaining = table.len() - doomed.len(),
        "Rows deleted"
    );

    Deletion {
        table: Table::with_records(table.columns.clone(), records),
        removed: doomed.len(),
    }
}

/// Export the whole table as CSV into `writer`.
///
/// Same layout as the store file. `export_path` labels errors.
pub fn write_csv<W: Write>(
    table: &Table,
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    write_records(table, writer).map_err(|e| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    })
}

/// The table as an in-memory CSV buffer, for download.
pub fn export_bytes(table: &Table) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    write_csv(table, &mut buf, Path::new("<memory>"))?;
    Ok(buf)
}

/// Write `table` as CSV to a new file at `dest`. Returns the rows written.
pub fn export_to_file(table: &Table, dest: &Path) -> Result<usize, ExportError> {
    let bytes = export_bytes(table)?;
    let mut file = std::fs::File::create(dest).map_err(|e| ExportError::Io {
        path: dest.to_path_buf(),
        source: e,
    })?;
    file.write_all(&bytes).map_err(|e| ExportError::Io {
        path: dest.to_path_buf(),
        source: e,
    })?;
    tracing::info!(path = %dest.display(), records = table.len(), "Table exported");
    Ok(table.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Columns, Record};
    use crate::core::store::import_bytes;
    use chrono::NaiveDate;

    fn make_table(words: &[&str]) -> Table {
        let records = words
            .iter()
            .enumerate()
            .map(|(i, w)| {
                Record::new(
                    NaiveDate::from_ymd_opt(2024, 1, i as u32 + 1).unwrap(),
                    *w,
                    "Anna",
                )
            })
            .collect();
        Table::with_records(Columns::default(), records)
    }

    #[test]
    fn test_delete_reindexes_remaining_rows() {
        let table = make_table(&["alma", "körte"]);
        let result = delete(&table, [0]);
        assert_eq!(result.removed, 1);
        assert_eq!(result.table.len(), 1);
        assert_eq!(result.table.records[0], table.records[1]);
    }

    #[test]
    fn test_delete_ignores_duplicates_and_out_of_range() {
        let table = make_table(&["a", "b", "c"]);
        let result = delete(&table, [2, 2, 7, 0]);
        assert_eq!(result.removed, 2);
        assert_eq!(result.table.records, vec![table.records[1].clone()]);
    }

    #[test]
    fn test_delete_same_positions_twice_is_noop_second_time() {
        let table = make_table(&["a", "b", "c"]);
        let first = delete(&table, [1, 2]);
        let second = delete(&first.table, [1, 2]);
        assert_eq!(second.removed, 0);
        assert_eq!(second.table, first.table);
    }

    #[test]
    fn test_delete_nothing_keeps_table() {
        let table = make_table(&["a", "b"]);
        let result = delete(&table, std::iter::empty());
        assert_eq!(result.removed, 0);
        assert_eq!(result.table, table);
    }

    #[test]
    fn test_csv_export() {
        let table = make_table(&["alma", "igen, nem"]);
        let mut buf = Vec::new();
        let count = write_csv(&table, &mut buf, Path::new("out.csv")).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.starts_with("date,word,submitter\n"));
        assert!(output.contains("2024-01-01,alma,Anna"));
        assert!(output.contains("\"igen, nem\""));
    }

    #[test]
    fn test_export_bytes_reimports() {
        let table = make_table(&["szó", "kő"]);
        let bytes = export_bytes(&table).unwrap();
        assert_eq!(import_bytes(&bytes, &Columns::default()).unwrap(), table);
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let dest = dir.path().join("missing").join("out.csv");
        let err = export_to_file(&make_table(&["a"]), &dest).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
