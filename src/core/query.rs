// Word of the Day - core/query.rs
//
// Search and filter predicates over a table.
// Every query is a full scan and returns positions into the original table,
// never copies of records, so deletion can address rows by position.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{Record, Table};
use crate::core::normalize::normalize;

/// Ordered positions of the records that matched a query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredView {
    positions: Vec<usize>,
}

impl FilteredView {
    /// Every position of `table`, in table order.
    pub fn all(table: &Table) -> Self {
        Self {
            positions: (0..table.len()).collect(),
        }
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Matching records paired with their table position.
    pub fn records<'a>(&'a self, table: &'a Table) -> impl Iterator<Item = (usize, &'a Record)> + 'a {
        self.positions
            .iter()
            .filter_map(move |&pos| table.get(pos).map(|r| (pos, r)))
    }
}

impl From<Vec<usize>> for FilteredView {
    fn from(positions: Vec<usize>) -> Self {
        Self { positions }
    }
}

/// Accent- and case-insensitive substring search on the word column.
///
/// Returns `None` when the needle normalises to an empty string: that is
/// "no search performed", not "match everything". Whitespace in the needle
/// is part of the query. Results are ordered newest first.
pub fn search_by_word(table: &Table, needle: &str) -> Option<FilteredView> {
    let needle = normalize(needle);
    if needle.is_empty() {
        return None;
    }

    let positions = table
        .records
        .iter()
        .enumerate()
        .filter(|(_, record)| normalize(&record.word).contains(&needle))
        .map(|(pos, _)| pos)
        .collect();

    let view = newest_first(table, positions);
    tracing::debug!(matches = view.len(), "Word search completed");
    Some(view)
}

/// Records dated on `month`/`day` of any year, newest first.
///
/// Rows whose date did not parse never match.
pub fn search_by_day(table: &Table, month: u32, day: u32) -> FilteredView {
    let positions = table
        .records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.date.is_on_day(month, day))
        .map(|(pos, _)| pos)
        .collect();

    let view = newest_first(table, positions);
    tracing::debug!(month, day, matches = view.len(), "Day search completed");
    view
}

/// Case-insensitive substring match against every column of a row.
///
/// An empty keyword yields the whole table. Table order is preserved.
pub fn keyword_filter(table: &Table, keyword: &str) -> FilteredView {
    let keyword = keyword.to_lowercase();
    if keyword.is_empty() {
        return FilteredView::all(table);
    }

    table
        .records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            record
                .cells()
                .iter()
                .any(|cell| cell.to_lowercase().contains(&keyword))
        })
        .map(|(pos, _)| pos)
        .collect::<Vec<_>>()
        .into()
}

/// Sort positions by date descending. `sort_by` is stable, so positions
/// with equal dates stay in ascending order.
fn newest_first(table: &Table, mut positions: Vec<usize>) -> FilteredView {
    positions.sort_by(|&a, &b| table.records[a].date.cmp_newest_first(&table.records[b].date));
    FilteredView { positions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Columns, RecordDate};
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn table(records: Vec<Record>) -> Table {
        Table::with_records(Columns::default(), records)
    }

    fn alma_table() -> Table {
        table(vec![
            Record::new(ymd(2024, 1, 5), "alma", "Anna"),
            Record::new(ymd(2024, 2, 10), "ALMA", "Bob"),
        ])
    }

    #[test]
    fn test_word_search_orders_newest_first() {
        let view = search_by_word(&alma_table(), "alma").unwrap();
        assert_eq!(view.positions(), &[1, 0]);
    }

    #[test]
    fn test_word_search_accent_and_case_insensitive() {
        let t = table(vec![
            Record::new(ymd(2024, 1, 1), "szó", "Anna"),
            Record::new(ymd(2024, 1, 2), "kő", "Bob"),
        ]);
        let plain = search_by_word(&t, "szo").unwrap();
        let accented = search_by_word(&t, "SZÓ").unwrap();
        assert_eq!(plain, accented);
        assert_eq!(plain.positions(), &[0]);
    }

    #[test]
    fn test_word_search_substring() {
        let t = table(vec![Record::new(ymd(2024, 1, 1), "almafa", "Anna")]);
        assert_eq!(search_by_word(&t, "maf").unwrap().positions(), &[0]);
        assert!(search_by_word(&t, "körte").unwrap().is_empty());
    }

    #[test]
    fn test_word_search_only_looks_at_word_column() {
        let t = table(vec![Record::new(ymd(2024, 1, 1), "alma", "Bob")]);
        assert!(search_by_word(&t, "bob").unwrap().is_empty());
    }

    #[test]
    fn test_empty_needle_is_no_search() {
        assert_eq!(search_by_word(&alma_table(), ""), None);
        // A lone combining mark normalises to nothing.
        assert_eq!(search_by_word(&alma_table(), "\u{0301}"), None);
    }

    #[test]
    fn test_whitespace_in_needle_narrows_matches() {
        let t = table(vec![
            Record::new(ymd(2024, 1, 1), "alma", "A"),
            Record::new(ymd(2024, 1, 2), "piros alma", "B"),
        ]);
        assert_eq!(search_by_word(&t, "alma").unwrap().len(), 2);
        assert_eq!(search_by_word(&t, " alma").unwrap().positions(), &[1]);
        assert_eq!(search_by_word(&t, "piros ").unwrap().positions(), &[1]);
        assert_eq!(search_by_word(&t, " ").unwrap().positions(), &[1]);

        for needle in [" alma", "alma ", " "] {
            let view = search_by_word(&t, needle).unwrap();
            for (_, record) in view.records(&t) {
                assert!(normalize(&record.word).contains(&normalize(needle)));
            }
        }
    }

    #[test]
    fn test_word_search_results_contain_needle() {
        let t = table(vec![
            Record::new(ymd(2023, 5, 1), "Éjjel", "A"),
            Record::new(ymd(2023, 5, 2), "nappal", "B"),
            Record::new(ymd(2023, 5, 3), "éjfél", "C"),
        ]);
        let view = search_by_word(&t, "ÉJ").unwrap();
        assert_eq!(view.len(), 2);
        for (_, record) in view.records(&t) {
            assert!(normalize(&record.word).contains("ej"));
        }
    }

    #[test]
    fn test_ties_keep_table_order_and_undated_last() {
        let mut undated = Record::new(ymd(2000, 1, 1), "alma", "X");
        undated.date = RecordDate::Invalid("?".to_string());
        let t = table(vec![
            undated,
            Record::new(ymd(2024, 1, 5), "alma", "A"),
            Record::new(ymd(2024, 1, 5), "alma", "B"),
            Record::new(ymd(2024, 3, 1), "alma", "C"),
        ]);
        let view = search_by_word(&t, "alma").unwrap();
        assert_eq!(view.positions(), &[3, 1, 2, 0]);
    }

    #[test]
    fn test_day_search_matches_month_and_day_only() {
        let view = search_by_day(&alma_table(), 1, 5);
        assert_eq!(view.positions(), &[0]);
    }

    #[test]
    fn test_day_search_across_years_newest_first() {
        let t = table(vec![
            Record::new(ymd(2021, 12, 24), "fenyő", "A"),
            Record::new(ymd(2023, 12, 24), "gyertya", "B"),
            Record::new(ymd(2022, 12, 25), "ajándék", "C"),
        ]);
        assert_eq!(search_by_day(&t, 12, 24).positions(), &[1, 0]);
    }

    #[test]
    fn test_day_search_skips_unparsed_dates() {
        let mut bad = Record::new(ymd(2024, 1, 5), "alma", "A");
        bad.date = RecordDate::Invalid("01-05".to_string());
        let t = table(vec![bad, Record::new(ymd(2024, 1, 5), "körte", "B")]);
        assert_eq!(search_by_day(&t, 1, 5).positions(), &[1]);
    }

    #[test]
    fn test_keyword_filter_any_column() {
        let t = alma_table();
        assert_eq!(keyword_filter(&t, "bob").positions(), &[1]);
        assert_eq!(keyword_filter(&t, "2024-01").positions(), &[0]);
        assert_eq!(keyword_filter(&t, "ALMA").positions(), &[0, 1]);
    }

    #[test]
    fn test_keyword_filter_empty_returns_all() {
        let t = alma_table();
        assert_eq!(keyword_filter(&t, "").positions(), &[0, 1]);
    }

    #[test]
    fn test_keyword_filter_is_not_accent_folded() {
        let t = table(vec![Record::new(ymd(2024, 1, 1), "szó", "A")]);
        assert!(keyword_filter(&t, "szo").is_empty());
        assert_eq!(keyword_filter(&t, "SZÓ").positions(), &[0]);
    }
}
