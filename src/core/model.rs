// Word of the Day - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::constants;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

// =============================================================================
// Record date
// =============================================================================

/// The date cell of a record.
///
/// Cells that fail to parse are kept verbatim so that saving the table never
/// rewrites data the user did not touch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordDate {
    /// A parsed calendar date.
    Valid(NaiveDate),

    /// Non-empty text that matched none of `constants::DATE_FORMATS`.
    Invalid(String),

    /// Empty cell.
    Missing,
}

impl RecordDate {
    /// Parse a raw CSV cell, trying every accepted format in order.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Missing;
        }

        for format in constants::DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
                return Self::Valid(date);
            }
            if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Self::Valid(datetime.date());
            }
        }

        Self::Invalid(raw.to_string())
    }

    /// The parsed date, if any.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Valid(date) => Some(*date),
            Self::Invalid(_) | Self::Missing => None,
        }
    }

    /// True if the date falls on `month`/`day` of any year.
    pub fn is_on_day(&self, month: u32, day: u32) -> bool {
        self.date()
            .is_some_and(|d| d.month() == month && d.day() == day)
    }

    /// Ordering for "newest first" listings: valid dates descending, then
    /// every record without a valid date.
    pub fn cmp_newest_first(&self, other: &Self) -> Ordering {
        match (self.date(), other.date()) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl fmt::Display for RecordDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid(date) => write!(f, "{}", date.format(constants::STORE_DATE_FORMAT)),
            Self::Invalid(raw) => f.write_str(raw),
            Self::Missing => Ok(()),
        }
    }
}

// =============================================================================
// Record
// =============================================================================

/// One word-of-the-day entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub date: RecordDate,
    pub word: String,
    pub submitter: String,
}

impl Record {
    /// Convenience constructor for a record with a known date.
    pub fn new(date: NaiveDate, word: impl Into<String>, submitter: impl Into<String>) -> Self {
        Self {
            date: RecordDate::Valid(date),
            word: word.into(),
            submitter: submitter.into(),
        }
    }

    /// The three cells in column order, as written to CSV.
    pub fn cells(&self) -> [String; 3] {
        [
            self.date.to_string(),
            self.word.clone(),
            self.submitter.clone(),
        ]
    }
}

// =============================================================================
// Columns
// =============================================================================

/// Header names of the three store columns.
///
/// The date column in particular differs between stores, so all three are
/// configurable rather than fixed literals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Columns {
    pub date: String,
    pub word: String,
    pub submitter: String,
}

impl Columns {
    /// Header row in write order.
    pub fn header(&self) -> [&str; 3] {
        [&self.date, &self.word, &self.submitter]
    }
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            date: constants::DEFAULT_DATE_COLUMN.to_string(),
            word: constants::DEFAULT_WORD_COLUMN.to_string(),
            submitter: constants::DEFAULT_SUBMITTER_COLUMN.to_string(),
        }
    }
}

// =============================================================================
// Table
// =============================================================================

/// The full in-memory collection of records.
///
/// A record's position in `records` is its identity for deletion. Positions
/// are only meaningful for this value: every load or deletion produces a new
/// table with dense positions starting at 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub columns: Columns,
    pub records: Vec<Record>,
}

impl Table {
    /// An empty table with the given header.
    pub fn empty(columns: Columns) -> Self {
        Self {
            columns,
            records: Vec::new(),
        }
    }

    pub fn with_records(columns: Columns, records: Vec<Record>) -> Self {
        Self { columns, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Record> {
        self.records.get(position)
    }

    /// Number of records whose date cell did not parse.
    pub fn invalid_date_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r.date, RecordDate::Invalid(_)))
            .count()
    }
}
