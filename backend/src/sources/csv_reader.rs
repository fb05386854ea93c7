//! CSV timetable source.
//!
//! The file is a header row followed by comma-separated rows. There is no
//! quoting: every comma splits a field, and every field is trimmed. Lines that
//! are blank after trimming are skipped, so the first non-blank line is the
//! header row.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use super::error::{SourceError, SourceResult};
use super::store::FileStore;
use super::{ClassIndex, SourceLookup, SourceMatch, TimetableSource};
use crate::models::{parse_int, ClassId, DocumentMetadata, SourceKind, TimetableRecord};

/// Header names plus one header-to-value map per row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<HashMap<String, String>>,
}

impl RawTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose `grade` and `class` columns parse to the requested values.
    pub fn filter_class(&self, grade: i64, class_number: i64) -> RawTable {
        let rows = self
            .rows
            .iter()
            .filter(|row| {
                row_int(row, "grade") == Some(grade) && row_int(row, "class") == Some(class_number)
            })
            .cloned()
            .collect();
        RawTable {
            headers: self.headers.clone(),
            rows,
        }
    }
}

fn row_int(row: &HashMap<String, String>, column: &str) -> Option<i64> {
    row.get(column).and_then(|v| parse_int(v))
}

fn row_text(row: &HashMap<String, String>, column: &str) -> String {
    row.get(column).cloned().unwrap_or_default()
}

/// Parse CSV text into a [`RawTable`].
pub fn parse_table(text: &str) -> Result<RawTable, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        // A whitespace-only line comes back as a single empty field.
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        let fields: Vec<String> = record.iter().map(str::to_string).collect();
        match headers {
            None => headers = Some(fields),
            Some(ref names) => {
                let row = names
                    .iter()
                    .enumerate()
                    .map(|(i, name)| (name.clone(), fields.get(i).cloned().unwrap_or_default()))
                    .collect();
                rows.push(row);
            }
        }
    }

    Ok(RawTable {
        headers: headers.unwrap_or_default(),
        rows,
    })
}

/// Convert filtered rows to records.
///
/// Rows whose `period` is not a non-negative integer are dropped.
pub fn rows_to_records(table: &RawTable) -> Vec<TimetableRecord> {
    table
        .rows
        .iter()
        .filter_map(|row| {
            let day = row_text(row, "day");
            let raw_period = row_text(row, "period");
            let Some(period) = parse_int(&raw_period).and_then(|p| u32::try_from(p).ok()) else {
                warn!(%day, period = %raw_period, "Dropping CSV row with unparsable period");
                return None;
            };
            Some(TimetableRecord {
                day,
                period,
                subject: row_text(row, "subject"),
                teacher: row_text(row, "teacher"),
                room: row_text(row, "room"),
            })
        })
        .collect()
}

/// Reader for the CSV timetable file.
#[derive(Clone)]
pub struct CsvReader {
    store: Arc<dyn FileStore>,
    path: PathBuf,
}

impl CsvReader {
    pub fn new(store: Arc<dyn FileStore>, path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> SourceResult<RawTable> {
        let text = self.store.read_text(&self.path).map_err(|source| SourceError::Read {
            path: self.path.clone(),
            source,
        })?;
        parse_table(&text).map_err(|source| SourceError::Csv {
            path: self.path.clone(),
            source,
        })
    }

    /// Whole file; an unreadable file gives an empty table.
    pub fn read_all(&self) -> RawTable {
        match self.load() {
            Ok(table) => table,
            Err(e) => {
                warn!(error = %e, "CSV timetable unusable");
                RawTable::default()
            }
        }
    }

    pub fn for_class(&self, grade: i64, class_number: i64) -> RawTable {
        self.read_all().filter_class(grade, class_number)
    }
}

impl TimetableSource for CsvReader {
    fn kind(&self) -> SourceKind {
        SourceKind::Csv
    }

    fn is_present(&self) -> bool {
        self.store.exists(&self.path)
    }

    fn lookup(&self, class: ClassId) -> SourceLookup {
        if !self.is_present() {
            debug!(path = %self.path.display(), "CSV timetable not present");
            return SourceLookup::Missing;
        }
        let table = self.for_class(i64::from(class.grade), i64::from(class.class_number));
        let records = rows_to_records(&table);
        if records.is_empty() {
            return SourceLookup::NoMatch;
        }
        SourceLookup::Found(SourceMatch {
            kind: SourceKind::Csv,
            records,
            metadata: DocumentMetadata::default(),
        })
    }

    fn class_index(&self) -> Option<ClassIndex> {
        if !self.is_present() {
            return None;
        }
        let mut classes: BTreeMap<i64, BTreeSet<i64>> = BTreeMap::new();
        for row in self.read_all().rows {
            if let (Some(grade), Some(class_number)) = (row_int(&row, "grade"), row_int(&row, "class")) {
                classes.entry(grade).or_default().insert(class_number);
            }
        }
        Some(ClassIndex {
            kind: SourceKind::Csv,
            classes,
            metadata: DocumentMetadata::default(),
        })
    }
}

#[cfg(test)]
#[path = "csv_reader_tests.rs"]
mod csv_reader_tests;
