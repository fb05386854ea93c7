//! Timetable data sources.
//!
//! Each input format is a [`TimetableSource`] strategy. The service keeps them
//! in precedence order (JSON first, CSV as fallback) and asks each in turn.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  Resolver / Overview Builder │
//! └──────────────┬───────────────┘
//!                │ ordered Vec<Arc<dyn TimetableSource>>
//!      ┌─────────┴──────────┐
//!      ▼                    ▼
//! ┌───────────┐       ┌───────────┐
//! │ JsonReader│       │ CsvReader │
//! └─────┬─────┘       └─────┬─────┘
//!       └──────────┬────────┘
//!                  ▼
//!        FileStore (exists / read_text)
//! ```

pub mod csv_reader;
pub mod error;
pub mod json_reader;
pub mod store;

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::Arc;

use crate::models::{ClassId, DocumentMetadata, SourceKind, TimetableRecord};

pub use csv_reader::{CsvReader, RawTable};
pub use error::{SourceError, SourceResult};
pub use json_reader::JsonReader;
pub use store::{FileStore, LocalFiles, MemoryFiles};

/// Records a source produced for one class.
#[derive(Debug, Clone)]
pub struct SourceMatch {
    pub kind: SourceKind,
    pub records: Vec<TimetableRecord>,
    pub metadata: DocumentMetadata,
}

/// Result of asking one source for one class.
#[derive(Debug, Clone)]
pub enum SourceLookup {
    Found(SourceMatch),
    /// The source file exists but holds nothing for this class.
    NoMatch,
    /// The source file does not exist.
    Missing,
    /// The source file exists but could not be read or parsed.
    Unusable,
}

/// Every grade/class pair a source knows about.
#[derive(Debug, Clone)]
pub struct ClassIndex {
    pub kind: SourceKind,
    pub classes: BTreeMap<i64, BTreeSet<i64>>,
    pub metadata: DocumentMetadata,
}

/// One timetable input format.
///
/// Implementations read their file fresh on every call and never raise:
/// read and parse failures are logged and reported through the return value.
pub trait TimetableSource: Send + Sync {
    fn kind(&self) -> SourceKind;

    fn is_present(&self) -> bool;

    fn lookup(&self, class: ClassId) -> SourceLookup;

    /// `None` when the source cannot say which classes it holds.
    fn class_index(&self) -> Option<ClassIndex>;
}

/// JSON then CSV, both read through `store`.
pub fn default_sources(
    store: Arc<dyn FileStore>,
    json_path: &Path,
    csv_path: &Path,
) -> Vec<Arc<dyn TimetableSource>> {
    vec![
        Arc::new(JsonReader::new(Arc::clone(&store), json_path)),
        Arc::new(CsvReader::new(store, csv_path)),
    ]
}
