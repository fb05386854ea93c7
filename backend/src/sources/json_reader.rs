//! JSON timetable source.
//!
//! The JSON file holds exactly one class's timetable; its `class` field
//! (`"grade/classNumber"`) says which one.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use regex::Regex;
use tracing::{debug, warn};

use super::error::{SourceError, SourceResult};
use super::store::FileStore;
use super::{ClassIndex, SourceLookup, SourceMatch, TimetableSource};
use crate::models::{ClassId, SourceKind, TimetableDocument};

static CLASS_LABEL: OnceLock<Regex> = OnceLock::new();

/// Split a `"6/14"` label into `(6, 14)`.
pub fn parse_class_label(label: &str) -> Option<(i64, i64)> {
    let re = CLASS_LABEL.get_or_init(|| {
        Regex::new(r"^([0-9]+)/([0-9]+)$").expect("class label pattern is valid")
    });
    let caps = re.captures(label)?;
    let grade = caps[1].parse::<i64>().ok()?;
    let class_number = caps[2].parse::<i64>().ok()?;
    Some((grade, class_number))
}

/// Reader for the JSON timetable file.
#[derive(Clone)]
pub struct JsonReader {
    store: Arc<dyn FileStore>,
    path: PathBuf,
}

impl JsonReader {
    pub fn new(store: Arc<dyn FileStore>, path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> SourceResult<TimetableDocument> {
        let text = self.store.read_text(&self.path).map_err(|source| SourceError::Read {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| SourceError::Json {
            path: self.path.clone(),
            source,
        })
    }

    /// Parsed document, or `None` (logged) when the file is unusable.
    pub fn read_document(&self) -> Option<TimetableDocument> {
        match self.load() {
            Ok(doc) => Some(doc),
            Err(e) => {
                warn!(error = %e, "JSON timetable unusable");
                None
            }
        }
    }

    /// The document if its embedded class is exactly `grade/class_number`.
    pub fn for_class(&self, grade: i64, class_number: i64) -> Option<TimetableDocument> {
        let doc = self.read_document()?;
        let embedded = parse_class_label(&doc.class)?;
        (embedded == (grade, class_number)).then_some(doc)
    }
}

impl TimetableSource for JsonReader {
    fn kind(&self) -> SourceKind {
        SourceKind::Json
    }

    fn is_present(&self) -> bool {
        self.store.exists(&self.path)
    }

    fn lookup(&self, class: ClassId) -> SourceLookup {
        if !self.is_present() {
            debug!(path = %self.path.display(), "JSON timetable not present");
            return SourceLookup::Missing;
        }
        let Some(doc) = self.read_document() else {
            return SourceLookup::Unusable;
        };
        let requested = (i64::from(class.grade), i64::from(class.class_number));
        match parse_class_label(&doc.class) {
            Some(embedded) if embedded == requested => {
                let metadata = doc.metadata();
                SourceLookup::Found(SourceMatch {
                    kind: SourceKind::Json,
                    records: doc.into_records(),
                    metadata,
                })
            }
            Some(_) => SourceLookup::NoMatch,
            None => {
                debug!(label = %doc.class, "JSON timetable class label not recognised");
                SourceLookup::NoMatch
            }
        }
    }

    fn class_index(&self) -> Option<ClassIndex> {
        if !self.is_present() {
            return None;
        }
        let doc = self.read_document()?;
        let (grade, class_number) = parse_class_label(&doc.class)?;
        let mut classes = BTreeMap::new();
        classes.insert(grade, BTreeSet::from([class_number]));
        Some(ClassIndex {
            kind: SourceKind::Json,
            classes,
            metadata: doc.metadata(),
        })
    }
}
