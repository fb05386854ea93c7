//! Service layer for timetable lookup.
//!
//! [`TimetableService`] owns the school structure and the ordered source
//! list, and exposes the operations the HTTP layer calls. Everything here is
//! synchronous; handlers run it on the blocking pool.

pub mod export;
pub mod overview;
pub mod resolver;
pub mod shaper;
pub mod summary;

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use crate::config::DataSettings;
use crate::error::TimetableResult;
use crate::models::{ClassId, SchoolStructure, SourceKind, ValidationResult};
use crate::sources::{default_sources, FileStore, LocalFiles, TimetableSource};

pub use export::{export_csv, export_file_name};
pub use overview::{build_overview, TimetableOverview};
pub use resolver::{resolve, ResolvedTimetable};
pub use shaper::shape;
pub use summary::{summarize, TimetableSummary};

/// Summary of one class's timetable, tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassSummary {
    #[serde(flatten)]
    pub class: ClassId,
    pub source: SourceKind,
    pub summary: TimetableSummary,
}

/// Which source files currently exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceStatus {
    pub json: bool,
    pub csv: bool,
}

/// Timetable operations over a fixed school structure and source list.
pub struct TimetableService {
    school: SchoolStructure,
    sources: Vec<Arc<dyn TimetableSource>>,
}

impl TimetableService {
    pub fn new(school: SchoolStructure, sources: Vec<Arc<dyn TimetableSource>>) -> Self {
        Self { school, sources }
    }

    /// JSON then CSV, both read through `store`.
    pub fn from_store(store: Arc<dyn FileStore>, json_path: &Path, csv_path: &Path) -> Self {
        Self::new(
            SchoolStructure::default(),
            default_sources(store, json_path, csv_path),
        )
    }

    /// Service over the real filesystem at the configured paths.
    pub fn from_settings(settings: &DataSettings) -> Self {
        Self::from_store(
            Arc::new(LocalFiles),
            &settings.json_path(),
            &settings.csv_path(),
        )
    }

    pub fn validate(&self, grade: Option<i64>, class_number: Option<i64>) -> ValidationResult {
        self.school.validate(grade, class_number)
    }

    pub fn timetable(
        &self,
        grade: Option<i64>,
        class_number: Option<i64>,
    ) -> TimetableResult<ResolvedTimetable> {
        resolve(&self.school, &self.sources, grade, class_number)
    }

    pub fn overview(&self) -> TimetableOverview {
        build_overview(&self.school, &self.sources)
    }

    pub fn summary(
        &self,
        grade: Option<i64>,
        class_number: Option<i64>,
    ) -> TimetableResult<ClassSummary> {
        let resolved = self.timetable(grade, class_number)?;
        Ok(ClassSummary {
            class: resolved.class,
            source: resolved.source,
            summary: summarize(&resolved.timetable),
        })
    }

    pub fn source_status(&self) -> SourceStatus {
        let mut status = SourceStatus::default();
        for source in &self.sources {
            match source.kind() {
                SourceKind::Json => status.json |= source.is_present(),
                SourceKind::Csv => status.csv |= source.is_present(),
            }
        }
        status
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod service_tests;
