//! Resolve one class's timetable across the ordered sources.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use super::shaper::shape;
use crate::error::{TimetableError, TimetableResult};
use crate::models::{ClassId, DocumentMetadata, SchoolStructure, SourceKind, TimetableByDay};
use crate::sources::{SourceLookup, TimetableSource};

/// A successfully resolved timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTimetable {
    pub class: ClassId,
    pub source: SourceKind,
    pub timetable: TimetableByDay,
    pub metadata: DocumentMetadata,
}

/// Validate, then ask each source in order until one has the class.
///
/// When no source has it, the last source decides the error: a missing or
/// unusable file means there is no data at all, an existing file without
/// rows for the class means no match.
pub fn resolve(
    school: &SchoolStructure,
    sources: &[Arc<dyn TimetableSource>],
    grade: Option<i64>,
    class_number: Option<i64>,
) -> TimetableResult<ResolvedTimetable> {
    let class = school
        .class_id(grade, class_number)
        .map_err(TimetableError::Validation)?;

    let mut verdict = TimetableError::SourceNotFound;
    for source in sources {
        match source.lookup(class) {
            SourceLookup::Found(found) => {
                info!(class = %class, source = %found.kind, records = found.records.len(), "Timetable resolved");
                return Ok(ResolvedTimetable {
                    class,
                    source: found.kind,
                    timetable: shape(found.records),
                    metadata: found.metadata,
                });
            }
            SourceLookup::NoMatch => {
                debug!(class = %class, source = %source.kind(), "No rows for class");
                verdict = TimetableError::NoMatch {
                    grade: class.grade,
                    class_number: class.class_number,
                };
            }
            SourceLookup::Missing | SourceLookup::Unusable => {
                verdict = TimetableError::SourceNotFound;
            }
        }
    }
    Err(verdict)
}
