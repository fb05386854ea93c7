//! Data Transfer Objects for the HTTP API.
//!
//! Overview and summary bodies are served straight from the service types;
//! the structs here cover the responses with HTTP-specific shapes.

use serde::{Deserialize, Serialize};

use crate::models::{ClassId, DocumentMetadata, SourceKind, TimetableByDay, ValidationResult};
use crate::services::ResolvedTimetable;

pub use crate::services::{ClassSummary, TimetableOverview, TimetableSummary};

/// Body of a successful timetable lookup.
///
/// JSON-sourced responses carry the document metadata alongside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableResponse {
    #[serde(flatten)]
    pub class: ClassId,
    pub timetable: TimetableByDay,
    pub source: SourceKind,
    #[serde(flatten)]
    pub metadata: DocumentMetadata,
}

impl From<ResolvedTimetable> for TimetableResponse {
    fn from(resolved: ResolvedTimetable) -> Self {
        Self {
            class: resolved.class,
            timetable: resolved.timetable,
            source: resolved.source,
            metadata: resolved.metadata,
        }
    }
}

/// Body of the validation endpoint. Unparsable inputs echo back as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResponse {
    pub valid: bool,
    pub grade: Option<i64>,
    pub class_number: Option<i64>,
    pub message: String,
}

impl ValidationResponse {
    pub fn new(grade: Option<i64>, class_number: Option<i64>, result: ValidationResult) -> Self {
        let message = match (result.is_valid, result.error_message) {
            (true, _) => format!(
                "Grade {}, Class {} is valid",
                grade.unwrap_or_default(),
                class_number.unwrap_or_default()
            ),
            (false, Some(msg)) => msg,
            (false, None) => "Invalid grade or class".to_string(),
        };
        Self {
            valid: result.is_valid,
            grade,
            class_number,
            message,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub json_source: bool,
    pub csv_source: bool,
}
