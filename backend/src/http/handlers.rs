//! HTTP handlers for the REST API.
//!
//! Each handler parses its path segments and delegates to the service
//! layer on the blocking pool, since sources read files synchronously.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use super::dto::{ClassSummary, HealthResponse, TimetableOverview, TimetableResponse, ValidationResponse};
use super::error::AppError;
use super::state::AppState;
use crate::models::parse_int;
use crate::services::{export_csv, export_file_name};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

type ClassPath = Path<(String, String)>;

fn parse_class_path((grade, class_number): (String, String)) -> (Option<i64>, Option<i64>) {
    (parse_int(&grade), parse_int(&class_number))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let status = tokio::task::spawn_blocking(move || state.service.source_status()).await?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        json_source: status.json,
        csv_source: status.csv,
    }))
}

// =============================================================================
// Timetables
// =============================================================================

/// GET /api/timetable
///
/// Available grades and classes. Always succeeds.
pub async fn get_overview(State(state): State<AppState>) -> HandlerResult<TimetableOverview> {
    let overview = tokio::task::spawn_blocking(move || state.service.overview()).await?;
    Ok(Json(overview))
}

/// GET /api/timetable/{grade}/{classNumber}
pub async fn get_timetable(
    State(state): State<AppState>,
    Path(path): ClassPath,
) -> HandlerResult<TimetableResponse> {
    let (grade, class_number) = parse_class_path(path);
    let resolved =
        tokio::task::spawn_blocking(move || state.service.timetable(grade, class_number))
            .await??;
    Ok(Json(resolved.into()))
}

/// GET /api/timetable/{grade}/{classNumber}/summary
pub async fn get_summary(
    State(state): State<AppState>,
    Path(path): ClassPath,
) -> HandlerResult<ClassSummary> {
    let (grade, class_number) = parse_class_path(path);
    let summary =
        tokio::task::spawn_blocking(move || state.service.summary(grade, class_number)).await??;
    Ok(Json(summary))
}

/// GET /api/timetable/{grade}/{classNumber}/export.csv
///
/// The resolved timetable as a CSV attachment.
pub async fn export_timetable(
    State(state): State<AppState>,
    Path(path): ClassPath,
) -> Result<Response, AppError> {
    let (grade, class_number) = parse_class_path(path);
    let (file_name, body) = tokio::task::spawn_blocking(move || -> Result<_, AppError> {
        let resolved = state.service.timetable(grade, class_number)?;
        Ok((export_file_name(&resolved), export_csv(&resolved)?))
    })
    .await??;

    debug!(file = %file_name, bytes = body.len(), "Exporting timetable CSV");
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        body,
    )
        .into_response())
}

// =============================================================================
// Validation
// =============================================================================

/// GET /api/validate/{grade}/{classNumber}
///
/// Always 200; the verdict is in the body.
pub async fn validate_class(
    State(state): State<AppState>,
    Path(path): ClassPath,
) -> HandlerResult<ValidationResponse> {
    let (grade, class_number) = parse_class_path(path);
    let result = state.service.validate(grade, class_number);
    Ok(Json(ValidationResponse::new(grade, class_number, result)))
}
