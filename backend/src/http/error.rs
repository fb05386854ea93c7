//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::TimetableError;

/// `{error}` body for 400, 404 and 500 responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

/// `{message, data: []}` body when source data exists but not for the class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmptyResult {
    pub message: String,
    pub data: Vec<serde_json::Value>,
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid grade or class number
    BadRequest(String),
    /// No timetable data at all
    NotFound(String),
    /// Data exists but has nothing for the class
    NoMatch(String),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(error) => {
                (StatusCode::BAD_REQUEST, Json(ApiError { error })).into_response()
            }
            AppError::NotFound(error) => {
                (StatusCode::NOT_FOUND, Json(ApiError { error })).into_response()
            }
            AppError::NoMatch(message) => (
                StatusCode::NOT_FOUND,
                Json(EmptyResult {
                    message,
                    data: Vec::new(),
                }),
            )
                .into_response(),
            AppError::Internal(error) => {
                tracing::error!(%error, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ApiError { error })).into_response()
            }
        }
    }
}

impl From<TimetableError> for AppError {
    fn from(err: TimetableError) -> Self {
        let msg = err.to_string();
        match err {
            TimetableError::Validation(_) => AppError::BadRequest(msg),
            TimetableError::SourceNotFound => AppError::NotFound(msg),
            TimetableError::NoMatch { .. } => AppError::NoMatch(msg),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Internal(format!("Task join error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (TimetableError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (TimetableError::SourceNotFound, StatusCode::NOT_FOUND),
            (
                TimetableError::NoMatch {
                    grade: 1,
                    class_number: 2,
                },
                StatusCode::NOT_FOUND,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(AppError::from(err).into_response().status(), status);
        }
    }

    #[test]
    fn test_internal_is_500() {
        let response = AppError::from(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
