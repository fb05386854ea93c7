//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/timetable", get(handlers::get_overview))
        .route("/timetable/{grade}/{class_number}", get(handlers::get_timetable))
        .route("/timetable/{grade}/{class_number}/summary", get(handlers::get_summary))
        .route(
            "/timetable/{grade}/{class_number}/export.csv",
            get(handlers::export_timetable),
        )
        .route("/validate/{grade}/{class_number}", get(handlers::validate_class));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", api)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
