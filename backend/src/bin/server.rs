//! Timetable HTTP Server Binary
//!
//! Loads configuration, builds the timetable service over the configured data
//! directory and serves the REST API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin timetable-server
//!
//! TIMETABLE_DATA_DIR=/srv/timetables PORT=3000 cargo run --bin timetable-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `TIMETABLE_CONFIG`: Explicit path to a TOML config file
//! - `TIMETABLE_DATA_DIR`: Directory holding the timetable files (default: public/timetables)
//! - `TIMETABLE_JSON_FILE` / `TIMETABLE_CSV_FILE`: File names inside the data directory
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use timetable::config::AppConfig;
use timetable::http::{create_router, AppState};
use timetable::services::TimetableService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting timetable HTTP server");

    let config = AppConfig::load()?;
    info!(
        json = %config.data.json_path().display(),
        csv = %config.data.csv_path().display(),
        "Timetable sources configured"
    );

    let service = TimetableService::from_settings(&config.data);
    let status = service.source_status();
    if !status.json && !status.csv {
        warn!("No timetable file found yet; lookups will return 404 until one appears");
    }

    let app = create_router(AppState::new(service));

    let addr: SocketAddr = config.bind_address().parse()?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
