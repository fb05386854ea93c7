//! # School Timetable Backend
//!
//! Serves per-class school timetables read from a JSON document or a CSV
//! table, with validation of grade/class pairs against the school structure.
//!
//! ## Features
//!
//! - **Validation**: grade and class bounds for the junior and senior tiers
//! - **Sources**: a single-class JSON document, falling back to a CSV table
//! - **Shaping**: records grouped by day and ordered by period
//! - **Overview**: which grade/class pairs have data
//! - **HTTP API**: RESTful endpoints via Axum
//!
//! ## Architecture
//!
//! - [`models`]: school structure, records and the JSON document model
//! - [`sources`]: file access and the JSON/CSV readers
//! - [`services`]: resolution, shaping, overview, summary and export
//! - [`config`]: TOML and environment configuration
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod sources;

#[cfg(feature = "http-server")]
pub mod http;

pub use error::{TimetableError, TimetableResult};
