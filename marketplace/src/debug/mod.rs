//! # Logging
//!
//! Structured logging via `tracing`.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log filter (default `marketplace=info,warn`)
//! - `MARKETPLACE_LOG_DIR`: Directory for the rolling log file (default `logs`)
//! - `MARKETPLACE_LOG_FILE`: Set to `1` to also write `marketplace.log`

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init;
