//! Domain layer for the usage-telemetry collector.
//!
//! This crate contains:
//! - Result models (usage records, data-usage totals, account entries)
//! - The telemetry error taxonomy
//! - Common validation helpers

pub mod error;
pub mod models;
pub mod validation;

pub use error::TelemetryError;
