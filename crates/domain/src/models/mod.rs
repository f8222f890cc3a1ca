//! Domain models for the usage-telemetry collector.

pub mod account;
pub mod network;
pub mod permission;
pub mod usage;

pub use account::AccountEntry;
pub use network::{AppDataUsage, DataUsageSample, NetworkKind, NetworkType};
pub use permission::PermissionState;
pub use usage::{AppUsageRecord, Granularity, TimeWindow, UsageSample};
