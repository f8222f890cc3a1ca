//! Usage-telemetry collection service.
//!
//! A stateless request/response façade over platform usage and network
//! statistics providers:
//! - Permission gate for the usage-access grant
//! - Per-package foreground-usage aggregation
//! - Per-package network byte totals
//! - System account listing
//!
//! Hosts construct [`UsageTelemetryService`] once with their OS adapters
//! and issue queries; every result is an immutable per-call snapshot.

pub mod config;
pub mod facade;
pub mod gate;
pub mod logging;
pub mod network_usage;
pub mod usage_stats;

pub use config::TelemetryConfig;
pub use facade::UsageTelemetryService;
pub use gate::PermissionGate;
pub use network_usage::NetworkUsageAggregator;
pub use usage_stats::UsageStatsAggregator;
