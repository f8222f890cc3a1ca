//! Platform provider boundary for the usage-telemetry collector.
//!
//! This crate defines the narrow capability traits through which the
//! collector consumes OS statistics subsystems, plus mock providers used
//! for development and deterministic tests. Real OS adapters live with the
//! host; the collector only ever sees these traits.

pub mod access;
pub mod accounts;
pub mod error;
pub mod network;
pub mod packages;
pub mod usage;

pub use access::{MockUsageAccessProvider, UsageAccessProvider};
pub use accounts::{AccountProvider, MockAccountProvider};
pub use error::ProviderError;
pub use network::{MockNetworkStatsProvider, NetworkStatsProvider};
pub use packages::{MockPackageResolver, PackageResolver};
pub use usage::{MockUsageStatsProvider, UsageStatsProvider};
