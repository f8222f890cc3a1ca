//! Query façade: the single entry point combining the permission gate and
//! the aggregators.

use std::collections::BTreeMap;
use std::sync::Arc;

use metrics::counter;

use domain::models::{
    AccountEntry, AppDataUsage, AppUsageRecord, Granularity, NetworkType, PermissionState,
    TimeWindow,
};
use domain::{validation, TelemetryError};
use platform::{
    AccountProvider, NetworkStatsProvider, PackageResolver, ProviderError, UsageAccessProvider,
    UsageStatsProvider,
};

use crate::gate::PermissionGate;
use crate::network_usage::NetworkUsageAggregator;
use crate::usage_stats::UsageStatsAggregator;

/// Stateless request/response façade over the platform statistics
/// providers.
///
/// Hosts construct it once with their OS adapters and may issue queries
/// concurrently; every call is an independent unit of work that resolves
/// exactly once. No retries, no built-in timeouts, no cancellation: a
/// caller that no longer cares simply discards the result.
pub struct UsageTelemetryService {
    gate: PermissionGate,
    usage: UsageStatsAggregator,
    network: NetworkUsageAggregator,
    accounts: Arc<dyn AccountProvider>,
}

impl UsageTelemetryService {
    pub fn new(
        access: Arc<dyn UsageAccessProvider>,
        packages: Arc<dyn PackageResolver>,
        usage_stats: Arc<dyn UsageStatsProvider>,
        network_stats: Arc<dyn NetworkStatsProvider>,
        accounts: Arc<dyn AccountProvider>,
    ) -> Self {
        Self {
            gate: PermissionGate::new(access, packages.clone()),
            usage: UsageStatsAggregator::new(usage_stats),
            network: NetworkUsageAggregator::new(network_stats, packages),
            accounts,
        }
    }

    /// Live usage-access grant state.
    pub async fn usage_access(&self) -> PermissionState {
        self.gate.usage_access().await
    }

    /// Requests the usage-access grant UI, scoped to `package_name` when
    /// it resolves to an installed application.
    pub async fn open_usage_access_settings(&self, package_name: &str) {
        self.gate.open_usage_access_settings(package_name).await;
    }

    /// Merged per-package foreground usage for the window.
    ///
    /// Fails with [`TelemetryError::InvalidWindow`] before any provider
    /// contact and with [`TelemetryError::PermissionDenied`] when the
    /// usage-access grant is absent; in that case no usage query is
    /// issued.
    pub async fn get_usage_stats(
        &self,
        window: TimeWindow,
        granularity: Granularity,
    ) -> Result<BTreeMap<String, AppUsageRecord>, TelemetryError> {
        window.validate()?;

        if !self.gate.usage_access().await.is_granted() {
            counter!(
                "telemetry_queries_failed_total",
                "operation" => "usage_stats",
                "error" => "permission_denied"
            )
            .increment(1);
            return Err(TelemetryError::PermissionDenied);
        }

        counter!("telemetry_queries_total", "operation" => "usage_stats").increment(1);
        self.usage.query_usage_stats(window, granularity).await
    }

    /// Byte total for one package over the window and requested network
    /// type.
    ///
    /// Deliberately not gated by the usage-access grant: network summaries
    /// sit behind a different privilege on the platform.
    pub async fn get_app_data_usage(
        &self,
        package_name: &str,
        network_type: NetworkType,
        window: TimeWindow,
    ) -> Result<AppDataUsage, TelemetryError> {
        window.validate()?;
        validation::validate_package_name(package_name)
            .map_err(|_| TelemetryError::PackageNotFound(package_name.to_string()))?;

        counter!("telemetry_queries_total", "operation" => "app_data_usage").increment(1);
        self.network
            .query_app_data_usage(package_name, network_type, window)
            .await
    }

    /// System-registered accounts. An empty list is a valid result, not an
    /// error.
    pub async fn list_accounts(&self) -> Result<Vec<AccountEntry>, TelemetryError> {
        counter!("telemetry_queries_total", "operation" => "accounts").increment(1);
        self.accounts.list_accounts().await.map_err(|err| match err {
            ProviderError::AccessDenied(msg) => TelemetryError::AccountAccessDenied(msg),
            ProviderError::Unavailable(msg) => TelemetryError::PlatformQueryFailed(msg),
        })
    }
}
