//! Per-package foreground-usage aggregation.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::Arc;

use domain::models::{AppUsageRecord, Granularity, TimeWindow};
use domain::TelemetryError;
use platform::UsageStatsProvider;

/// Normalizes raw provider samples into one record per package.
pub struct UsageStatsAggregator {
    provider: Arc<dyn UsageStatsProvider>,
}

impl UsageStatsAggregator {
    pub fn new(provider: Arc<dyn UsageStatsProvider>) -> Self {
        Self { provider }
    }

    /// Issues one provider query for the window and merges the returned
    /// samples per package. Packages with zero foreground time are kept;
    /// installed-but-idle is a meaningful answer.
    ///
    /// An empty window yields an empty mapping without a provider query.
    /// The map is ordered so identical queries serialize identically.
    ///
    /// Callers are expected to have passed the permission gate; this
    /// aggregator does not self-check.
    pub async fn query_usage_stats(
        &self,
        window: TimeWindow,
        granularity: Granularity,
    ) -> Result<BTreeMap<String, AppUsageRecord>, TelemetryError> {
        if window.is_empty() {
            return Ok(BTreeMap::new());
        }

        let samples = self
            .provider
            .query_usage(granularity, window)
            .await
            .map_err(|err| TelemetryError::PlatformQueryFailed(err.to_string()))?;

        let mut records: BTreeMap<String, AppUsageRecord> = BTreeMap::new();
        for sample in samples {
            // Granularities such as best-fit split one logical window into
            // several physical buckets per package.
            match records.entry(sample.package_name.clone()) {
                Entry::Occupied(mut entry) => entry.get_mut().merge(&sample),
                Entry::Vacant(entry) => {
                    entry.insert(AppUsageRecord::from_sample(sample));
                }
            }
        }

        tracing::debug!(
            packages = records.len(),
            granularity = %granularity,
            "Aggregated usage stats"
        );

        Ok(records)
    }
}
