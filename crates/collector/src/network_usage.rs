//! Per-package network byte totals.

use std::sync::Arc;

use domain::models::{AppDataUsage, NetworkKind, NetworkType, TimeWindow};
use domain::TelemetryError;
use platform::{NetworkStatsProvider, PackageResolver, ProviderError};

/// Sums provider summary buckets into one byte total per package and
/// requested network type.
pub struct NetworkUsageAggregator {
    network: Arc<dyn NetworkStatsProvider>,
    packages: Arc<dyn PackageResolver>,
}

impl NetworkUsageAggregator {
    pub fn new(network: Arc<dyn NetworkStatsProvider>, packages: Arc<dyn PackageResolver>) -> Self {
        Self { network, packages }
    }

    /// Resolves the package uid first and fails with
    /// [`TelemetryError::PackageNotFound`] before any network query.
    ///
    /// [`NetworkType::MobileAndWifi`] fans out into two independent
    /// queries; if either fails the whole call fails. A partial byte count
    /// would understate usage without any signal, so it is never returned.
    pub async fn query_app_data_usage(
        &self,
        package_name: &str,
        network_type: NetworkType,
        window: TimeWindow,
    ) -> Result<AppDataUsage, TelemetryError> {
        let uid = self
            .packages
            .uid_for_package(package_name)
            .await
            .map_err(platform_failure)?
            .ok_or_else(|| TelemetryError::PackageNotFound(package_name.to_string()))?;

        let total_bytes = match network_type {
            NetworkType::Mobile => self.query_total(NetworkKind::Mobile, uid, window).await?,
            NetworkType::Wifi => self.query_total(NetworkKind::Wifi, uid, window).await?,
            NetworkType::MobileAndWifi => {
                let mobile = self.query_total(NetworkKind::Mobile, uid, window).await?;
                let wifi = self.query_total(NetworkKind::Wifi, uid, window).await?;
                mobile + wifi
            }
        };

        tracing::debug!(
            package = %package_name,
            network = %network_type,
            total_bytes,
            "Summed app data usage"
        );

        Ok(AppDataUsage {
            package_name: package_name.to_string(),
            network_type,
            total_bytes,
        })
    }

    /// One summary query for one radio. Every returned bucket is visited
    /// exactly once; buckets owned by other uids contribute zero.
    async fn query_total(
        &self,
        kind: NetworkKind,
        uid: i32,
        window: TimeWindow,
    ) -> Result<u64, TelemetryError> {
        let subscriber = match kind {
            NetworkKind::Mobile => self.network.subscriber_id().await.map_err(platform_failure)?,
            NetworkKind::Wifi => None,
        };

        let buckets = self
            .network
            .query_summary(kind, subscriber.as_deref(), window)
            .await
            .map_err(platform_failure)?;

        Ok(buckets
            .iter()
            .filter(|bucket| bucket.owner_uid == uid)
            .map(|bucket| bucket.total())
            .sum())
    }
}

fn platform_failure(err: ProviderError) -> TelemetryError {
    TelemetryError::PlatformQueryFailed(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::DataUsageSample;
    use platform::{MockNetworkStatsProvider, MockPackageResolver};

    fn bucket(owner_uid: i32, rx_bytes: u64, tx_bytes: u64) -> DataUsageSample {
        DataUsageSample {
            owner_uid,
            rx_bytes,
            tx_bytes,
        }
    }

    fn aggregator(
        network: MockNetworkStatsProvider,
    ) -> (Arc<MockNetworkStatsProvider>, NetworkUsageAggregator) {
        let network = Arc::new(network);
        let packages = Arc::new(MockPackageResolver::with_packages(&[("com.example.app", 5)]));
        let aggregator = NetworkUsageAggregator::new(network.clone(), packages);
        (network, aggregator)
    }

    #[tokio::test]
    async fn test_buckets_for_other_uids_are_skipped() {
        let (_, aggregator) = aggregator(MockNetworkStatsProvider::new(
            vec![bucket(5, 10, 10), bucket(9, 999, 999)],
            vec![],
        ));

        let usage = aggregator
            .query_app_data_usage("com.example.app", NetworkType::Mobile, TimeWindow::new(0, 100))
            .await
            .unwrap();

        assert_eq!(usage.total_bytes, 20);
    }

    #[tokio::test]
    async fn test_mobile_and_wifi_sums_both_radios() {
        let (network, aggregator) = aggregator(MockNetworkStatsProvider::new(
            vec![bucket(5, 400, 600)],
            vec![bucket(5, 1500, 500)],
        ));

        let usage = aggregator
            .query_app_data_usage(
                "com.example.app",
                NetworkType::MobileAndWifi,
                TimeWindow::new(0, 100),
            )
            .await
            .unwrap();

        assert_eq!(usage.total_bytes, 3000);
        assert_eq!(network.query_count(), 2);
    }

    #[tokio::test]
    async fn test_partial_failure_fails_whole_call() {
        let (_, aggregator) = aggregator(
            MockNetworkStatsProvider::new(vec![bucket(5, 400, 600)], vec![]).failing_wifi(),
        );

        let err = aggregator
            .query_app_data_usage(
                "com.example.app",
                NetworkType::MobileAndWifi,
                TimeWindow::new(0, 100),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, TelemetryError::PlatformQueryFailed(_)));
    }

    #[tokio::test]
    async fn test_unknown_package_fails_before_network_query() {
        let (network, aggregator) =
            aggregator(MockNetworkStatsProvider::new(vec![bucket(5, 1, 1)], vec![]));

        let err = aggregator
            .query_app_data_usage(
                "com.example.missing",
                NetworkType::Mobile,
                TimeWindow::new(0, 100),
            )
            .await
            .unwrap_err();

        assert_eq!(
            err,
            TelemetryError::PackageNotFound("com.example.missing".to_string())
        );
        assert_eq!(network.query_count(), 0);
    }
}
