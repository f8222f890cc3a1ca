//! Network-statistics provider boundary.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use domain::models::{DataUsageSample, NetworkKind, TimeWindow};

use crate::error::ProviderError;

/// OS network-statistics subsystem: summary buckets per physical radio.
#[async_trait]
pub trait NetworkStatsProvider: Send + Sync {
    /// Subscriber identity of the device's primary mobile plan, when one
    /// exists. Mobile summary queries are scoped to it.
    async fn subscriber_id(&self) -> Result<Option<String>, ProviderError>;

    /// Summary buckets for one radio over the window. Buckets are
    /// attributed to owner uids; filtering is the caller's concern.
    async fn query_summary(
        &self,
        kind: NetworkKind,
        subscriber_id: Option<&str>,
        window: TimeWindow,
    ) -> Result<Vec<DataUsageSample>, ProviderError>;
}

/// Mock provider with independent mobile and Wi-Fi bucket sets.
#[derive(Debug, Default)]
pub struct MockNetworkStatsProvider {
    mobile: Vec<DataUsageSample>,
    wifi: Vec<DataUsageSample>,
    subscriber: Option<String>,
    fail_mobile: bool,
    fail_wifi: bool,
    query_count: AtomicUsize,
}

impl MockNetworkStatsProvider {
    pub fn new(mobile: Vec<DataUsageSample>, wifi: Vec<DataUsageSample>) -> Self {
        Self {
            mobile,
            wifi,
            subscriber: Some("mock-subscriber".to_string()),
            ..Default::default()
        }
    }

    pub fn failing_mobile(mut self) -> Self {
        self.fail_mobile = true;
        self
    }

    pub fn failing_wifi(mut self) -> Self {
        self.fail_wifi = true;
        self
    }

    /// Number of summary queries issued against this mock.
    pub fn query_count(&self) -> usize {
        self.query_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NetworkStatsProvider for MockNetworkStatsProvider {
    async fn subscriber_id(&self) -> Result<Option<String>, ProviderError> {
        Ok(self.subscriber.clone())
    }

    async fn query_summary(
        &self,
        kind: NetworkKind,
        _subscriber_id: Option<&str>,
        _window: TimeWindow,
    ) -> Result<Vec<DataUsageSample>, ProviderError> {
        self.query_count.fetch_add(1, Ordering::SeqCst);
        match kind {
            NetworkKind::Mobile if self.fail_mobile => Err(ProviderError::Unavailable(
                "simulated mobile summary failure".to_string(),
            )),
            NetworkKind::Mobile => Ok(self.mobile.clone()),
            NetworkKind::Wifi if self.fail_wifi => Err(ProviderError::Unavailable(
                "simulated wifi summary failure".to_string(),
            )),
            NetworkKind::Wifi => Ok(self.wifi.clone()),
        }
    }
}
