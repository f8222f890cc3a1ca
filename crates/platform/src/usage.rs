//! Usage-statistics provider boundary.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use domain::models::{Granularity, TimeWindow, UsageSample};

use crate::error::ProviderError;

/// OS usage-statistics subsystem: raw per-package foreground samples for a
/// window at a requested granularity.
#[async_trait]
pub trait UsageStatsProvider: Send + Sync {
    /// One query per call, no retries. The provider may emit several
    /// samples for the same package: granularities such as best-fit split
    /// one logical window into several physical buckets.
    async fn query_usage(
        &self,
        granularity: Granularity,
        window: TimeWindow,
    ) -> Result<Vec<UsageSample>, ProviderError>;
}

/// Mock provider serving a fixed sample set.
#[derive(Debug, Default)]
pub struct MockUsageStatsProvider {
    samples: Vec<UsageSample>,
    fail: bool,
    query_count: AtomicUsize,
}

impl MockUsageStatsProvider {
    pub fn with_samples(samples: Vec<UsageSample>) -> Self {
        Self {
            samples,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// Number of queries issued against this mock.
    pub fn query_count(&self) -> usize {
        self.query_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UsageStatsProvider for MockUsageStatsProvider {
    async fn query_usage(
        &self,
        granularity: Granularity,
        window: TimeWindow,
    ) -> Result<Vec<UsageSample>, ProviderError> {
        self.query_count.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ProviderError::Unavailable(
                "simulated usage stats failure".to_string(),
            ));
        }

        tracing::debug!(
            granularity = %granularity,
            start_ms = window.start_ms,
            end_ms = window.end_ms,
            samples = self.samples.len(),
            "Mock: serving usage samples"
        );

        Ok(self.samples.clone())
    }
}
