//! Usage-access op checks and grant UI requests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::ProviderError;

/// OS privacy/op-tracking subsystem: usage-access grant checks for the
/// current process identity and launching of the grant UI.
#[async_trait]
pub trait UsageAccessProvider: Send + Sync {
    /// Whether the usage-access op is currently allowed.
    ///
    /// Queried live on every call; the grant can be revoked at any time
    /// outside this process.
    async fn check_usage_access(&self) -> Result<bool, ProviderError>;

    /// Ask the OS to present its usage-access settings UI, scoped to
    /// `package_name` when given, the whole settings screen otherwise.
    /// Launches external UI and returns without waiting for the user.
    async fn open_usage_access_settings(
        &self,
        package_name: Option<&str>,
    ) -> Result<(), ProviderError>;
}

/// Mock provider for development and testing.
#[derive(Debug, Default)]
pub struct MockUsageAccessProvider {
    granted: bool,
    fail: bool,
    check_calls: AtomicUsize,
    opened: Mutex<Vec<Option<String>>>,
}

impl MockUsageAccessProvider {
    pub fn granted() -> Self {
        Self {
            granted: true,
            ..Default::default()
        }
    }

    pub fn denied() -> Self {
        Self::default()
    }

    /// Mock whose checks themselves fail, for the fail-closed path.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// Number of grant checks issued against this mock.
    pub fn check_calls(&self) -> usize {
        self.check_calls.load(Ordering::SeqCst)
    }

    /// Settings-UI targets this mock was asked to open, in call order.
    pub fn opened_targets(&self) -> Vec<Option<String>> {
        self.opened.lock().unwrap().clone()
    }
}

#[async_trait]
impl UsageAccessProvider for MockUsageAccessProvider {
    async fn check_usage_access(&self) -> Result<bool, ProviderError> {
        self.check_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ProviderError::Unavailable(
                "simulated op check failure".to_string(),
            ));
        }
        Ok(self.granted)
    }

    async fn open_usage_access_settings(
        &self,
        package_name: Option<&str>,
    ) -> Result<(), ProviderError> {
        tracing::info!(package = ?package_name, "Mock: would open usage access settings");
        self.opened
            .lock()
            .unwrap()
            .push(package_name.map(str::to_string));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_reports_grant_and_counts_checks() {
        let provider = MockUsageAccessProvider::granted();

        assert_eq!(provider.check_usage_access().await, Ok(true));
        assert_eq!(provider.check_usage_access().await, Ok(true));
        assert_eq!(provider.check_calls(), 2);
    }

    #[tokio::test]
    async fn test_mock_failing_check() {
        let provider = MockUsageAccessProvider::failing();
        assert!(provider.check_usage_access().await.is_err());
    }

    #[tokio::test]
    async fn test_mock_records_settings_targets() {
        let provider = MockUsageAccessProvider::denied();

        provider
            .open_usage_access_settings(Some("com.example.app"))
            .await
            .unwrap();
        provider.open_usage_access_settings(None).await.unwrap();

        assert_eq!(
            provider.opened_targets(),
            vec![Some("com.example.app".to_string()), None]
        );
    }
}
