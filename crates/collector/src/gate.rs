//! Permission gate for the usage-access grant.

use std::sync::Arc;

use domain::models::PermissionState;
use platform::{PackageResolver, UsageAccessProvider};

/// Checks the usage-access grant before queries are issued and requests
/// the grant UI on behalf of the host.
pub struct PermissionGate {
    access: Arc<dyn UsageAccessProvider>,
    packages: Arc<dyn PackageResolver>,
}

impl PermissionGate {
    pub fn new(access: Arc<dyn UsageAccessProvider>, packages: Arc<dyn PackageResolver>) -> Self {
        Self { access, packages }
    }

    /// Live grant state, never cached. Never fails: a provider error is
    /// reported as [`PermissionState::Denied`] (fail closed).
    pub async fn usage_access(&self) -> PermissionState {
        match self.access.check_usage_access().await {
            Ok(true) => PermissionState::Granted,
            Ok(false) => PermissionState::Denied,
            Err(err) => {
                tracing::warn!(error = %err, "Usage access check failed; treating as denied");
                PermissionState::Denied
            }
        }
    }

    /// Asks the OS to present its usage-access settings UI, scoped to
    /// `package_name` when that package resolves to an installed
    /// application, unscoped otherwise.
    ///
    /// Side effect only: launch failures are logged, and nothing
    /// guarantees the user grants access.
    pub async fn open_usage_access_settings(&self, package_name: &str) {
        let target = match self.packages.uid_for_package(package_name).await {
            Ok(Some(_)) => Some(package_name),
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    package = %package_name,
                    "Package resolution failed; opening unscoped settings"
                );
                None
            }
        };

        if let Err(err) = self.access.open_usage_access_settings(target).await {
            tracing::warn!(error = %err, "Failed to open usage access settings");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::{MockPackageResolver, MockUsageAccessProvider};

    fn gate(access: MockUsageAccessProvider) -> (Arc<MockUsageAccessProvider>, PermissionGate) {
        let access = Arc::new(access);
        let packages = Arc::new(MockPackageResolver::with_packages(&[("com.example.app", 5)]));
        let gate = PermissionGate::new(access.clone(), packages);
        (access, gate)
    }

    #[tokio::test]
    async fn test_granted_provider_reports_granted() {
        let (_, gate) = gate(MockUsageAccessProvider::granted());
        assert_eq!(gate.usage_access().await, PermissionState::Granted);
    }

    #[tokio::test]
    async fn test_denied_provider_reports_denied() {
        let (_, gate) = gate(MockUsageAccessProvider::denied());
        assert_eq!(gate.usage_access().await, PermissionState::Denied);
    }

    #[tokio::test]
    async fn test_provider_failure_fails_closed() {
        let (_, gate) = gate(MockUsageAccessProvider::failing());
        assert_eq!(gate.usage_access().await, PermissionState::Denied);
    }

    #[tokio::test]
    async fn test_settings_scoped_to_resolvable_package() {
        let (access, gate) = gate(MockUsageAccessProvider::denied());

        gate.open_usage_access_settings("com.example.app").await;

        assert_eq!(
            access.opened_targets(),
            vec![Some("com.example.app".to_string())]
        );
    }

    #[tokio::test]
    async fn test_settings_unscoped_for_unknown_package() {
        let (access, gate) = gate(MockUsageAccessProvider::denied());

        gate.open_usage_access_settings("com.example.missing").await;

        assert_eq!(access.opened_targets(), vec![None]);
    }
}
