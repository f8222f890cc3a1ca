//! Package resolution boundary.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::ProviderError;

/// OS package registry: canonical package name to owner uid.
#[async_trait]
pub trait PackageResolver: Send + Sync {
    /// `Ok(None)` when the package is not installed.
    async fn uid_for_package(&self, package_name: &str) -> Result<Option<i32>, ProviderError>;
}

/// Mock resolver over a fixed name-to-uid table.
#[derive(Debug, Default)]
pub struct MockPackageResolver {
    uids: HashMap<String, i32>,
}

impl MockPackageResolver {
    pub fn with_packages(entries: &[(&str, i32)]) -> Self {
        Self {
            uids: entries
                .iter()
                .map(|(name, uid)| (name.to_string(), *uid))
                .collect(),
        }
    }
}

#[async_trait]
impl PackageResolver for MockPackageResolver {
    async fn uid_for_package(&self, package_name: &str) -> Result<Option<i32>, ProviderError> {
        Ok(self.uids.get(package_name).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_resolves_known_packages_only() {
        let resolver = MockPackageResolver::with_packages(&[("com.example.app", 10042)]);

        assert_eq!(
            resolver.uid_for_package("com.example.app").await,
            Ok(Some(10042))
        );
        assert_eq!(resolver.uid_for_package("com.example.other").await, Ok(None));
    }
}
