//! Account enumeration boundary.

use async_trait::async_trait;
use domain::models::AccountEntry;

use crate::error::ProviderError;

/// OS account manager: system-registered account entries.
#[async_trait]
pub trait AccountProvider: Send + Sync {
    /// All registered accounts. An empty list is a valid answer.
    async fn list_accounts(&self) -> Result<Vec<AccountEntry>, ProviderError>;
}

/// Mock provider over a fixed account list.
#[derive(Debug, Default)]
pub struct MockAccountProvider {
    accounts: Vec<AccountEntry>,
    deny: bool,
}

impl MockAccountProvider {
    pub fn with_accounts(accounts: Vec<AccountEntry>) -> Self {
        Self {
            accounts,
            deny: false,
        }
    }

    /// Mock that refuses enumeration.
    pub fn denying() -> Self {
        Self {
            deny: true,
            ..Default::default()
        }
    }
}

#[async_trait]
impl AccountProvider for MockAccountProvider {
    async fn list_accounts(&self) -> Result<Vec<AccountEntry>, ProviderError> {
        if self.deny {
            return Err(ProviderError::AccessDenied(
                "account enumeration refused".to_string(),
            ));
        }
        Ok(self.accounts.clone())
    }
}
