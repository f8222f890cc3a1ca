//! Provider-boundary error type.

use thiserror::Error;

/// Failure reported by an OS provider.
///
/// The collector maps these onto the caller-facing taxonomy at the
/// boundary; providers themselves stay ignorant of it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The OS refused the operation for the current identity.
    #[error("Provider denied access: {0}")]
    AccessDenied(String),

    /// The subsystem errored or could not be reached.
    #[error("Provider unavailable: {0}")]
    Unavailable(String),
}
