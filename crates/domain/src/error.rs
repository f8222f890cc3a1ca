//! Error taxonomy for telemetry queries.

use thiserror::Error;

/// Typed failure of a single telemetry call.
///
/// Every failure is scoped to the call that produced it; nothing here is
/// fatal to the process and nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TelemetryError {
    /// The usage-access grant is absent for the current process identity.
    #[error("Usage access not granted")]
    PermissionDenied,

    /// The caller-supplied window has its start after its end.
    #[error("Invalid time window: start {start_ms} is after end {end_ms}")]
    InvalidWindow { start_ms: i64, end_ms: i64 },

    /// The package identifier does not resolve to an installed application.
    #[error("Package not found: {0}")]
    PackageNotFound(String),

    /// The OS data source itself errored or is unavailable.
    #[error("Platform query failed: {0}")]
    PlatformQueryFailed(String),

    /// The OS denied account enumeration.
    #[error("Account access denied: {0}")]
    AccountAccessDenied(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            TelemetryError::PermissionDenied.to_string(),
            "Usage access not granted"
        );
        assert_eq!(
            TelemetryError::InvalidWindow {
                start_ms: 20,
                end_ms: 10
            }
            .to_string(),
            "Invalid time window: start 20 is after end 10"
        );
        assert_eq!(
            TelemetryError::PackageNotFound("com.example.app".to_string()).to_string(),
            "Package not found: com.example.app"
        );
    }
}
