//! Foreground-usage models: time windows, granularities, raw samples and
//! merged per-package records.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TelemetryError;

/// Closed set of bucketing resolutions understood by the usage-stats
/// provider.
///
/// Translation to OS-defined interval constants happens in the OS adapter,
/// never here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Daily,
    Weekly,
    Monthly,
    Yearly,
    /// Let the provider pick the tightest bucketing covering the window.
    BestFit,
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Granularity::Daily => write!(f, "daily"),
            Granularity::Weekly => write!(f, "weekly"),
            Granularity::Monthly => write!(f, "monthly"),
            Granularity::Yearly => write!(f, "yearly"),
            Granularity::BestFit => write!(f, "best_fit"),
        }
    }
}

/// Absolute query window in milliseconds since the Unix epoch.
///
/// Windows are caller-supplied; the service never generates them on a
/// caller's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl TimeWindow {
    pub fn new(start_ms: i64, end_ms: i64) -> Self {
        Self { start_ms, end_ms }
    }

    /// Builds a window from floating-point epoch milliseconds, truncating
    /// fractional parts. Host runtimes whose only numeric type is a double
    /// pass timestamps this way.
    pub fn from_epoch_millis_f64(start: f64, end: f64) -> Self {
        Self {
            start_ms: start.trunc() as i64,
            end_ms: end.trunc() as i64,
        }
    }

    /// Convenience window covering the last `days` days, ending now.
    pub fn last_days(days: i64) -> Self {
        let end = Utc::now();
        let start = end - Duration::days(days);
        Self {
            start_ms: start.timestamp_millis(),
            end_ms: end.timestamp_millis(),
        }
    }

    /// A start after the end is a caller error, reported before any
    /// provider is contacted.
    pub fn validate(&self) -> Result<(), TelemetryError> {
        if self.start_ms > self.end_ms {
            return Err(TelemetryError::InvalidWindow {
                start_ms: self.start_ms,
                end_ms: self.end_ms,
            });
        }
        Ok(())
    }

    /// An empty window (start == end) is valid and yields no samples.
    pub fn is_empty(&self) -> bool {
        self.start_ms == self.end_ms
    }
}

/// Raw per-package sample as returned by the usage-stats provider.
///
/// Providers may legitimately emit several samples for one package within
/// a single query; the aggregator merges them. Consumed transiently, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageSample {
    pub package_name: String,
    pub foreground_ms: u64,
    pub first_time_stamp: i64,
    pub last_time_stamp: i64,
    pub last_time_used: i64,
}

/// Merged per-package usage record for one query window.
///
/// Serialized field names are frozen for caller compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUsageRecord {
    pub package_name: String,
    pub total_time_in_foreground: u64,
    pub first_time_stamp: i64,
    pub last_time_stamp: i64,
    pub last_time_used: i64,
}

impl AppUsageRecord {
    pub fn from_sample(sample: UsageSample) -> Self {
        Self {
            package_name: sample.package_name,
            total_time_in_foreground: sample.foreground_ms,
            first_time_stamp: sample.first_time_stamp,
            last_time_stamp: sample.last_time_stamp,
            last_time_used: sample.last_time_used,
        }
    }

    /// Folds another sample for the same package into this record:
    /// foreground time is summed, first-seen takes the minimum, last-seen
    /// and last-used take the maximum.
    pub fn merge(&mut self, sample: &UsageSample) {
        debug_assert_eq!(self.package_name, sample.package_name);
        self.total_time_in_foreground += sample.foreground_ms;
        self.first_time_stamp = self.first_time_stamp.min(sample.first_time_stamp);
        self.last_time_stamp = self.last_time_stamp.max(sample.last_time_stamp);
        self.last_time_used = self.last_time_used.max(sample.last_time_used);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(foreground_ms: u64, first: i64, last: i64) -> UsageSample {
        UsageSample {
            package_name: "com.example.app".to_string(),
            foreground_ms,
            first_time_stamp: first,
            last_time_stamp: last,
            last_time_used: last,
        }
    }

    #[test]
    fn test_window_validate_accepts_ordered_and_empty() {
        assert!(TimeWindow::new(0, 100).validate().is_ok());
        assert!(TimeWindow::new(100, 100).validate().is_ok());
        assert!(TimeWindow::new(100, 100).is_empty());
    }

    #[test]
    fn test_window_validate_rejects_inverted() {
        let err = TimeWindow::new(200, 100).validate().unwrap_err();
        assert_eq!(
            err,
            TelemetryError::InvalidWindow {
                start_ms: 200,
                end_ms: 100
            }
        );
    }

    #[test]
    fn test_window_from_f64_truncates_fractional_millis() {
        let window = TimeWindow::from_epoch_millis_f64(1000.9, 2000.2);
        assert_eq!(window.start_ms, 1000);
        assert_eq!(window.end_ms, 2000);
    }

    #[test]
    fn test_last_days_is_ordered() {
        let window = TimeWindow::last_days(7);
        assert!(window.validate().is_ok());
        assert!(window.end_ms - window.start_ms >= 7 * 24 * 3600 * 1000);
    }

    #[test]
    fn test_merge_sums_foreground_and_widens_timestamps() {
        let mut record = AppUsageRecord::from_sample(sample(100, 0, 10));
        record.merge(&sample(50, 5, 20));

        assert_eq!(record.total_time_in_foreground, 150);
        assert_eq!(record.first_time_stamp, 0);
        assert_eq!(record.last_time_stamp, 20);
        assert_eq!(record.last_time_used, 20);
    }

    #[test]
    fn test_record_serializes_with_frozen_field_names() {
        let record = AppUsageRecord::from_sample(sample(100, 0, 10));
        let json = serde_json::to_string(&record).unwrap();

        assert!(json.contains("\"packageName\""));
        assert!(json.contains("\"totalTimeInForeground\""));
        assert!(json.contains("\"firstTimeStamp\""));
        assert!(json.contains("\"lastTimeStamp\""));
        assert!(json.contains("\"lastTimeUsed\""));
    }

    #[test]
    fn test_granularity_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Granularity::BestFit).unwrap(),
            "\"best_fit\""
        );
        assert_eq!(Granularity::Weekly.to_string(), "weekly");
    }
}
