//! Network-consumption models: network selectors, raw buckets and
//! per-package byte totals.

use serde::{Deserialize, Serialize};

/// Caller-facing network selector for data-usage queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkType {
    Mobile,
    Wifi,
    MobileAndWifi,
}

impl std::fmt::Display for NetworkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkType::Mobile => write!(f, "mobile"),
            NetworkType::Wifi => write!(f, "wifi"),
            NetworkType::MobileAndWifi => write!(f, "mobile_and_wifi"),
        }
    }
}

/// Physical radio a single summary query is scoped to.
///
/// [`NetworkType::MobileAndWifi`] fans out into one query per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkKind {
    Mobile,
    Wifi,
}

/// Raw accounting bucket returned by the network-stats provider, scoped to
/// one owner uid. Consumed transiently, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataUsageSample {
    pub owner_uid: i32,
    pub rx_bytes: u64,
    pub tx_bytes: u64,
}

impl DataUsageSample {
    pub fn total(&self) -> u64 {
        self.rx_bytes + self.tx_bytes
    }
}

/// Byte total for one package over one window and requested network type.
///
/// Serialized field names are frozen for caller compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDataUsage {
    pub package_name: String,
    pub network_type: NetworkType,
    pub total_bytes: u64,
}
