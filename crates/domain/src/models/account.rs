//! System account entries.

use serde::{Deserialize, Serialize};

/// One system-registered account, reduced to its display name and the
/// provider type that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountEntry {
    pub name: String,
    pub provider: String,
}
