//! Result shapes for bulk namespace operations

use serde::{Deserialize, Serialize};

/// Number of keys stored under a namespace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyCount {
    /// Composite prefix the count applies to
    pub key_prefix: String,
    /// Number of matching keys
    pub num_keys: usize,
}

/// Number of keys removed from a namespace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeysDeleted {
    /// Composite prefix the deletion applies to
    pub key_prefix: String,
    /// Number of keys the store reported as deleted
    pub num_deleted: u64,
}
