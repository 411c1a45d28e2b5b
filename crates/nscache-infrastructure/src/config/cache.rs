//! Cache configuration types

use crate::constants::*;
use serde::{Deserialize, Serialize};

/// Key-value backends
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KeyValueBackend {
    /// Redis server
    Redis,
    /// Process-local store
    Memory,
}

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Key-value backend
    pub backend: KeyValueBackend,

    /// Redis URL (for the Redis backend)
    pub redis_url: String,

    /// System-level key prefix
    pub system_prefix: String,

    /// Application-level key prefix
    pub app_prefix: String,

    /// Default expiration in seconds, 0 for none
    pub default_expire_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: KeyValueBackend::Redis,
            redis_url: DEFAULT_REDIS_URL.to_string(),
            system_prefix: DEFAULT_SYSTEM_PREFIX.to_string(),
            app_prefix: DEFAULT_APP_PREFIX.to_string(),
            default_expire_secs: 0,
        }
    }
}
