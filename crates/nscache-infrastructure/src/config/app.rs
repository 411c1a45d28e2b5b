//! Application configuration root

use super::{CacheConfig, LoggingConfig};
use serde::{Deserialize, Serialize};

/// Complete nscache configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Cache facade and key-value backend
    pub cache: CacheConfig,

    /// Diagnostic output
    pub logging: LoggingConfig,
}
