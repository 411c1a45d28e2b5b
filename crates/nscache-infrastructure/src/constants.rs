//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "nscache.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "nscache";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "NSCACHE";

/// Separator for nested keys in environment variables (`NSCACHE__CACHE__APP_PREFIX`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Default Redis URL
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";

/// Default system-level key prefix
pub const DEFAULT_SYSTEM_PREFIX: &str = "nscache";

/// Default application-level key prefix
pub const DEFAULT_APP_PREFIX: &str = "default";

/// Root component name for cache diagnostics
pub const CACHE_LOG_COMPONENT: &str = "nscache";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "NSCACHE_LOG";
