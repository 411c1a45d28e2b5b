//! Infrastructure layer for nscache
//!
//! Cross-cutting concerns around the cache facade:
//!
//! - [`config`]: layered configuration (defaults, TOML file, environment)
//! - [`logging`]: `tracing` subscriber setup
//! - [`error_ext`]: context helpers converting foreign errors
//! - [`bootstrap`]: building a ready-to-use cache from configuration

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{create_cache, create_cache_with_client};
pub use config::{AppConfig, CacheConfig, ConfigLoader, KeyValueBackend, LoggingConfig};
