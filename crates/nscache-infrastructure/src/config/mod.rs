//! Configuration
//!
//! [`AppConfig`] groups the cache and logging sections; [`ConfigLoader`]
//! merges defaults, an optional TOML file and `NSCACHE__`-prefixed
//! environment variables.

pub mod app;
pub mod cache;
pub mod loader;
pub mod logging;

pub use app::AppConfig;
pub use cache::{CacheConfig, KeyValueBackend};
pub use loader::ConfigLoader;
pub use logging::LoggingConfig;
