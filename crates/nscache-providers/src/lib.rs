//! # nscache - Provider Implementations
//!
//! Implementations of the ports defined in `nscache-domain`.
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Key-Value | `KeyValueClient` | Redis, InMemory |
//! | Logging | `CacheLogger` | Tracing (Null lives in the domain crate) |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! nscache-providers = { version = "0.1", default-features = false, features = ["kv-redis"] }
//! ```

pub use nscache_domain::error::{Error, Result};
pub use nscache_domain::ports::{CacheLogger, KeyValueClient};

/// Key-value client implementations
///
/// Implements `KeyValueClient` for external stores.
pub mod key_value;

/// Logger implementations
pub mod logging;

#[cfg(feature = "kv-memory")]
pub use key_value::InMemoryKeyValueClient;
#[cfg(feature = "kv-redis")]
pub use key_value::RedisKeyValueClient;
pub use logging::TracingCacheLogger;
