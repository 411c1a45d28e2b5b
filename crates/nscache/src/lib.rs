//! # nscache
//!
//! A namespaced caching facade over a key-value store. Keys are prefixed
//! with `<system>:<application>:`, optionally expired, and every key in a
//! namespace can be counted or cleared in bulk.
//!
//! ## Example
//!
//! ```ignore
//! use nscache::{NamespacedCache, providers::RedisKeyValueClient};
//! use std::sync::Arc;
//!
//! let client = Arc::new(RedisKeyValueClient::connect("redis://localhost:6379").await?);
//! let cache = NamespacedCache::builder()
//!     .client(client)
//!     .system_prefix("kth")
//!     .app_prefix("profile")
//!     .build()?;
//!
//! cache.set("key", "value", Some(30)).await?;
//! assert_eq!(cache.get("key").await?, "value");
//! ```
//!
//! ## Architecture
//!
//! - `domain` - ports, key namespacing, result types and errors
//! - `application` - the [`NamespacedCache`] facade
//! - `providers` - Redis and in-memory clients, tracing logger
//! - `infrastructure` - configuration, logging setup and bootstrap

pub mod cli;

/// Domain layer - ports, value objects and errors
pub mod domain {
    pub use nscache_domain::*;
}

/// Application layer - the cache facade
pub mod application {
    pub use nscache_application::*;
}

/// Provider implementations
pub mod providers {
    pub use nscache_providers::*;
}

/// Infrastructure layer - config, logging and bootstrap
pub mod infrastructure {
    pub use nscache_infrastructure::*;
}

pub use nscache_application::{NamespacedCache, NamespacedCacheBuilder, create};
pub use nscache_domain::{
    CacheLogger, CommandReply, Error, KeyCount, KeyValueClient, KeysDeleted, NullCacheLogger,
    Result,
};
