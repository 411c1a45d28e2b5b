//! Key-Value Client Implementations
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`RedisKeyValueClient`] | Distributed | Redis over a multiplexed connection |
//! | [`InMemoryKeyValueClient`] | Local | Process-local store for tests and development |

#[cfg(feature = "kv-memory")]
pub mod memory;
#[cfg(feature = "kv-redis")]
pub mod redis;

#[cfg(feature = "kv-memory")]
pub use self::memory::InMemoryKeyValueClient;
#[cfg(feature = "kv-redis")]
pub use self::redis::RedisKeyValueClient;
