//! Key-Value Client Port
//!
//! The five store commands the cache facade issues. Implementations own
//! nothing of the facade: connection lifecycle, timeouts and pattern
//! semantics all belong to the store behind the client.

use crate::error::Result;
use crate::value_objects::CommandReply;
use async_trait::async_trait;

/// External key-value client
///
/// # Example
///
/// ```ignore
/// use nscache_domain::ports::KeyValueClient;
///
/// client.store("sys:app:user", "{\"id\":1}").await?;
/// client.expire("sys:app:user", 60).await?;
/// let keys = client.list_keys("sys:app:*").await?.unwrap_or_default();
/// let removed = client.delete_keys(&keys).await?;
/// ```
#[async_trait]
pub trait KeyValueClient: Send + Sync + std::fmt::Debug {
    /// Unconditionally store a value, without expiration
    async fn store(&self, key: &str, value: &str) -> Result<CommandReply>;

    /// Set a timeout in seconds on an existing key
    async fn expire(&self, key: &str, seconds: u64) -> Result<CommandReply>;

    /// Fetch a value, `None` when the key holds nothing
    async fn fetch(&self, key: &str) -> Result<Option<String>>;

    /// List keys matching a glob-style pattern
    ///
    /// `None` means the store returned no listing at all, which is distinct
    /// from an empty listing.
    async fn list_keys(&self, pattern: &str) -> Result<Option<Vec<String>>>;

    /// Delete the given keys, returning how many the store removed
    async fn delete_keys(&self, keys: &[String]) -> Result<u64>;

    /// Name of this client implementation (e.g. "redis", "memory")
    fn provider_name(&self) -> &str;
}
