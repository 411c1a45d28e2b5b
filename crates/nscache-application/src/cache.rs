//! Namespaced cache facade
//!
//! Each operation namespaces the caller key (or the namespace wildcard),
//! issues one or more commands on the external client in strict sequence,
//! and maps the raw reply into a result or an error. Store failures are
//! returned as-is; nothing is retried.
//!
//! ## Example
//!
//! ```ignore
//! use nscache_application::NamespacedCache;
//!
//! let cache = NamespacedCache::builder()
//!     .client(client)
//!     .system_prefix("kth")
//!     .app_prefix("profile")
//!     .default_expire_secs(300)
//!     .build()?;
//!
//! cache.set("user:42", "{}", None).await?;       // kth:profile:user:42, 300s
//! let value = cache.get("user:42").await?;
//! let cleared = cache.clear_keys().await?;
//! ```

use nscache_domain::error::{Error, Result};
use nscache_domain::ports::{CacheLogger, KeyValueClient, NullCacheLogger};
use nscache_domain::value_objects::{CommandReply, KeyCount, KeyPrefix, KeysDeleted};
use std::sync::Arc;

/// Cache facade scoped to one system/application namespace
///
/// Immutable after construction. Cloning is cheap and clones share the
/// same client, so concurrent use is as safe as the client itself.
#[derive(Debug, Clone)]
pub struct NamespacedCache {
    client: Arc<dyn KeyValueClient>,
    prefix: KeyPrefix,
    default_expire_secs: Option<u64>,
    log: Arc<dyn CacheLogger>,
}

impl NamespacedCache {
    /// Start building a cache facade
    pub fn builder() -> NamespacedCacheBuilder {
        NamespacedCacheBuilder::default()
    }

    /// Create a facade without default expiration, discarding diagnostics
    pub fn new(
        client: Arc<dyn KeyValueClient>,
        app_prefix: &str,
        system_prefix: &str,
    ) -> Result<Self> {
        Self::builder()
            .client(client)
            .app_prefix(app_prefix)
            .system_prefix(system_prefix)
            .build()
    }

    /// Store a value, optionally with an expiration in seconds
    ///
    /// The expiration is `expire_secs` when non-zero, otherwise the default
    /// expiration, otherwise none. When an expiration applies, the expire
    /// command is issued after the store succeeds and its reply is returned.
    /// The two commands are not atomic: a failure between them leaves the
    /// key stored without a timeout.
    pub async fn set(
        &self,
        key: &str,
        value: &str,
        expire_secs: Option<u64>,
    ) -> Result<CommandReply> {
        let local_key = self.prefix.key(key);

        let stored = self.client.store(&local_key, value).await?;
        self.log.debug(&format!("Stored key: {local_key}"));
        self.log.trace(&format!("Stored value: {value}"));

        match self.effective_expire(expire_secs) {
            Some(seconds) => {
                self.log.debug(&format!(
                    "Expire time ({seconds}) was set on key: {local_key}"
                ));
                self.client.expire(&local_key, seconds).await
            }
            None => Ok(stored),
        }
    }

    /// Fetch the raw value stored under `key`
    ///
    /// A missing value is always an error ([`Error::NotFound`]), never an
    /// empty result.
    pub async fn get(&self, key: &str) -> Result<String> {
        let local_key = self.prefix.key(key);

        match self.client.fetch(&local_key).await? {
            Some(value) => {
                self.log.debug(&format!("Found result for: {local_key}"));
                self.log.trace(&format!("Value: {value}"));
                Ok(value)
            }
            None => {
                let err = Error::NotFound { key: local_key };
                self.log.debug(&err.to_string());
                Err(err)
            }
        }
    }

    /// Count the keys stored under this namespace
    ///
    /// A missing listing counts as zero keys.
    pub async fn count_keys(&self) -> Result<KeyCount> {
        let pattern = self.prefix.search_pattern();
        self.log.debug(&format!("Counting keys for: {pattern}"));

        let num_keys = self
            .client
            .list_keys(&pattern)
            .await?
            .map_or(0, |keys| keys.len());
        self.log.debug(&format!(
            "Key search criteria: {pattern} Result: {num_keys}"
        ));

        Ok(KeyCount {
            key_prefix: self.prefix.to_string(),
            num_keys,
        })
    }

    /// Delete every key stored under this namespace
    ///
    /// A missing listing is an error ([`Error::EmptyListing`]). This is a
    /// known inconsistency with [`count_keys`](Self::count_keys), which
    /// reports zero instead; both behaviors are relied upon. An empty listing
    /// is not an error and still reaches the store's delete command.
    pub async fn clear_keys(&self) -> Result<KeysDeleted> {
        let pattern = self.prefix.search_pattern();

        let Some(keys) = self.client.list_keys(&pattern).await? else {
            let err = Error::EmptyListing { pattern };
            self.log.debug(&err.to_string());
            return Err(err);
        };
        self.log.debug(&format!(
            "Found {} keys to delete for: {pattern}",
            keys.len()
        ));

        let num_deleted = self.client.delete_keys(&keys).await?;
        self.log
            .debug(&format!("Deleted {num_deleted} keys from cache."));

        Ok(KeysDeleted {
            key_prefix: self.prefix.to_string(),
            num_deleted,
        })
    }

    /// Namespaced form of a caller key
    pub fn key_with_prefix(&self, key: &str) -> String {
        self.prefix.key(key)
    }

    /// Composite `<system>:<application>` prefix
    pub fn key_prefix(&self) -> &str {
        self.prefix.as_str()
    }

    pub fn default_expire_secs(&self) -> Option<u64> {
        self.default_expire_secs
    }

    /// Name of the underlying client implementation
    pub fn provider_name(&self) -> &str {
        self.client.provider_name()
    }

    fn effective_expire(&self, expire_secs: Option<u64>) -> Option<u64> {
        expire_secs
            .filter(|secs| *secs > 0)
            .or(self.default_expire_secs)
    }
}

/// Builder for [`NamespacedCache`]
///
/// The client and both prefixes are mandatory; [`build`](Self::build)
/// reports the first one missing as [`Error::Construction`].
#[derive(Debug, Default)]
pub struct NamespacedCacheBuilder {
    client: Option<Arc<dyn KeyValueClient>>,
    app_prefix: Option<String>,
    system_prefix: Option<String>,
    default_expire_secs: Option<u64>,
    logger: Option<Arc<dyn CacheLogger>>,
}

impl NamespacedCacheBuilder {
    /// External client the facade delegates to
    pub fn client(mut self, client: Arc<dyn KeyValueClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Application-level prefix (second namespace segment)
    pub fn app_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.app_prefix = Some(prefix.into());
        self
    }

    /// System-level prefix (first namespace segment)
    pub fn system_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.system_prefix = Some(prefix.into());
        self
    }

    /// Expiration applied when `set` is called without one; zero disables it
    pub fn default_expire_secs(mut self, secs: u64) -> Self {
        self.default_expire_secs = Some(secs);
        self
    }

    /// Diagnostic logger; a [`NullCacheLogger`] is used otherwise
    pub fn logger(mut self, logger: Arc<dyn CacheLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Validate the inputs and build the facade
    pub fn build(self) -> Result<NamespacedCache> {
        let client = self.client.ok_or_else(|| {
            Error::construction("cache was not created with a key-value client")
        })?;
        let app_prefix = non_empty(self.app_prefix)
            .ok_or_else(|| Error::construction("cache was not created with a key prefix"))?;
        let system_prefix = non_empty(self.system_prefix).ok_or_else(|| {
            Error::construction("cache was not created with a system key prefix")
        })?;

        Ok(NamespacedCache {
            client,
            prefix: KeyPrefix::new(Some(system_prefix.as_str()), Some(app_prefix.as_str())),
            default_expire_secs: self.default_expire_secs.filter(|secs| *secs > 0),
            log: self.logger.unwrap_or_else(NullCacheLogger::shared),
        })
    }
}

/// Create a cache facade from optional inputs
///
/// Equivalent to the builder; fails synchronously when the client or either
/// prefix is absent or empty.
pub fn create(
    client: Option<Arc<dyn KeyValueClient>>,
    app_prefix: Option<&str>,
    system_prefix: Option<&str>,
    default_expire_secs: Option<u64>,
    logger: Option<Arc<dyn CacheLogger>>,
) -> Result<NamespacedCache> {
    NamespacedCacheBuilder {
        client,
        app_prefix: app_prefix.map(str::to_string),
        system_prefix: system_prefix.map(str::to_string),
        default_expire_secs,
        logger,
    }
    .build()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
