//! Cache bootstrap
//!
//! Builds a [`NamespacedCache`] from [`CacheConfig`]: opens the configured
//! key-value backend and attaches a `tracing` logger scoped to the
//! application prefix.

use crate::config::{CacheConfig, KeyValueBackend};
use crate::constants::CACHE_LOG_COMPONENT;
use nscache_application::NamespacedCache;
use nscache_domain::error::Result;
use nscache_domain::ports::{CacheLogger, KeyValueClient};
use nscache_providers::{InMemoryKeyValueClient, RedisKeyValueClient, TracingCacheLogger};
use std::sync::Arc;
use tracing::debug;

/// Open the configured backend and build the cache facade
pub async fn create_cache(config: &CacheConfig) -> Result<NamespacedCache> {
    let client: Arc<dyn KeyValueClient> = match config.backend {
        KeyValueBackend::Redis => Arc::new(RedisKeyValueClient::connect(&config.redis_url).await?),
        KeyValueBackend::Memory => Arc::new(InMemoryKeyValueClient::new()),
    };
    debug!(backend = client.provider_name(), "Key-value client ready");

    create_cache_with_client(config, client)
}

/// Build the cache facade on top of an existing client
pub fn create_cache_with_client(
    config: &CacheConfig,
    client: Arc<dyn KeyValueClient>,
) -> Result<NamespacedCache> {
    let logger = TracingCacheLogger::new(CACHE_LOG_COMPONENT).child(&config.app_prefix);

    NamespacedCache::builder()
        .client(client)
        .system_prefix(config.system_prefix.as_str())
        .app_prefix(config.app_prefix.as_str())
        .default_expire_secs(config.default_expire_secs)
        .logger(logger)
        .build()
}
