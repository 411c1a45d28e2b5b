//! Bootstrap tests

use nscache_domain::ports::KeyValueClient;
use nscache_infrastructure::config::{CacheConfig, KeyValueBackend};
use nscache_infrastructure::{create_cache, create_cache_with_client};
use nscache_providers::InMemoryKeyValueClient;
use std::sync::Arc;

fn memory_config() -> CacheConfig {
    CacheConfig {
        backend: KeyValueBackend::Memory,
        system_prefix: "sys".to_string(),
        app_prefix: "app".to_string(),
        default_expire_secs: 60,
        ..CacheConfig::default()
    }
}

#[tokio::test]
async fn test_create_cache_with_memory_backend() {
    let cache = create_cache(&memory_config()).await.unwrap();

    assert_eq!(cache.key_prefix(), "sys:app");
    assert_eq!(cache.default_expire_secs(), Some(60));
    assert_eq!(cache.provider_name(), "memory");

    cache.set("k", "v", None).await.unwrap();
    assert_eq!(cache.get("k").await.unwrap(), "v");
}

#[tokio::test]
async fn test_create_cache_with_shared_client() {
    let store = Arc::new(InMemoryKeyValueClient::new());
    let client: Arc<dyn KeyValueClient> = store.clone();

    let cache = create_cache_with_client(&memory_config(), client).unwrap();
    cache.set("k", "v", None).await.unwrap();

    assert!(store.ttl("sys:app:k").is_some());
}

#[test]
fn test_empty_prefix_fails_construction() {
    let config = CacheConfig {
        app_prefix: String::new(),
        ..memory_config()
    };
    let client: Arc<dyn KeyValueClient> = Arc::new(InMemoryKeyValueClient::new());

    assert!(create_cache_with_client(&config, client).is_err());
}
