//! In-memory key-value client tests

use nscache_application::NamespacedCache;
use nscache_domain::ports::KeyValueClient;
use nscache_domain::value_objects::CommandReply;
use nscache_providers::InMemoryKeyValueClient;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_store_and_fetch() {
    let client = InMemoryKeyValueClient::new();

    assert_eq!(client.store("a", "1").await.unwrap(), CommandReply::ok());
    assert_eq!(client.fetch("a").await.unwrap(), Some("1".to_string()));
    assert_eq!(client.fetch("missing").await.unwrap(), None);
    assert_eq!(client.provider_name(), "memory");
}

#[tokio::test]
async fn test_expire_reports_whether_key_exists() {
    let client = InMemoryKeyValueClient::new();
    client.store("a", "1").await.unwrap();

    assert_eq!(client.expire("a", 30).await.unwrap(), CommandReply::Integer(1));
    assert_eq!(
        client.expire("missing", 30).await.unwrap(),
        CommandReply::Integer(0)
    );

    let ttl = client.ttl("a").expect("timeout should be set");
    assert!(ttl <= Duration::from_secs(30) && ttl > Duration::from_secs(25));
}

#[tokio::test]
async fn test_store_clears_previous_timeout() {
    let client = InMemoryKeyValueClient::new();
    client.store("a", "1").await.unwrap();
    client.expire("a", 30).await.unwrap();

    client.store("a", "2").await.unwrap();

    assert_eq!(client.ttl("a"), None);
}

#[tokio::test]
async fn test_expired_keys_disappear() {
    let client = InMemoryKeyValueClient::new();
    client.store("short", "1").await.unwrap();
    client.store("long", "2").await.unwrap();
    client.expire("short", 1).await.unwrap();

    tokio::time::sleep(Duration::from_millis(1100)).await;

    assert_eq!(client.fetch("short").await.unwrap(), None);
    assert_eq!(
        client.list_keys("*").await.unwrap(),
        Some(vec!["long".to_string()])
    );
    assert_eq!(client.len(), 1);
}

#[tokio::test]
async fn test_expire_zero_deletes_key() {
    let client = InMemoryKeyValueClient::new();
    client.store("a", "1").await.unwrap();

    assert_eq!(client.expire("a", 0).await.unwrap(), CommandReply::Integer(1));
    assert!(client.is_empty());
}

#[tokio::test]
async fn test_list_keys_matches_glob() {
    let client = InMemoryKeyValueClient::new();
    for key in ["sys:app:a", "sys:app:b", "sys:other:c", "plain"] {
        client.store(key, "v").await.unwrap();
    }

    assert_eq!(
        client.list_keys("sys:app:*").await.unwrap(),
        Some(vec!["sys:app:a".to_string(), "sys:app:b".to_string()])
    );
    assert_eq!(client.list_keys("*").await.unwrap().unwrap().len(), 4);
    assert_eq!(client.list_keys("nothing:*").await.unwrap(), Some(Vec::new()));
}

#[tokio::test]
async fn test_unclosed_bracket_matches_literally() {
    let client = InMemoryKeyValueClient::new();
    for key in ["sys:a[b:x", "sys:a[b:y", "sys:ab:z", "[unclosed"] {
        client.store(key, "v").await.unwrap();
    }

    assert_eq!(
        client.list_keys("sys:a[b:*").await.unwrap(),
        Some(vec!["sys:a[b:x".to_string(), "sys:a[b:y".to_string()])
    );
    assert_eq!(
        client.list_keys("[unclosed").await.unwrap(),
        Some(vec!["[unclosed".to_string()])
    );
}

#[tokio::test]
async fn test_bracket_in_app_prefix_counts_and_clears() {
    let client = Arc::new(InMemoryKeyValueClient::new());
    let cache = NamespacedCache::new(client.clone(), "a[b", "sys").unwrap();
    let neighbour = NamespacedCache::new(client.clone(), "ab", "sys").unwrap();

    cache.set("one", "1", None).await.unwrap();
    cache.set("two", "2", None).await.unwrap();
    neighbour.set("three", "3", None).await.unwrap();

    assert_eq!(cache.count_keys().await.unwrap().num_keys, 2);
    assert_eq!(cache.clear_keys().await.unwrap().num_deleted, 2);
    assert_eq!(neighbour.count_keys().await.unwrap().num_keys, 1);
}

#[tokio::test]
async fn test_delete_counts_only_existing_keys() {
    let client = InMemoryKeyValueClient::new();
    client.store("a", "1").await.unwrap();
    client.store("b", "2").await.unwrap();

    let keys = vec!["a".to_string(), "b".to_string(), "missing".to_string()];
    assert_eq!(client.delete_keys(&keys).await.unwrap(), 2);
    assert_eq!(client.delete_keys(&[]).await.unwrap(), 0);
    assert!(client.is_empty());
}
