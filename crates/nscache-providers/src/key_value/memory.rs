//! In-memory key-value client
//!
//! Process-local stand-in for Redis. Expiration deadlines are tracked per
//! key and expired entries are purged lazily when touched. Patterns use
//! shell-style globbing (`*`, `?`, `[...]`). A pattern that does not parse
//! as a glob (an unclosed `[`, for instance) is matched literally, keeping
//! a trailing `*` as a wildcard, so listings never fail on a namespace.

use async_trait::async_trait;
use dashmap::DashMap;
use nscache_domain::error::{Error, Result};
use nscache_domain::ports::KeyValueClient;
use nscache_domain::value_objects::CommandReply;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| deadline <= now)
    }
}

/// In-memory key-value client
#[derive(Debug, Default)]
pub struct InMemoryKeyValueClient {
    entries: DashMap<String, Entry>,
}

impl InMemoryKeyValueClient {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Remaining time to live of a key, `None` when it has no timeout or is absent
    pub fn ttl(&self, key: &str) -> Option<Duration> {
        let now = Instant::now();
        self.purge_expired(key, now);
        self.entries
            .get(key)
            .and_then(|entry| entry.expires_at)
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn purge_expired(&self, key: &str, now: Instant) {
        self.entries
            .remove_if(key, |_, entry| entry.is_expired(now));
    }
}

/// Compile a key pattern, falling back to literal matching on glob errors
fn key_pattern(pattern: &str) -> Result<glob::Pattern> {
    glob::Pattern::new(pattern).or_else(|_| {
        let literal = match pattern.strip_suffix('*') {
            Some(head) => format!("{}*", glob::Pattern::escape(head)),
            None => glob::Pattern::escape(pattern),
        };
        glob::Pattern::new(&literal).map_err(|e| {
            Error::invalid_argument(format!("Invalid key pattern '{pattern}': {e}"))
        })
    })
}

#[async_trait]
impl KeyValueClient for InMemoryKeyValueClient {
    async fn store(&self, key: &str, value: &str) -> Result<CommandReply> {
        self.entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: None,
            },
        );
        Ok(CommandReply::ok())
    }

    async fn expire(&self, key: &str, seconds: u64) -> Result<CommandReply> {
        let now = Instant::now();
        self.purge_expired(key, now);

        if seconds == 0 {
            let removed = self.entries.remove(key).is_some();
            return Ok(CommandReply::Integer(i64::from(removed)));
        }

        let applied = match self.entries.get_mut(key) {
            Some(mut entry) => {
                entry.expires_at = Some(now + Duration::from_secs(seconds));
                true
            }
            None => false,
        };
        Ok(CommandReply::Integer(i64::from(applied)))
    }

    async fn fetch(&self, key: &str) -> Result<Option<String>> {
        self.purge_expired(key, Instant::now());
        Ok(self.entries.get(key).map(|entry| entry.value.clone()))
    }

    async fn list_keys(&self, pattern: &str) -> Result<Option<Vec<String>>> {
        let matcher = key_pattern(pattern)?;

        let now = Instant::now();
        let mut keys: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| !entry.value().is_expired(now) && matcher.matches(entry.key()))
            .map(|entry| entry.key().clone())
            .collect();
        keys.sort();

        Ok(Some(keys))
    }

    async fn delete_keys(&self, keys: &[String]) -> Result<u64> {
        let now = Instant::now();
        let deleted = keys
            .iter()
            .filter_map(|key| self.entries.remove(key))
            .filter(|(_, entry)| !entry.is_expired(now))
            .count();
        Ok(deleted as u64)
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}
