//! Redis key-value client
//!
//! Issues `SET`, `EXPIRE`, `GET`, `KEYS` and `DEL` over a multiplexed
//! connection. The connection is cheap to clone and is shared with the
//! caller, who stays responsible for its lifecycle.
//!
//! ## Example
//!
//! ```ignore
//! use nscache_providers::key_value::RedisKeyValueClient;
//!
//! let client = RedisKeyValueClient::connect("redis://localhost:6379").await?;
//! // Or reuse an existing connection
//! let client = RedisKeyValueClient::new(connection);
//! ```

use async_trait::async_trait;
use nscache_domain::error::{Error, Result};
use nscache_domain::ports::KeyValueClient;
use nscache_domain::value_objects::CommandReply;
use redis::{AsyncCommands, Client, RedisError, aio::MultiplexedConnection};

/// Redis-backed key-value client
#[derive(Clone)]
pub struct RedisKeyValueClient {
    connection: MultiplexedConnection,
}

impl RedisKeyValueClient {
    /// Wrap an already established connection
    pub fn new(connection: MultiplexedConnection) -> Self {
        Self { connection }
    }

    /// Open a connection to the Redis server at `url`
    ///
    /// # Arguments
    ///
    /// * `url` - Redis connection URL (e.g., "redis://localhost:6379")
    pub async fn connect(url: &str) -> Result<Self> {
        let client = Client::open(url)
            .map_err(|e| Error::infrastructure(format!("Failed to create Redis client: {e}"), e))?;

        let connection = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| {
                Error::infrastructure(format!("Failed to get Redis connection: {e}"), e)
            })?;

        Ok(Self::new(connection))
    }

    fn connection(&self) -> MultiplexedConnection {
        self.connection.clone()
    }
}

fn command_failed(command: &'static str) -> impl FnOnce(RedisError) -> Error {
    move |e| Error::infrastructure(format!("Redis {command} failed: {e}"), e)
}

#[async_trait]
impl KeyValueClient for RedisKeyValueClient {
    async fn store(&self, key: &str, value: &str) -> Result<CommandReply> {
        let mut conn = self.connection();

        let status: redis::RedisResult<String> = conn.set(key, value).await;
        status
            .map(CommandReply::Status)
            .map_err(command_failed("SET"))
    }

    async fn expire(&self, key: &str, seconds: u64) -> Result<CommandReply> {
        let mut conn = self.connection();
        let seconds = i64::try_from(seconds).unwrap_or(i64::MAX);

        let applied: redis::RedisResult<i64> = conn.expire(key, seconds).await;
        applied
            .map(CommandReply::Integer)
            .map_err(command_failed("EXPIRE"))
    }

    async fn fetch(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection();

        conn.get::<_, Option<String>>(key)
            .await
            .map_err(command_failed("GET"))
    }

    async fn list_keys(&self, pattern: &str) -> Result<Option<Vec<String>>> {
        let mut conn = self.connection();

        // KEYS always answers with an array, so the listing is never absent here
        let keys: redis::RedisResult<Vec<String>> = conn.keys(pattern).await;
        keys.map(Some).map_err(command_failed("KEYS"))
    }

    async fn delete_keys(&self, keys: &[String]) -> Result<u64> {
        // DEL without arguments is a Redis syntax error
        if keys.is_empty() {
            return Ok(0);
        }

        let mut conn = self.connection();

        let deleted: redis::RedisResult<u64> = conn.del(keys).await;
        deleted.map_err(command_failed("DEL"))
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisKeyValueClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisKeyValueClient")
            .field("provider", &self.provider_name())
            .finish_non_exhaustive()
    }
}
