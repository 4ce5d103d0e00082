//! Redis-backed key-value store.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use super::KvStore;
use crate::error::AppResult;

/// Key-value store over a multiplexed Redis connection.
///
/// The connection is cheap to clone and every command runs on its own clone,
/// so a single `RedisKvStore` is shared by all requests.
#[derive(Clone)]
pub struct RedisKvStore {
    conn: MultiplexedConnection,
}

impl RedisKvStore {
    /// Open a client for `url` and establish the multiplexed connection.
    pub async fn connect(url: &str) -> AppResult<Self> {
        let client = redis::Client::open(url)?;
        let conn = client.get_multiplexed_async_connection().await?;
        tracing::info!(url = %url, "Connected to Redis");
        Ok(Self { conn })
    }
}

#[async_trait]
impl KvStore for RedisKvStore {
    async fn smembers(&self, key: &str) -> AppResult<Vec<String>> {
        let mut conn = self.conn.clone();
        let members: Vec<String> = conn.smembers(key).await?;
        tracing::debug!(key = %key, count = members.len(), "smembers");
        Ok(members)
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut conn = self.conn.clone();
        let _: () = conn.set(key, value).await?;
        tracing::debug!(key = %key, "set");
        Ok(())
    }

    async fn ping(&self) -> bool {
        let mut conn = self.conn.clone();
        let pong: redis::RedisResult<String> =
            redis::cmd("PING").query_async(&mut conn).await;
        if let Err(ref e) = pong {
            tracing::warn!(error = %e, "Redis ping failed");
        }
        pong.is_ok()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
