//! Key-value store access.
//!
//! The dashboard only needs two primitives from the store: writing a
//! string value and reading the members of a set. Both are exposed through
//! the [`KvStore`] trait so handlers can run against Redis in production and
//! against [`MemoryKvStore`] when no Redis URL is configured.

mod memory;
mod redis_store;

pub use memory::MemoryKvStore;
pub use redis_store::RedisKvStore;

use async_trait::async_trait;

use crate::error::AppResult;

/// Key holding the ids of users who asked to collaborate with `user_id`.
pub fn incoming_collab_requests_key(user_id: &str) -> String {
    format!("user:{}:incoming_collab_requests", user_id)
}

/// Minimal key-value store contract.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Members of the set stored at `key`. A missing key is an empty set.
    async fn smembers(&self, key: &str) -> AppResult<Vec<String>>;

    /// Store `value` at `key`, replacing whatever was there.
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Whether the store answers.
    async fn ping(&self) -> bool;

    /// Backend name for health reporting.
    fn backend(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collab_request_key() {
        assert_eq!(
            incoming_collab_requests_key("u1"),
            "user:u1:incoming_collab_requests"
        );
    }
}
