//! Collaboration request counting.

use std::sync::Arc;

use crate::error::AppResult;
use crate::kv::{incoming_collab_requests_key, KvStore};

/// Service reading pending collaboration requests from the key-value store.
#[derive(Clone)]
pub struct CollabRequestService {
    kv: Arc<dyn KvStore>,
}

impl CollabRequestService {
    /// Create a new collaboration request service.
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self { kv }
    }

    /// Number of users waiting for `user_id` to accept their request.
    ///
    /// A user with no request set has zero pending requests.
    pub async fn unseen_count(&self, user_id: &str) -> AppResult<usize> {
        let key = incoming_collab_requests_key(user_id);
        let members = self.kv.smembers(&key).await?;
        Ok(members.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::kv::MemoryKvStore;

    #[tokio::test]
    async fn test_missing_key_counts_zero() {
        let service = CollabRequestService::new(Arc::new(MemoryKvStore::new()));
        assert_eq!(service.unseen_count("u1").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_counts_members() {
        let kv = MemoryKvStore::new();
        kv.sadd("user:u1:incoming_collab_requests", ["u2", "u3"])
            .await
            .unwrap();
        let service = CollabRequestService::new(Arc::new(kv));
        assert_eq!(service.unseen_count("u1").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_count_independent_of_insert_order() {
        let forward = MemoryKvStore::new();
        forward
            .sadd("user:u1:incoming_collab_requests", ["a", "b", "c", "d"])
            .await
            .unwrap();
        let backward = MemoryKvStore::new();
        backward
            .sadd("user:u1:incoming_collab_requests", ["d", "c", "b", "a"])
            .await
            .unwrap();

        let forward = CollabRequestService::new(Arc::new(forward));
        let backward = CollabRequestService::new(Arc::new(backward));
        assert_eq!(forward.unseen_count("u1").await.unwrap(), 4);
        assert_eq!(backward.unseen_count("u1").await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_other_users_not_counted() {
        let kv = MemoryKvStore::new();
        kv.sadd("user:u9:incoming_collab_requests", ["u2"])
            .await
            .unwrap();
        let service = CollabRequestService::new(Arc::new(kv));
        assert_eq!(service.unseen_count("u1").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_store_error_propagates() {
        let kv = MemoryKvStore::new();
        kv.set("user:u1:incoming_collab_requests", "not-a-set")
            .await
            .unwrap();
        let service = CollabRequestService::new(Arc::new(kv));
        let err = service.unseen_count("u1").await.unwrap_err();
        assert!(matches!(err, AppError::KvStore(_)));
    }
}
