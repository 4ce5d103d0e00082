//! Story listing.

use async_trait::async_trait;
use std::sync::Arc;

use crate::db::models::Story;
use crate::db::queries::story as queries;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};

/// Source of the stories visible to a user.
#[async_trait]
pub trait StoryRepository: Send + Sync {
    /// Stories owned by or shared with `user_id`, in display order.
    async fn list_by_user(&self, user_id: &str) -> AppResult<Vec<Story>>;
}

/// Story repository backed by PostgreSQL.
#[derive(Clone)]
pub struct PgStoryRepository {
    pool: DbPool,
}

impl PgStoryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoryRepository for PgStoryRepository {
    async fn list_by_user(&self, user_id: &str) -> AppResult<Vec<Story>> {
        queries::list_stories_for_user(&self.pool, user_id).await
    }
}

/// Service for story operations.
#[derive(Clone)]
pub struct StoryService {
    repo: Arc<dyn StoryRepository>,
}

impl StoryService {
    /// Create a new story service.
    pub fn new(repo: Arc<dyn StoryRepository>) -> Self {
        Self { repo }
    }

    /// List the stories for a user. The list may be empty.
    pub async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<Story>> {
        if user_id.trim().is_empty() {
            return Err(AppError::Validation("user id must not be empty".to_string()));
        }

        let stories = self.repo.list_by_user(user_id).await?;
        tracing::debug!(user_id = %user_id, count = stories.len(), "Listed stories");
        Ok(stories)
    }
}
