//! Sidebar assembly for a signed-in user.

use crate::auth::Session;
use crate::error::AppResult;
use crate::services::{CollabRequestService, StoryService};
use crate::sidebar::Sidebar;

/// Service gathering everything the sidebar shows.
#[derive(Clone)]
pub struct SidebarService {
    stories: StoryService,
    collab: CollabRequestService,
}

impl SidebarService {
    /// Create a new sidebar service.
    pub fn new(stories: StoryService, collab: CollabRequestService) -> Self {
        Self { stories, collab }
    }

    /// Build the sidebar for `session`.
    ///
    /// The story list and the request count are read concurrently; the first
    /// failure aborts the whole assembly.
    pub async fn assemble(&self, session: &Session) -> AppResult<Sidebar> {
        let (stories, unseen_count) = tokio::try_join!(
            self.stories.list_for_user(&session.user_id),
            self.collab.unseen_count(&session.user_id),
        )?;

        tracing::debug!(
            user_id = %session.user_id,
            stories = stories.len(),
            unseen_count,
            "Sidebar assembled"
        );

        Ok(Sidebar::build(session, &stories, unseen_count))
    }

    /// Current unseen request count for `session`.
    pub async fn unseen_count(&self, session: &Session) -> AppResult<usize> {
        self.collab.unseen_count(&session.user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::kv::{KvStore, MemoryKvStore};
    use crate::test_support::{session, story, StaticStories};
    use std::sync::Arc;

    fn service(stories: StaticStories, kv: MemoryKvStore) -> SidebarService {
        SidebarService::new(
            StoryService::new(Arc::new(stories)),
            CollabRequestService::new(Arc::new(kv)),
        )
    }

    #[tokio::test]
    async fn test_assemble() {
        let kv = MemoryKvStore::new();
        kv.sadd("user:u1:incoming_collab_requests", ["u2", "u3"])
            .await
            .unwrap();
        let stories = StaticStories::default().with("u1", story("The Long Night"));

        let sidebar = service(stories, kv).assemble(&session("u1")).await.unwrap();
        assert_eq!(sidebar.collab_requests.initial_unseen_count, 2);
        assert_eq!(sidebar.stories.unwrap().items[0].title, "The Long Night");
    }

    #[tokio::test]
    async fn test_assemble_without_stories() {
        let sidebar = service(StaticStories::default(), MemoryKvStore::new())
            .assemble(&session("u1"))
            .await
            .unwrap();
        assert!(sidebar.stories.is_none());
        assert_eq!(sidebar.collab_requests.initial_unseen_count, 0);
    }

    #[tokio::test]
    async fn test_story_failure_aborts() {
        let err = service(StaticStories::failing(), MemoryKvStore::new())
            .assemble(&session("u1"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }

    #[tokio::test]
    async fn test_kv_failure_aborts() {
        let kv = MemoryKvStore::new();
        kv.set("user:u1:incoming_collab_requests", "oops").await.unwrap();
        let err = service(StaticStories::default(), kv)
            .assemble(&session("u1"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::KvStore(_)));
    }
}
