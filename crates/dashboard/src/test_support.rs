//! In-memory collaborators for unit and router tests.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::{Session, SessionProvider};
use crate::config::AppConfig;
use crate::db::models::Story;
use crate::error::{AppError, AppResult};
use crate::kv::MemoryKvStore;
use crate::services::StoryRepository;
use crate::state::AppState;

pub fn session(user_id: &str) -> Session {
    Session {
        user_id: user_id.to_string(),
        name: Some(format!("Writer {}", user_id)),
        email: Some(format!("{}@example.com", user_id)),
        image_url: Some(format!("https://img.example.com/{}.png", user_id)),
    }
}

pub fn story(title: &str) -> Story {
    Story {
        id: Uuid::new_v4(),
        title: title.to_string(),
        owner_id: "owner".to_string(),
        created_at: Utc::now() - Duration::days(1),
    }
}

#[derive(Default)]
pub struct StaticStories {
    by_user: HashMap<String, Vec<Story>>,
    fail: bool,
}

impl StaticStories {
    pub fn with(mut self, user_id: &str, story: Story) -> Self {
        self.by_user.entry(user_id.to_string()).or_default().push(story);
        self
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl StoryRepository for StaticStories {
    async fn list_by_user(&self, user_id: &str) -> AppResult<Vec<Story>> {
        if self.fail {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(self.by_user.get(user_id).cloned().unwrap_or_default())
    }
}

/// Sessions keyed by token.
#[derive(Default)]
pub struct StaticSessions {
    by_token: HashMap<String, Session>,
    fail: bool,
}

impl StaticSessions {
    pub fn with(mut self, token: &str, session: Session) -> Self {
        self.by_token.insert(token.to_string(), session);
        self
    }

    /// Every lookup fails as if the sessions table were unreachable.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl SessionProvider for StaticSessions {
    async fn get_session(&self, token: &str) -> AppResult<Option<Session>> {
        if self.fail {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(self.by_token.get(token).cloned())
    }
}

/// Application state over in-memory collaborators and a lazy pool that is
/// never connected.
pub fn app_state(
    sessions: StaticSessions,
    stories: StaticStories,
    kv: MemoryKvStore,
) -> AppState {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_millis(50))
        .connect_lazy_with(crate::config::DatabaseConfig::default().connect_options());

    AppState::new(
        AppConfig::default(),
        pool,
        Arc::new(kv),
        Arc::new(sessions),
        Arc::new(stories),
    )
    .expect("templates compile")
}
