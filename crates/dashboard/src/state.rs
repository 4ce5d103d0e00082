//! Application state for the Quill dashboard server.
//!
//! This module defines the shared application state that is
//! passed to all handlers via Axum's state management.

use std::sync::Arc;

use crate::auth::SessionProvider;
use crate::config::AppConfig;
use crate::db::DbPool;
use crate::error::AppResult;
use crate::kv::KvStore;
use crate::services::{CollabRequestService, SidebarService, StoryRepository, StoryService};
use crate::views::Views;

/// Shared application state.
///
/// Every field is either read-only or internally synchronized, so the
/// state is cloned freely into each request.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,

    /// Database connection pool
    pub db: DbPool,

    /// Key-value store
    pub kv: Arc<dyn KvStore>,

    /// Session lookup used by the session guard
    pub sessions: Arc<dyn SessionProvider>,

    /// Sidebar assembly
    pub sidebar: SidebarService,

    /// Compiled page templates
    pub views: Arc<Views>,

    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create a new application state, compiling the page templates.
    pub fn new(
        config: AppConfig,
        db: DbPool,
        kv: Arc<dyn KvStore>,
        sessions: Arc<dyn SessionProvider>,
        stories: Arc<dyn StoryRepository>,
    ) -> AppResult<Self> {
        let sidebar = SidebarService::new(
            StoryService::new(stories),
            CollabRequestService::new(kv.clone()),
        );

        Ok(Self {
            config: Arc::new(config),
            db,
            kv,
            sessions,
            sidebar,
            views: Arc::new(Views::new()?),
            start_time: std::time::Instant::now(),
        })
    }

    /// Get the server uptime in seconds.
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
