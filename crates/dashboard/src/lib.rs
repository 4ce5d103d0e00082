//! Quill Dashboard Library
//!
//! Server side of the Quill writing dashboard:
//!
//! - **Session guard**: resolves the signed-in user, answering `404` for
//!   requests without a live session
//! - **Stories**: lists the stories a user owns or collaborates on
//! - **Collaboration requests**: counts pending requests kept in Redis
//! - **Sidebar**: assembles and renders the dashboard navigation
//!
//! ## Modules
//!
//! - [`auth`]: Session lookup and the session guard middleware
//! - [`config`]: Configuration loading from environment variables
//! - [`db`]: Database connectivity, models and queries
//! - [`error`]: Custom error types with Axum integration
//! - [`handlers`]: HTTP route handlers
//! - [`kv`]: Key-value store access (Redis or in-memory)
//! - [`services`]: Story, collaboration request and sidebar services
//! - [`views`]: HTML page rendering
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use quill_dashboard::{
//!     auth::PgSessionProvider,
//!     config::{AppConfig, DatabaseConfig},
//!     db::create_pool,
//!     kv::MemoryKvStore,
//!     routes::build_router,
//!     services::PgStoryRepository,
//!     state::AppState,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let db_pool = create_pool(&DatabaseConfig::from_env()?).await?;
//!     let state = AppState::new(
//!         AppConfig::from_env()?,
//!         db_pool.clone(),
//!         Arc::new(MemoryKvStore::new()),
//!         Arc::new(PgSessionProvider::new(db_pool.clone())),
//!         Arc::new(PgStoryRepository::new(db_pool)),
//!     )?;
//!     let app = build_router(state);
//!     // ... bind and serve
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod kv;
pub mod result_ext;
pub mod routes;
pub mod services;
pub mod sidebar;
pub mod state;
pub mod views;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{AppError, AppResult};
pub use result_ext::ResultExt;
