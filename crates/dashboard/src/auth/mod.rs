//! Session resolution.
//!
//! Sign-in itself belongs to the authentication provider, which writes rows
//! into the `sessions` table. This module only turns a session token into a
//! [`Session`] and guards dashboard routes on it.

pub mod middleware;
pub mod types;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::db::models::SessionRecord;
use crate::db::queries::session as queries;
use crate::db::DbPool;
use crate::error::AppResult;
pub use types::Session;

/// Looks up the session behind a token.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// The active session for `token`, or `None` when it is unknown or expired.
    async fn get_session(&self, token: &str) -> AppResult<Option<Session>>;
}

/// Session provider backed by the `sessions` and `users` tables.
#[derive(Clone)]
pub struct PgSessionProvider {
    pool: DbPool,
}

impl PgSessionProvider {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionProvider for PgSessionProvider {
    async fn get_session(&self, token: &str) -> AppResult<Option<Session>> {
        let record = queries::get_session_by_token(&self.pool, token).await?;
        Ok(active_session(record, Utc::now()))
    }
}

/// Keep a looked-up session only if it has not expired at `now`.
fn active_session(record: Option<SessionRecord>, now: DateTime<Utc>) -> Option<Session> {
    let record = record?;
    if !record.is_active_at(now) {
        tracing::debug!(
            user_id = %record.user_id,
            expires = %record.expires,
            "Session expired"
        );
        return None;
    }
    Some(record.into())
}
