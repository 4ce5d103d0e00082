//! Session database model.
//!
//! Sessions are written by the authentication provider; the dashboard only
//! reads them, joined with the owning user.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::auth::types::Session;

/// A session row joined with its user.
#[derive(Debug, Clone, FromRow)]
pub struct SessionRecord {
    /// Owning user id
    pub user_id: String,

    /// Display name
    pub name: Option<String>,

    /// Email address; providers without email scope leave it empty
    pub email: Option<String>,

    /// Profile picture URL
    pub image: Option<String>,

    /// Expiry timestamp
    pub expires: DateTime<Utc>,
}

impl SessionRecord {
    /// Whether the session is still valid at `now`.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.expires > now
    }
}

impl From<SessionRecord> for Session {
    fn from(record: SessionRecord) -> Self {
        Session {
            user_id: record.user_id,
            name: record.name,
            email: record.email,
            image_url: record.image,
        }
    }
}
