//! Story database model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A story owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Story {
    /// Story id
    pub id: Uuid,

    /// Story title
    pub title: String,

    /// Owning user id
    pub owner_id: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}
