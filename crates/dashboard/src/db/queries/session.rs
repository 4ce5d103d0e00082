//! Session database queries.

use crate::db::models::SessionRecord;
use crate::db::DbPool;
use crate::error::AppResult;

/// Get a session and its user by token, expired or not.
pub async fn get_session_by_token(
    pool: &DbPool,
    session_token: &str,
) -> AppResult<Option<SessionRecord>> {
    let record = sqlx::query_as::<_, SessionRecord>(
        r#"
        SELECT s.user_id, u.name, u.email, u.image, s.expires
        FROM sessions s
        JOIN users u ON u.id = s.user_id
        WHERE s.session_token = $1
        "#,
    )
    .bind(session_token)
    .fetch_optional(pool)
    .await?;

    Ok(record)
}
