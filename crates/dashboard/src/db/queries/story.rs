//! Story database queries.

use crate::db::models::Story;
use crate::db::DbPool;
use crate::error::AppResult;

/// List the stories a user owns or collaborates on, oldest first.
pub async fn list_stories_for_user(pool: &DbPool, user_id: &str) -> AppResult<Vec<Story>> {
    let stories = sqlx::query_as::<_, Story>(
        r#"
        SELECT s.id, s.title, s.owner_id, s.created_at
        FROM stories s
        WHERE s.owner_id = $1
           OR EXISTS (
               SELECT 1 FROM story_collaborators c
               WHERE c.story_id = s.id AND c.user_id = $1
           )
        ORDER BY s.created_at, s.id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(stories)
}
