//! Dashboard API handlers.
//!
//! JSON views of the sidebar for signed-in users. Both routes sit behind
//! the session guard, which places the [`Session`] in the request
//! extensions.

use axum::{extract::State, Extension, Json};
use serde::Serialize;

use crate::auth::Session;
use crate::error::AppResult;
use crate::sidebar::Sidebar;
use crate::state::AppState;

/// Response for the unseen collaboration request count.
#[derive(Debug, Clone, Serialize)]
pub struct UnseenCountResponse {
    /// User the count belongs to.
    pub session_id: String,

    /// Number of pending collaboration requests.
    pub unseen_count: usize,
}

/// Get the sidebar for the signed-in user.
///
/// `GET /api/dashboard/sidebar`
pub async fn get_sidebar(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> AppResult<Json<Sidebar>> {
    let sidebar = state.sidebar.assemble(&session).await?;
    Ok(Json(sidebar))
}

/// Get the current unseen collaboration request count.
///
/// `GET /api/dashboard/collab-requests/count`
///
/// Read fresh from the store on every call; clients poll it to keep the
/// sidebar indicator current after the initial render.
pub async fn get_unseen_count(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> AppResult<Json<UnseenCountResponse>> {
    let unseen_count = state.sidebar.unseen_count(&session).await?;
    Ok(Json(UnseenCountResponse {
        session_id: session.user_id,
        unseen_count,
    }))
}
