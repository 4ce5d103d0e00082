//! Server-rendered pages.

use axum::{extract::State, response::Html, Extension};

use crate::auth::Session;
use crate::error::AppResult;
use crate::state::AppState;
use crate::views::DashboardPage;

/// Landing page.
///
/// `GET /`
///
/// Writes the `hello` demo key before rendering.
pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    state.kv.set("hello", "hello").await?;
    Ok(Html(state.views.render_home()?))
}

/// `GET /dashboard`
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> AppResult<Html<String>> {
    render(&state, &session, DashboardPage::Home).await
}

/// `GET /dashboard/add`
pub async fn add_novelist(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> AppResult<Html<String>> {
    render(&state, &session, DashboardPage::AddNovelist).await
}

async fn render(
    state: &AppState,
    session: &Session,
    page: DashboardPage,
) -> AppResult<Html<String>> {
    let sidebar = state.sidebar.assemble(session).await?;
    Ok(Html(state.views.render_dashboard(page, &sidebar)?))
}
