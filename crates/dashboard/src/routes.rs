//! Router assembly.

use axum::{middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::middleware::session_guard;
use crate::error::AppError;
use crate::handlers;
use crate::state::AppState;

/// Build the application router with all routes.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes (no session required)
    let public_routes = Router::new()
        .route("/", get(handlers::pages::home))
        .route("/health", get(handlers::health_check))
        .route("/api/health", get(handlers::api_health));

    // Dashboard routes, behind the session guard
    let dashboard_routes = Router::new()
        .route("/dashboard", get(handlers::pages::dashboard))
        .route("/dashboard/add", get(handlers::pages::add_novelist))
        .route(
            "/api/dashboard/sidebar",
            get(handlers::dashboard::get_sidebar),
        )
        .route(
            "/api/dashboard/collab-requests/count",
            get(handlers::dashboard::get_unseen_count),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), session_guard));

    Router::new()
        .merge(public_routes)
        .merge(dashboard_routes)
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn not_found() -> AppError {
    AppError::NotFound("Page not found".to_string())
}
