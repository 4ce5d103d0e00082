use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::error::AppError;
use crate::state::AppState;

/// Prefix browsers require on cookies set with the `Secure` attribute.
const SECURE_COOKIE_PREFIX: &str = "__Secure-";

/// Resolve the session for a dashboard request and inject it into the
/// request extensions.
///
/// A request without a resolvable session ends here with `404 Not Found`,
/// whether the token is missing, unknown or expired.
pub async fn session_guard(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let cookie_name = &state.config.session_cookie_name;
    let Some(token) = extract_session_token(request.headers(), cookie_name) else {
        tracing::debug!(path = %request.uri().path(), "No session token provided");
        return Err(AppError::NotFound("Page not found".to_string()));
    };

    let Some(session) = state.sessions.get_session(&token).await? else {
        tracing::debug!(path = %request.uri().path(), "Unknown or expired session");
        return Err(AppError::NotFound("Page not found".to_string()));
    };

    tracing::debug!(user_id = %session.user_id, "Session resolved");
    request.extensions_mut().insert(session);

    Ok(next.run(request).await)
}

/// Extract session token from request headers or cookies
pub fn extract_session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    // Try Authorization header first: "Bearer <token>"
    if let Some(auth_header) = headers.get("authorization") {
        if let Ok(auth_str) = auth_header.to_str() {
            if let Some(token) = auth_str.strip_prefix("Bearer ") {
                if !token.trim().is_empty() {
                    return Some(token.trim().to_string());
                }
            }
        }
    }

    if let Some(session_header) = headers.get("x-session-token") {
        if let Ok(token) = session_header.to_str() {
            if !token.trim().is_empty() {
                return Some(token.trim().to_string());
            }
        }
    }

    let secure_name = format!("{}{}", SECURE_COOKIE_PREFIX, cookie_name);
    for cookie_header in headers.get_all("cookie") {
        let Ok(cookie_str) = cookie_header.to_str() else {
            continue;
        };
        for cookie in cookie_str.split(';') {
            if let Some((name, value)) = cookie.trim().split_once('=') {
                if (name == cookie_name || name == secure_name) && !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }

    None
}
