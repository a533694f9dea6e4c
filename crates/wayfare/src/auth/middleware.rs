//! Request-guarding authentication middleware
//!
//! Accepts either `Basic` credentials checked against configured accounts
//! or a `Bearer` session token minted by the sessions endpoint.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::api::error::AppError;
use crate::auth::password;
use crate::state::AppState;

/// The authenticated caller, stored in request extensions
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub username: String,
}

/// Reject requests without valid credentials
///
/// # Errors
/// Returns 401 when the `Authorization` header is missing, malformed, or
/// names unknown credentials.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = authenticate(&state, request.headers())
        .await
        .ok_or_else(|| AppError::unauthorized("missing or invalid credentials"))?;
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

async fn authenticate(state: &AppState, headers: &HeaderMap) -> Option<AuthUser> {
    let header = headers.get(header::AUTHORIZATION)?;
    let value = header.to_str().ok()?;

    if let Some(encoded) = value.strip_prefix("Basic ") {
        let decoded = BASE64.decode(encoded).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;
        return verify_user(state, username, password);
    }

    if let Some(token) = value.strip_prefix("Bearer ") {
        let session = state.sessions.get(token).await?;
        return Some(AuthUser {
            username: session.username,
        });
    }

    None
}

/// Check a username/password pair against the configured accounts
pub fn verify_user(state: &AppState, username: &str, password: &str) -> Option<AuthUser> {
    let user = state
        .config
        .auth
        .users
        .iter()
        .find(|u| u.username == username)?;
    password::verify(password, &user.password_sha256).then(|| AuthUser {
        username: username.to_string(),
    })
}
