//! Session token endpoints

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};

use wayfare_api::{requests::CreateSessionRequest, responses::SessionResponse};

use crate::api::error::{ApiError, AppError};
use crate::auth::middleware::verify_user;
use crate::state::AppState;

/// Exchange credentials for a bearer session token
#[utoipa::path(
    post,
    path = "/api/v1/auth/sessions",
    tag = "auth",
    request_body = CreateSessionRequest,
    responses(
        (status = 201, description = "Session created", body = SessionResponse),
        (status = 401, description = "Invalid username or password", body = ApiError)
    )
)]
pub async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = verify_user(&state, &req.username, &req.password)
        .ok_or_else(|| AppError::unauthorized("invalid username or password"))?;
    let (token, expires_at) = state.sessions.create(&user.username).await;
    tracing::info!(username = %user.username, "session created");
    Ok((
        StatusCode::CREATED,
        Json(SessionResponse { token, expires_at }),
    ))
}

/// Revoke the presented session token
#[utoipa::path(
    delete,
    path = "/api/v1/auth/sessions",
    tag = "auth",
    security(("session_token" = [])),
    responses(
        (status = 204, description = "Session revoked"),
        (status = 401, description = "Missing or unknown session token", body = ApiError)
    )
)]
pub async fn delete_session(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    let token = bearer_token(&headers)
        .ok_or_else(|| AppError::unauthorized("missing session token"))?;
    if state.sessions.revoke(token).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::unauthorized("unknown session token"))
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
