//! Session handlers: login, registration, logout.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use pollkit_models::Session;

use crate::auth::RequestContext;
use crate::error::ApiResult;
use crate::handlers::OkResponse;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Sign in with email and password.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<Session>> {
    let session = state.sessions.login(&req.email, &req.password).await?;
    Ok(Json(session))
}

/// Register a new account.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Json<Session>> {
    let session = state
        .sessions
        .register(&req.email, &req.password, &req.name)
        .await?;
    Ok(Json(session))
}

/// End the caller's session.
pub async fn logout(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> ApiResult<Json<OkResponse>> {
    state.sessions.logout(&ctx).await?;
    Ok(Json(OkResponse::ok()))
}
