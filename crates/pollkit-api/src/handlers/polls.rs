//! Poll CRUD and vote handlers.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use pollkit_models::{Poll, PollResults};

use crate::auth::RequestContext;
use crate::error::ApiResult;
use crate::handlers::OkResponse;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreatePollRequest {
    pub question: String,
    pub options: Vec<String>,
}

#[derive(Deserialize)]
pub struct UpdatePollRequest {
    pub question: String,
    pub options: Vec<String>,
}

#[derive(Deserialize)]
pub struct VoteRequest {
    pub option_index: usize,
}

/// Create a poll owned by the caller.
pub async fn create_poll(
    State(state): State<AppState>,
    ctx: RequestContext,
    Json(req): Json<CreatePollRequest>,
) -> ApiResult<Json<Poll>> {
    let poll = state
        .polls
        .create_poll(&ctx, &req.question, &req.options)
        .await?;
    Ok(Json(poll))
}

/// List the caller's polls, newest first.
pub async fn list_my_polls(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> ApiResult<Json<Vec<Poll>>> {
    let polls = state.polls.user_polls(&ctx).await?;
    Ok(Json(polls))
}

/// Fetch one poll by id.
pub async fn get_poll(
    State(state): State<AppState>,
    Path(poll_id): Path<Uuid>,
) -> ApiResult<Json<Poll>> {
    let poll = state.polls.poll_by_id(poll_id).await?;
    Ok(Json(poll))
}

/// Fetch per-option tallies for one poll.
pub async fn get_poll_results(
    State(state): State<AppState>,
    Path(poll_id): Path<Uuid>,
) -> ApiResult<Json<PollResults>> {
    let results = state.polls.poll_results(poll_id).await?;
    Ok(Json(results))
}

/// Replace a poll's question and options. Owner only.
pub async fn update_poll(
    State(state): State<AppState>,
    Path(poll_id): Path<Uuid>,
    ctx: RequestContext,
    Json(req): Json<UpdatePollRequest>,
) -> ApiResult<Json<OkResponse>> {
    state
        .polls
        .update_poll(&ctx, poll_id, &req.question, &req.options)
        .await?;
    Ok(Json(OkResponse::ok()))
}

/// Delete a poll. Owner only.
pub async fn delete_poll(
    State(state): State<AppState>,
    Path(poll_id): Path<Uuid>,
    ctx: RequestContext,
) -> ApiResult<Json<OkResponse>> {
    state.polls.delete_poll(&ctx, poll_id).await?;
    Ok(Json(OkResponse::ok()))
}

/// Cast a vote. Works for both authenticated and anonymous callers.
///
/// The id stays a raw string here; the service validates it so malformed ids
/// surface as a validation error rather than a routing 404.
pub async fn submit_vote(
    State(state): State<AppState>,
    Path(poll_id): Path<String>,
    ctx: RequestContext,
    Json(req): Json<VoteRequest>,
) -> ApiResult<Json<OkResponse>> {
    state
        .polls
        .submit_vote(&ctx, &poll_id, req.option_index)
        .await?;
    Ok(Json(OkResponse::ok()))
}
