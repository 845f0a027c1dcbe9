//! Admin handlers. Authorization happens in the service layer.

use axum::extract::{Path, State};
use axum::Json;

use pollkit_models::{Poll, UsageStats};

use crate::auth::RequestContext;
use crate::error::ApiResult;
use crate::handlers::OkResponse;
use crate::state::AppState;

/// List every poll in the system.
pub async fn admin_list_polls(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> ApiResult<Json<Vec<Poll>>> {
    let polls = state.admin.all_polls(&ctx).await?;
    Ok(Json(polls))
}

/// Delete any poll, regardless of owner.
pub async fn admin_delete_poll(
    State(state): State<AppState>,
    Path(poll_id): Path<String>,
    ctx: RequestContext,
) -> ApiResult<Json<OkResponse>> {
    state.admin.delete_poll(&ctx, &poll_id).await?;
    Ok(Json(OkResponse::ok()))
}

/// Aggregate usage counters for the admin dashboard.
pub async fn admin_usage_stats(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> ApiResult<Json<UsageStats>> {
    let stats = state.admin.usage_stats(&ctx).await?;
    Ok(Json(stats))
}
