//! API routes.

use axum::middleware;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::admin::{admin_delete_poll, admin_list_polls, admin_usage_stats};
use crate::handlers::health::health;
use crate::handlers::polls::{
    create_poll, delete_poll, get_poll, get_poll_results, list_my_polls, submit_vote, update_poll,
};
use crate::handlers::session::{login, logout, register};
use crate::middleware::{cors_layer, request_logging, security_headers};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/logout", post(logout));

    let poll_routes = Router::new()
        .route("/polls", post(create_poll))
        .route("/polls", get(list_my_polls))
        .route("/polls/:poll_id", get(get_poll))
        .route("/polls/:poll_id", put(update_poll))
        .route("/polls/:poll_id", delete(delete_poll))
        // Voting is open to anonymous callers
        .route("/polls/:poll_id/vote", post(submit_vote))
        .route("/polls/:poll_id/results", get(get_poll_results));

    let admin_routes = Router::new()
        .route("/admin/polls", get(admin_list_polls))
        .route("/admin/polls/:poll_id", delete(admin_delete_poll))
        .route("/admin/stats", get(admin_usage_stats));

    let health_routes = Router::new()
        .route("/health", get(health))
        .route("/healthz", get(health));

    let api_routes = Router::new()
        .merge(auth_routes)
        .merge(poll_routes)
        .merge(admin_routes);

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(middleware::from_fn(security_headers))
        .layer(middleware::from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
