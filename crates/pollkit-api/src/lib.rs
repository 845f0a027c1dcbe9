//! Axum HTTP API server for the polling service.
//!
//! This crate provides:
//! - Request-time authorization (owner scoping, admin allow-list)
//! - Keyed fixed-window rate limiting with background cleanup
//! - Poll CRUD, vote submission, and session endpoints

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod ratelimit;
pub mod routes;
pub mod security;
pub mod services;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use ratelimit::FixedWindowLimiter;
pub use routes::create_router;
pub use services::{AdminService, LimiterSweeper, PollService, SessionService};
pub use state::AppState;
