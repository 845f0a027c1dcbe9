//! Application state.

use std::sync::Arc;

use pollkit_store::{AuthProvider, CacheInvalidator, PollStore};

use crate::auth::AdminGate;
use crate::config::ApiConfig;
use crate::ratelimit::FixedWindowLimiter;
use crate::services::{AdminService, PollService, SessionService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub polls: PollService,
    pub admin: AdminService,
    pub sessions: SessionService,
    /// Kept alongside the services so the background sweeper can reach them.
    pub vote_limiter: FixedWindowLimiter,
    pub create_limiter: FixedWindowLimiter,
}

impl AppState {
    /// Create new application state.
    pub fn new(
        config: ApiConfig,
        store: Arc<dyn PollStore>,
        auth: Arc<dyn AuthProvider>,
        invalidator: Arc<dyn CacheInvalidator>,
    ) -> Self {
        let vote_limiter = FixedWindowLimiter::with_capacity(
            config.vote_rate_limit.max_requests,
            config.vote_rate_limit.window,
            config.limiter_max_entries,
        );
        let create_limiter = FixedWindowLimiter::with_capacity(
            config.create_rate_limit.max_requests,
            config.create_rate_limit.window,
            config.limiter_max_entries,
        );

        let gate = AdminGate::new(config.admin_emails.iter().cloned());

        let polls = PollService::new(
            Arc::clone(&store),
            Arc::clone(&auth),
            Arc::clone(&invalidator),
            vote_limiter.clone(),
            create_limiter.clone(),
        );
        let admin = AdminService::new(
            Arc::clone(&store),
            Arc::clone(&auth),
            gate,
            Arc::clone(&invalidator),
        );
        let sessions = SessionService::new(auth);

        Self {
            config,
            polls,
            admin,
            sessions,
            vote_limiter,
            create_limiter,
        }
    }
}
