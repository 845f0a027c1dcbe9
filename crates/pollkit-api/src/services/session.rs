//! Session service: login, registration, logout.
//!
//! Thin orchestration over the auth provider; provider error detail is mapped
//! to fixed user-facing messages and never exposed.

use std::sync::Arc;

use tracing::{info, warn};

use pollkit_models::Session;
use pollkit_store::{AuthError, AuthProvider};

use crate::auth::RequestContext;
use crate::error::{ApiError, ApiResult};

/// Minimum password length accepted at registration.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Service for session lifecycle.
#[derive(Clone)]
pub struct SessionService {
    auth: Arc<dyn AuthProvider>,
}

impl SessionService {
    pub fn new(auth: Arc<dyn AuthProvider>) -> Self {
        Self { auth }
    }

    /// Sign in with email and password.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<Session> {
        match self.auth.sign_in(email, password).await {
            Ok(session) => Ok(session),
            Err(AuthError::InvalidCredentials) => {
                Err(ApiError::unauthorized("Invalid email or password"))
            }
            Err(e) => {
                warn!(error = %e, "login failed");
                Err(ApiError::internal("Login failed. Please try again."))
            }
        }
    }

    /// Register a new account and open a session.
    pub async fn register(&self, email: &str, password: &str, name: &str) -> ApiResult<Session> {
        if email.is_empty() || password.is_empty() || name.is_empty() {
            return Err(ApiError::validation("All fields are required"));
        }
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ApiError::validation(format!(
                "Password must be at least {} characters long",
                MIN_PASSWORD_LENGTH
            )));
        }

        match self.auth.sign_up(email, password, name).await {
            Ok(session) => {
                info!(user_id = %session.user.id, "registered account");
                Ok(session)
            }
            Err(AuthError::EmailTaken) => Err(ApiError::conflict(
                "An account with this email already exists",
            )),
            Err(AuthError::InvalidEmail) => Err(ApiError::validation(
                "Please enter a valid email address",
            )),
            Err(e) => {
                warn!(error = %e, "registration failed");
                Err(ApiError::internal("Registration failed. Please try again."))
            }
        }
    }

    /// End the caller's session, if any.
    pub async fn logout(&self, ctx: &RequestContext) -> ApiResult<()> {
        let Some(token) = ctx.token.as_deref() else {
            return Ok(());
        };
        self.auth.sign_out(token).await.map_err(|e| {
            warn!(error = %e, "logout failed");
            ApiError::internal("Logout failed. Please try again.")
        })
    }
}
