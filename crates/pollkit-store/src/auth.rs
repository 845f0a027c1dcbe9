//! The identity provider seam.

use async_trait::async_trait;

use pollkit_models::{Session, User};

use crate::error::AuthResult;

/// Opaque session/identity operations delegated to the external auth backend.
///
/// Tokens are opaque strings; this crate never inspects or mints them itself.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Resolve a bearer token to its user, if the session is live.
    async fn authenticate(&self, token: &str) -> AuthResult<Option<User>>;

    /// Sign in with email and password.
    async fn sign_in(&self, email: &str, password: &str) -> AuthResult<Session>;

    /// Register a new account and open a session for it.
    async fn sign_up(&self, email: &str, password: &str, name: &str) -> AuthResult<Session>;

    /// End the session behind `token`. Unknown tokens are a no-op.
    async fn sign_out(&self, token: &str) -> AuthResult<()>;
}
