//! Request identity: context extraction, anonymous identifier derivation,
//! and the admin gate.

use std::collections::HashSet;
use std::convert::Infallible;
use std::net::SocketAddr;

use axum::async_trait;
use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::header;
use axum::http::request::Parts;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tracing::warn;

use pollkit_models::User;
use pollkit_store::AuthProvider;

use crate::error::{ApiError, ApiResult};

/// Maximum length of a derived anonymous identifier.
pub const MAX_IDENTIFIER_LENGTH: usize = 32;

/// Derive a stable pseudonymous rate-limit key for an anonymous requester.
///
/// Missing or empty components default to "unknown"; the concatenation is
/// base64-encoded and truncated to bound storage. Authenticated requesters
/// use their account id directly and never pass through here.
pub fn client_identifier(user_agent: Option<&str>, ip: Option<&str>) -> String {
    let user_agent = user_agent.filter(|s| !s.is_empty()).unwrap_or("unknown");
    let ip = ip.filter(|s| !s.is_empty()).unwrap_or("unknown");

    let mut encoded = BASE64.encode(format!("{}_{}", ip, user_agent));
    encoded.truncate(MAX_IDENTIFIER_LENGTH);
    encoded
}

/// Per-request identity material extracted from headers.
///
/// The token stays opaque here; resolution happens inside the orchestrators
/// so that auth failures follow each action's own policy.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Bearer token from the Authorization header, if any.
    pub token: Option<String>,
    pub user_agent: Option<String>,
    pub ip: Option<String>,
}

impl RequestContext {
    /// Context with no identity material. Used in tests.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Context carrying only a bearer token. Used in tests.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::default()
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let user_agent = parts
            .headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        Ok(Self {
            token,
            user_agent,
            ip: extract_client_ip(parts),
        })
    }
}

/// Extract the client IP from proxy headers or connection info.
fn extract_client_ip(parts: &Parts) -> Option<String> {
    // X-Forwarded-For: first hop is the original client.
    if let Some(forwarded) = parts.headers.get("X-Forwarded-For") {
        if let Ok(forwarded) = forwarded.to_str() {
            if let Some(first) = forwarded.split(',').next() {
                let first = first.trim();
                if !first.is_empty() {
                    return Some(first.to_string());
                }
            }
        }
    }

    if let Some(real_ip) = parts.headers.get("X-Real-IP") {
        if let Ok(ip) = real_ip.to_str() {
            if !ip.is_empty() {
                return Some(ip.to_string());
            }
        }
    }

    parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ci| ci.0.ip().to_string())
}

/// Binary authorization check against a closed allow-list of identities.
///
/// Injected at construction so tests can substitute the list and a persisted
/// role table can replace it later.
#[derive(Debug, Clone)]
pub struct AdminGate {
    allow: HashSet<String>,
}

impl AdminGate {
    /// Build a gate from allow-listed emails (matched case-insensitively).
    pub fn new<I>(emails: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            allow: emails
                .into_iter()
                .map(|e| e.trim().to_lowercase())
                .filter(|e| !e.is_empty())
                .collect(),
        }
    }

    /// Check allow-list membership.
    pub fn is_admin(&self, email: &str) -> bool {
        self.allow.contains(&email.to_lowercase())
    }

    /// Resolve the caller and require allow-list membership.
    ///
    /// Missing token, failed resolution, missing email, and a resolved
    /// non-member all produce the identical denial; callers cannot tell
    /// "not logged in" from "logged in but not admin".
    pub async fn require_admin(
        &self,
        auth: &dyn AuthProvider,
        token: Option<&str>,
    ) -> ApiResult<User> {
        let Some(token) = token else {
            return Err(Self::denied());
        };

        let user = match auth.authenticate(token).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(Self::denied()),
            Err(e) => {
                warn!(error = %e, "auth provider failed during admin check");
                return Err(Self::denied());
            }
        };

        match user.email.as_deref() {
            Some(email) if self.is_admin(email) => Ok(user),
            _ => Err(Self::denied()),
        }
    }

    fn denied() -> ApiError {
        ApiError::forbidden("Admin access required")
    }
}
