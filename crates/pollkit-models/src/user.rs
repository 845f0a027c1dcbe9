//! User and session models, as resolved by the external auth provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated identity resolved from an opaque session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Stable account identifier.
    pub id: String,

    /// Email, if the provider exposes one. Admin authorization keys on this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A live session issued by the auth provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token. The core never inspects its contents.
    pub token: String,

    pub user: User,

    pub expires_at: DateTime<Utc>,
}

/// Aggregate statistics for the admin dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UsageStats {
    pub total_polls: u64,
    pub total_votes: u64,
}
