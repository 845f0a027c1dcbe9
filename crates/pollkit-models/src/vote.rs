//! Vote models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single selection of one option on one poll by one requester.
///
/// `user_id` is `None` for anonymous votes; those carry the derived client
/// identifier in `voter_key` instead. `option_index` is validated against the
/// poll's option count at write time only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vote {
    pub id: Uuid,

    /// Poll being voted on.
    pub poll_id: Uuid,

    /// Account id of the voter, if authenticated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Derived pseudonymous key for anonymous voters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voter_key: Option<String>,

    /// Index of the selected option.
    pub option_index: usize,

    /// When the vote was cast.
    pub created_at: DateTime<Utc>,
}

impl Vote {
    /// Vote cast by an authenticated user.
    pub fn authenticated(poll_id: Uuid, user_id: impl Into<String>, option_index: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            poll_id,
            user_id: Some(user_id.into()),
            voter_key: None,
            option_index,
            created_at: Utc::now(),
        }
    }

    /// Vote cast anonymously, keyed by a derived client identifier.
    pub fn anonymous(poll_id: Uuid, voter_key: impl Into<String>, option_index: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            poll_id,
            user_id: None,
            voter_key: Some(voter_key.into()),
            option_index,
            created_at: Utc::now(),
        }
    }

    /// Whether the vote was cast without an authenticated identity.
    pub fn is_anonymous(&self) -> bool {
        self.user_id.is_none()
    }
}
