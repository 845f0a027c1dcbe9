//! Poll models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A question with an ordered set of selectable options.
///
/// The owner is fixed at creation; question and options are mutable only
/// through owner-scoped updates. Option count stays within 2..=10 for the
/// poll's entire lifecycle (enforced at the validation boundary).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Poll {
    /// Opaque poll id.
    pub id: Uuid,

    /// User ID of the owner. Immutable.
    pub user_id: String,

    /// Question text (trimmed, non-empty, at most 500 characters).
    pub question: String,

    /// Ordered option strings (2..=10 entries, each trimmed and non-empty).
    pub options: Vec<String>,

    /// When the poll was created.
    pub created_at: DateTime<Utc>,
}

impl Poll {
    /// Create a new poll owned by `user_id`.
    ///
    /// Inputs are expected to be validated and sanitized already.
    pub fn new(user_id: impl Into<String>, question: String, options: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            question,
            options,
            created_at: Utc::now(),
        }
    }

    /// Number of selectable options.
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Check whether `index` selects an existing option.
    pub fn has_option(&self, index: usize) -> bool {
        index < self.options.len()
    }
}

/// Per-option vote tallies for a poll, recomputed on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollResults {
    pub poll_id: Uuid,
    pub question: String,
    /// One entry per option, in option order.
    pub options: Vec<String>,
    /// Vote count per option, aligned with `options`.
    pub tallies: Vec<u64>,
    /// Total votes cast on the poll.
    pub total_votes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_option_bounds() {
        let poll = Poll::new(
            "user-1",
            "Favorite color?".to_string(),
            vec!["Red".to_string(), "Green".to_string(), "Blue".to_string()],
        );
        assert!(poll.has_option(0));
        assert!(poll.has_option(2));
        assert!(!poll.has_option(3));
    }
}
