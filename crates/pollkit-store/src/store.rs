//! The persistence seam consumed by the orchestration layer.

use async_trait::async_trait;
use uuid::Uuid;

use pollkit_models::{Poll, Vote};

use crate::error::StoreResult;

/// Table-scoped persistence operations with equality predicates.
///
/// Mutations that carry an owner are scoped to the `(id, owner)` predicate,
/// which makes authorization implicit for regular users: a non-owner's update
/// or delete simply matches zero rows. The admin path passes no owner and
/// must authorize explicitly before calling.
#[async_trait]
pub trait PollStore: Send + Sync {
    /// Insert a new poll.
    async fn insert_poll(&self, poll: &Poll) -> StoreResult<()>;

    /// Fetch a poll by id.
    async fn poll_by_id(&self, id: Uuid) -> StoreResult<Option<Poll>>;

    /// List polls owned by `owner`, newest first.
    async fn polls_by_owner(&self, owner: &str) -> StoreResult<Vec<Poll>>;

    /// List every poll, newest first.
    async fn all_polls(&self) -> StoreResult<Vec<Poll>>;

    /// Update question/options on the poll matching `(id, owner)`.
    ///
    /// Returns `false` when no row matched (absent poll or different owner).
    async fn update_poll(
        &self,
        id: Uuid,
        owner: &str,
        question: String,
        options: Vec<String>,
    ) -> StoreResult<bool>;

    /// Delete the poll matching `id`, further scoped to `owner` when given.
    ///
    /// Returns `false` when no row matched. Deleting a poll also removes its
    /// votes.
    async fn delete_poll(&self, id: Uuid, owner: Option<&str>) -> StoreResult<bool>;

    /// Insert a new vote.
    async fn insert_vote(&self, vote: &Vote) -> StoreResult<()>;

    /// Fetch the vote cast on `poll_id` by the authenticated user, if any.
    async fn vote_by_user(&self, poll_id: Uuid, user_id: &str) -> StoreResult<Option<Vote>>;

    /// Fetch the anonymous vote on `poll_id` carrying `voter_key`, if any.
    async fn anonymous_vote_by_key(
        &self,
        poll_id: Uuid,
        voter_key: &str,
    ) -> StoreResult<Option<Vote>>;

    /// Count anonymous votes on `poll_id`.
    async fn count_anonymous_votes(&self, poll_id: Uuid) -> StoreResult<u64>;

    /// List all votes on `poll_id` (results recompute on read).
    async fn votes_for_poll(&self, poll_id: Uuid) -> StoreResult<Vec<Vote>>;

    /// Total number of polls.
    async fn count_polls(&self) -> StoreResult<u64>;

    /// Total number of votes.
    async fn count_votes(&self) -> StoreResult<u64>;
}
