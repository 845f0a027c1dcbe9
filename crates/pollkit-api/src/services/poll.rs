//! Poll service: create/read/update/delete polls and cast votes.
//!
//! Store and auth failures never leave this layer verbatim: each operation
//! logs the detail and returns its own generic user-facing message.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use pollkit_models::{Poll, PollResults, User, Vote};
use pollkit_store::{AuthProvider, CacheInvalidator, PollStore};

use crate::auth::{client_identifier, RequestContext};
use crate::error::{ApiError, ApiResult};
use crate::ratelimit::FixedWindowLimiter;
use crate::security::validate_poll_input;

/// Cap on total anonymous votes per poll, in addition to the per-identifier
/// duplicate check. Coarse throttling, not per-voter accounting.
const MAX_ANONYMOUS_VOTES_PER_POLL: u64 = 10;

/// Service for poll lifecycle and vote submission.
#[derive(Clone)]
pub struct PollService {
    store: Arc<dyn PollStore>,
    auth: Arc<dyn AuthProvider>,
    invalidator: Arc<dyn CacheInvalidator>,
    vote_limiter: FixedWindowLimiter,
    create_limiter: FixedWindowLimiter,
}

impl PollService {
    pub fn new(
        store: Arc<dyn PollStore>,
        auth: Arc<dyn AuthProvider>,
        invalidator: Arc<dyn CacheInvalidator>,
        vote_limiter: FixedWindowLimiter,
        create_limiter: FixedWindowLimiter,
    ) -> Self {
        Self {
            store,
            auth,
            invalidator,
            vote_limiter,
            create_limiter,
        }
    }

    /// Create a poll owned by the caller.
    pub async fn create_poll(
        &self,
        ctx: &RequestContext,
        question: &str,
        options: &[String],
    ) -> ApiResult<Poll> {
        let user = self
            .require_user(ctx, "You must be logged in to create a poll.")
            .await?;

        if !self.create_limiter.check(&user.id).await.allowed {
            return Err(ApiError::rate_limited(
                "Too many polls created. Please try again later.",
            ));
        }

        let input = validate_poll_input(question, options).map_err(ApiError::validation)?;

        let poll = Poll::new(&user.id, input.question, input.options);
        if let Err(e) = self.store.insert_poll(&poll).await {
            warn!(error = %e, user_id = %user.id, "poll insert failed");
            return Err(ApiError::internal("Failed to create poll. Please try again."));
        }

        info!(poll_id = %poll.id, user_id = %user.id, "created poll");
        self.invalidator.revalidate("/polls");
        Ok(poll)
    }

    /// List the caller's polls, newest first.
    pub async fn user_polls(&self, ctx: &RequestContext) -> ApiResult<Vec<Poll>> {
        let user = self.require_user(ctx, "Not authenticated").await?;

        self.store.polls_by_owner(&user.id).await.map_err(|e| {
            warn!(error = %e, user_id = %user.id, "owner poll listing failed");
            ApiError::internal("Failed to fetch polls")
        })
    }

    /// Fetch one poll.
    pub async fn poll_by_id(&self, id: Uuid) -> ApiResult<Poll> {
        self.fetch_poll(id).await
    }

    /// Recompute per-option tallies for a poll.
    pub async fn poll_results(&self, id: Uuid) -> ApiResult<PollResults> {
        let poll = self.fetch_poll(id).await?;

        let votes = self.store.votes_for_poll(id).await.map_err(|e| {
            warn!(error = %e, poll_id = %id, "vote listing failed");
            ApiError::internal("Failed to fetch poll results")
        })?;

        let mut tallies = vec![0u64; poll.options.len()];
        for vote in &votes {
            // Votes cast before an option shrink may point past the end;
            // they are skipped rather than re-validated retroactively.
            if let Some(slot) = tallies.get_mut(vote.option_index) {
                *slot += 1;
            }
        }

        Ok(PollResults {
            poll_id: poll.id,
            question: poll.question,
            options: poll.options,
            tallies,
            total_votes: votes.len() as u64,
        })
    }

    /// Update question/options on a poll the caller owns.
    ///
    /// The mutation is scoped to the `(id, owner)` predicate; a non-owner's
    /// attempt matches zero rows and is indistinguishable from success, so
    /// poll existence is never leaked.
    pub async fn update_poll(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        question: &str,
        options: &[String],
    ) -> ApiResult<()> {
        let input = validate_poll_input(question, options).map_err(ApiError::validation)?;

        let user = self
            .require_user(ctx, "You must be logged in to update a poll.")
            .await?;

        match self
            .store
            .update_poll(id, &user.id, input.question, input.options)
            .await
        {
            Ok(matched) => {
                if matched {
                    info!(poll_id = %id, user_id = %user.id, "updated poll");
                }
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, poll_id = %id, "poll update failed");
                Err(ApiError::internal("Failed to update poll or poll not found."))
            }
        }
    }

    /// Delete a poll the caller owns. Same predicate scoping as updates.
    pub async fn delete_poll(&self, ctx: &RequestContext, id: Uuid) -> ApiResult<()> {
        let user = self
            .require_user(ctx, "You must be logged in to delete a poll.")
            .await?;

        match self.store.delete_poll(id, Some(&user.id)).await {
            Ok(matched) => {
                if matched {
                    info!(poll_id = %id, user_id = %user.id, "deleted poll");
                }
                self.invalidator.revalidate("/polls");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, poll_id = %id, "poll delete failed");
                Err(ApiError::internal("Failed to delete poll or poll not found"))
            }
        }
    }

    /// Cast a vote on a poll.
    ///
    /// Anonymous callers are allowed; their rate-limit and duplicate checks
    /// key on the identifier derived from user-agent and IP.
    pub async fn submit_vote(
        &self,
        ctx: &RequestContext,
        poll_id: &str,
        option_index: usize,
    ) -> ApiResult<()> {
        // Syntactic validation first: no side effects on malformed input.
        let poll_id: Uuid = poll_id
            .parse()
            .map_err(|_| ApiError::validation("Invalid poll ID."))?;

        // Identity is optional here; a failed resolution downgrades the
        // caller to anonymous rather than failing the vote.
        let user = match ctx.token.as_deref() {
            Some(token) => match self.auth.authenticate(token).await {
                Ok(user) => user,
                Err(e) => {
                    warn!(error = %e, "identity resolution failed, treating vote as anonymous");
                    None
                }
            },
            None => None,
        };

        let rate_limit_id = match &user {
            Some(user) => user.id.clone(),
            None => client_identifier(ctx.user_agent.as_deref(), ctx.ip.as_deref()),
        };

        if !self.vote_limiter.check(&rate_limit_id).await.allowed {
            return Err(ApiError::rate_limited(
                "Too many votes submitted. Please try again later.",
            ));
        }

        let poll = self.fetch_poll(poll_id).await?;

        // Re-validate against the poll's current option count; the client's
        // view may be stale.
        if !poll.has_option(option_index) {
            return Err(ApiError::validation("Invalid option selected."));
        }

        let vote = match &user {
            Some(user) => {
                self.check_duplicate_for_user(poll_id, user).await?;
                Vote::authenticated(poll_id, &user.id, option_index)
            }
            None => {
                self.check_anonymous_limits(poll_id, &rate_limit_id).await?;
                Vote::anonymous(poll_id, &rate_limit_id, option_index)
            }
        };

        if let Err(e) = self.store.insert_vote(&vote).await {
            warn!(error = %e, poll_id = %poll_id, "vote insert failed");
            return Err(ApiError::internal("Failed to submit vote. Please try again."));
        }

        info!(
            poll_id = %poll_id,
            anonymous = vote.is_anonymous(),
            option_index,
            "recorded vote"
        );
        Ok(())
    }

    async fn fetch_poll(&self, id: Uuid) -> ApiResult<Poll> {
        match self.store.poll_by_id(id).await {
            Ok(Some(poll)) => Ok(poll),
            Ok(None) => Err(ApiError::not_found("Poll not found.")),
            Err(e) => {
                warn!(error = %e, poll_id = %id, "poll fetch failed");
                Err(ApiError::not_found("Poll not found."))
            }
        }
    }

    async fn check_duplicate_for_user(&self, poll_id: Uuid, user: &User) -> ApiResult<()> {
        match self.store.vote_by_user(poll_id, &user.id).await {
            Ok(Some(_)) => Err(ApiError::conflict("You have already voted on this poll.")),
            Ok(None) => Ok(()),
            Err(e) => {
                // Fail open, like a missed index lookup; the unique vote
                // constraint still holds at the store.
                warn!(error = %e, poll_id = %poll_id, "duplicate-vote lookup failed");
                Ok(())
            }
        }
    }

    async fn check_anonymous_limits(&self, poll_id: Uuid, voter_key: &str) -> ApiResult<()> {
        if let Ok(Some(_)) = self.store.anonymous_vote_by_key(poll_id, voter_key).await {
            return Err(ApiError::conflict("You have already voted on this poll."));
        }

        match self.store.count_anonymous_votes(poll_id).await {
            Ok(count) if count > MAX_ANONYMOUS_VOTES_PER_POLL => Err(ApiError::forbidden(
                "Too many anonymous votes from this source.",
            )),
            Ok(_) => Ok(()),
            Err(e) => {
                warn!(error = %e, poll_id = %poll_id, "anonymous vote count failed");
                Ok(())
            }
        }
    }

    async fn require_user(&self, ctx: &RequestContext, login_message: &str) -> ApiResult<User> {
        let Some(token) = ctx.token.as_deref() else {
            return Err(ApiError::unauthorized(login_message));
        };
        match self.auth.authenticate(token).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(ApiError::unauthorized(login_message)),
            Err(e) => {
                warn!(error = %e, "auth provider failure");
                Err(ApiError::unauthorized("Authentication failed"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;

    use pollkit_models::Session;
    use pollkit_store::{MemoryAuth, MemoryStore, NoopInvalidator, StoreError, StoreResult};

    /// Store double whose every operation fails.
    struct FailingStore;

    #[async_trait]
    impl PollStore for FailingStore {
        async fn insert_poll(&self, _poll: &Poll) -> StoreResult<()> {
            Err(StoreError::request_failed("boom"))
        }
        async fn poll_by_id(&self, _id: Uuid) -> StoreResult<Option<Poll>> {
            Err(StoreError::request_failed("boom"))
        }
        async fn polls_by_owner(&self, _owner: &str) -> StoreResult<Vec<Poll>> {
            Err(StoreError::request_failed("boom"))
        }
        async fn all_polls(&self) -> StoreResult<Vec<Poll>> {
            Err(StoreError::request_failed("boom"))
        }
        async fn update_poll(
            &self,
            _id: Uuid,
            _owner: &str,
            _question: String,
            _options: Vec<String>,
        ) -> StoreResult<bool> {
            Err(StoreError::request_failed("boom"))
        }
        async fn delete_poll(&self, _id: Uuid, _owner: Option<&str>) -> StoreResult<bool> {
            Err(StoreError::request_failed("boom"))
        }
        async fn insert_vote(&self, _vote: &Vote) -> StoreResult<()> {
            Err(StoreError::request_failed("boom"))
        }
        async fn vote_by_user(&self, _poll_id: Uuid, _user_id: &str) -> StoreResult<Option<Vote>> {
            Err(StoreError::request_failed("boom"))
        }
        async fn anonymous_vote_by_key(
            &self,
            _poll_id: Uuid,
            _voter_key: &str,
        ) -> StoreResult<Option<Vote>> {
            Err(StoreError::request_failed("boom"))
        }
        async fn count_anonymous_votes(&self, _poll_id: Uuid) -> StoreResult<u64> {
            Err(StoreError::request_failed("boom"))
        }
        async fn votes_for_poll(&self, _poll_id: Uuid) -> StoreResult<Vec<Vote>> {
            Err(StoreError::request_failed("boom"))
        }
        async fn count_polls(&self) -> StoreResult<u64> {
            Err(StoreError::request_failed("boom"))
        }
        async fn count_votes(&self) -> StoreResult<u64> {
            Err(StoreError::request_failed("boom"))
        }
    }

    /// Invalidator that records requested paths.
    #[derive(Default)]
    struct RecordingInvalidator {
        paths: Mutex<Vec<String>>,
    }

    impl CacheInvalidator for RecordingInvalidator {
        fn revalidate(&self, path: &str) {
            self.paths.lock().unwrap().push(path.to_string());
        }
    }

    fn service_with(
        store: Arc<dyn PollStore>,
        auth: Arc<dyn AuthProvider>,
        invalidator: Arc<dyn CacheInvalidator>,
        vote_max: u32,
        create_max: u32,
    ) -> PollService {
        PollService::new(
            store,
            auth,
            invalidator,
            FixedWindowLimiter::new(vote_max, Duration::from_secs(60)),
            FixedWindowLimiter::new(create_max, Duration::from_secs(300)),
        )
    }

    async fn session_for(auth: &MemoryAuth, email: &str) -> Session {
        auth.sign_up(email, "password1", "Test User").await.unwrap()
    }

    fn three_options() -> Vec<String> {
        vec!["Red".to_string(), "Green".to_string(), "Blue".to_string()]
    }

    #[tokio::test]
    async fn test_create_poll_requires_login() {
        let auth = Arc::new(MemoryAuth::new());
        let service = service_with(
            Arc::new(MemoryStore::new()),
            auth,
            Arc::new(NoopInvalidator),
            5,
            10,
        );

        let err = service
            .create_poll(&RequestContext::anonymous(), "Q?", &three_options())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_create_poll_validates_server_side() {
        let auth = Arc::new(MemoryAuth::new());
        let session = session_for(&auth, "a@example.com").await;
        let service = service_with(
            Arc::new(MemoryStore::new()),
            auth,
            Arc::new(NoopInvalidator),
            5,
            10,
        );
        let ctx = RequestContext::bearer(&session.token);

        let long_question = "q".repeat(501);
        let err = service
            .create_poll(&ctx, &long_question, &three_options())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));

        let err = service
            .create_poll(&ctx, "Q?", &["only".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_poll_rate_limited_per_user() {
        let auth = Arc::new(MemoryAuth::new());
        let session = session_for(&auth, "a@example.com").await;
        let service = service_with(
            Arc::new(MemoryStore::new()),
            auth,
            Arc::new(NoopInvalidator),
            5,
            2,
        );
        let ctx = RequestContext::bearer(&session.token);

        service.create_poll(&ctx, "Q1?", &three_options()).await.unwrap();
        service.create_poll(&ctx, "Q2?", &three_options()).await.unwrap();
        let err = service.create_poll(&ctx, "Q3?", &three_options()).await.unwrap_err();
        assert!(matches!(err, ApiError::RateLimited(_)));
    }

    #[tokio::test]
    async fn test_create_poll_invalidates_listing() {
        let auth = Arc::new(MemoryAuth::new());
        let session = session_for(&auth, "a@example.com").await;
        let invalidator = Arc::new(RecordingInvalidator::default());
        let service = service_with(
            Arc::new(MemoryStore::new()),
            auth,
            invalidator.clone(),
            5,
            10,
        );

        service
            .create_poll(&RequestContext::bearer(&session.token), "Q?", &three_options())
            .await
            .unwrap();
        assert_eq!(*invalidator.paths.lock().unwrap(), vec!["/polls".to_string()]);
    }

    #[tokio::test]
    async fn test_vote_rejects_out_of_range_index() {
        let store = Arc::new(MemoryStore::new());
        let auth = Arc::new(MemoryAuth::new());
        let session = session_for(&auth, "a@example.com").await;
        let service = service_with(store, auth, Arc::new(NoopInvalidator), 5, 10);
        let ctx = RequestContext::bearer(&session.token);

        let poll = service.create_poll(&ctx, "Q?", &three_options()).await.unwrap();

        let err = service
            .submit_vote(&ctx, &poll.id.to_string(), 3)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid option selected.");

        service.submit_vote(&ctx, &poll.id.to_string(), 2).await.unwrap();
    }

    #[tokio::test]
    async fn test_vote_rejects_malformed_poll_id() {
        let auth = Arc::new(MemoryAuth::new());
        let service = service_with(
            Arc::new(MemoryStore::new()),
            auth,
            Arc::new(NoopInvalidator),
            5,
            10,
        );

        let err = service
            .submit_vote(&RequestContext::anonymous(), "not-a-uuid", 0)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid poll ID.");
    }

    #[tokio::test]
    async fn test_vote_unknown_poll_is_not_found() {
        let auth = Arc::new(MemoryAuth::new());
        let service = service_with(
            Arc::new(MemoryStore::new()),
            auth,
            Arc::new(NoopInvalidator),
            5,
            10,
        );

        let err = service
            .submit_vote(&RequestContext::anonymous(), &Uuid::new_v4().to_string(), 0)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_duplicate_vote_by_same_user_rejected() {
        let store = Arc::new(MemoryStore::new());
        let auth = Arc::new(MemoryAuth::new());
        let owner = session_for(&auth, "owner@example.com").await;
        let voter = session_for(&auth, "voter@example.com").await;
        let service = service_with(store, auth, Arc::new(NoopInvalidator), 5, 10);

        let poll = service
            .create_poll(&RequestContext::bearer(&owner.token), "Q?", &three_options())
            .await
            .unwrap();
        let poll_id = poll.id.to_string();

        let ctx = RequestContext::bearer(&voter.token);
        service.submit_vote(&ctx, &poll_id, 1).await.unwrap();

        let err = service.submit_vote(&ctx, &poll_id, 1).await.unwrap_err();
        assert_eq!(err.to_string(), "You have already voted on this poll.");

        // A different authenticated user can still vote the same index.
        service
            .submit_vote(&RequestContext::bearer(&owner.token), &poll_id, 1)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_anonymous_duplicate_keyed_on_derived_identifier() {
        let store = Arc::new(MemoryStore::new());
        let auth = Arc::new(MemoryAuth::new());
        let owner = session_for(&auth, "owner@example.com").await;
        let service = service_with(store, auth, Arc::new(NoopInvalidator), 5, 10);

        let poll = service
            .create_poll(&RequestContext::bearer(&owner.token), "Q?", &three_options())
            .await
            .unwrap();
        let poll_id = poll.id.to_string();

        let anon = RequestContext {
            token: None,
            user_agent: Some("Mozilla/5.0".to_string()),
            ip: Some("203.0.113.9".to_string()),
        };
        service.submit_vote(&anon, &poll_id, 0).await.unwrap();

        let err = service.submit_vote(&anon, &poll_id, 0).await.unwrap_err();
        assert_eq!(err.to_string(), "You have already voted on this poll.");

        // A different client identifier is still allowed.
        let other = RequestContext {
            token: None,
            user_agent: Some("Mozilla/5.0".to_string()),
            ip: Some("203.0.113.10".to_string()),
        };
        service.submit_vote(&other, &poll_id, 0).await.unwrap();
    }

    #[tokio::test]
    async fn test_anonymous_votes_capped_per_poll() {
        let store = Arc::new(MemoryStore::new());
        let auth = Arc::new(MemoryAuth::new());
        let owner = session_for(&auth, "owner@example.com").await;
        let service =
            service_with(store.clone(), auth, Arc::new(NoopInvalidator), 5, 10);

        let poll = service
            .create_poll(&RequestContext::bearer(&owner.token), "Q?", &three_options())
            .await
            .unwrap();

        // Seed past the cap with distinct anonymous voters.
        for i in 0..11 {
            store
                .insert_vote(&Vote::anonymous(poll.id, format!("key-{}", i), 0))
                .await
                .unwrap();
        }

        let anon = RequestContext {
            token: None,
            user_agent: Some("fresh-agent".to_string()),
            ip: Some("198.51.100.7".to_string()),
        };
        let err = service
            .submit_vote(&anon, &poll.id.to_string(), 0)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Too many anonymous votes from this source.");
    }

    #[tokio::test]
    async fn test_vote_rate_limit_precedes_duplicate_check() {
        let store = Arc::new(MemoryStore::new());
        let auth = Arc::new(MemoryAuth::new());
        let session = session_for(&auth, "a@example.com").await;
        // One vote per window.
        let service = service_with(store, auth, Arc::new(NoopInvalidator), 1, 10);
        let ctx = RequestContext::bearer(&session.token);

        let poll = service.create_poll(&ctx, "Q?", &three_options()).await.unwrap();
        let poll_id = poll.id.to_string();

        service.submit_vote(&ctx, &poll_id, 0).await.unwrap();
        let err = service.submit_vote(&ctx, &poll_id, 0).await.unwrap_err();
        assert!(matches!(err, ApiError::RateLimited(_)));
        assert_eq!(err.to_string(), "Too many votes submitted. Please try again later.");
    }

    #[tokio::test]
    async fn test_store_failures_surface_generic_messages() {
        let auth = Arc::new(MemoryAuth::new());
        let session = session_for(&auth, "a@example.com").await;
        let service = service_with(
            Arc::new(FailingStore),
            auth,
            Arc::new(NoopInvalidator),
            5,
            10,
        );
        let ctx = RequestContext::bearer(&session.token);

        let err = service.create_poll(&ctx, "Q?", &three_options()).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to create poll. Please try again.");
        assert!(!err.to_string().contains("boom"));

        let err = service.user_polls(&ctx).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch polls");

        let err = service
            .delete_poll(&ctx, Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to delete poll or poll not found");
    }

    #[tokio::test]
    async fn test_update_by_non_owner_does_not_leak_existence() {
        let store = Arc::new(MemoryStore::new());
        let auth = Arc::new(MemoryAuth::new());
        let owner = session_for(&auth, "owner@example.com").await;
        let other = session_for(&auth, "other@example.com").await;
        let service = service_with(store.clone(), auth, Arc::new(NoopInvalidator), 5, 10);

        let poll = service
            .create_poll(&RequestContext::bearer(&owner.token), "Q?", &three_options())
            .await
            .unwrap();

        // Zero rows match; indistinguishable from success.
        service
            .update_poll(
                &RequestContext::bearer(&other.token),
                poll.id,
                "Hijacked?",
                &three_options(),
            )
            .await
            .unwrap();

        let unchanged = store.poll_by_id(poll.id).await.unwrap().unwrap();
        assert_eq!(unchanged.question, "Q?");
    }

    #[tokio::test]
    async fn test_delete_scoped_to_owner() {
        let store = Arc::new(MemoryStore::new());
        let auth = Arc::new(MemoryAuth::new());
        let owner = session_for(&auth, "owner@example.com").await;
        let other = session_for(&auth, "other@example.com").await;
        let service = service_with(store.clone(), auth, Arc::new(NoopInvalidator), 5, 10);

        let poll = service
            .create_poll(&RequestContext::bearer(&owner.token), "Q?", &three_options())
            .await
            .unwrap();

        service
            .delete_poll(&RequestContext::bearer(&other.token), poll.id)
            .await
            .unwrap();
        assert!(store.poll_by_id(poll.id).await.unwrap().is_some());

        service
            .delete_poll(&RequestContext::bearer(&owner.token), poll.id)
            .await
            .unwrap();
        assert!(store.poll_by_id(poll.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_poll_results_recompute_on_read() {
        let store = Arc::new(MemoryStore::new());
        let auth = Arc::new(MemoryAuth::new());
        let owner = session_for(&auth, "owner@example.com").await;
        let voter = session_for(&auth, "voter@example.com").await;
        let service = service_with(store, auth, Arc::new(NoopInvalidator), 5, 10);

        let poll = service
            .create_poll(&RequestContext::bearer(&owner.token), "Q?", &three_options())
            .await
            .unwrap();
        let poll_id = poll.id.to_string();

        service
            .submit_vote(&RequestContext::bearer(&owner.token), &poll_id, 0)
            .await
            .unwrap();
        service
            .submit_vote(&RequestContext::bearer(&voter.token), &poll_id, 2)
            .await
            .unwrap();

        let results = service.poll_results(poll.id).await.unwrap();
        assert_eq!(results.tallies, vec![1, 0, 1]);
        assert_eq!(results.total_votes, 2);
    }
}
