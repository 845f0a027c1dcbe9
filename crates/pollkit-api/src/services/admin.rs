//! Admin service: privileged listing, deletion, and statistics.
//!
//! Every operation consults the admin gate first and short-circuits with its
//! uniform denial before touching the store.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use pollkit_models::{Poll, UsageStats};
use pollkit_store::{AuthProvider, CacheInvalidator, PollStore};

use crate::auth::{AdminGate, RequestContext};
use crate::error::{ApiError, ApiResult};

/// Service for admin-only operations.
#[derive(Clone)]
pub struct AdminService {
    store: Arc<dyn PollStore>,
    auth: Arc<dyn AuthProvider>,
    gate: AdminGate,
    invalidator: Arc<dyn CacheInvalidator>,
}

impl AdminService {
    pub fn new(
        store: Arc<dyn PollStore>,
        auth: Arc<dyn AuthProvider>,
        gate: AdminGate,
        invalidator: Arc<dyn CacheInvalidator>,
    ) -> Self {
        Self {
            store,
            auth,
            gate,
            invalidator,
        }
    }

    /// List every poll, newest first.
    pub async fn all_polls(&self, ctx: &RequestContext) -> ApiResult<Vec<Poll>> {
        self.gate
            .require_admin(self.auth.as_ref(), ctx.token.as_deref())
            .await?;

        self.store.all_polls().await.map_err(|e| {
            warn!(error = %e, "admin poll listing failed");
            ApiError::internal("Failed to fetch polls")
        })
    }

    /// Delete any poll by id, regardless of owner.
    ///
    /// Authorization is explicit (the gate) rather than implicit in the
    /// predicate, so the delete is scoped to the id alone.
    pub async fn delete_poll(&self, ctx: &RequestContext, id: &str) -> ApiResult<()> {
        let admin = self
            .gate
            .require_admin(self.auth.as_ref(), ctx.token.as_deref())
            .await?;

        let id: Uuid = id.parse().map_err(|_| ApiError::validation("Invalid poll ID"))?;

        match self.store.delete_poll(id, None).await {
            Ok(matched) => {
                if matched {
                    info!(poll_id = %id, admin_id = %admin.id, "admin deleted poll");
                }
                self.invalidator.revalidate("/admin");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, poll_id = %id, "admin poll delete failed");
                Err(ApiError::internal("Failed to delete poll"))
            }
        }
    }

    /// Aggregate poll/vote counts for the admin dashboard.
    pub async fn usage_stats(&self, ctx: &RequestContext) -> ApiResult<UsageStats> {
        self.gate
            .require_admin(self.auth.as_ref(), ctx.token.as_deref())
            .await?;

        let total_polls = self.store.count_polls().await.map_err(|e| {
            warn!(error = %e, "poll count failed");
            ApiError::internal("Failed to fetch statistics")
        })?;
        let total_votes = self.store.count_votes().await.map_err(|e| {
            warn!(error = %e, "vote count failed");
            ApiError::internal("Failed to fetch statistics")
        })?;

        Ok(UsageStats {
            total_polls,
            total_votes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pollkit_models::Vote;
    use pollkit_store::{MemoryAuth, MemoryStore, NoopInvalidator};

    async fn fixture() -> (Arc<MemoryStore>, Arc<MemoryAuth>, AdminService) {
        let store = Arc::new(MemoryStore::new());
        let auth = Arc::new(MemoryAuth::new());
        let gate = AdminGate::new(vec!["root@example.com".to_string()]);
        let service = AdminService::new(
            store.clone(),
            auth.clone(),
            gate,
            Arc::new(NoopInvalidator),
        );
        (store, auth, service)
    }

    #[tokio::test]
    async fn test_non_admin_denied_before_store_access() {
        let (_store, auth, service) = fixture().await;
        let session = auth
            .sign_up("user@example.com", "password1", "User")
            .await
            .unwrap();
        let ctx = RequestContext::bearer(&session.token);

        for err in [
            service.all_polls(&ctx).await.unwrap_err(),
            service.delete_poll(&ctx, &Uuid::new_v4().to_string()).await.unwrap_err(),
            service.usage_stats(&ctx).await.unwrap_err(),
        ] {
            assert_eq!(err.to_string(), "Admin access required");
        }
    }

    #[tokio::test]
    async fn test_admin_can_delete_any_poll() {
        let (store, auth, service) = fixture().await;
        let owner = auth
            .sign_up("user@example.com", "password1", "User")
            .await
            .unwrap();
        let admin = auth
            .sign_up("root@example.com", "password1", "Root")
            .await
            .unwrap();

        let poll = Poll::new(&owner.user.id, "Q?".to_string(), vec![
            "A".to_string(),
            "B".to_string(),
        ]);
        store.insert_poll(&poll).await.unwrap();

        service
            .delete_poll(&RequestContext::bearer(&admin.token), &poll.id.to_string())
            .await
            .unwrap();
        assert!(store.poll_by_id(poll.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_admin_delete_rejects_malformed_id() {
        let (_store, auth, service) = fixture().await;
        let admin = auth
            .sign_up("root@example.com", "password1", "Root")
            .await
            .unwrap();

        let err = service
            .delete_poll(&RequestContext::bearer(&admin.token), "nope")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid poll ID");
    }

    #[tokio::test]
    async fn test_usage_stats_count_everything() {
        let (store, auth, service) = fixture().await;
        let admin = auth
            .sign_up("root@example.com", "password1", "Root")
            .await
            .unwrap();

        let poll = Poll::new("someone", "Q?".to_string(), vec![
            "A".to_string(),
            "B".to_string(),
        ]);
        store.insert_poll(&poll).await.unwrap();
        store
            .insert_vote(&Vote::anonymous(poll.id, "key", 0))
            .await
            .unwrap();
        store
            .insert_vote(&Vote::authenticated(poll.id, "someone", 1))
            .await
            .unwrap();

        let stats = service
            .usage_stats(&RequestContext::bearer(&admin.token))
            .await
            .unwrap();
        assert_eq!(stats.total_polls, 1);
        assert_eq!(stats.total_votes, 2);
    }
}
