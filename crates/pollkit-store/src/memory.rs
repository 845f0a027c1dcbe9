//! In-memory reference implementations of the collaborator seams.
//!
//! These back the binary in development and the test suites everywhere.
//! They honor the same predicate scoping and ordering contracts a managed
//! backend would, but persist nothing across restarts.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use pollkit_models::{Poll, Session, User, Vote};

use crate::auth::AuthProvider;
use crate::error::{AuthError, AuthResult, StoreResult};
use crate::store::PollStore;

/// Session lifetime for the in-memory auth provider.
const SESSION_TTL_HOURS: i64 = 24;

/// In-memory `PollStore`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    polls: RwLock<HashMap<Uuid, Poll>>,
    votes: RwLock<Vec<Vote>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first(mut polls: Vec<Poll>) -> Vec<Poll> {
    polls.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    polls
}

#[async_trait]
impl PollStore for MemoryStore {
    async fn insert_poll(&self, poll: &Poll) -> StoreResult<()> {
        self.polls.write().await.insert(poll.id, poll.clone());
        Ok(())
    }

    async fn poll_by_id(&self, id: Uuid) -> StoreResult<Option<Poll>> {
        Ok(self.polls.read().await.get(&id).cloned())
    }

    async fn polls_by_owner(&self, owner: &str) -> StoreResult<Vec<Poll>> {
        let polls = self.polls.read().await;
        Ok(newest_first(
            polls.values().filter(|p| p.user_id == owner).cloned().collect(),
        ))
    }

    async fn all_polls(&self) -> StoreResult<Vec<Poll>> {
        let polls = self.polls.read().await;
        Ok(newest_first(polls.values().cloned().collect()))
    }

    async fn update_poll(
        &self,
        id: Uuid,
        owner: &str,
        question: String,
        options: Vec<String>,
    ) -> StoreResult<bool> {
        let mut polls = self.polls.write().await;
        match polls.get_mut(&id) {
            Some(poll) if poll.user_id == owner => {
                poll.question = question;
                poll.options = options;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_poll(&self, id: Uuid, owner: Option<&str>) -> StoreResult<bool> {
        let mut polls = self.polls.write().await;
        let matched = match polls.get(&id) {
            Some(poll) => owner.map_or(true, |o| poll.user_id == o),
            None => false,
        };
        if matched {
            polls.remove(&id);
            self.votes.write().await.retain(|v| v.poll_id != id);
        }
        Ok(matched)
    }

    async fn insert_vote(&self, vote: &Vote) -> StoreResult<()> {
        self.votes.write().await.push(vote.clone());
        Ok(())
    }

    async fn vote_by_user(&self, poll_id: Uuid, user_id: &str) -> StoreResult<Option<Vote>> {
        let votes = self.votes.read().await;
        Ok(votes
            .iter()
            .find(|v| v.poll_id == poll_id && v.user_id.as_deref() == Some(user_id))
            .cloned())
    }

    async fn anonymous_vote_by_key(
        &self,
        poll_id: Uuid,
        voter_key: &str,
    ) -> StoreResult<Option<Vote>> {
        let votes = self.votes.read().await;
        Ok(votes
            .iter()
            .find(|v| {
                v.poll_id == poll_id
                    && v.user_id.is_none()
                    && v.voter_key.as_deref() == Some(voter_key)
            })
            .cloned())
    }

    async fn count_anonymous_votes(&self, poll_id: Uuid) -> StoreResult<u64> {
        let votes = self.votes.read().await;
        Ok(votes
            .iter()
            .filter(|v| v.poll_id == poll_id && v.user_id.is_none())
            .count() as u64)
    }

    async fn votes_for_poll(&self, poll_id: Uuid) -> StoreResult<Vec<Vote>> {
        let votes = self.votes.read().await;
        Ok(votes.iter().filter(|v| v.poll_id == poll_id).cloned().collect())
    }

    async fn count_polls(&self) -> StoreResult<u64> {
        Ok(self.polls.read().await.len() as u64)
    }

    async fn count_votes(&self) -> StoreResult<u64> {
        Ok(self.votes.read().await.len() as u64)
    }
}

#[derive(Debug, Clone)]
struct AccountRecord {
    user: User,
    password: String,
}

/// In-memory `AuthProvider` with uuid session tokens.
#[derive(Debug, Default)]
pub struct MemoryAuth {
    /// Keyed by lowercase email.
    accounts: RwLock<HashMap<String, AccountRecord>>,
    /// Keyed by token.
    sessions: RwLock<HashMap<String, Session>>,
}

impl MemoryAuth {
    pub fn new() -> Self {
        Self::default()
    }

    async fn open_session(&self, user: User) -> Session {
        let session = Session {
            token: Uuid::new_v4().to_string(),
            user,
            expires_at: Utc::now() + Duration::hours(SESSION_TTL_HOURS),
        };
        self.sessions
            .write()
            .await
            .insert(session.token.clone(), session.clone());
        session
    }
}

#[async_trait]
impl AuthProvider for MemoryAuth {
    async fn authenticate(&self, token: &str) -> AuthResult<Option<User>> {
        let mut sessions = self.sessions.write().await;
        match sessions.get(token) {
            Some(session) if session.expires_at > Utc::now() => {
                Ok(Some(session.user.clone()))
            }
            Some(_) => {
                sessions.remove(token);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn sign_in(&self, email: &str, password: &str) -> AuthResult<Session> {
        let user = {
            let accounts = self.accounts.read().await;
            match accounts.get(&email.to_lowercase()) {
                Some(record) if record.password == password => record.user.clone(),
                _ => return Err(AuthError::InvalidCredentials),
            }
        };
        Ok(self.open_session(user).await)
    }

    async fn sign_up(&self, email: &str, password: &str, name: &str) -> AuthResult<Session> {
        if !email.contains('@') {
            return Err(AuthError::InvalidEmail);
        }
        let key = email.to_lowercase();

        let user = {
            let mut accounts = self.accounts.write().await;
            if accounts.contains_key(&key) {
                return Err(AuthError::EmailTaken);
            }
            let user = User {
                id: Uuid::new_v4().to_string(),
                email: Some(email.to_string()),
                name: Some(name.to_string()),
            };
            accounts.insert(
                key,
                AccountRecord {
                    user: user.clone(),
                    password: password.to_string(),
                },
            );
            user
        };
        Ok(self.open_session(user).await)
    }

    async fn sign_out(&self, token: &str) -> AuthResult<()> {
        self.sessions.write().await.remove(token);
        Ok(())
    }
}
