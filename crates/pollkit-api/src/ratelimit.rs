//! Fixed-window rate limiting keyed by identifier strings.
//!
//! Each action class gets its own limiter instance (voting, poll creation).
//! Counters live in an in-process map; a background sweep removes expired
//! windows. In-process counters do not coordinate across instances; a
//! multi-process deployment needs a shared counter store instead.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::warn;

/// Default cap on distinct identifiers tracked per limiter. Prevents
/// unbounded memory growth from attackers cycling identifiers.
pub const DEFAULT_MAX_TRACKED_IDENTIFIERS: usize = 10_000;

/// Outcome of a rate limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    pub allowed: bool,
    /// When the current window resets. Internal use only; never serialized
    /// into client responses.
    pub reset_at: Option<Instant>,
}

#[derive(Debug, Clone, Copy)]
struct WindowEntry {
    count: u32,
    reset_at: Instant,
}

/// Fixed-window counter per identifier.
///
/// Cheap to clone; clones share the same map.
#[derive(Clone)]
pub struct FixedWindowLimiter {
    entries: Arc<RwLock<HashMap<String, WindowEntry>>>,
    max_requests: u32,
    window: Duration,
    max_entries: usize,
}

impl FixedWindowLimiter {
    /// Create a limiter allowing `max_requests` per `window`.
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self::with_capacity(max_requests, window, DEFAULT_MAX_TRACKED_IDENTIFIERS)
    }

    /// Create a limiter with an explicit identifier capacity.
    pub fn with_capacity(max_requests: u32, window: Duration, max_entries: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            max_requests,
            window,
            max_entries,
        }
    }

    /// Check and count a request for `identifier`.
    pub async fn check(&self, identifier: &str) -> RateLimitDecision {
        self.check_at(identifier, Instant::now()).await
    }

    /// Check at an explicit point in time.
    ///
    /// The read-check-increment is a single operation under the write lock:
    /// two concurrent checks for the same identifier cannot both take the
    /// last slot of a window. A rejected request never increments the count.
    pub async fn check_at(&self, identifier: &str, now: Instant) -> RateLimitDecision {
        let mut entries = self.entries.write().await;

        if let Some(entry) = entries.get_mut(identifier) {
            if now <= entry.reset_at {
                if entry.count >= self.max_requests {
                    return RateLimitDecision {
                        allowed: false,
                        reset_at: Some(entry.reset_at),
                    };
                }
                entry.count += 1;
                return RateLimitDecision {
                    allowed: true,
                    reset_at: Some(entry.reset_at),
                };
            }
        }

        // First request for this identifier, or its window has expired.
        if !entries.contains_key(identifier) && entries.len() >= self.max_entries {
            evict_for_capacity(&mut entries, now, self.max_entries);
        }

        let reset_at = now + self.window;
        entries.insert(identifier.to_string(), WindowEntry { count: 1, reset_at });
        RateLimitDecision {
            allowed: true,
            reset_at: Some(reset_at),
        }
    }

    /// Remove every entry whose window has expired. Returns how many were
    /// removed. Safe to run concurrently with checks.
    pub async fn cleanup(&self) -> usize {
        self.cleanup_at(Instant::now()).await
    }

    /// Cleanup at an explicit point in time.
    pub async fn cleanup_at(&self, now: Instant) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.reset_at >= now);
        before - entries.len()
    }

    /// Number of identifiers currently tracked.
    pub async fn tracked(&self) -> usize {
        self.entries.read().await.len()
    }

    #[cfg(test)]
    async fn count_for(&self, identifier: &str) -> Option<u32> {
        self.entries.read().await.get(identifier).map(|e| e.count)
    }
}

/// Make room for one more identifier: purge expired windows first, then, if
/// the map is still full, drop the entries closest to expiry.
fn evict_for_capacity(entries: &mut HashMap<String, WindowEntry>, now: Instant, max_entries: usize) {
    entries.retain(|_, entry| entry.reset_at >= now);
    if entries.len() < max_entries {
        return;
    }

    let mut by_expiry: Vec<(String, Instant)> = entries
        .iter()
        .map(|(key, entry)| (key.clone(), entry.reset_at))
        .collect();
    by_expiry.sort_by_key(|(_, reset_at)| *reset_at);

    let to_remove = entries.len() + 1 - max_entries;
    for (key, _) in by_expiry.into_iter().take(to_remove) {
        entries.remove(&key);
    }
    warn!(
        removed = to_remove,
        "rate limiter at capacity, evicted soonest-expiring entries"
    );
}
