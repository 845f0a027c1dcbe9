//! Background maintenance for the rate limiter maps.
//!
//! Runs on a fixed wall-clock interval, independent of request traffic, and
//! should be spawned as a background task from the binary.

use std::time::Duration;

use tokio::time::interval;
use tracing::{debug, info};

use crate::ratelimit::FixedWindowLimiter;

/// Periodic sweeper that drops expired rate-limit windows.
pub struct LimiterSweeper {
    limiters: Vec<FixedWindowLimiter>,
    interval: Duration,
}

impl LimiterSweeper {
    /// Create a sweeper over the given limiters.
    pub fn new(limiters: Vec<FixedWindowLimiter>, interval: Duration) -> Self {
        Self { limiters, interval }
    }

    /// Run the sweep loop forever.
    pub async fn run(&self) {
        info!(interval = ?self.interval, "starting rate limiter sweeper");

        let mut ticker = interval(self.interval);
        // The first tick fires immediately; skip it so sweeps start one
        // interval from now.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let removed = self.sweep().await;
            if removed > 0 {
                debug!(removed, "swept expired rate limit entries");
            }
        }
    }

    /// Run one sweep across all limiters. Returns entries removed.
    pub async fn sweep(&self) -> usize {
        let mut removed = 0;
        for limiter in &self.limiters {
            removed += limiter.cleanup().await;
        }
        removed
    }
}
