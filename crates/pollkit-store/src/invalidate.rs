//! Cache invalidation hook for the presentation layer.

use tracing::debug;

/// Informs the presentation layer that cached output for a path is stale.
///
/// The orchestration layer calls this after successful mutations; what (if
/// anything) is actually cached is the presentation layer's business.
pub trait CacheInvalidator: Send + Sync {
    fn revalidate(&self, path: &str);
}

/// Invalidator that only records the request. Used when nothing caches.
#[derive(Debug, Default, Clone)]
pub struct NoopInvalidator;

impl CacheInvalidator for NoopInvalidator {
    fn revalidate(&self, path: &str) {
        debug!(path, "revalidate requested");
    }
}
