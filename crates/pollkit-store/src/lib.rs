//! Data store and auth provider seams for pollkit.
//!
//! This crate provides:
//! - The `PollStore` trait the orchestration layer persists through
//! - The `AuthProvider` trait that resolves opaque session tokens
//! - The `CacheInvalidator` hook for stale presentation-layer caches
//! - In-memory reference implementations used by the binary and tests
//!
//! The real deployment swaps the in-memory implementations for a managed
//! backend; the orchestration layer only ever sees these traits.

pub mod auth;
pub mod error;
pub mod invalidate;
pub mod memory;
pub mod store;

pub use auth::AuthProvider;
pub use error::{AuthError, AuthResult, StoreError, StoreResult};
pub use invalidate::{CacheInvalidator, NoopInvalidator};
pub use memory::{MemoryAuth, MemoryStore};
pub use store::PollStore;
