//! Shared data models for the pollkit backend.
//!
//! This crate provides Serde-serializable types for:
//! - Polls and votes
//! - Users and sessions (as resolved by the auth provider)
//! - Aggregate usage statistics

pub mod poll;
pub mod user;
pub mod vote;

// Re-export common types
pub use poll::{Poll, PollResults};
pub use user::{Session, UsageStats, User};
pub use vote::Vote;
