//! Action orchestrators.
//!
//! Each operation is a linear pipeline (authenticate, authorize, rate-limit,
//! validate, persist, invalidate) with early exit on the first failing stage
//! and no retry or partial-completion state.

pub mod admin;
pub mod poll;
pub mod session;
pub mod sweeper;

pub use admin::AdminService;
pub use poll::PollService;
pub use session::SessionService;
pub use sweeper::LimiterSweeper;
