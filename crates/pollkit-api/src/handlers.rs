//! Request handlers.

use serde::Serialize;

pub mod admin;
pub mod health;
pub mod polls;
pub mod session;

pub use admin::*;
pub use health::*;
pub use polls::*;
pub use session::*;

/// Bare acknowledgement body for mutations with nothing else to return.
#[derive(Serialize)]
pub struct OkResponse {
    pub success: bool,
}

impl OkResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
