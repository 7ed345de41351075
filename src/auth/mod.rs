//! Authentication policy components.
//!
//! The login rate limiter lives here; credential checking, sessions, and the
//! user model belong to the embedding application.

mod rate_limit;

pub use rate_limit::{DenyReason, LoginGate, LoginRateLimiter};
