//! Quaderno core: the caching and login-throttling subsystem of the Quaderno
//! blog platform.
//!
//! Two cooperating parts:
//!
//! - [`cache::TieredStore`]: a two-layer key/value cache. An in-process memory
//!   layer serves repeated reads within one request context; a durable
//!   file-per-key layer is the shared cache across request contexts. Expiry is
//!   purely time-based and lazy (evicted on read, no background sweep), and
//!   bulk invalidation works by logical key prefix.
//! - [`auth::LoginRateLimiter`]: fixed-window attempt counters per client IP
//!   and per login identifier, escalating to a timed block, built entirely on
//!   the store's typed counter and flag slots.
//!
//! HTTP routing, templating, sessions, and the relational schema live in the
//! embedding application. Collaborators receive explicitly constructed service
//! instances built from [`config::Settings`] at startup; there is no ambient
//! global state.

pub mod auth;
pub mod cache;
pub mod config;
pub mod telemetry;
