//! Quaderno cache system.
//!
//! A two-layer key/value cache with TTL-based lazy expiry:
//!
//! - **Memory layer**: per-process map that avoids durable I/O on repeated
//!   reads within one request context.
//! - **Durable layer**: one file per key under the configured directory; the
//!   actual shared cache across request contexts. Writes are atomic
//!   (temp-file-then-rename) so concurrent readers never observe partial
//!   records.
//!
//! ## Configuration
//!
//! Controlled via `quaderno.toml`:
//!
//! ```toml
//! [cache]
//! enabled = true
//! directory = "cache/data"
//! default_ttl_seconds = 3600
//!
//! [cache.ttl_seconds]
//! post_detail = 1800
//! # ... see config/default.toml for the full table
//! ```

mod invalidation;
mod keys;
mod lock;
mod store;
mod ttl;

pub use invalidation::{DomainEvent, purge};
pub use keys::{RECORD_EXTENSION, cache_key, record_file_name};
pub use store::{CacheStats, TieredStore};
pub use ttl::TtlPolicy;
