//! Cache key construction.
//!
//! A cache key is a logical prefix plus a stable digest of its parameters:
//! `prefix:hex(sha256(params))`. Durable records are named by a digest of the
//! full key, so file names carry no caller-controlled bytes.

use sha2::{Digest, Sha256};

/// File extension for durable cache records.
pub const RECORD_EXTENSION: &str = "cache";

/// Build a cache key from a logical prefix and its parameters.
///
/// Identical `(prefix, params)` always yield the same key; distinct params
/// yield distinct keys with overwhelming probability. Keys are opaque to
/// callers beyond their prefix.
pub fn cache_key(prefix: &str, params: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for (index, param) in params.iter().enumerate() {
        if index > 0 {
            hasher.update([b':']);
        }
        hasher.update(param.as_bytes());
    }
    format!("{prefix}:{}", hex::encode(hasher.finalize()))
}

/// Durable record file name for a key.
pub fn record_file_name(key: &str) -> String {
    let digest = Sha256::digest(key.as_bytes());
    format!("{}.{RECORD_EXTENSION}", hex::encode(digest))
}
