//! Tiered cache storage.
//!
//! Memory layer: process-local map, valuable for repeated reads within one
//! request context. Durable layer: one JSON record per key, shared by every
//! concurrent context and therefore the real cross-request cache.
//!
//! Expiry is lazy: every read evicts whatever staleness it discovers, and
//! there is no background sweep. All durable I/O failures degrade to a miss
//! (read) or a logged no-op (write); the cache is an optimization layer, never
//! a source of truth, so no operation here returns an error to its caller.

use std::collections::HashMap;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use std::time::Duration;

use metrics::counter;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::{debug, warn};

use crate::config::CacheSettings;

use super::keys::{RECORD_EXTENSION, record_file_name};
use super::lock::{rw_read, rw_write};
use super::ttl::TtlPolicy;

const SOURCE: &str = "cache::store";

const METRIC_MEMORY_HIT: &str = "quaderno_cache_memory_hit_total";
const METRIC_MEMORY_MISS: &str = "quaderno_cache_memory_miss_total";
const METRIC_DURABLE_HIT: &str = "quaderno_cache_durable_hit_total";
const METRIC_DURABLE_MISS: &str = "quaderno_cache_durable_miss_total";
const METRIC_DURABLE_ERROR: &str = "quaderno_cache_durable_error_total";

/// Stored payload.
///
/// Rate-limiter counters and block flags are distinct variants rather than
/// coerced generic values, so a counter read can never silently decode an
/// arbitrary cached payload (or vice versa).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub(crate) enum Payload {
    Value(serde_json::Value),
    Counter(u64),
    Flag,
}

/// A cache entry. Owned exclusively by the store; callers only ever see the
/// decoded value or absence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CacheEntry {
    pub(crate) value: Payload,
    #[serde(with = "time::serde::rfc3339")]
    pub(crate) expires_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub(crate) created_at: OffsetDateTime,
}

impl CacheEntry {
    fn live(&self, now: OffsetDateTime) -> bool {
        self.expires_at > now
    }
}

/// On-disk record. The logical key is stored inside the record because file
/// names are one-way digests; prefix invalidation matches against this field.
#[derive(Debug, Serialize, Deserialize)]
struct DurableRecord {
    key: String,
    entry: CacheEntry,
}

/// Just the key, for prefix scans that do not need the entry.
#[derive(Deserialize)]
struct RecordKey {
    key: String,
}

/// Approximate cache population. The durable count is a directory listing at
/// call time, not tracked incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub memory_count: usize,
    pub durable_count: usize,
    pub total_count: usize,
}

/// The tiered cache engine.
///
/// Constructed explicitly at service start and injected into collaborators;
/// one instance per execution context shares the durable directory with every
/// other context.
pub struct TieredStore {
    memory: RwLock<HashMap<String, CacheEntry>>,
    directory: PathBuf,
    enabled: bool,
    policy: TtlPolicy,
}

impl TieredStore {
    /// Open a store over the configured durable directory, creating it if
    /// needed. An unusable directory is a startup failure; all later I/O
    /// degrades instead of failing.
    pub fn open(settings: &CacheSettings) -> io::Result<Self> {
        fs::create_dir_all(&settings.directory)?;
        Ok(Self {
            memory: RwLock::new(HashMap::new()),
            directory: settings.directory.clone(),
            enabled: settings.enabled,
            policy: TtlPolicy::from_settings(settings),
        })
    }

    /// Whether caching is enabled. Advisory: model-layer collaborators consult
    /// this before computing cacheable values; the store itself always
    /// operates so login throttling keeps working regardless.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Configured TTL for a cache domain (global default when unlisted).
    pub fn ttl_for(&self, domain: &str) -> Duration {
        self.policy.ttl_for(domain)
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Read a generic cached value.
    ///
    /// Miss, expiry, I/O failure, a vanished file, and a payload-kind mismatch
    /// all yield `None`; nothing distinguishes them for the caller.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.fetch(key)?.value {
            Payload::Value(json) => match serde_json::from_value(json) {
                Ok(value) => Some(value),
                Err(err) => {
                    warn!(
                        target = SOURCE,
                        op = "get",
                        key,
                        error = %err,
                        "Cached payload failed to decode; treating as miss"
                    );
                    None
                }
            },
            _ => {
                warn!(
                    target = SOURCE,
                    op = "get",
                    key,
                    "Cached payload is not a generic value; treating as miss"
                );
                None
            }
        }
    }

    /// Store a generic value. `ttl` defaults to the policy's global default.
    pub fn set<T: Serialize>(&self, key: &str, value: &T, ttl: Option<Duration>) {
        let json = match serde_json::to_value(value) {
            Ok(json) => json,
            Err(err) => {
                warn!(
                    target = SOURCE,
                    op = "set",
                    key,
                    error = %err,
                    "Value failed to serialize; entry not cached"
                );
                return;
            }
        };
        let ttl = ttl.unwrap_or_else(|| self.policy.default_ttl());
        self.put(key, Payload::Value(json), ttl);
    }

    /// Read a counter slot. A generic value under the same key reads as absent.
    pub fn counter(&self, key: &str) -> Option<u64> {
        match self.fetch(key)?.value {
            Payload::Counter(count) => Some(count),
            _ => None,
        }
    }

    /// Increment a fixed-window counter.
    ///
    /// Starts a new window (count 1, `expires_at = now + window`) when the
    /// slot is absent or expired. Otherwise increments while preserving the
    /// existing `expires_at`: a window always ends `window` after its first
    /// increment, never extended by later ones.
    pub fn increment_counter(&self, key: &str, window: Duration) -> u64 {
        let now = OffsetDateTime::now_utc();
        let (count, expires_at, created_at) = match self.fetch(key) {
            Some(CacheEntry {
                value: Payload::Counter(count),
                expires_at,
                created_at,
            }) => (count + 1, expires_at, created_at),
            Some(_) => {
                warn!(
                    target = SOURCE,
                    op = "increment_counter",
                    key,
                    "Counter slot held a non-counter payload; starting a fresh window"
                );
                (1, now + window, now)
            }
            None => (1, now + window, now),
        };
        self.put_entry(
            key,
            CacheEntry {
                value: Payload::Counter(count),
                expires_at,
                created_at,
            },
        );
        count
    }

    /// Set a block flag with the given TTL. Presence of an unexpired flag
    /// means "deny"; it is destroyed only by its own expiry or `clear`.
    pub fn set_flag(&self, key: &str, ttl: Duration) {
        self.put(key, Payload::Flag, ttl);
    }

    /// Whether an unexpired block flag is present.
    pub fn flag_present(&self, key: &str) -> bool {
        matches!(
            self.fetch(key),
            Some(CacheEntry {
                value: Payload::Flag,
                ..
            })
        )
    }

    /// Remove a key from both layers. Idempotent; deleting an absent key is
    /// not an error.
    pub fn delete(&self, key: &str) {
        rw_write(&self.memory, SOURCE, "delete").remove(key);
        self.remove_durable(key);
    }

    /// Remove every key whose logical prefix matches, in both layers.
    ///
    /// Cost is proportional to total cache population: the durable scan reads
    /// each record to test the key stored inside it. Callers should use coarse
    /// prefixes for bulk invalidation.
    pub fn delete_pattern(&self, prefix: &str) {
        let mut removed = 0usize;
        {
            let mut memory = rw_write(&self.memory, SOURCE, "delete_pattern.memory");
            memory.retain(|key, _| {
                let matched = key.starts_with(prefix);
                if matched {
                    removed += 1;
                }
                !matched
            });
        }

        let entries = match fs::read_dir(&self.directory) {
            Ok(entries) => entries,
            Err(err) => {
                counter!(METRIC_DURABLE_ERROR).increment(1);
                warn!(
                    target = SOURCE,
                    op = "delete_pattern",
                    prefix,
                    error = %err,
                    "Failed to list durable cache directory"
                );
                return;
            }
        };
        for entry in entries {
            let Ok(entry) = entry else { continue };
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }
            let bytes = match fs::read(&path) {
                Ok(bytes) => bytes,
                // A concurrent delete got there first.
                Err(err) if err.kind() == ErrorKind::NotFound => continue,
                Err(err) => {
                    counter!(METRIC_DURABLE_ERROR).increment(1);
                    warn!(
                        target = SOURCE,
                        op = "delete_pattern",
                        record = %path.display(),
                        error = %err,
                        "Failed to read durable cache record during prefix scan"
                    );
                    continue;
                }
            };
            match serde_json::from_slice::<RecordKey>(&bytes) {
                Ok(record) if record.key.starts_with(prefix) => {
                    self.remove_record_file(&path, "delete_pattern");
                    removed += 1;
                }
                Ok(_) => {}
                Err(err) => {
                    // Corrupt records are garbage either way.
                    warn!(
                        target = SOURCE,
                        op = "delete_pattern",
                        record = %path.display(),
                        error = %err,
                        "Removing malformed durable cache record found during prefix scan"
                    );
                    self.remove_record_file(&path, "delete_pattern");
                }
            }
        }

        debug!(
            target = SOURCE,
            op = "delete_pattern",
            prefix,
            removed,
            "Purged cache entries by prefix"
        );
    }

    /// Delete each listed key. No atomicity across keys; a partial
    /// invalidation is acceptable since survivors expire by TTL.
    pub fn invalidate<'a, I>(&self, keys: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for key in keys {
            self.delete(key);
        }
    }

    /// Empty both layers. Administrative resets only.
    pub fn clear(&self) {
        rw_write(&self.memory, SOURCE, "clear").clear();

        let entries = match fs::read_dir(&self.directory) {
            Ok(entries) => entries,
            Err(err) => {
                counter!(METRIC_DURABLE_ERROR).increment(1);
                warn!(
                    target = SOURCE,
                    op = "clear",
                    error = %err,
                    "Failed to list durable cache directory"
                );
                return;
            }
        };
        for entry in entries {
            let Ok(entry) = entry else { continue };
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some(RECORD_EXTENSION) {
                self.remove_record_file(&path, "clear");
            }
        }
    }

    /// Approximate population of both layers.
    pub fn stats(&self) -> CacheStats {
        let memory_count = rw_read(&self.memory, SOURCE, "stats").len();
        let durable_count = match fs::read_dir(&self.directory) {
            Ok(entries) => entries
                .filter_map(Result::ok)
                .filter(|entry| {
                    entry.path().extension().and_then(|ext| ext.to_str())
                        == Some(RECORD_EXTENSION)
                })
                .count(),
            Err(err) => {
                counter!(METRIC_DURABLE_ERROR).increment(1);
                warn!(
                    target = SOURCE,
                    op = "stats",
                    error = %err,
                    "Failed to list durable cache directory"
                );
                0
            }
        };
        CacheStats {
            memory_count,
            durable_count,
            total_count: memory_count + durable_count,
        }
    }

    // ========================================================================
    // Layered read/write protocol
    // ========================================================================

    /// Two-layer read: memory first (expired entries evicted in place),
    /// durable second (unexpired hits are promoted into memory, expired or
    /// malformed records are purged).
    fn fetch(&self, key: &str) -> Option<CacheEntry> {
        let now = OffsetDateTime::now_utc();

        {
            let mut memory = rw_write(&self.memory, SOURCE, "fetch.memory");
            match memory.get(key) {
                Some(entry) if entry.live(now) => {
                    counter!(METRIC_MEMORY_HIT).increment(1);
                    return Some(entry.clone());
                }
                Some(_) => {
                    memory.remove(key);
                }
                None => {}
            }
        }
        counter!(METRIC_MEMORY_MISS).increment(1);

        match self.read_durable(key) {
            Some(entry) if entry.live(now) => {
                counter!(METRIC_DURABLE_HIT).increment(1);
                rw_write(&self.memory, SOURCE, "fetch.promote")
                    .insert(key.to_string(), entry.clone());
                Some(entry)
            }
            Some(_) => {
                counter!(METRIC_DURABLE_MISS).increment(1);
                self.remove_durable(key);
                None
            }
            None => {
                counter!(METRIC_DURABLE_MISS).increment(1);
                None
            }
        }
    }

    fn put(&self, key: &str, payload: Payload, ttl: Duration) {
        let now = OffsetDateTime::now_utc();
        self.put_entry(
            key,
            CacheEntry {
                value: payload,
                expires_at: now + ttl,
                created_at: now,
            },
        );
    }

    fn put_entry(&self, key: &str, entry: CacheEntry) {
        self.write_durable(key, &entry);
        rw_write(&self.memory, SOURCE, "put_entry").insert(key.to_string(), entry);
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.directory.join(record_file_name(key))
    }

    fn read_durable(&self, key: &str) -> Option<CacheEntry> {
        let path = self.record_path(key);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            // Miss, or a concurrent delete won the race; either way absent.
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                counter!(METRIC_DURABLE_ERROR).increment(1);
                warn!(
                    target = SOURCE,
                    op = "read_durable",
                    key,
                    error = %err,
                    "Failed to read durable cache record; treating as miss"
                );
                return None;
            }
        };
        match serde_json::from_slice::<DurableRecord>(&bytes) {
            Ok(record) if record.key == key => Some(record.entry),
            Ok(record) => {
                warn!(
                    target = SOURCE,
                    op = "read_durable",
                    key,
                    stored_key = %record.key,
                    "Durable record key mismatch; discarding record"
                );
                self.remove_record_file(&path, "read_durable");
                None
            }
            Err(err) => {
                warn!(
                    target = SOURCE,
                    op = "read_durable",
                    key,
                    error = %err,
                    "Malformed durable cache record; discarding"
                );
                self.remove_record_file(&path, "read_durable");
                None
            }
        }
    }

    /// Atomic durable write: serialize into a temp file in the cache
    /// directory, then rename over the final path so concurrent readers never
    /// observe a partial record. Failure is logged and the entry lives in the
    /// memory layer only.
    fn write_durable(&self, key: &str, entry: &CacheEntry) {
        let record = DurableRecord {
            key: key.to_string(),
            entry: entry.clone(),
        };
        let result = (|| -> io::Result<()> {
            let tmp = tempfile::Builder::new()
                .suffix(".tmp")
                .tempfile_in(&self.directory)?;
            serde_json::to_writer(tmp.as_file(), &record).map_err(io::Error::other)?;
            tmp.persist(self.record_path(key)).map_err(|err| err.error)?;
            Ok(())
        })();
        if let Err(err) = result {
            counter!(METRIC_DURABLE_ERROR).increment(1);
            warn!(
                target = SOURCE,
                op = "write_durable",
                key,
                error = %err,
                "Failed to write durable cache record; entry is memory-only"
            );
        }
    }

    fn remove_durable(&self, key: &str) {
        let path = self.record_path(key);
        self.remove_record_file(&path, "remove_durable");
    }

    fn remove_record_file(&self, path: &Path, op: &'static str) {
        if let Err(err) = fs::remove_file(path) {
            // Already gone: a concurrent delete or clear beat us to it.
            if err.kind() != ErrorKind::NotFound {
                counter!(METRIC_DURABLE_ERROR).increment(1);
                warn!(
                    target = SOURCE,
                    op,
                    record = %path.display(),
                    error = %err,
                    "Failed to remove durable cache record"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::thread::sleep;

    use tempfile::TempDir;

    use super::*;
    use crate::cache::keys::cache_key;

    fn settings(dir: &TempDir) -> CacheSettings {
        CacheSettings {
            enabled: true,
            directory: dir.path().to_path_buf(),
            default_ttl: Duration::from_secs(60),
            ttl_table: HashMap::from([("post_detail".to_string(), Duration::from_secs(1800))]),
        }
    }

    fn store(dir: &TempDir) -> TieredStore {
        TieredStore::open(&settings(dir)).expect("open store")
    }

    #[test]
    fn set_then_get_roundtrip() {
        let dir = TempDir::new().expect("tempdir");
        let store = store(&dir);
        let key = cache_key("post_detail", &["42"]);

        assert_eq!(store.get::<String>(&key), None);

        store.set(&key, &"hello".to_string(), None);
        assert_eq!(store.get::<String>(&key), Some("hello".to_string()));
    }

    #[test]
    fn expired_entry_reads_absent_and_durable_record_is_purged() {
        let dir = TempDir::new().expect("tempdir");
        let store = store(&dir);
        let key = cache_key("post_detail", &["42"]);

        store.set(&key, &7u32, Some(Duration::from_millis(40)));
        assert_eq!(store.stats().durable_count, 1);

        sleep(Duration::from_millis(90));

        assert_eq!(store.get::<u32>(&key), None);
        let stats = store.stats();
        assert_eq!(stats.memory_count, 0);
        assert_eq!(stats.durable_count, 0);
    }

    #[test]
    fn durable_layer_is_shared_across_store_instances() {
        let dir = TempDir::new().expect("tempdir");
        let writer = store(&dir);
        let key = cache_key("user", &["alice"]);

        writer.set(&key, &"profile".to_string(), None);

        // A second instance (a fresh request context) has an empty memory
        // layer but reads the shared durable record and promotes it.
        let reader = store(&dir);
        assert_eq!(reader.stats().memory_count, 0);
        assert_eq!(reader.get::<String>(&key), Some("profile".to_string()));
        assert_eq!(reader.stats().memory_count, 1);

        // Promotion means the memory layer now answers even without the file.
        fs::remove_file(dir.path().join(record_file_name(&key))).expect("remove record");
        assert_eq!(reader.get::<String>(&key), Some("profile".to_string()));
    }

    #[test]
    fn overwrite_replaces_existing_entry() {
        let dir = TempDir::new().expect("tempdir");
        let store = store(&dir);
        let key = cache_key("visitor_count", &[]);

        store.set(&key, &1u64, None);
        store.set(&key, &2u64, None);

        assert_eq!(store.get::<u64>(&key), Some(2));
        assert_eq!(store.stats().durable_count, 1);
    }

    #[test]
    fn delete_is_idempotent() {
        let dir = TempDir::new().expect("tempdir");
        let store = store(&dir);
        let key = cache_key("user", &["bob"]);

        store.delete(&key); // never set
        store.set(&key, &true, None);
        store.delete(&key);
        store.delete(&key);

        assert_eq!(store.get::<bool>(&key), None);
    }

    #[test]
    fn delete_pattern_removes_exactly_the_matching_prefix() {
        let dir = TempDir::new().expect("tempdir");
        let store = store(&dir);

        let meta_a = cache_key("posts_meta", &["1"]);
        let meta_b = cache_key("posts_meta", &["2"]);
        let detail = cache_key("post_detail", &["1"]);

        store.set(&meta_a, &"a".to_string(), None);
        store.set(&meta_b, &"b".to_string(), None);
        store.set(&detail, &"d".to_string(), None);

        store.delete_pattern("posts_meta");

        assert_eq!(store.get::<String>(&meta_a), None);
        assert_eq!(store.get::<String>(&meta_b), None);
        assert_eq!(store.get::<String>(&detail), Some("d".to_string()));

        // The durable layer was purged too: a fresh instance sees the same.
        let fresh = TieredStore::open(&settings(&dir)).expect("open store");
        assert_eq!(fresh.get::<String>(&meta_a), None);
        assert_eq!(fresh.get::<String>(&detail), Some("d".to_string()));
    }

    #[test]
    fn invalidate_deletes_each_listed_key() {
        let dir = TempDir::new().expect("tempdir");
        let store = store(&dir);
        let a = cache_key("user", &["a"]);
        let b = cache_key("user", &["b"]);
        let c = cache_key("user", &["c"]);

        for key in [&a, &b, &c] {
            store.set(key, &1u8, None);
        }

        store.invalidate([a.as_str(), b.as_str()]);

        assert_eq!(store.get::<u8>(&a), None);
        assert_eq!(store.get::<u8>(&b), None);
        assert_eq!(store.get::<u8>(&c), Some(1));
    }

    #[test]
    fn clear_empties_both_layers() {
        let dir = TempDir::new().expect("tempdir");
        let store = store(&dir);

        store.set(&cache_key("user", &["a"]), &1u8, None);
        store.set(&cache_key("posts_meta", &["1"]), &2u8, None);
        assert_eq!(store.stats().total_count, 4);

        store.clear();

        let stats = store.stats();
        assert_eq!(stats.memory_count, 0);
        assert_eq!(stats.durable_count, 0);
        assert_eq!(stats.total_count, 0);
    }

    #[test]
    fn malformed_durable_record_is_a_miss_and_gets_discarded() {
        let dir = TempDir::new().expect("tempdir");
        let store = store(&dir);
        let key = cache_key("post_detail", &["9"]);

        let path = dir.path().join(record_file_name(&key));
        fs::write(&path, b"{not json").expect("write garbage");

        assert_eq!(store.get::<String>(&key), None);
        assert!(!path.exists());
    }

    #[test]
    fn durable_io_errors_degrade_to_miss_and_memory_only_writes() {
        let dir = TempDir::new().expect("tempdir");
        let store = store(&dir);
        let key = cache_key("post_detail", &["7"]);

        // A directory squatting on the record path makes every durable read
        // and the persist rename fail with a real I/O error.
        fs::create_dir(dir.path().join(record_file_name(&key))).expect("squat record path");

        assert_eq!(store.get::<String>(&key), None);

        // The write degrades to memory-only; the same context still reads it.
        store.set(&key, &"body".to_string(), None);
        assert_eq!(store.get::<String>(&key), Some("body".to_string()));

        // No durable record was produced, so a fresh context sees a miss.
        let fresh = TieredStore::open(&settings(&dir)).expect("open store");
        assert_eq!(fresh.get::<String>(&key), None);

        // Delete tolerates the unremovable path.
        store.delete(&key);
        assert_eq!(store.get::<String>(&key), None);
    }

    #[test]
    fn counter_window_is_not_refreshed_by_later_increments() {
        let dir = TempDir::new().expect("tempdir");
        let store = store(&dir);
        let key = cache_key("login_attempts_ip", &["10.0.0.1"]);
        let window = Duration::from_millis(400);

        assert_eq!(store.increment_counter(&key, window), 1);
        sleep(Duration::from_millis(100));
        // Still inside the window started by the first increment.
        assert_eq!(store.increment_counter(&key, window), 2);

        // The second increment must not have pushed expiry out; the window
        // ends 400ms after the *first* increment.
        sleep(Duration::from_millis(400));
        assert_eq!(store.counter(&key), None);
        assert_eq!(store.increment_counter(&key, window), 1);
    }

    #[test]
    fn counter_and_value_slots_do_not_decode_into_each_other() {
        let dir = TempDir::new().expect("tempdir");
        let store = store(&dir);
        let key = cache_key("user_posting_limit", &["alice"]);

        store.set(&key, &5u64, None);
        assert_eq!(store.counter(&key), None);

        let counter_key = cache_key("login_attempts_user", &["alice"]);
        store.increment_counter(&counter_key, Duration::from_secs(60));
        assert_eq!(store.get::<u64>(&counter_key), None);
    }

    #[test]
    fn flag_is_present_until_its_ttl_elapses() {
        let dir = TempDir::new().expect("tempdir");
        let store = store(&dir);
        let key = cache_key("login_block_ip", &["10.0.0.1"]);

        assert!(!store.flag_present(&key));
        store.set_flag(&key, Duration::from_millis(60));
        assert!(store.flag_present(&key));

        sleep(Duration::from_millis(110));
        assert!(!store.flag_present(&key));
    }

    #[test]
    fn ttl_policy_is_surfaced_by_the_store() {
        let dir = TempDir::new().expect("tempdir");
        let store = store(&dir);

        assert!(store.is_enabled());
        assert_eq!(store.ttl_for("post_detail"), Duration::from_secs(1800));
        assert_eq!(store.ttl_for("unlisted"), Duration::from_secs(60));
    }
}
