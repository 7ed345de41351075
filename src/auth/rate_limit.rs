//! Login rate limiting.
//!
//! Fixed-window attempt counters per client IP and per normalized login
//! identifier, escalating to a timed block flag once a threshold is exceeded.
//! State lives entirely in the [`TieredStore`]; because the store fails open
//! (durable outages read as absent), a cache outage degrades to
//! under-throttling rather than denying all logins.
//!
//! Per attempt, each subject moves through: no counter present → counting
//! below threshold → blocked (flag present) → back to normal when the flag
//! expires. The attempt that crosses a threshold is itself still allowed;
//! blocking takes effect from the next attempt.

use std::sync::Arc;
use std::time::Duration;

use metrics::counter;
use rand::Rng;
use tracing::{error, info, warn};

use crate::cache::{TieredStore, cache_key};
use crate::config::LoginRateLimitSettings;

const SOURCE: &str = "auth::rate_limit";

const METRIC_LOGIN_DENIED: &str = "quaderno_login_denied_total";
const METRIC_LOGIN_BLOCK: &str = "quaderno_login_block_total";
const METRIC_LOGIN_FAILURE: &str = "quaderno_login_failure_total";
const METRIC_LOGIN_SUCCESS: &str = "quaderno_login_success_total";

const IP_ATTEMPTS_PREFIX: &str = "login_attempts_ip";
const IP_BLOCK_PREFIX: &str = "login_block_ip";
const USER_ATTEMPTS_PREFIX: &str = "login_attempts_user";
const USER_BLOCK_PREFIX: &str = "login_block_user";

/// Why an attempt was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    BlockedIp,
    BlockedIdentifier,
}

/// Decision for one login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginGate {
    pub allowed: bool,
    pub reason: Option<DenyReason>,
}

impl LoginGate {
    fn allowed() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    fn denied(reason: DenyReason) -> Self {
        Self {
            allowed: false,
            reason: Some(reason),
        }
    }
}

/// Brute-force login limiter.
///
/// Constructed once at service start with the shared store; cheap to clone.
#[derive(Clone)]
pub struct LoginRateLimiter {
    store: Arc<TieredStore>,
    settings: LoginRateLimitSettings,
}

impl LoginRateLimiter {
    pub fn new(store: Arc<TieredStore>, settings: LoginRateLimitSettings) -> Self {
        Self { store, settings }
    }

    /// Evaluate and record one login attempt, before any credential check.
    ///
    /// A subject with an unexpired block flag is denied immediately, without
    /// touching any counter, after a randomized delay that keeps the blocked
    /// path indistinguishable from a slow one. Otherwise both counters are
    /// incremented and compared against their thresholds; crossing a
    /// threshold sets the subject's block flag but still allows this attempt.
    pub async fn check_attempt(&self, ip: &str, identifier: &str) -> LoginGate {
        let identifier = normalize_identifier(identifier);
        let ip_block_key = cache_key(IP_BLOCK_PREFIX, &[ip]);
        let user_block_key = cache_key(USER_BLOCK_PREFIX, &[&identifier]);

        let ip_blocked = self.store.flag_present(&ip_block_key);
        let user_blocked = self.store.flag_present(&user_block_key);
        if ip_blocked || user_blocked {
            self.pause(self.settings.block_delay_min, self.settings.block_delay_max)
                .await;
            let reason = if ip_blocked {
                DenyReason::BlockedIp
            } else {
                DenyReason::BlockedIdentifier
            };
            counter!(METRIC_LOGIN_DENIED).increment(1);
            warn!(
                target = SOURCE,
                op = "check_attempt",
                ip,
                identifier = %identifier,
                reason = ?reason,
                "Login attempt denied: too many attempts"
            );
            return LoginGate::denied(reason);
        }

        let window = self.settings.window;
        let ip_count =
            self.store
                .increment_counter(&cache_key(IP_ATTEMPTS_PREFIX, &[ip]), window);
        let user_count = self
            .store
            .increment_counter(&cache_key(USER_ATTEMPTS_PREFIX, &[&identifier]), window);

        if ip_count > self.settings.ip_threshold {
            self.store.set_flag(&ip_block_key, self.settings.block);
            counter!(METRIC_LOGIN_BLOCK).increment(1);
            warn!(
                target = SOURCE,
                op = "check_attempt",
                ip,
                attempts = ip_count,
                threshold = self.settings.ip_threshold,
                "IP exceeded the login attempt threshold; block flag set"
            );
        }
        if user_count > self.settings.user_threshold {
            self.store.set_flag(&user_block_key, self.settings.block);
            counter!(METRIC_LOGIN_BLOCK).increment(1);
            warn!(
                target = SOURCE,
                op = "check_attempt",
                identifier = %identifier,
                attempts = user_count,
                threshold = self.settings.user_threshold,
                "Identifier exceeded the login attempt threshold; block flag set"
            );
        }

        LoginGate::allowed()
    }

    /// Record the outcome of the credential check that followed an allowed
    /// attempt.
    ///
    /// Success deletes both attempt counters — never the block flags, which
    /// stand until their own TTL expires. Failure applies a randomized delay
    /// that slows brute-force throughput without the cost of full blocking.
    pub async fn record_outcome(&self, ip: &str, identifier: &str, success: bool) {
        let identifier = normalize_identifier(identifier);
        if success {
            self.store.delete(&cache_key(IP_ATTEMPTS_PREFIX, &[ip]));
            self.store
                .delete(&cache_key(USER_ATTEMPTS_PREFIX, &[&identifier]));
            counter!(METRIC_LOGIN_SUCCESS).increment(1);
            info!(
                target = SOURCE,
                op = "record_outcome",
                ip,
                identifier = %identifier,
                "Login succeeded; attempt counters reset"
            );
        } else {
            counter!(METRIC_LOGIN_FAILURE).increment(1);
            error!(
                target = SOURCE,
                op = "record_outcome",
                ip,
                identifier = %identifier,
                "Login failed"
            );
            self.pause(self.settings.fail_delay_min, self.settings.fail_delay_max)
                .await;
        }
    }

    /// Sleep for a random duration in `[min, max]`. No lock is held here; the
    /// store synchronizes per call, so concurrent requests are unaffected.
    async fn pause(&self, min: Duration, max: Duration) {
        let delay = if max > min {
            let min_ms = min.as_millis() as u64;
            let max_ms = max.as_millis() as u64;
            Duration::from_millis(rand::rng().random_range(min_ms..=max_ms))
        } else {
            min
        };
        tokio::time::sleep(delay).await;
    }
}

fn normalize_identifier(identifier: &str) -> String {
    identifier.trim().to_lowercase()
}
