//! TTL policy: read-only mapping from logical cache-domain name to duration.

use std::collections::HashMap;
use std::time::Duration;

use crate::config::CacheSettings;

/// Per-domain TTL table with a global default, loaded once at startup and
/// never mutated. Domains are plain strings chosen by callers (for example
/// `"user"` or `"post_detail"`); unlisted domains fall back to the default.
#[derive(Debug, Clone)]
pub struct TtlPolicy {
    table: HashMap<String, Duration>,
    default_ttl: Duration,
}

impl TtlPolicy {
    pub fn new(table: HashMap<String, Duration>, default_ttl: Duration) -> Self {
        Self { table, default_ttl }
    }

    pub fn from_settings(settings: &CacheSettings) -> Self {
        Self::new(settings.ttl_table.clone(), settings.default_ttl)
    }

    /// TTL for a cache domain, or the global default when unlisted.
    pub fn ttl_for(&self, domain: &str) -> Duration {
        self.table
            .get(domain)
            .copied()
            .unwrap_or(self.default_ttl)
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> TtlPolicy {
        let mut table = HashMap::new();
        table.insert("user".to_string(), Duration::from_secs(1800));
        table.insert("post_count".to_string(), Duration::from_secs(600));
        TtlPolicy::new(table, Duration::from_secs(3600))
    }

    #[test]
    fn listed_domains_use_their_configured_ttl() {
        let policy = policy();
        assert_eq!(policy.ttl_for("user"), Duration::from_secs(1800));
        assert_eq!(policy.ttl_for("post_count"), Duration::from_secs(600));
    }

    #[test]
    fn unlisted_domains_fall_back_to_the_default() {
        let policy = policy();
        assert_eq!(policy.ttl_for("weather"), Duration::from_secs(3600));
        assert_eq!(policy.default_ttl(), Duration::from_secs(3600));
    }
}
