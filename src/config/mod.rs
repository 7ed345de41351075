//! Configuration layer: typed settings with layered precedence (file → env).

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "quaderno";
const ENV_PREFIX: &str = "QUADERNO";

const DEFAULT_CACHE_DIRECTORY: &str = "cache/data";
const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

/// Per-domain TTLs of the reference deployment; entries from the `cache.ttl_seconds`
/// table extend or override these.
const DEFAULT_DOMAIN_TTLS: &[(&str, u64)] = &[
    ("user", 1800),
    ("user_can_write", 600),
    ("user_posting_limit", 300),
    ("visitor_count", 3600),
    ("categories_read", 3600),
    ("categories_write", 3600),
    ("posts_meta", 600),
    ("post_detail", 1800),
    ("post_count", 600),
];

const DEFAULT_LOGIN_WINDOW_SECS: u64 = 60;
const DEFAULT_LOGIN_IP_THRESHOLD: u64 = 30;
const DEFAULT_LOGIN_USER_THRESHOLD: u64 = 10;
const DEFAULT_LOGIN_BLOCK_SECS: u64 = 300;
const DEFAULT_BLOCK_DELAY_MS_MIN: u64 = 150;
const DEFAULT_BLOCK_DELAY_MS_MAX: u64 = 300;
const DEFAULT_FAIL_DELAY_MS_MIN: u64 = 200;
const DEFAULT_FAIL_DELAY_MS_MAX: u64 = 500;

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub cache: CacheSettings,
    pub login_rate_limit: LoginRateLimitSettings,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

/// Cache layer configuration: enable flag, durable-storage location, global
/// default TTL, and the per-domain TTL table.
#[derive(Debug, Clone)]
pub struct CacheSettings {
    pub enabled: bool,
    pub directory: PathBuf,
    pub default_ttl: Duration,
    pub ttl_table: HashMap<String, Duration>,
}

/// Login throttling configuration.
///
/// Thresholds are strict: a subject is blocked once its attempt count
/// *exceeds* the threshold inside one window.
#[derive(Debug, Clone)]
pub struct LoginRateLimitSettings {
    pub window: Duration,
    pub ip_threshold: u64,
    pub user_threshold: u64,
    pub block: Duration,
    pub block_delay_min: Duration,
    pub block_delay_max: Duration,
    pub fail_delay_min: Duration,
    pub fail_delay_max: Duration,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (defaults file → local file →
/// explicit file → environment).
pub fn load(config_file: Option<&Path>) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = config_file {
        builder = builder.add_source(File::from(path).required(true));
    }

    builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

    let raw: RawSettings = builder.build()?.try_deserialize()?;
    Settings::from_raw(raw)
}

impl Settings {
    pub(crate) fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        Ok(Self {
            logging: build_logging_settings(raw.logging)?,
            cache: build_cache_settings(raw.cache)?,
            login_rate_limit: build_login_rate_limit_settings(raw.login_rate_limit)?,
        })
    }
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::INFO,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

fn build_cache_settings(cache: RawCacheSettings) -> Result<CacheSettings, LoadError> {
    let enabled = cache.enabled.unwrap_or(true);

    let directory = cache
        .directory
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_DIRECTORY));
    if directory.as_os_str().is_empty() {
        return Err(LoadError::invalid("cache.directory", "path must not be empty"));
    }

    let default_ttl_secs = cache.default_ttl_seconds.unwrap_or(DEFAULT_CACHE_TTL_SECS);
    if default_ttl_secs == 0 {
        return Err(LoadError::invalid(
            "cache.default_ttl_seconds",
            "must be greater than zero",
        ));
    }

    let mut ttl_table: HashMap<String, Duration> = DEFAULT_DOMAIN_TTLS
        .iter()
        .map(|(domain, secs)| ((*domain).to_string(), Duration::from_secs(*secs)))
        .collect();
    for (domain, secs) in cache.ttl_seconds.unwrap_or_default() {
        if secs == 0 {
            return Err(LoadError::invalid(
                "cache.ttl_seconds",
                format!("TTL for domain `{domain}` must be greater than zero"),
            ));
        }
        ttl_table.insert(domain, Duration::from_secs(secs));
    }

    Ok(CacheSettings {
        enabled,
        directory,
        default_ttl: Duration::from_secs(default_ttl_secs),
        ttl_table,
    })
}

fn build_login_rate_limit_settings(
    rate_limit: RawLoginRateLimitSettings,
) -> Result<LoginRateLimitSettings, LoadError> {
    let window_secs = rate_limit
        .window_seconds
        .unwrap_or(DEFAULT_LOGIN_WINDOW_SECS);
    if window_secs == 0 {
        return Err(LoadError::invalid(
            "login_rate_limit.window_seconds",
            "must be greater than zero",
        ));
    }

    let block_secs = rate_limit.block_seconds.unwrap_or(DEFAULT_LOGIN_BLOCK_SECS);
    if block_secs == 0 {
        return Err(LoadError::invalid(
            "login_rate_limit.block_seconds",
            "must be greater than zero",
        ));
    }

    let block_delay_min = rate_limit
        .block_delay_ms_min
        .unwrap_or(DEFAULT_BLOCK_DELAY_MS_MIN);
    let block_delay_max = rate_limit
        .block_delay_ms_max
        .unwrap_or(DEFAULT_BLOCK_DELAY_MS_MAX);
    if block_delay_min > block_delay_max {
        return Err(LoadError::invalid(
            "login_rate_limit.block_delay_ms_min",
            "must not exceed block_delay_ms_max",
        ));
    }

    let fail_delay_min = rate_limit
        .fail_delay_ms_min
        .unwrap_or(DEFAULT_FAIL_DELAY_MS_MIN);
    let fail_delay_max = rate_limit
        .fail_delay_ms_max
        .unwrap_or(DEFAULT_FAIL_DELAY_MS_MAX);
    if fail_delay_min > fail_delay_max {
        return Err(LoadError::invalid(
            "login_rate_limit.fail_delay_ms_min",
            "must not exceed fail_delay_ms_max",
        ));
    }

    Ok(LoginRateLimitSettings {
        window: Duration::from_secs(window_secs),
        ip_threshold: rate_limit
            .ip_threshold
            .unwrap_or(DEFAULT_LOGIN_IP_THRESHOLD),
        user_threshold: rate_limit
            .user_threshold
            .unwrap_or(DEFAULT_LOGIN_USER_THRESHOLD),
        block: Duration::from_secs(block_secs),
        block_delay_min: Duration::from_millis(block_delay_min),
        block_delay_max: Duration::from_millis(block_delay_max),
        fail_delay_min: Duration::from_millis(fail_delay_min),
        fail_delay_max: Duration::from_millis(fail_delay_max),
    })
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub(crate) struct RawSettings {
    logging: RawLoggingSettings,
    cache: RawCacheSettings,
    login_rate_limit: RawLoginRateLimitSettings,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawCacheSettings {
    enabled: Option<bool>,
    directory: Option<PathBuf>,
    default_ttl_seconds: Option<u64>,
    ttl_seconds: Option<HashMap<String, u64>>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoginRateLimitSettings {
    window_seconds: Option<u64>,
    ip_threshold: Option<u64>,
    user_threshold: Option<u64>,
    block_seconds: Option<u64>,
    block_delay_ms_min: Option<u64>,
    block_delay_ms_max: Option<u64>,
    fail_delay_ms_min: Option<u64>,
    fail_delay_ms_max: Option<u64>,
}

#[cfg(test)]
mod tests;
