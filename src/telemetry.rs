use std::sync::Once;

use metrics::{Unit, describe_counter};
use thiserror::Error;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{LogFormat, LoggingSettings};

static METRIC_DESCRIPTIONS: Once = Once::new();

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("failed to install tracing subscriber: {0}")]
    Init(String),
}

/// Install a global tracing subscriber using the provided logging settings.
pub fn init(logging: &LoggingSettings) -> Result<(), TelemetryError> {
    describe_metrics();

    let env_filter = EnvFilter::builder()
        .with_default_directive(logging.level.into())
        .from_env_lossy();

    let fmt_layer = match logging.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .boxed(),
        LogFormat::Compact => fmt::layer().compact().with_target(true).boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(ErrorLayer::default())
        .with(fmt_layer)
        .try_init()
        .map_err(|err| TelemetryError::Init(err.to_string()))
}

fn describe_metrics() {
    METRIC_DESCRIPTIONS.call_once(|| {
        describe_counter!(
            "quaderno_cache_memory_hit_total",
            Unit::Count,
            "Total number of memory-layer cache hits."
        );
        describe_counter!(
            "quaderno_cache_memory_miss_total",
            Unit::Count,
            "Total number of memory-layer cache misses."
        );
        describe_counter!(
            "quaderno_cache_durable_hit_total",
            Unit::Count,
            "Total number of durable-layer cache hits."
        );
        describe_counter!(
            "quaderno_cache_durable_miss_total",
            Unit::Count,
            "Total number of durable-layer cache misses, including expired and malformed records."
        );
        describe_counter!(
            "quaderno_cache_durable_error_total",
            Unit::Count,
            "Total number of durable-layer I/O failures degraded to miss or no-op."
        );
        describe_counter!(
            "quaderno_login_denied_total",
            Unit::Count,
            "Total number of login attempts denied by an active block flag."
        );
        describe_counter!(
            "quaderno_login_block_total",
            Unit::Count,
            "Total number of block flags set after a threshold was exceeded."
        );
        describe_counter!(
            "quaderno_login_failure_total",
            Unit::Count,
            "Total number of failed credential checks recorded."
        );
        describe_counter!(
            "quaderno_login_success_total",
            Unit::Count,
            "Total number of successful logins recorded."
        );
    });
}
