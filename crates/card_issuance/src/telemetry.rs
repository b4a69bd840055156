// Rust guideline compliant 2026-10-16

//! Global `tracing` subscriber setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Failure to install the global subscriber.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Neither `RUST_LOG` nor the configured level formed a valid filter.
    #[error("invalid log level/filter {value:?}: unable to build EnvFilter")]
    EnvFilter {
        /// The rejected filter directive.
        value: String,
        #[source]
        source: ParseError,
    },
    /// A global subscriber was already installed.
    #[error("telemetry error: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Install a compact stderr subscriber.
///
/// `RUST_LOG` wins when set and valid; otherwise `log_level` is used.
///
/// # Errors
///
/// Returns [`TelemetryError::EnvFilter`] if `log_level` is not a valid
/// directive and [`TelemetryError::Subscriber`] if called twice.
pub fn init(log_level: &str) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level).map_err(|source| TelemetryError::EnvFilter {
            value: log_level.to_owned(),
            source,
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(TelemetryError::Subscriber)
}
