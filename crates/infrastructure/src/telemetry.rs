//! Telemetry initialization
//!
//! Console-only structured logging; there is no exporter because the tool
//! never talks to a network.

use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Telemetry setup errors
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Failed to initialize the tracing subscriber
    #[error("Failed to initialize telemetry: {0}")]
    Init(String),
}

/// Initialize the global tracing subscriber
///
/// `default_filter` is used when `RUST_LOG` is not set, e.g. `"info"` or
/// `"application=debug,info"`.
///
/// # Errors
///
/// Returns [`TelemetryError::Init`] when a global subscriber is already
/// installed.
pub fn init_telemetry(default_filter: &str) -> Result<(), TelemetryError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| TelemetryError::Init(e.to_string()))
}
