//! Tracing subscriber setup.

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info,showrunner=debug";

/// Install the global tracing subscriber.
///
/// Honors `RUST_LOG`, falling back to `info,showrunner=debug`. With `json`
/// set, events are written as one JSON object per line for log shippers;
/// otherwise the human-readable format is used.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_telemetry(json: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(env_filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?;
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()?;
    }

    info!(json, "Telemetry initialized");
    Ok(())
}

/// Install the human-readable console subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_console_telemetry() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_telemetry(false)
}
