use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingSetting;

/// Installs the global subscriber: compact formatting, span traces for errors.
///
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init_tracing(logging: &LoggingSetting) -> Result<(), TelemetryError> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.filter))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("tracing already initialised: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}
