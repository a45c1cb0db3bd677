//! Subscriber setup for applications embedding rust-kmp.
//!
//! The library itself only emits `tracing` events. Binaries and tests that
//! want to see them can install a subscriber from a [`LoggingConfig`]:
//!
//! ```rust,ignore
//! use rust_kmp::config::{LogFormat, LoggingConfig};
//!
//! rust_kmp::logging::init(&LoggingConfig::new().level("rust_kmp=trace").format(LogFormat::Json))?;
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{LogFormat, LoggingConfig};
use crate::error::{KmpError, Result};

/// Build the event filter described by `config`.
pub fn filter(config: &LoggingConfig) -> Result<EnvFilter> {
    EnvFilter::try_new(&config.level)
        .map_err(|e| KmpError::config(format!("invalid log level '{}': {e}", config.level)))
}

/// Install a global subscriber.
///
/// # Errors
///
/// Fails if the level directive does not parse or a global subscriber is
/// already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(filter(config)?);

    let installed = match config.format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
    };

    installed.map_err(|e| KmpError::config(format!("failed to install subscriber: {e}")))
}
