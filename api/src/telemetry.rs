//! Tracing subscriber setup

use stv_shared::config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Builds the filter: `RUST_LOG` wins over the configured level
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter(config));

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))
}
