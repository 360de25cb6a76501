//! Structured logging setup
//!
//! Logs go to stderr so that stdout carries only the split itself and can be
//! piped or pasted as-is.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Initialize the global subscriber. `RUST_LOG` wins over the configured filter.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let result = if config.json { builder.json().try_init() } else { builder.try_init() };
    result.map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))
}
