//! Tracing subscriber setup

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stderr `fmt` subscriber filtered at `level`.
///
/// `RUST_LOG`, when set, replaces the level.
pub fn init_logging(level: &str, colored: bool) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| anyhow!("Invalid log level '{}': {}", level, e))?,
    };

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(colored)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layer)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize tracing: {}", e))
}
