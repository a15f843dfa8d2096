//! Logging setup.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{Config, LogFormat};

/// Filter used when `--verbose` is passed.
const VERBOSE_FILTER: &str = "status_server=debug,tower_http=debug,info";

/// Build the env filter: verbose wins, then `RUST_LOG` from the process
/// environment, then the configured level.
pub fn env_filter(config: &Config, verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log))
    }
}

/// Install the global tracing subscriber.
pub fn init_tracing(config: &Config, verbose: bool) -> Result<(), TryInitError> {
    let filter = env_filter(config, verbose);

    match config.log_format() {
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .try_init(),
    }
}
