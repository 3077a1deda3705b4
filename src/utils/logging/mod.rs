//! Logging initialization for the pipeline
//!
//! Thin wrapper over `tracing-subscriber` so the binary and tests share the
//! same setup path.

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber from the logging configuration
///
/// The `RUST_LOG` environment variable takes precedence over the configured
/// level. Calling this twice is a no-op (the second `try_init` fails and is
/// ignored), which keeps test setups simple.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    if config.json {
        let _ = tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false)
            .try_init();
    }
}
