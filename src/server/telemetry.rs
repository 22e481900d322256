//! Logging setup

use tracing_subscriber::EnvFilter;

use super::config::{LogFormat, ServerConfig};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over the configured log level. Safe to call more than once; later calls are
/// no-ops.
pub fn init_logging(config: &ServerConfig) {
    if tracing::dispatcher::has_been_set() {
        tracing::debug!("tracing subscriber already initialized, skipping");
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    // try_init: another thread may have won the race since has_been_set()
    let _ = match config.log_format {
        LogFormat::Human => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
        LogFormat::Compact => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init(),
    };
}
