//! Tracing setup for CLI commands.

use tracing_subscriber::{EnvFilter, fmt};

use newsdesk_core::config::LoggingConfig;

/// Install the global subscriber.
///
/// `verbose` keeps the configured level (used by `serve`); other commands
/// only show warnings so their output stays readable. `RUST_LOG` always
/// wins.
pub fn init(config: &LoggingConfig, verbose: bool) {
    let level = if verbose { config.level.as_str() } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let result = if config.is_json() {
        fmt().json().with_env_filter(filter).try_init()
    } else {
        fmt().with_env_filter(filter).with_target(false).try_init()
    };
    if let Err(e) = result {
        eprintln!("Logging already initialised: {e}");
    }
}
