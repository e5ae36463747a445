//! Newsdesk server entry point.
//!
//! Loads configuration, initialises logging, connects to PostgreSQL and runs
//! the HTTP API until Ctrl+C.

use tracing_subscriber::{EnvFilter, fmt};

use newsdesk_core::config::AppConfig;
use newsdesk_core::error::AppError;
use newsdesk_database::DatabasePool;

#[tokio::main]
async fn main() {
    let config = match AppConfig::load_from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Initialize tracing. `RUST_LOG` overrides the configured level.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    if config.logging.is_json() {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    } else {
        fmt().pretty().with_env_filter(filter).with_target(true).init();
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Newsdesk");

    let db = DatabasePool::connect(&config.database).await?;
    newsdesk_api::run_server(config, db).await
}
