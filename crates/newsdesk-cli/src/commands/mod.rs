//! CLI command definitions and dispatch.

pub mod migrate;
pub mod news;
pub mod seed;
pub mod serve;

use clap::{Parser, Subcommand};

use newsdesk_core::config::{AppConfig, DEFAULT_ENV, ENV_VAR};
use newsdesk_core::error::AppError;
use newsdesk_database::DatabasePool;

use crate::logging;
use crate::output::OutputFormat;

/// Newsdesk: news CRUD and postal-code lookup service
#[derive(Debug, Parser)]
#[command(name = "newsdesk", version, about, long_about = None)]
pub struct Cli {
    /// Configuration overlay to load (`config/<env>.toml`)
    #[arg(long, global = true, env = ENV_VAR, default_value = DEFAULT_ENV)]
    pub config_env: String,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Replace the news table with sample data
    Seed(seed::SeedArgs),
    /// News queries
    News(news::NewsArgs),
}

impl Cli {
    /// Load configuration, set up logging and run the command.
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load(&self.config_env)?;
        logging::init(&config.logging, matches!(self.command, Commands::Serve(_)));

        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate(args) => migrate::execute(args, &config).await,
            Commands::Seed(args) => seed::execute(args, &config).await,
            Commands::News(args) => news::execute(args, &config, self.format).await,
        }
    }
}

/// Connect to the configured database.
pub async fn connect(config: &AppConfig) -> Result<DatabasePool, AppError> {
    DatabasePool::connect(&config.database).await
}
