//! Start the Newsdesk server.

use clap::Args;

use newsdesk_core::config::AppConfig;
use newsdesk_core::error::AppError;

use crate::output;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Skip pending migrations on startup
    #[arg(long)]
    pub no_migrate: bool,
}

impl ServeArgs {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if self.no_migrate {
            config.database.run_migrations = false;
        }
    }
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    args.apply(&mut config);

    println!("Starting Newsdesk server...");
    output::print_kv("Host", &config.server.host);
    output::print_kv("Port", &config.server.port.to_string());
    output::print_kv("Migrations", if config.database.run_migrations { "on" } else { "off" });

    let db = super::connect(&config).await?;
    newsdesk_api::run_server(config, db).await
}
