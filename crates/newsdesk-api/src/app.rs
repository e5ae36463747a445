//! Application builder: wires router, middleware and state into an Axum app.

use axum::Router;
use tokio::net::TcpListener;

use newsdesk_core::config::AppConfig;
use newsdesk_core::error::{AppError, ErrorKind};
use newsdesk_database::DatabasePool;
use newsdesk_database::migration::run_migrations;

use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::middleware::timeout::build_timeout_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let server = state.config.server.clone();
    build_router(state)
        .layer(build_timeout_layer(&server))
        .layer(build_compression_layer())
        .layer(build_cors_layer(&server.cors))
}

/// Runs the Newsdesk server until Ctrl+C.
///
/// Pending migrations are applied first when `database.run_migrations` is
/// set.
pub async fn run_server(config: AppConfig, db: DatabasePool) -> Result<(), AppError> {
    tracing::info!("Starting Newsdesk server...");

    if config.database.run_migrations {
        run_migrations(db.pool()).await?;
    }

    let addr = config.server.bind_address();
    let state = AppState::from_config(config, db.clone())?;
    let app = build_app(state);

    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
    })?;
    tracing::info!(%addr, "Newsdesk server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;

    db.close().await;
    tracing::info!("Newsdesk server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
