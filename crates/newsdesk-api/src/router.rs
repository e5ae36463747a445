//! Route definitions for the Newsdesk HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::trace::TraceLayer;

use newsdesk_core::error::AppError;

use crate::error::ApiError;
use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the API router with request tracing and logging.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(news_routes())
        .merge(address_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// News CRUD.
fn news_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/news",
            get(handlers::news::list_news).post(handlers::news::create_news),
        )
        .route(
            "/news/{code}",
            get(handlers::news::get_news)
                .put(handlers::news::update_news)
                .delete(handlers::news::delete_news),
        )
}

/// Postal-code lookup.
fn address_routes() -> Router<AppState> {
    Router::new().route("/address/{cep}", get(handlers::address::get_address))
}

fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}

async fn not_found() -> ApiError {
    AppError::not_found("Route not found").into()
}
