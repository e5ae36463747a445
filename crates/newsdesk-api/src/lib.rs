//! # newsdesk-api
//!
//! HTTP API layer for Newsdesk built on Axum.
//!
//! Provides the REST endpoints for news and address lookup, request
//! extractors with validation, middleware (CORS, compression, request
//! logging), and the mapping from [`newsdesk_core::AppError`] to HTTP
//! responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
