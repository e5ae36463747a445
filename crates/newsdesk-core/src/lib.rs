//! # newsdesk-core
//!
//! Core crate for Newsdesk. Contains the generic repository contract,
//! configuration schemas, filter/pagination types, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other Newsdesk crates
//! and knows nothing about the storage engine behind a repository.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
