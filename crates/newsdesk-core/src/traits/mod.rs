//! Core traits defined in `newsdesk-core` and implemented by other crates.

pub mod repository;
pub mod service;

pub use repository::{Changeset, Repository, UpdateOutcome};
pub use service::Service;
