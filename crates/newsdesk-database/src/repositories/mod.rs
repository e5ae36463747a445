//! Repository implementations.

pub mod base;
pub mod news;

pub use base::{PgRepository, Record};
pub use news::{NEWS_SCHEMA, NewsRepository};
