//! HTTP request handlers, one module per route group.

pub mod address;
pub mod health;
pub mod news;
