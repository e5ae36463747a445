//! # newsdesk-database
//!
//! PostgreSQL connection management, the migration runner, and the generic
//! repository that every entity table is served through.
//!
//! A concrete repository is a [`PgRepository`] plus a [`TableSchema`]
//! describing its columns and, optionally, a [`SearchPredicate`] deciding
//! how a free-text search term narrows the rows.

pub mod connection;
pub mod migration;
pub mod query;
pub mod repositories;
pub mod schema;
pub mod search;

pub use connection::DatabasePool;
pub use query::FilterQuery;
pub use repositories::{NewsRepository, PgRepository, Record};
pub use schema::{ColumnDef, TableSchema};
pub use search::{ContainsAny, SearchPredicate};
