//! Shared types used across the Newsdesk workspace.

pub mod pagination;
pub mod sorting;
pub mod value;

pub use pagination::{DEFAULT_LIMIT, DEFAULT_PAGE, FilterRequest, MAX_LIMIT, Paginated, PaginationMeta};
pub use sorting::SortDirection;
pub use value::ColumnValue;
