//! Custom Axum extractors.

pub mod json;
pub mod pagination;
pub mod path;

pub use json::ValidatedJson;
pub use pagination::Filters;
pub use path::NewsCode;
