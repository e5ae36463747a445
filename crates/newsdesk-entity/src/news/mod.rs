//! News domain entities.

pub mod dto;
pub mod model;

pub use dto::NewsDto;
pub use model::{CreateNews, News, UpdateNews};
