//! News use cases.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use std::sync::Arc;

use uuid::Uuid;

use newsdesk_core::error::AppError;
use newsdesk_core::result::AppResult;
use newsdesk_core::traits::Repository;
use newsdesk_entity::news::{CreateNews, News, UpdateNews};

pub use create::CreateNewsService;
pub use delete::DeleteNewsService;
pub use get::GetNewsService;
pub use list::ListNewsService;
pub use update::UpdateNewsService;

/// Shared handle to whatever repository stores news.
pub type NewsRepositoryRef =
    Arc<dyn Repository<Entity = News, Id = i64, Create = CreateNews, Update = UpdateNews>>;

/// Load an active news item by its public code.
pub(crate) async fn find_by_code(repo: &NewsRepositoryRef, code: Uuid) -> AppResult<News> {
    repo.find_one_by("code", code.into())
        .await?
        .ok_or_else(|| AppError::not_found(format!("News with code {code} not found")))
}
