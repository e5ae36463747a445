//! Partially update a news item.

use tracing::info;
use uuid::Uuid;

use newsdesk_core::error::AppError;
use newsdesk_core::result::AppResult;
use newsdesk_core::traits::Service;
use newsdesk_entity::news::{NewsDto, UpdateNews};

use super::{NewsRepositoryRef, find_by_code};

/// Applies a partial update to an existing news item.
#[derive(Clone)]
pub struct UpdateNewsService {
    repo: NewsRepositoryRef,
}

impl UpdateNewsService {
    /// Creates a new update-news service.
    pub fn new(repo: NewsRepositoryRef) -> Self {
        Self { repo }
    }

    /// Update the news item with `code` and return its new state.
    pub async fn perform(&self, code: Uuid, changes: UpdateNews) -> AppResult<NewsDto> {
        let news = find_by_code(&self.repo, code).await?;
        let outcome = self.repo.update(&news.id, &changes).await?;
        if !outcome.is_affected() {
            return Err(AppError::not_found(format!("News with code {code} not found")));
        }
        info!(%code, "News updated");

        Ok(find_by_code(&self.repo, code).await?.into())
    }
}

impl Service for UpdateNewsService {}
