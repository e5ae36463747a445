//! Create a news item.

use tracing::info;

use newsdesk_core::result::AppResult;
use newsdesk_core::traits::Service;
use newsdesk_entity::news::{CreateNews, NewsDto};

use super::NewsRepositoryRef;

/// Persists a new news item.
#[derive(Clone)]
pub struct CreateNewsService {
    repo: NewsRepositoryRef,
}

impl CreateNewsService {
    /// Creates a new create-news service.
    pub fn new(repo: NewsRepositoryRef) -> Self {
        Self { repo }
    }

    /// Create the news item and return its public record.
    pub async fn perform(&self, input: CreateNews) -> AppResult<NewsDto> {
        let news = self.repo.create(&input).await?;
        info!(code = %news.code, title = %news.title, "News created");
        Ok(news.into())
    }
}

impl Service for CreateNewsService {}
