//! Get a news item by code.

use tracing::info;
use uuid::Uuid;

use newsdesk_core::result::AppResult;
use newsdesk_core::traits::Service;
use newsdesk_entity::news::NewsDto;

use super::{NewsRepositoryRef, find_by_code};

/// Fetches a single active news item.
#[derive(Clone)]
pub struct GetNewsService {
    repo: NewsRepositoryRef,
}

impl GetNewsService {
    /// Creates a new get-news service.
    pub fn new(repo: NewsRepositoryRef) -> Self {
        Self { repo }
    }

    /// Return the news item with `code`, or a not-found error.
    pub async fn perform(&self, code: Uuid) -> AppResult<NewsDto> {
        info!(%code, "Fetching news");
        Ok(find_by_code(&self.repo, code).await?.into())
    }
}

impl Service for GetNewsService {}
