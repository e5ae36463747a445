//! List news with pagination and search.

use tracing::info;

use newsdesk_core::result::AppResult;
use newsdesk_core::traits::Service;
use newsdesk_core::types::{FilterRequest, Paginated};
use newsdesk_entity::news::NewsDto;

use super::NewsRepositoryRef;

/// Returns a page of news matching a filter request.
#[derive(Clone)]
pub struct ListNewsService {
    repo: NewsRepositoryRef,
}

impl ListNewsService {
    /// Creates a new list-news service.
    pub fn new(repo: NewsRepositoryRef) -> Self {
        Self { repo }
    }

    /// Fetch one page and map each item to its public record.
    pub async fn perform(&self, filters: FilterRequest) -> AppResult<Paginated<NewsDto>> {
        info!(
            page = filters.page(),
            limit = filters.limit(),
            search = filters.search_term(),
            "Listing news"
        );
        let page = self.repo.find_by_filters(&filters).await?;
        Ok(page.map(NewsDto::from))
    }
}

impl Service for ListNewsService {}
