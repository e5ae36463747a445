//! Soft-delete a news item.

use tracing::info;
use uuid::Uuid;

use newsdesk_core::error::AppError;
use newsdesk_core::result::AppResult;
use newsdesk_core::traits::Service;

use super::{NewsRepositoryRef, find_by_code};

/// Marks a news item as deleted.
#[derive(Clone)]
pub struct DeleteNewsService {
    repo: NewsRepositoryRef,
}

impl DeleteNewsService {
    /// Creates a new delete-news service.
    pub fn new(repo: NewsRepositoryRef) -> Self {
        Self { repo }
    }

    /// Soft-delete the news item with `code`.
    pub async fn perform(&self, code: Uuid) -> AppResult<()> {
        let news = find_by_code(&self.repo, code).await?;
        if !self.repo.soft_delete(&news.id).await? {
            // Deleted concurrently after the lookup.
            return Err(AppError::not_found(format!("News with code {code} not found")));
        }
        info!(%code, "News deleted");
        Ok(())
    }
}

impl Service for DeleteNewsService {}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::testing::InMemoryNewsRepository;
    use newsdesk_core::traits::{Repository, UpdateOutcome};
    use newsdesk_core::types::{ColumnValue, FilterRequest, Paginated};
    use newsdesk_entity::news::{CreateNews, News, UpdateNews};

    /// Another caller soft-deletes the row between the lookup and our delete.
    struct RacingDelete(Arc<InMemoryNewsRepository>);

    #[async_trait]
    impl Repository for RacingDelete {
        type Entity = News;
        type Id = i64;
        type Create = CreateNews;
        type Update = UpdateNews;

        async fn find_all(&self) -> AppResult<Vec<News>> {
            self.0.find_all().await
        }
        async fn find_by_id(&self, id: &i64) -> AppResult<Option<News>> {
            self.0.find_by_id(id).await
        }
        async fn find_by_id_with_deleted(&self, id: &i64) -> AppResult<Option<News>> {
            self.0.find_by_id_with_deleted(id).await
        }
        async fn create(&self, input: &CreateNews) -> AppResult<News> {
            self.0.create(input).await
        }
        async fn update(&self, id: &i64, changes: &UpdateNews) -> AppResult<UpdateOutcome> {
            self.0.update(id, changes).await
        }
        async fn delete(&self, id: &i64) -> AppResult<bool> {
            self.0.delete(id).await
        }
        async fn soft_delete(&self, id: &i64) -> AppResult<bool> {
            self.0.soft_delete(id).await?;
            self.0.soft_delete(id).await
        }
        async fn find_one_by(&self, field: &str, value: ColumnValue) -> AppResult<Option<News>> {
            self.0.find_one_by(field, value).await
        }
        async fn find_by_filters(&self, filters: &FilterRequest) -> AppResult<Paginated<News>> {
            self.0.find_by_filters(filters).await
        }
        async fn delete_all(&self) -> AppResult<u64> {
            self.0.delete_all().await
        }
    }

    #[tokio::test]
    async fn test_deleted_news_disappears_but_is_kept() {
        let repo = InMemoryNewsRepository::with_news(&[("Launch A", "alpha content")]);
        let code = repo.codes()[0];

        DeleteNewsService::new(repo.clone()).perform(code).await.unwrap();

        let get = crate::GetNewsService::new(repo.clone());
        assert!(get.perform(code).await.unwrap_err().is_not_found());

        let page = repo.find_by_filters(&FilterRequest::new()).await.unwrap();
        assert_eq!(page.meta.total, 0);

        let stored = repo.find_by_id_with_deleted(&1).await.unwrap().unwrap();
        assert!(stored.is_deleted());
    }

    #[tokio::test]
    async fn test_second_delete_is_not_found() {
        let repo = InMemoryNewsRepository::with_news(&[("Launch A", "alpha content")]);
        let code = repo.codes()[0];
        let service = DeleteNewsService::new(repo);

        service.perform(code).await.unwrap();
        assert!(service.perform(code).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_concurrent_delete_is_not_found() {
        let inner = InMemoryNewsRepository::with_news(&[("Launch A", "alpha content")]);
        let code = inner.codes()[0];
        let service = DeleteNewsService::new(Arc::new(RacingDelete(inner.clone())));

        assert!(service.perform(code).await.unwrap_err().is_not_found());
        assert!(inner.find_by_id_with_deleted(&1).await.unwrap().unwrap().is_deleted());
    }
}
