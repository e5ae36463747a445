//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use newsdesk_core::config::AppConfig;
use newsdesk_core::result::AppResult;
use newsdesk_database::{DatabasePool, NewsRepository};
use newsdesk_integration::{PostalCodeLookup, ViaCepClient};
use newsdesk_service::{
    CreateNewsService, DeleteNewsService, GetAddressService, GetNewsService, ListNewsService,
    NewsRepositoryRef, UpdateNewsService,
};

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
    /// Database pool, used by the detailed health check.
    pub db: DatabasePool,

    // ── News ─────────────────────────────────────────────────
    /// `POST /api/news`
    pub create_news: Arc<CreateNewsService>,
    /// `GET /api/news`
    pub list_news: Arc<ListNewsService>,
    /// `GET /api/news/{code}`
    pub get_news: Arc<GetNewsService>,
    /// `PUT /api/news/{code}`
    pub update_news: Arc<UpdateNewsService>,
    /// `DELETE /api/news/{code}`
    pub delete_news: Arc<DeleteNewsService>,

    // ── Address ──────────────────────────────────────────────
    /// `GET /api/address/{cep}`
    pub get_address: Arc<GetAddressService>,
}

impl AppState {
    /// Wire every service around the given collaborators.
    pub fn new(
        config: AppConfig,
        db: DatabasePool,
        news_repo: NewsRepositoryRef,
        postal_codes: Arc<dyn PostalCodeLookup>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            db,
            create_news: Arc::new(CreateNewsService::new(Arc::clone(&news_repo))),
            list_news: Arc::new(ListNewsService::new(Arc::clone(&news_repo))),
            get_news: Arc::new(GetNewsService::new(Arc::clone(&news_repo))),
            update_news: Arc::new(UpdateNewsService::new(Arc::clone(&news_repo))),
            delete_news: Arc::new(DeleteNewsService::new(news_repo)),
            get_address: Arc::new(GetAddressService::new(postal_codes)),
        }
    }

    /// Production wiring: PostgreSQL news storage and the ViaCEP client.
    pub fn from_config(config: AppConfig, db: DatabasePool) -> AppResult<Self> {
        let news_repo: NewsRepositoryRef = Arc::new(NewsRepository::new(db.pool().clone()));
        let postal_codes: Arc<dyn PostalCodeLookup> =
            Arc::new(ViaCepClient::new(&config.postal_code)?);
        Ok(Self::new(config, db, news_repo, postal_codes))
    }
}
