//! News CRUD handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use newsdesk_core::types::Paginated;
use newsdesk_entity::news::NewsDto;

use crate::dto::request::{CreateNewsRequest, UpdateNewsRequest};
use crate::error::ApiResult;
use crate::extractors::{Filters, NewsCode, ValidatedJson};
use crate::state::AppState;

/// POST /api/news
pub async fn create_news(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateNewsRequest>,
) -> ApiResult<(StatusCode, Json<NewsDto>)> {
    let news = state.create_news.perform(req.into()).await?;
    Ok((StatusCode::CREATED, Json(news)))
}

/// GET /api/news
pub async fn list_news(
    State(state): State<AppState>,
    Filters(filters): Filters,
) -> ApiResult<Json<Paginated<NewsDto>>> {
    let page = state.list_news.perform(filters).await?;
    Ok(Json(page))
}

/// GET /api/news/{code}
pub async fn get_news(
    State(state): State<AppState>,
    NewsCode(code): NewsCode,
) -> ApiResult<Json<NewsDto>> {
    let news = state.get_news.perform(code).await?;
    Ok(Json(news))
}

/// PUT /api/news/{code}
pub async fn update_news(
    State(state): State<AppState>,
    NewsCode(code): NewsCode,
    ValidatedJson(req): ValidatedJson<UpdateNewsRequest>,
) -> ApiResult<Json<NewsDto>> {
    let news = state.update_news.perform(code, req.into()).await?;
    Ok(Json(news))
}

/// DELETE /api/news/{code}
pub async fn delete_news(
    State(state): State<AppState>,
    NewsCode(code): NewsCode,
) -> ApiResult<StatusCode> {
    state.delete_news.perform(code).await?;
    Ok(StatusCode::NO_CONTENT)
}
