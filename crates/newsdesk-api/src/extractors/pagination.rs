//! List query parameter extractor.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use newsdesk_core::error::AppError;

use crate::error::ApiError;
use newsdesk_core::types::FilterRequest;

/// `page`, `limit`, `orderBy`, `sortBy` and `search` from the query string.
///
/// Malformed values (a non-numeric page, an unknown sort direction) are
/// reported as validation errors instead of Axum's plain-text rejection.
#[derive(Debug, Clone, Default)]
pub struct Filters(pub FilterRequest);

impl<S> FromRequestParts<S> for Filters
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(filters) = Query::<FilterRequest>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;
        Ok(Self(filters))
    }
}
