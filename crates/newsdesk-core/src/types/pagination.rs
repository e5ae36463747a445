//! Filter/pagination request and paginated response types for list endpoints.

use serde::{Deserialize, Deserializer, Serialize};

use super::sorting::SortDirection;
use crate::error::AppError;
use crate::result::AppResult;

/// Page used when the caller supplies none (or `0`).
pub const DEFAULT_PAGE: u64 = 1;
/// Page size used when the caller supplies none (or `0`).
pub const DEFAULT_LIMIT: u64 = 10;
/// Largest page size a caller may request.
pub const MAX_LIMIT: u64 = 100;

/// Caller-supplied page/limit/sort/search parameters for a list query.
///
/// Every field is optional; the accessor methods apply the defaults. A
/// `page` or `limit` of `0`, and an empty `page`, `limit` or `sortBy`,
/// count as "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRequest {
    /// Page number (1-based).
    #[serde(default, deserialize_with = "blank_as_none")]
    pub page: Option<u64>,
    /// Number of items per page.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub limit: Option<u64>,
    /// Field to sort by.
    #[serde(default)]
    pub order_by: Option<String>,
    /// Sort direction, ascending when omitted.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub sort_by: Option<SortDirection>,
    /// Free-text search term.
    #[serde(default)]
    pub search: Option<String>,
}

impl FilterRequest {
    /// Create an empty filter request (first page, default limit).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set page and limit.
    pub fn with_page(mut self, page: u64, limit: u64) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }

    /// Set the search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Set the sort field and direction.
    pub fn with_order(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.order_by = Some(field.into());
        self.sort_by = Some(direction);
        self
    }

    /// Effective page number.
    pub fn page(&self) -> u64 {
        match self.page {
            Some(page) if page > 0 => page,
            _ => DEFAULT_PAGE,
        }
    }

    /// Effective page size.
    pub fn limit(&self) -> u64 {
        match self.limit {
            Some(limit) if limit > 0 => limit,
            _ => DEFAULT_LIMIT,
        }
    }

    /// Number of rows to skip, i.e. `(page - 1) * limit`.
    pub fn offset(&self) -> u64 {
        (self.page() - 1).saturating_mul(self.limit())
    }

    /// Effective sort direction.
    pub fn direction(&self) -> SortDirection {
        self.sort_by.unwrap_or_default()
    }

    /// The sort field, if a non-blank one was supplied.
    pub fn order_by(&self) -> Option<&str> {
        self.order_by
            .as_deref()
            .map(str::trim)
            .filter(|field| !field.is_empty())
    }

    /// The trimmed search term, if a non-blank one was supplied.
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }

    /// Reject page sizes above [`MAX_LIMIT`].
    pub fn validate(&self) -> AppResult<()> {
        if self.limit() > MAX_LIMIT {
            return Err(AppError::validation(format!(
                "limit must be at most {MAX_LIMIT}"
            )));
        }
        Ok(())
    }
}

/// A raw query value: JSON sends numbers, query strings send text.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(u64),
    Text(String),
}

/// Deserialize an optional value, treating an empty or blank string as absent.
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let text = match Option::<RawValue>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(RawValue::Number(n)) => n.to_string(),
        Some(RawValue::Text(text)) => text,
    };
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse().map(Some).map_err(serde::de::Error::custom)
}

/// Pagination metadata returned alongside a list result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Total number of matching items across all pages.
    pub total: u64,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
    /// `ceil(total / limit)`.
    pub total_pages: u64,
}

impl PaginationMeta {
    /// Compute the metadata for a page. A zero `limit` yields zero pages.
    pub fn new(total: u64, page: u64, limit: u64) -> Self {
        let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit) };
        Self {
            total,
            page,
            limit,
            total_pages,
        }
    }
}

/// A page of items plus its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// The items on this page.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub meta: PaginationMeta,
}

impl<T> Paginated<T> {
    /// Create a paginated result for the given filter request.
    pub fn new(data: Vec<T>, total: u64, filters: &FilterRequest) -> Self {
        Self {
            data,
            meta: PaginationMeta::new(total, filters.page(), filters.limit()),
        }
    }

    /// An empty page for the given filter request.
    pub fn empty(filters: &FilterRequest) -> Self {
        Self::new(Vec::new(), 0, filters)
    }

    /// Convert every item, keeping the metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}
