//! Public output record for news.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// News as returned to API clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsDto {
    /// Public identifier.
    pub code: Uuid,
    /// Headline.
    pub title: String,
    /// Body text.
    pub description: String,
    /// When the news becomes effective.
    pub publication_date: Option<DateTime<Utc>>,
    /// When the news was created.
    pub creation_date: DateTime<Utc>,
    /// When the news was last updated.
    pub update_date: DateTime<Utc>,
}
