//! News entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use newsdesk_core::traits::Changeset;
use newsdesk_core::types::ColumnValue;

use super::dto::NewsDto;

/// A news item as stored in the `news` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct News {
    /// Internal surrogate key. Never exposed over HTTP.
    pub id: i64,
    /// Public identifier.
    pub code: Uuid,
    /// Headline.
    pub title: String,
    /// Body text.
    pub description: String,
    /// When the news becomes effective.
    pub publication_date: Option<DateTime<Utc>>,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl News {
    /// Whether the news has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

impl From<News> for NewsDto {
    fn from(news: News) -> Self {
        Self {
            code: news.code,
            title: news.title,
            description: news.description,
            publication_date: news.publication_date,
            creation_date: news.created_at,
            update_date: news.updated_at,
        }
    }
}

/// Data required to create a news item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateNews {
    /// Headline.
    pub title: String,
    /// Body text.
    pub description: String,
    /// Optional publication date.
    pub publication_date: Option<DateTime<Utc>>,
}

impl Changeset for CreateNews {
    fn changes(&self) -> Vec<(&'static str, ColumnValue)> {
        let mut changes = vec![
            ("title", ColumnValue::from(self.title.as_str())),
            ("description", ColumnValue::from(self.description.as_str())),
        ];
        if let Some(date) = self.publication_date {
            changes.push(("publication_date", date.into()));
        }
        changes
    }
}

/// Partial update for a news item. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateNews {
    /// New headline.
    pub title: Option<String>,
    /// New body text.
    pub description: Option<String>,
    /// New publication date.
    pub publication_date: Option<DateTime<Utc>>,
}

impl Changeset for UpdateNews {
    fn changes(&self) -> Vec<(&'static str, ColumnValue)> {
        let mut changes = Vec::new();
        if let Some(title) = &self.title {
            changes.push(("title", title.as_str().into()));
        }
        if let Some(description) = &self.description {
            changes.push(("description", description.as_str().into()));
        }
        if let Some(date) = self.publication_date {
            changes.push(("publication_date", date.into()));
        }
        changes
    }
}
