//! Request DTOs with validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use newsdesk_entity::news::{CreateNews, UpdateNews};

/// Body of `POST /api/news`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateNewsRequest {
    /// Headline.
    #[validate(length(min = 1, max = 255, message = "title must have 1 to 255 characters"))]
    pub title: String,
    /// Body text.
    #[validate(length(
        min = 1,
        max = 255,
        message = "description must have 1 to 255 characters"
    ))]
    pub description: String,
    /// Optional publication date (RFC 3339).
    #[serde(default)]
    pub publication_date: Option<DateTime<Utc>>,
}

impl From<CreateNewsRequest> for CreateNews {
    fn from(req: CreateNewsRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            publication_date: req.publication_date,
        }
    }
}

/// Body of `PUT /api/news/{code}`. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNewsRequest {
    /// New headline.
    #[validate(length(min = 1, max = 255, message = "title must have 1 to 255 characters"))]
    pub title: Option<String>,
    /// New body text.
    #[validate(length(
        min = 1,
        max = 255,
        message = "description must have 1 to 255 characters"
    ))]
    pub description: Option<String>,
    /// New publication date.
    pub publication_date: Option<DateTime<Utc>>,
}

impl From<UpdateNewsRequest> for UpdateNews {
    fn from(req: UpdateNewsRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            publication_date: req.publication_date,
        }
    }
}
