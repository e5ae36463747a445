//! News repository: the generic repository bound to the `news` table.

use sqlx::PgPool;

use newsdesk_entity::news::{CreateNews, News, UpdateNews};

use super::base::{PgRepository, Record};
use crate::schema::{ColumnDef, TableSchema};
use crate::search::ContainsAny;

/// Column mapping of the `news` table.
pub static NEWS_SCHEMA: TableSchema = TableSchema {
    table: "news",
    primary_key: "id",
    columns: &[
        ColumnDef::new("id", "id"),
        ColumnDef::new("code", "code"),
        ColumnDef::new("title", "title").sortable(),
        ColumnDef::new("description", "description").sortable(),
        ColumnDef::new("publicationDate", "publication_date").sortable(),
        ColumnDef::new("creationDate", "created_at").sortable(),
        ColumnDef::new("updateDate", "updated_at").sortable(),
        ColumnDef::new("deletionDate", "deleted_at"),
    ],
    updated_at: "updated_at",
    deleted_at: Some("deleted_at"),
};

impl Record for News {
    type Id = i64;
    type Create = CreateNews;
    type Update = UpdateNews;
}

/// Repository for news items.
pub type NewsRepository = PgRepository<News>;

impl NewsRepository {
    /// Create a news repository; search terms match title or description.
    pub fn new(pool: PgPool) -> Self {
        PgRepository::with_schema(pool, &NEWS_SCHEMA)
            .with_search(ContainsAny::new(["title", "description"]))
    }
}
