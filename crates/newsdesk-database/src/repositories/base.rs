//! Generic PostgreSQL repository.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{Encode, FromRow, PgPool, Postgres, QueryBuilder, Type};
use tracing::debug;

use newsdesk_core::error::{AppError, ErrorKind};
use newsdesk_core::result::AppResult;
use newsdesk_core::traits::{Changeset, Repository, UpdateOutcome};
use newsdesk_core::types::{ColumnValue, FilterRequest, Paginated};

use crate::query::{Conditions, FilterQuery, push_value};
use crate::schema::TableSchema;
use crate::search::SearchPredicate;

/// A row type the generic repository can serve.
pub trait Record: for<'r> FromRow<'r, PgRow> + Send + Sync + Unpin + 'static {
    /// Primary key type.
    type Id: for<'q> Encode<'q, Postgres> + Type<Postgres> + Clone + fmt::Debug + Send + Sync + 'static;
    /// Partial input for inserts.
    type Create: Changeset + 'static;
    /// Partial input for updates.
    type Update: Changeset + 'static;
}

/// [`Repository`] over one PostgreSQL table described by a [`TableSchema`].
pub struct PgRepository<E: Record> {
    pool: PgPool,
    schema: &'static TableSchema,
    search: Option<Arc<dyn SearchPredicate>>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Record> Clone for PgRepository<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            schema: self.schema,
            search: self.search.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Record> fmt::Debug for PgRepository<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgRepository")
            .field("table", &self.schema.table)
            .field("searchable", &self.search.is_some())
            .finish()
    }
}

impl<E: Record> PgRepository<E> {
    /// A repository for `schema` that ignores search terms.
    pub fn with_schema(pool: PgPool, schema: &'static TableSchema) -> Self {
        Self {
            pool,
            schema,
            search: None,
            _entity: PhantomData,
        }
    }

    /// Narrow list queries with `predicate` when a search term is given.
    pub fn with_search(mut self, predicate: impl SearchPredicate) -> Self {
        self.search = Some(Arc::new(predicate));
        self
    }

    /// The table this repository serves.
    pub fn schema(&self) -> &'static TableSchema {
        self.schema
    }

    fn select_from(&self) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("SELECT * FROM ");
        builder.push(self.schema.table);
        builder
    }

    fn push_active(&self, builder: &mut QueryBuilder<'static, Postgres>, conditions: &mut Conditions) {
        if let Some(deleted_at) = self.schema.deleted_at {
            conditions.next(builder);
            builder.push(format!("{deleted_at} IS NULL"));
        }
    }

    fn push_id(&self, builder: &mut QueryBuilder<'static, Postgres>, conditions: &mut Conditions, id: &E::Id) {
        conditions.next(builder);
        builder.push(format!("{} = ", self.schema.primary_key));
        builder.push_bind(id.clone());
    }

    fn checked_changes(&self, changes: Vec<(&'static str, ColumnValue)>) -> AppResult<Vec<(&'static str, ColumnValue)>> {
        for (column, _) in &changes {
            self.schema.column(column)?;
        }
        Ok(changes)
    }

    async fn fetch_optional(&self, mut builder: QueryBuilder<'static, Postgres>, what: &str) -> AppResult<Option<E>> {
        builder
            .build_query_as::<E>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error(format!("Failed to {what} in {}", self.schema.table), e))
    }

    async fn execute(&self, mut builder: QueryBuilder<'static, Postgres>, what: &str) -> AppResult<u64> {
        builder
            .build()
            .execute(&self.pool)
            .await
            .map(|r| r.rows_affected())
            .map_err(|e| db_error(format!("Failed to {what} in {}", self.schema.table), e))
    }

    async fn count(&self, query: &FilterQuery<'_>) -> AppResult<u64> {
        let total: i64 = query
            .count()
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error(format!("Failed to count {}", self.schema.table), e))?;
        Ok(u64::try_from(total).unwrap_or(0))
    }
}

#[async_trait]
impl<E: Record> Repository for PgRepository<E> {
    type Entity = E;
    type Id = E::Id;
    type Create = E::Create;
    type Update = E::Update;

    async fn find_all(&self) -> AppResult<Vec<E>> {
        debug!(table = self.schema.table, "find_all");
        let mut builder = self.select_from();
        self.push_active(&mut builder, &mut Conditions::default());
        builder.push(format!(" ORDER BY {} ASC", self.schema.primary_key));

        builder
            .build_query_as::<E>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error(format!("Failed to list {}", self.schema.table), e))
    }

    async fn find_by_id(&self, id: &E::Id) -> AppResult<Option<E>> {
        debug!(table = self.schema.table, ?id, "find_by_id");
        let mut conditions = Conditions::default();
        let mut builder = self.select_from();
        self.push_id(&mut builder, &mut conditions, id);
        self.push_active(&mut builder, &mut conditions);
        self.fetch_optional(builder, "find row by id").await
    }

    async fn find_by_id_with_deleted(&self, id: &E::Id) -> AppResult<Option<E>> {
        debug!(table = self.schema.table, ?id, "find_by_id_with_deleted");
        let mut builder = self.select_from();
        self.push_id(&mut builder, &mut Conditions::default(), id);
        self.fetch_optional(builder, "find row by id").await
    }

    async fn create(&self, input: &E::Create) -> AppResult<E> {
        let changes = self.checked_changes(input.changes())?;
        debug!(table = self.schema.table, fields = changes.len(), "create");

        let mut builder = QueryBuilder::new("INSERT INTO ");
        builder.push(self.schema.table);
        if changes.is_empty() {
            builder.push(" DEFAULT VALUES");
        } else {
            builder.push(" (");
            let mut columns = builder.separated(", ");
            for (column, _) in &changes {
                columns.push(*column);
            }
            builder.push(") VALUES (");
            for (i, (_, value)) in changes.into_iter().enumerate() {
                if i > 0 {
                    builder.push(", ");
                }
                push_value(&mut builder, value);
            }
            builder.push(")");
        }
        builder.push(" RETURNING *");

        builder
            .build_query_as::<E>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error(format!("Failed to insert into {}", self.schema.table), e))
    }

    async fn update(&self, id: &E::Id, changes: &E::Update) -> AppResult<UpdateOutcome> {
        let changes = self.checked_changes(changes.changes())?;
        debug!(table = self.schema.table, ?id, fields = changes.len(), "update");

        let mut builder = QueryBuilder::new("UPDATE ");
        builder.push(self.schema.table);
        builder.push(" SET ");
        for (column, value) in changes {
            builder.push(column);
            builder.push(" = ");
            push_value(&mut builder, value);
            builder.push(", ");
        }
        builder.push(format!("{} = NOW()", self.schema.updated_at));

        let mut conditions = Conditions::default();
        self.push_id(&mut builder, &mut conditions, id);
        self.push_active(&mut builder, &mut conditions);

        let rows_affected = self.execute(builder, "update row").await?;
        Ok(UpdateOutcome { rows_affected })
    }

    async fn delete(&self, id: &E::Id) -> AppResult<bool> {
        debug!(table = self.schema.table, ?id, "delete");
        let mut builder = QueryBuilder::new("DELETE FROM ");
        builder.push(self.schema.table);
        self.push_id(&mut builder, &mut Conditions::default(), id);
        Ok(self.execute(builder, "delete row").await? > 0)
    }

    async fn soft_delete(&self, id: &E::Id) -> AppResult<bool> {
        let Some(deleted_at) = self.schema.deleted_at else {
            return Err(AppError::internal(format!(
                "Table {} does not support soft deletion",
                self.schema.table
            )));
        };
        debug!(table = self.schema.table, ?id, "soft_delete");

        let mut builder = QueryBuilder::new("UPDATE ");
        builder.push(self.schema.table);
        builder.push(format!(" SET {deleted_at} = NOW()"));
        let mut conditions = Conditions::default();
        self.push_id(&mut builder, &mut conditions, id);
        self.push_active(&mut builder, &mut conditions);
        Ok(self.execute(builder, "soft delete row").await? > 0)
    }

    async fn find_one_by(&self, field: &str, value: ColumnValue) -> AppResult<Option<E>> {
        let column = self.schema.column(field)?;
        debug!(table = self.schema.table, column, "find_one_by");

        let mut conditions = Conditions::default();
        let mut builder = self.select_from();
        conditions.next(&mut builder);
        builder.push(column);
        if value.is_null() {
            builder.push(" IS NULL");
        } else {
            builder.push(" = ");
            push_value(&mut builder, value);
        }
        self.push_active(&mut builder, &mut conditions);
        builder.push(format!(" ORDER BY {} ASC LIMIT 1", self.schema.primary_key));
        self.fetch_optional(builder, "find row by field").await
    }

    async fn find_by_filters(&self, filters: &FilterRequest) -> AppResult<Paginated<E>> {
        #[derive(sqlx::FromRow)]
        struct RowWithCount<M> {
            #[sqlx(flatten)]
            model: M,
            total_count: i64,
        }

        let query = FilterQuery::new(self.schema, filters).with_search(self.search.as_deref());
        let mut builder = query.page()?;
        debug!(
            table = self.schema.table,
            page = filters.page(),
            limit = filters.limit(),
            search = filters.search_term(),
            "find_by_filters"
        );

        let rows: Vec<RowWithCount<E>> = builder
            .build_query_as::<RowWithCount<E>>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error(format!("Failed to list {}", self.schema.table), e))?;

        let total = match rows.first() {
            Some(row) => u64::try_from(row.total_count).unwrap_or(0),
            // Past the last page the window count is unavailable.
            None if filters.page() > 1 => self.count(&query).await?,
            None => 0,
        };

        let data = rows.into_iter().map(|row| row.model).collect();
        Ok(Paginated::new(data, total, filters))
    }

    async fn delete_all(&self) -> AppResult<u64> {
        debug!(table = self.schema.table, "delete_all");
        let mut builder = QueryBuilder::new("DELETE FROM ");
        builder.push(self.schema.table);
        self.execute(builder, "clear table").await
    }
}

fn db_error(message: String, source: sqlx::Error) -> AppError {
    AppError::with_source(ErrorKind::Database, message, source)
}
