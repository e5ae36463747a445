//! Filtered pagination query construction.

use sqlx::{Postgres, QueryBuilder};

use newsdesk_core::result::AppResult;
use newsdesk_core::types::{ColumnValue, FilterRequest};

use crate::schema::TableSchema;
use crate::search::SearchPredicate;

/// Builds the page and count statements for a [`FilterRequest`].
///
/// The statement shape is
/// `SELECT *, COUNT(*) OVER() AS total_count FROM t WHERE <active> AND
/// <search> ORDER BY <col> <dir>, <pk> ASC LIMIT $n OFFSET $m`, so the page
/// rows and the total match count come back together.
pub struct FilterQuery<'a> {
    schema: &'a TableSchema,
    filters: &'a FilterRequest,
    search: Option<&'a dyn SearchPredicate>,
}

impl<'a> FilterQuery<'a> {
    /// A query over `schema` without a search strategy.
    pub fn new(schema: &'a TableSchema, filters: &'a FilterRequest) -> Self {
        Self {
            schema,
            filters,
            search: None,
        }
    }

    /// Use `predicate` for the search term. `None` ignores the term.
    pub fn with_search(mut self, predicate: Option<&'a dyn SearchPredicate>) -> Self {
        self.search = predicate;
        self
    }

    /// Statement returning one page of rows plus a `total_count` column.
    ///
    /// Fails with a validation error when the limit exceeds the maximum or
    /// the order field is not sortable.
    pub fn page(&self) -> AppResult<QueryBuilder<'static, Postgres>> {
        self.filters.validate()?;
        let sort_column = self
            .filters
            .order_by()
            .map(|field| self.schema.sort_column(field))
            .transpose()?;

        let mut builder = QueryBuilder::new("SELECT *, COUNT(*) OVER() AS total_count FROM ");
        builder.push(self.schema.table);
        self.push_predicate(&mut builder);

        builder.push(" ORDER BY ");
        match sort_column {
            Some(column) if column != self.schema.primary_key => {
                builder.push(format!(
                    "{column} {}, {} ASC",
                    self.filters.direction().as_sql(),
                    self.schema.primary_key
                ));
            }
            Some(column) => {
                builder.push(format!("{column} {}", self.filters.direction().as_sql()));
            }
            None => {
                builder.push(format!("{} ASC", self.schema.primary_key));
            }
        }

        builder.push(" LIMIT ");
        builder.push_bind(to_i64(self.filters.limit()));
        builder.push(" OFFSET ");
        builder.push_bind(to_i64(self.filters.offset()));
        Ok(builder)
    }

    /// Statement counting every row matching the predicate.
    pub fn count(&self) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM ");
        builder.push(self.schema.table);
        self.push_predicate(&mut builder);
        builder
    }

    fn push_predicate(&self, builder: &mut QueryBuilder<'static, Postgres>) {
        let mut conditions = Conditions::default();
        if let Some(deleted_at) = self.schema.deleted_at {
            conditions.next(builder);
            builder.push(format!("{deleted_at} IS NULL"));
        }
        if let (Some(predicate), Some(term)) = (self.search, self.filters.search_term()) {
            conditions.next(builder);
            predicate.push(builder, term);
        }
    }
}

/// Emits ` WHERE ` before the first condition and ` AND ` before the rest.
#[derive(Default)]
pub(crate) struct Conditions {
    started: bool,
}

impl Conditions {
    pub(crate) fn next(&mut self, builder: &mut QueryBuilder<'_, Postgres>) {
        builder.push(if self.started { " AND " } else { " WHERE " });
        self.started = true;
    }
}

/// Push `value` as a bound parameter, or a literal `NULL`.
pub(crate) fn push_value(builder: &mut QueryBuilder<'_, Postgres>, value: ColumnValue) {
    match value {
        ColumnValue::Text(v) => {
            builder.push_bind(v);
        }
        ColumnValue::Integer(v) => {
            builder.push_bind(v);
        }
        ColumnValue::Float(v) => {
            builder.push_bind(v);
        }
        ColumnValue::Boolean(v) => {
            builder.push_bind(v);
        }
        ColumnValue::Uuid(v) => {
            builder.push_bind(v);
        }
        ColumnValue::Timestamp(v) => {
            builder.push_bind(v);
        }
        ColumnValue::Null => {
            builder.push("NULL");
        }
    }
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
