//! Static description of an entity table.
//!
//! Identifiers that end up in SQL text (table, column and sort names) come
//! only from a [`TableSchema`]; caller-supplied names are looked up here and
//! never interpolated directly.

use newsdesk_core::error::AppError;
use newsdesk_core::result::AppResult;

/// One column: the name callers use and the name the table uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    /// Field name exposed to callers (e.g. `publicationDate`).
    pub field: &'static str,
    /// Storage column name (e.g. `publication_date`).
    pub column: &'static str,
    /// Whether list queries may order by this column.
    pub sortable: bool,
}

impl ColumnDef {
    /// A non-sortable column.
    pub const fn new(field: &'static str, column: &'static str) -> Self {
        Self {
            field,
            column,
            sortable: false,
        }
    }

    /// Mark the column as allowed in `ORDER BY`.
    pub const fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

/// Table name, key, columns and lifecycle columns of one entity.
#[derive(Debug, Clone, Copy)]
pub struct TableSchema {
    /// Table name.
    pub table: &'static str,
    /// Primary key column; also the ordering tie-breaker.
    pub primary_key: &'static str,
    /// Every column callers may reference.
    pub columns: &'static [ColumnDef],
    /// Column refreshed on every update.
    pub updated_at: &'static str,
    /// Soft-delete marker column, if the table supports soft deletion.
    pub deleted_at: Option<&'static str>,
}

impl TableSchema {
    /// Look up a column by field name or column name.
    pub fn resolve(&self, name: &str) -> Option<&ColumnDef> {
        self.columns
            .iter()
            .find(|c| c.field == name || c.column == name)
    }

    /// Resolve `name` to a column, rejecting unknown names.
    pub fn column(&self, name: &str) -> AppResult<&'static str> {
        self.resolve(name).map(|c| c.column).ok_or_else(|| {
            AppError::validation(format!("Unknown field '{name}' for {}", self.table))
        })
    }

    /// Resolve `name` to a column that may appear in `ORDER BY`.
    pub fn sort_column(&self, name: &str) -> AppResult<&'static str> {
        match self.resolve(name) {
            Some(def) if def.sortable => Ok(def.column),
            _ => Err(AppError::validation(format!(
                "Cannot order {} by '{name}'; allowed: {}",
                self.table,
                self.sortable_fields().join(", ")
            ))),
        }
    }

    /// Field names that may be used for ordering.
    pub fn sortable_fields(&self) -> Vec<&'static str> {
        self.columns
            .iter()
            .filter(|c| c.sortable)
            .map(|c| c.field)
            .collect()
    }
}
