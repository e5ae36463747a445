//! Search strategies plugged into the filtered list query.

use sqlx::{Postgres, QueryBuilder};

/// Adds the search condition for a non-empty, trimmed term.
///
/// Implementations push a single self-contained boolean expression (wrapped
/// in parentheses when it has several terms) and bind the term as a
/// parameter.
pub trait SearchPredicate: Send + Sync + 'static {
    /// Push the condition for `term` onto `builder`.
    fn push(&self, builder: &mut QueryBuilder<'_, Postgres>, term: &str);
}

/// Case-insensitive "contains" match against any of a set of columns.
#[derive(Debug, Clone)]
pub struct ContainsAny {
    columns: Vec<&'static str>,
}

impl ContainsAny {
    /// Match the term against any of `columns`.
    pub fn new(columns: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            columns: columns.into_iter().collect(),
        }
    }
}

impl SearchPredicate for ContainsAny {
    fn push(&self, builder: &mut QueryBuilder<'_, Postgres>, term: &str) {
        if self.columns.is_empty() {
            builder.push("TRUE");
            return;
        }

        let pattern = format!("%{}%", escape_like(term));
        builder.push("(");
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                builder.push(" OR ");
            }
            builder.push(*column);
            builder.push(" ILIKE ");
            builder.push_bind(pattern.clone());
        }
        builder.push(")");
    }
}

/// Escape `LIKE` metacharacters so the term matches literally.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
