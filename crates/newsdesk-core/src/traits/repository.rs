//! Generic repository contract for entity persistence.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::pagination::{FilterRequest, Paginated};
use crate::types::value::ColumnValue;

/// A partial input: only the fields the caller actually supplied.
///
/// Column names are storage column names; every value is bound as a query
/// parameter by the repository implementation.
pub trait Changeset: Send + Sync {
    /// The supplied `(column, value)` pairs, in a stable order.
    fn changes(&self) -> Vec<(&'static str, ColumnValue)>;

    /// Whether no field was supplied.
    fn is_empty(&self) -> bool {
        self.changes().is_empty()
    }
}

/// Result of an update statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateOutcome {
    /// Number of rows the statement touched.
    pub rows_affected: u64,
}

impl UpdateOutcome {
    /// Whether at least one row was updated.
    pub fn is_affected(&self) -> bool {
        self.rows_affected > 0
    }
}

/// Generic CRUD + filtered pagination repository.
///
/// Defined with associated types so each entity gets a strongly typed
/// repository while callers can still hold it as a trait object. Lookups
/// that find nothing return `Ok(None)`; storage failures surface as
/// `ErrorKind::Database` with the driver error as source.
///
/// Rows carrying a soft-delete mark are invisible to every method except
/// [`Repository::find_by_id_with_deleted`] and the hard deletes.
#[async_trait]
pub trait Repository: Send + Sync + 'static {
    /// Row type returned by reads.
    type Entity: Send + Sync + 'static;
    /// Primary key type.
    type Id: Send + Sync + 'static;
    /// Partial input accepted by [`Repository::create`].
    type Create: Changeset + 'static;
    /// Partial input accepted by [`Repository::update`].
    type Update: Changeset + 'static;

    /// All active entities, unpaginated.
    async fn find_all(&self) -> AppResult<Vec<Self::Entity>>;

    /// Find an active entity by primary key.
    async fn find_by_id(&self, id: &Self::Id) -> AppResult<Option<Self::Entity>>;

    /// Find an entity by primary key, including soft-deleted rows.
    async fn find_by_id_with_deleted(&self, id: &Self::Id) -> AppResult<Option<Self::Entity>>;

    /// Persist a new entity; identifiers and timestamps are server-assigned.
    async fn create(&self, input: &Self::Create) -> AppResult<Self::Entity>;

    /// Apply the supplied fields and refresh the update timestamp.
    ///
    /// A missing id is not an error; it yields `rows_affected == 0`.
    async fn update(&self, id: &Self::Id, changes: &Self::Update) -> AppResult<UpdateOutcome>;

    /// Hard-delete a row. Returns `true` if a row was removed.
    async fn delete(&self, id: &Self::Id) -> AppResult<bool>;

    /// Mark an active row as deleted. Returns `false` if no active row matched,
    /// in which case an existing deletion timestamp is left as it was.
    async fn soft_delete(&self, id: &Self::Id) -> AppResult<bool>;

    /// First active entity whose `field` equals `value`.
    async fn find_one_by(&self, field: &str, value: ColumnValue) -> AppResult<Option<Self::Entity>>;

    /// A page of active entities matching the filter, plus pagination metadata.
    async fn find_by_filters(&self, filters: &FilterRequest) -> AppResult<Paginated<Self::Entity>>;

    /// Remove every row. Returns the number of rows removed.
    async fn delete_all(&self) -> AppResult<u64>;
}
