//! # Persistence Gateway
//!
//! Storage for farmers and farms, shared by every request handler.
//!
//! The gateway is a pair of traits:
//! - `Repository<E>`: the CRUD operations common to every stored record,
//!   generic over an `Entity` that knows its table, columns and row mapping.
//! - `FarmRepository`: the one extra query farms need, a lookup by `farmer_id`.
//!
//! `SqliteStore` implements both on top of SQLite, opening a connection per
//! call. Each call is atomic on its own; nothing here spans several calls in a
//! transaction, so two concurrent updates of the same id resolve as
//! last-write-wins.

mod entity;
mod sqlite;

pub use entity::Entity;
pub use sqlite::SqliteStore;

use common::model::farm::Farm;

/// Errors raised by the store itself, as opposed to "record not found".
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// CRUD operations over one kind of record.
pub trait Repository<E: Entity> {
    /// Every record, in id order.
    fn find_all(&self) -> Result<Vec<E>, StoreError>;

    fn find_by_id(&self, id: i64) -> Result<Option<E>, StoreError>;

    fn exists_by_id(&self, id: i64) -> Result<bool, StoreError>;

    /// Inserts `entity` under a fresh id when its id is `None`, otherwise
    /// overwrites the record stored under that id (inserting it if missing).
    /// Returns the record as stored.
    fn save(&self, entity: E) -> Result<E, StoreError>;

    /// Removes the record; a missing id is not an error.
    fn delete_by_id(&self, id: i64) -> Result<(), StoreError>;

    fn count(&self) -> Result<u64, StoreError>;
}

pub trait FarmRepository: Repository<Farm> {
    /// Farms whose `farmer_id` equals `farmer_id`, in id order.
    fn find_by_farmer_id(&self, farmer_id: i64) -> Result<Vec<Farm>, StoreError>;
}
