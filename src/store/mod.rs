//! Record storage
//!
//! Keyed storage of records with insert and find-one lookups. Backends are
//! generic over the record type; the authentication service only sees the
//! [`RecordStore`] trait.

pub mod file;
pub mod memory;
pub mod query;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use query::Query;

use crate::error::StoreError;
use std::future::Future;

/// A storable record with a primary key and string fields addressable by name.
pub trait Record: Clone + Send + Sync + 'static {
    /// Primary key, unique within a store.
    fn id(&self) -> &str;

    /// Value of the named field, or `None` if the record has no such field.
    fn field(&self, name: &str) -> Option<&str>;
}

/// Insert and point-lookup contract shared by all store backends.
pub trait RecordStore<T: Record>: Send + Sync {
    /// Adds `record`; it is visible to every lookup that starts afterwards.
    ///
    /// Fails with [`StoreError::DuplicateId`] if a record with the same id exists.
    fn insert(&self, record: T) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Returns the first record, in insertion order, matching every condition
    /// of `query`. No match is `Ok(None)`.
    fn find_one(&self, query: &Query)
    -> impl Future<Output = Result<Option<T>, StoreError>> + Send;
}

/// Rejects `record` if its id is already taken in `records`.
fn ensure_unique<T: Record>(records: &[T], record: &T) -> Result<(), StoreError> {
    if records.iter().any(|existing| existing.id() == record.id()) {
        return Err(StoreError::DuplicateId(record.id().to_string()));
    }
    Ok(())
}
