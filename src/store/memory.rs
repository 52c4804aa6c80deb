//! In-memory record store

use log::debug;
use tokio::sync::RwLock;

use super::{Query, Record, RecordStore, ensure_unique};
use crate::error::StoreError;

/// Volatile store backed by a vector, kept in insertion order.
///
/// Lookups share a read lock, inserts take the write lock.
pub struct MemoryStore<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> RecordStore<T> for MemoryStore<T> {
    async fn insert(&self, record: T) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        ensure_unique(&records, &record)?;
        debug!("Inserted record {}", record.id());
        records.push(record);
        Ok(())
    }

    async fn find_one(&self, query: &Query) -> Result<Option<T>, StoreError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|record| query.matches(*record)).cloned())
    }
}
