//! In-memory task store.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{StoredTask, TaskRecord},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Clones share the same collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    entries: Arc<RwLock<Vec<StoredTask>>>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `entries`.
    #[must_use]
    pub fn with_entries(entries: impl IntoIterator<Item = StoredTask>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(entries.into_iter().collect())),
        }
    }

    /// Creates a store pre-populated with `records`.
    #[must_use]
    pub fn with_records(records: impl IntoIterator<Item = TaskRecord>) -> Self {
        Self::with_entries(records.into_iter().map(StoredTask::from))
    }

    /// Returns a copy of the stored collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Read`] when the lock is poisoned.
    pub fn snapshot(&self) -> TaskStoreResult<Vec<StoredTask>> {
        let entries = self
            .entries
            .read()
            .map_err(|err| TaskStoreError::read(std::io::Error::other(err.to_string())))?;
        Ok(entries.clone())
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn load_all(&self) -> TaskStoreResult<Vec<StoredTask>> {
        self.snapshot()
    }

    async fn save_all(&self, entries: &[StoredTask]) -> TaskStoreResult<()> {
        let mut stored = self
            .entries
            .write()
            .map_err(|err| TaskStoreError::write(std::io::Error::other(err.to_string())))?;
        entries.clone_into(&mut *stored);
        Ok(())
    }
}
