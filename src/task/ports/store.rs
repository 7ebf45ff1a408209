//! Store port for loading and replacing the whole task collection.

use crate::task::domain::StoredTask;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Whole-collection task persistence contract.
///
/// Stores never merge: every save replaces the previous collection.
/// Elements a store cannot recognise as task records are returned as
/// [`StoredTask::Foreign`] and must be written back unchanged.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Loads every persisted task in stored order.
    ///
    /// An absent backing store yields an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Read`] when the backing store cannot be read
    /// or [`TaskStoreError::Corrupt`] when its content is not a collection.
    async fn load_all(&self) -> TaskStoreResult<Vec<StoredTask>>;

    /// Replaces the persisted collection with `entries`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Write`] when the collection cannot be
    /// written.
    async fn save_all(&self, entries: &[StoredTask]) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The backing store exists but could not be read.
    #[error("failed to read task store: {0}")]
    Read(Arc<dyn std::error::Error + Send + Sync>),

    /// The backing store content is not a task collection.
    #[error("task store content is corrupt: {0}")]
    Corrupt(Arc<dyn std::error::Error + Send + Sync>),

    /// The collection could not be written.
    #[error("failed to write task store: {0}")]
    Write(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a read failure.
    pub fn read(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Read(Arc::new(err))
    }

    /// Wraps a decoding failure.
    pub fn corrupt(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Corrupt(Arc::new(err))
    }

    /// Wraps a write failure.
    pub fn write(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Write(Arc::new(err))
    }
}
