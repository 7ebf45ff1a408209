//! Service layer for validated, deduplicated task creation.

use crate::task::{
    domain::{
        DueDate, Priority, StoredTask, TaskDraft, TaskLocale, TaskRecord, TaskTitle,
        TaskValidationError,
    },
    ports::{TaskStore, TaskStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use super::{StoragePolicy, TaskCreationConfig};

/// Request payload for creating a task from raw user input.
///
/// Every field is optional so callers can pass input through unchanged;
/// absent required fields are rejected during validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: Option<String>,
    description: Option<String>,
    due_date: Option<String>,
    priority: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with every field supplied.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            due_date: Some(due_date.into()),
            priority: Some(priority.into()),
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date text.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Sets the priority label.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Validates the request fields in order: title, due date, priority.
    ///
    /// Priority labels are matched in `locale`, and the resulting draft is
    /// stored with that locale's labels.
    ///
    /// # Errors
    ///
    /// Returns the first [`TaskValidationError`] encountered.
    pub fn into_draft(self, locale: TaskLocale) -> Result<TaskDraft, TaskValidationError> {
        let title = TaskTitle::new(self.title.as_deref())?;
        let due_date = DueDate::parse(self.due_date.as_deref())?;
        let priority = Priority::from_label(self.priority.as_deref(), locale)?;
        Ok(TaskDraft::new(
            title,
            self.description.unwrap_or_default(),
            due_date,
            priority,
        )
        .in_locale(locale))
    }
}

/// Reasons a task was not created.
#[derive(Debug, Error)]
pub enum TaskCreationError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] TaskValidationError),

    /// A task with the same title, ignoring case, and due date already exists.
    #[error("task '{title}' already exists with due date {due_date}")]
    DuplicateTask {
        /// Title of the rejected task.
        title: TaskTitle,
        /// Shared due date.
        due_date: DueDate,
    },

    /// The task store failed under [`StoragePolicy::Strict`].
    #[error("task store degraded: {0}")]
    StorageDegraded(#[from] TaskStoreError),
}

/// Result type for task creation service operations.
pub type TaskCreationResult<T> = Result<T, TaskCreationError>;

/// Task creation pipeline.
///
/// Each creation loads the full collection, checks for duplicates, appends
/// the new record, and saves the full collection. The sequence is serialized
/// across clones of the service.
pub struct TaskCreationService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    config: TaskCreationConfig,
    write_lock: Arc<Mutex<()>>,
}

impl<S, C> Clone for TaskCreationService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
            config: self.config,
            write_lock: Arc::clone(&self.write_lock),
        }
    }
}

impl<S, C> TaskCreationService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a service with the default strict configuration.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self::with_config(store, clock, TaskCreationConfig::default())
    }

    /// Creates a service with a custom configuration.
    #[must_use]
    pub fn with_config(store: Arc<S>, clock: Arc<C>, config: TaskCreationConfig) -> Self {
        Self {
            store,
            clock,
            config,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the service configuration.
    #[must_use]
    pub const fn config(&self) -> &TaskCreationConfig {
        &self.config
    }

    /// Validates and persists a new task.
    ///
    /// Storage is written only when every check passes. The outcome is
    /// logged: the new identifier on success, the reason on rejection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCreationError::Validation`] for invalid input,
    /// [`TaskCreationError::DuplicateTask`] when a matching task exists, and
    /// [`TaskCreationError::StorageDegraded`] when the store fails under the
    /// strict policy.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskCreationResult<TaskRecord> {
        let result = self.try_create(request).await;
        match &result {
            Ok(record) => info!(
                task_id = %record.id(),
                title = %record.title(),
                due_date = %record.due_date(),
                "task created"
            ),
            Err(err) => warn!(reason = %err, "task rejected"),
        }
        result
    }

    async fn try_create(&self, request: CreateTaskRequest) -> TaskCreationResult<TaskRecord> {
        let draft = request.into_draft(self.config.locale)?;

        let _guard = self.write_lock.lock().await;
        let mut entries = self.load_existing().await?;
        if entries.iter().any(|entry| draft.conflicts_with(entry)) {
            return Err(TaskCreationError::DuplicateTask {
                title: draft.title().clone(),
                due_date: draft.due_date(),
            });
        }

        let record = TaskRecord::create(draft, &*self.clock);
        entries.push(record.clone().into());
        self.persist(&entries).await?;
        Ok(record)
    }

    async fn load_existing(&self) -> TaskCreationResult<Vec<StoredTask>> {
        match self.store.load_all().await {
            Ok(entries) => Ok(entries),
            Err(err) => match self.config.storage_policy {
                StoragePolicy::Strict => Err(err.into()),
                StoragePolicy::Lenient => {
                    warn!(error = %err, "task store unreadable, continuing with no existing tasks");
                    Ok(Vec::new())
                }
            },
        }
    }

    async fn persist(&self, entries: &[StoredTask]) -> TaskCreationResult<()> {
        match self.store.save_all(entries).await {
            Ok(()) => Ok(()),
            Err(err) => match self.config.storage_policy {
                StoragePolicy::Strict => Err(err.into()),
                StoragePolicy::Lenient => {
                    error!(error = %err, "task store write failed, new task was not persisted");
                    Ok(())
                }
            },
        }
    }
}
