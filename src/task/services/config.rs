//! Configuration for the task creation service.

use crate::task::domain::TaskLocale;

/// How the service reacts when the task store misbehaves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoragePolicy {
    /// Load and save failures abort creation with
    /// [`TaskCreationError::StorageDegraded`](super::TaskCreationError::StorageDegraded).
    #[default]
    Strict,
    /// Load failures continue with an empty collection and save failures are
    /// only logged; the created record is still returned.
    Lenient,
}

/// Configuration for task creation.
///
/// # Examples
///
/// ```
/// use taskbook::task::domain::TaskLocale;
/// use taskbook::task::services::{StoragePolicy, TaskCreationConfig};
///
/// let config = TaskCreationConfig::default();
/// assert_eq!(config.storage_policy, StoragePolicy::Strict);
///
/// let lenient = TaskCreationConfig::lenient().with_locale(TaskLocale::Vietnamese);
/// assert_eq!(lenient.storage_policy, StoragePolicy::Lenient);
/// assert_eq!(lenient.locale, TaskLocale::Vietnamese);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCreationConfig {
    /// Reaction to task store failures.
    pub storage_policy: StoragePolicy,
    /// Locale whose priority labels are accepted.
    pub locale: TaskLocale,
}

impl TaskCreationConfig {
    /// Creates a configuration that tolerates task store failures.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            storage_policy: StoragePolicy::Lenient,
            locale: TaskLocale::English,
        }
    }

    /// Sets the storage policy.
    #[must_use]
    pub const fn with_storage_policy(mut self, storage_policy: StoragePolicy) -> Self {
        self.storage_policy = storage_policy;
        self
    }

    /// Sets the priority label locale.
    #[must_use]
    pub const fn with_locale(mut self, locale: TaskLocale) -> Self {
        self.locale = locale;
        self
    }
}
