//! Task priority levels.

use super::{TaskLocale, TaskValidationError};
use std::fmt;

/// Priority level of a task.
///
/// Persisted with the label of the record's locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    /// Lowest urgency.
    Low,
    /// Normal urgency.
    Medium,
    /// Highest urgency.
    High,
}

impl Priority {
    /// All priority levels, lowest first.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Resolves a user-supplied label in the given locale.
    ///
    /// Matching is exact and case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::InvalidPriority`] when the label is
    /// absent or is not one of the locale's priority labels.
    pub fn from_label(value: Option<&str>, locale: TaskLocale) -> Result<Self, TaskValidationError> {
        let raw = value.unwrap_or_default();
        Self::ALL
            .into_iter()
            .find(|priority| locale.priority_label(*priority) == raw)
            .ok_or_else(|| TaskValidationError::InvalidPriority {
                value: raw.to_owned(),
                locale,
            })
    }

    /// Finds the priority and locale of a stored label in any locale.
    #[must_use]
    pub fn from_stored_label(label: &str) -> Option<(Self, TaskLocale)> {
        TaskLocale::ALL.into_iter().find_map(|locale| {
            Self::from_label(Some(label), locale)
                .ok()
                .map(|priority| (priority, locale))
        })
    }

    /// Returns the English label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        TaskLocale::English.priority_label(self)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
