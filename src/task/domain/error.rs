//! Error types for task domain validation and parsing.

use super::TaskLocale;
use thiserror::Error;

/// Reasons a task creation request fails field validation.
///
/// Variants are listed in the order the checks run.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskValidationError {
    /// The title is absent or whitespace-only.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The due date is absent or whitespace-only.
    #[error("due date must not be empty")]
    MissingOrBlankDueDate,

    /// The due date is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid due date '{0}', expected a calendar date formatted YYYY-MM-DD")]
    InvalidDueDateFormat(String),

    /// The priority is not one of the locale's labels.
    #[error(
        "invalid priority '{value}', expected one of: {}",
        .locale.priority_labels().join(", ")
    )]
    InvalidPriority {
        /// The rejected label.
        value: String,
        /// Locale the label was checked against.
        locale: TaskLocale,
    },
}

/// Error returned while parsing a locale code.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task locale: {0}")]
pub struct ParseTaskLocaleError(pub String);
