//! Identifier and validated scalar types for the task domain.

use super::TaskValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier for a persisted task record.
///
/// New identifiers are random UUIDs. Identifiers loaded from storage are kept
/// verbatim, so records written by other tools remain addressable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a new random task identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Human-readable task title.
///
/// The title is stored exactly as supplied; only emptiness is judged on the
/// trimmed value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::EmptyTitle`] when the title is absent or
    /// whitespace-only.
    pub fn new(value: Option<&str>) -> Result<Self, TaskValidationError> {
        match value {
            Some(raw) if !raw.trim().is_empty() => Ok(Self(raw.to_owned())),
            _ => Err(TaskValidationError::EmptyTitle),
        }
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compares two titles ignoring letter case.
    #[must_use]
    pub fn eq_ignore_case(&self, other: &Self) -> bool {
        self.eq_ignore_case_str(&other.0)
    }

    /// Compares the title with raw text ignoring letter case.
    #[must_use]
    pub fn eq_ignore_case_str(&self, other: &str) -> bool {
        self.0
            .chars()
            .flat_map(char::to_lowercase)
            .eq(other.chars().flat_map(char::to_lowercase))
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
