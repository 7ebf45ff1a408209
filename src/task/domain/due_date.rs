//! Calendar due dates in canonical `YYYY-MM-DD` form.

use super::TaskValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar date a task is due, without a time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DueDate(NaiveDate);

impl DueDate {
    /// Parses due date text supplied by a user.
    ///
    /// The text must be exactly `YYYY-MM-DD` with ASCII digits and name a real
    /// calendar day. Surrounding whitespace, other separators, and unpadded
    /// fields are rejected so every accepted input has one canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::MissingOrBlankDueDate`] when the text is
    /// absent or blank, and [`TaskValidationError::InvalidDueDateFormat`] when
    /// it is not a valid date in the expected shape.
    pub fn parse(value: Option<&str>) -> Result<Self, TaskValidationError> {
        let raw = match value {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Err(TaskValidationError::MissingOrBlankDueDate),
        };

        if !has_canonical_shape(raw) {
            return Err(TaskValidationError::InvalidDueDateFormat(raw.to_owned()));
        }

        NaiveDate::parse_from_str(raw, DUE_DATE_FORMAT)
            .map(Self)
            .map_err(|_| TaskValidationError::InvalidDueDateFormat(raw.to_owned()))
    }

    /// Returns the wrapped calendar date.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }
}

/// Checks for `DDDD-DD-DD` with ASCII digits.
fn has_canonical_shape(raw: &str) -> bool {
    raw.len() == 10
        && raw.bytes().enumerate().all(|(position, byte)| match position {
            4 | 7 => byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DUE_DATE_FORMAT))
    }
}
