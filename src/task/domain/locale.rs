//! Display locales for user-supplied task labels.

use super::{ParseTaskLocaleError, Priority, TaskStatus};
use std::fmt;
use std::str::FromStr;

/// Locale of the priority and status labels a task is read and written with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TaskLocale {
    /// `Low`, `Medium`, `High`.
    #[default]
    English,
    /// `Thấp`, `Trung bình`, `Cao`.
    Vietnamese,
}

impl TaskLocale {
    /// Every supported locale, default first.
    pub const ALL: [Self; 2] = [Self::English, Self::Vietnamese];

    /// Returns the short locale code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Vietnamese => "vi",
        }
    }

    /// Returns the label for `priority` in this locale.
    #[must_use]
    pub const fn priority_label(self, priority: Priority) -> &'static str {
        match (self, priority) {
            (Self::English, Priority::Low) => "Low",
            (Self::English, Priority::Medium) => "Medium",
            (Self::English, Priority::High) => "High",
            (Self::Vietnamese, Priority::Low) => "Thấp",
            (Self::Vietnamese, Priority::Medium) => "Trung bình",
            (Self::Vietnamese, Priority::High) => "Cao",
        }
    }

    /// Returns the label for `status` in this locale.
    #[must_use]
    pub const fn status_label(self, status: TaskStatus) -> &'static str {
        match (self, status) {
            (Self::English, TaskStatus::NotCompleted) => "Not completed",
            (Self::English, TaskStatus::Completed) => "Completed",
            (Self::Vietnamese, TaskStatus::NotCompleted) => "Chưa hoàn thành",
            (Self::Vietnamese, TaskStatus::Completed) => "Đã hoàn thành",
        }
    }

    /// Returns every priority label of this locale, lowest first.
    #[must_use]
    pub fn priority_labels(self) -> [&'static str; 3] {
        Priority::ALL.map(|priority| self.priority_label(priority))
    }
}

impl fmt::Display for TaskLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TaskLocale {
    type Err = ParseTaskLocaleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "vi" | "vietnamese" => Ok(Self::Vietnamese),
            _ => Err(ParseTaskLocaleError(value.to_owned())),
        }
    }
}
