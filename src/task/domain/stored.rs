//! Elements of the persisted task collection.

use super::TaskRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One element of the persisted collection.
///
/// Elements that do not decode as a [`TaskRecord`] are kept verbatim so a
/// save writes them back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredTask {
    /// A recognised task record.
    Record(TaskRecord),
    /// Any other JSON value.
    Foreign(Value),
}

impl StoredTask {
    /// Returns the record when the element was recognised.
    #[must_use]
    pub const fn as_record(&self) -> Option<&TaskRecord> {
        match self {
            Self::Record(record) => Some(record),
            Self::Foreign(_) => None,
        }
    }
}

impl From<TaskRecord> for StoredTask {
    fn from(record: TaskRecord) -> Self {
        Self::Record(record)
    }
}
