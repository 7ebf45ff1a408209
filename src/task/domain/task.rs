//! Task record and the validated draft it is created from.

use super::{DueDate, Priority, StoredTask, TaskId, TaskLocale, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Completion status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    /// Initial status of every newly created task.
    NotCompleted,
    /// Task has been completed by some other tool.
    Completed,
}

impl TaskStatus {
    const ALL: [Self; 2] = [Self::NotCompleted, Self::Completed];

    /// Returns the English label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        TaskLocale::English.status_label(self)
    }

    /// Resolves a stored status label written in any locale.
    #[must_use]
    pub fn from_stored_label(label: &str) -> Option<Self> {
        TaskLocale::ALL.into_iter().find_map(|locale| {
            Self::ALL
                .into_iter()
                .find(|status| locale.status_label(*status) == label)
        })
    }
}

/// Validated input for a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: TaskTitle,
    description: String,
    due_date: DueDate,
    priority: Priority,
    locale: TaskLocale,
}

impl TaskDraft {
    /// Assembles a draft from validated fields.
    #[must_use]
    pub fn new(
        title: TaskTitle,
        description: impl Into<String>,
        due_date: DueDate,
        priority: Priority,
    ) -> Self {
        Self {
            title,
            description: description.into(),
            due_date,
            priority,
            locale: TaskLocale::default(),
        }
    }

    /// Sets the locale whose labels the created record is stored with.
    #[must_use]
    pub const fn in_locale(mut self, locale: TaskLocale) -> Self {
        self.locale = locale;
        self
    }

    /// Returns the draft title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the draft due date.
    #[must_use]
    pub const fn due_date(&self) -> DueDate {
        self.due_date
    }

    /// Returns `true` when `record` has the same title, ignoring case, and
    /// the same due date.
    #[must_use]
    pub fn is_duplicate_of(&self, record: &TaskRecord) -> bool {
        self.due_date == record.due_date && self.title.eq_ignore_case(&record.title)
    }

    /// Applies the duplicate rule to any stored collection element.
    ///
    /// Unrecognised elements are compared through their raw `title` and
    /// `due_date` strings.
    #[must_use]
    pub fn conflicts_with(&self, entry: &StoredTask) -> bool {
        match entry {
            StoredTask::Record(record) => self.is_duplicate_of(record),
            StoredTask::Foreign(value) => {
                text_field(value, "due_date") == Some(self.due_date.to_string().as_str())
                    && text_field(value, "title")
                        .is_some_and(|title| self.title.eq_ignore_case_str(title))
            }
        }
    }
}

fn text_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

/// Persisted task record.
///
/// Priority and status are written with the labels of the record's locale,
/// which for loaded records is the locale of the stored priority label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "StoredFields", try_from = "StoredFields")]
pub struct TaskRecord {
    id: TaskId,
    title: TaskTitle,
    description: String,
    due_date: DueDate,
    priority: Priority,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    last_updated_at: DateTime<Utc>,
    locale: TaskLocale,
}

/// Keys and label text of the JSON store.
#[derive(Serialize, Deserialize)]
struct StoredFields {
    id: TaskId,
    title: TaskTitle,
    #[serde(default, deserialize_with = "null_as_empty")]
    description: String,
    due_date: DueDate,
    priority: String,
    status: String,
    #[serde(with = "timestamp")]
    created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    last_updated_at: DateTime<Utc>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<TaskRecord> for StoredFields {
    fn from(record: TaskRecord) -> Self {
        Self {
            priority: record.locale.priority_label(record.priority).to_owned(),
            status: record.locale.status_label(record.status).to_owned(),
            id: record.id,
            title: record.title,
            description: record.description,
            due_date: record.due_date,
            created_at: record.created_at,
            last_updated_at: record.last_updated_at,
        }
    }
}

impl TryFrom<StoredFields> for TaskRecord {
    type Error = String;

    fn try_from(fields: StoredFields) -> Result<Self, Self::Error> {
        let (priority, locale) = Priority::from_stored_label(&fields.priority)
            .ok_or_else(|| format!("unknown priority label '{}'", fields.priority))?;
        let status = TaskStatus::from_stored_label(&fields.status)
            .ok_or_else(|| format!("unknown status label '{}'", fields.status))?;
        Ok(Self {
            id: fields.id,
            title: fields.title,
            description: fields.description,
            due_date: fields.due_date,
            priority,
            status,
            created_at: fields.created_at,
            last_updated_at: fields.last_updated_at,
            locale,
        })
    }
}

impl TaskRecord {
    /// Creates a new record from a validated draft.
    ///
    /// The clock is read once so both timestamps are identical.
    #[must_use]
    pub fn create(draft: TaskDraft, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title: draft.title,
            description: draft.description,
            due_date: draft.due_date,
            priority: draft.priority,
            status: TaskStatus::NotCompleted,
            created_at: timestamp,
            last_updated_at: timestamp,
            locale: draft.locale,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the free-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> DueDate {
        self.due_date
    }

    /// Returns the priority level.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the completion status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the locale of the stored labels.
    #[must_use]
    pub const fn locale(&self) -> TaskLocale {
        self.locale
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn last_updated_at(&self) -> DateTime<Utc> {
        self.last_updated_at
    }
}

/// ISO 8601 timestamps.
///
/// Written as RFC 3339 in UTC. Offset-less date-times are read as UTC.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    const LOCAL_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub(super) fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(parsed.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(&raw, LOCAL_DATE_TIME_FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(|err| D::Error::custom(format!("invalid timestamp '{raw}': {err}")))
    }
}
