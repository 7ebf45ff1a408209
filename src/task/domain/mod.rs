//! Domain model for task creation.
//!
//! The domain validates user-supplied task fields and shapes persisted task
//! records while keeping storage concerns outside of the domain boundary.

mod due_date;
mod error;
mod ids;
mod locale;
mod priority;
mod stored;
mod task;

pub use due_date::DueDate;
pub use error::{ParseTaskLocaleError, TaskValidationError};
pub use ids::{TaskId, TaskTitle};
pub use locale::TaskLocale;
pub use priority::Priority;
pub use stored::StoredTask;
pub use task::{TaskDraft, TaskRecord, TaskStatus};
