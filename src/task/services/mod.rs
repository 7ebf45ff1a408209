//! Application services for task creation.

mod config;
mod creation;

pub use config::{StoragePolicy, TaskCreationConfig};
pub use creation::{
    CreateTaskRequest, TaskCreationError, TaskCreationResult, TaskCreationService,
};
