//! JSON file adapter persisting the task collection as one JSON array.

mod store;

pub use store::{DEFAULT_DATABASE_PATH, JsonFileTaskStore};
