//! In-memory adapters for task creation tests and embedding.

mod task;

pub use task::InMemoryTaskStore;
