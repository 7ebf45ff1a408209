//! Shared world state for task creation BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskbook::task::{
    adapters::memory::InMemoryTaskStore,
    domain::TaskRecord,
    services::{TaskCreationError, TaskCreationService},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskCreationService<InMemoryTaskStore, DefaultClock>;

/// Scenario world for task creation behaviour tests.
pub struct TaskWorld {
    pub store: InMemoryTaskStore,
    pub service: TestTaskService,
    pub last_create_result: Option<Result<TaskRecord, TaskCreationError>>,
}

impl TaskWorld {
    /// Creates a world backed by an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let store = InMemoryTaskStore::new();
        let service = TaskCreationService::new(Arc::new(store.clone()), Arc::new(DefaultClock));
        Self {
            store,
            service,
            last_create_result: None,
        }
    }
}

impl Default for TaskWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskWorld {
    TaskWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
