//! Port contracts for task creation.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod store;

pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
