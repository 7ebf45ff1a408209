//! Taskbook: single-user task tracking over a flat JSON file.
//!
//! The crate validates new task records, rejects duplicates, and appends
//! accepted records to a JSON array file acting as a small database.
//!
//! # Architecture
//!
//! Taskbook follows hexagonal architecture principles:
//!
//! - **Domain**: Pure validation and record shaping with no storage
//!   dependencies
//! - **Ports**: Abstract trait interfaces for loading and saving tasks
//! - **Adapters**: Concrete implementations of ports (JSON file, memory)
//!
//! # Modules
//!
//! - [`task`]: Task creation pipeline, storage port, and adapters

pub mod task;
