//! Unit tests for task creation.
