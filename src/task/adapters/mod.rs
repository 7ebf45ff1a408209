//! Adapter implementations for the task store port.

pub mod json_file;
pub mod memory;
