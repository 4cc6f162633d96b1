//! Adapter implementations of the task list ports.

pub mod memory;
