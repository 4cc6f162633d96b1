//! Project and task tracking for the task list.
//!
//! This module holds the core of the crate: identifier allocation, the
//! project and task stores, and the service producing the by-project and
//! by-deadline views. It follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
