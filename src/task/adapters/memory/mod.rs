//! In-memory adapter implementations.
//!
//! State lives for the process lifetime only; each store guards its data with
//! a single read-write lock.

mod project;
mod sequence;
mod task;

pub use project::InMemoryProjectRepository;
pub use sequence::SequentialTaskIdAllocator;
pub use task::InMemoryTaskRepository;

use crate::task::services::TaskListService;
use std::sync::Arc;

/// Task list service wired to the in-memory stores.
pub type InMemoryTaskListService =
    TaskListService<InMemoryProjectRepository, InMemoryTaskRepository, SequentialTaskIdAllocator>;

impl InMemoryTaskListService {
    /// Creates a service over fresh, empty in-memory stores.
    #[must_use]
    pub fn in_memory() -> Self {
        TaskListService::new(
            Arc::new(InMemoryProjectRepository::new()),
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(SequentialTaskIdAllocator::new()),
        )
    }
}
