//! Port contracts for the task list.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod identity;
pub mod repository;

pub use identity::TaskIdAllocator;
pub use repository::{
    ProjectRepository, TaskListRepositoryError, TaskListRepositoryResult, TaskRepository,
};

#[cfg(test)]
pub use identity::MockTaskIdAllocator;
#[cfg(test)]
pub use repository::{MockProjectRepository, MockTaskRepository};
