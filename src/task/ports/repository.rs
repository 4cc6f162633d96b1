//! Repository ports for project and task storage.

use crate::task::domain::{Project, ProjectName, Task, TaskChange, TaskId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for project and task repository operations.
pub type TaskListRepositoryResult<T> = Result<T, TaskListRepositoryError>;

/// Project storage contract.
///
/// Implementations keep projects in insertion order. Name uniqueness is
/// enforced by the service, not here.
#[cfg_attr(test, mockall::automock)]
pub trait ProjectRepository: Send + Sync {
    /// Appends a project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::Persistence`] when the store is
    /// unusable.
    fn save(&self, project: &Project) -> TaskListRepositoryResult<()>;

    /// Returns every project in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::Persistence`] when the store is
    /// unusable.
    fn find_all(&self) -> TaskListRepositoryResult<Vec<Project>>;

    /// Finds the first project with exactly the given name.
    ///
    /// Returns `None` when no project has the name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::Persistence`] when the store is
    /// unusable.
    fn find_by_name(&self, name: &ProjectName) -> TaskListRepositoryResult<Option<Project>>;
}

/// Task storage contract.
///
/// Implementations keep tasks in insertion order and apply changes to the
/// stored task atomically with respect to concurrent readers and writers.
#[cfg_attr(test, mockall::automock)]
pub trait TaskRepository: Send + Sync {
    /// Appends a task and returns the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::DuplicateTask`] when a task with the
    /// same identifier is already stored.
    fn save(&self, task: &Task) -> TaskListRepositoryResult<Task>;

    /// Returns every task in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::Persistence`] when the store is
    /// unusable.
    fn find_all(&self) -> TaskListRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::Persistence`] when the store is
    /// unusable.
    fn find_by_id(&self, id: TaskId) -> TaskListRepositoryResult<Option<Task>>;

    /// Applies `change` to the stored task and returns the updated value.
    ///
    /// Returns `None`, leaving every task untouched, when the task does not
    /// exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::Persistence`] when the store is
    /// unusable.
    fn update(&self, id: TaskId, change: TaskChange) -> TaskListRepositoryResult<Option<Task>>;
}

/// Errors returned by project and task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskListRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskListRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
