//! In-memory task repository.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskChange, TaskId},
    ports::{TaskListRepositoryError, TaskListRepositoryResult, TaskRepository},
};

/// Thread-safe in-memory task repository preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: Vec<Task>,
    // Position of each task in `tasks`.
    id_index: HashMap<TaskId, usize>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn save(&self, task: &Task) -> TaskListRepositoryResult<Task> {
        let mut state = self.state.write().map_err(|err| {
            TaskListRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.id_index.contains_key(&task.id()) {
            return Err(TaskListRepositoryError::DuplicateTask(task.id()));
        }

        let position = state.tasks.len();
        state.id_index.insert(task.id(), position);
        state.tasks.push(task.clone());
        Ok(task.clone())
    }

    fn find_all(&self) -> TaskListRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskListRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.clone())
    }

    fn find_by_id(&self, id: TaskId) -> TaskListRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskListRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .id_index
            .get(&id)
            .and_then(|position| state.tasks.get(*position))
            .cloned())
    }

    fn update(&self, id: TaskId, change: TaskChange) -> TaskListRepositoryResult<Option<Task>> {
        let mut state = self.state.write().map_err(|err| {
            TaskListRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let Some(position) = state.id_index.get(&id).copied() else {
            return Ok(None);
        };

        Ok(state.tasks.get_mut(position).map(|task| {
            task.apply(change);
            task.clone()
        }))
    }
}
