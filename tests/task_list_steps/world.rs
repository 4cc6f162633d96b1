//! Shared world state for task list BDD scenarios.

use rstest::fixture;
use tasklist::task::{adapters::memory::InMemoryTaskListService, services::TaskListError};

/// Scenario world for task list behaviour tests.
pub struct TaskListWorld {
    pub service: InMemoryTaskListService,
    pub last_error: Option<TaskListError>,
}

impl TaskListWorld {
    /// Creates a world over an empty task list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: InMemoryTaskListService::in_memory(),
            last_error: None,
        }
    }

    /// Records the failure of the last operation, if any.
    pub fn record<T>(&mut self, result: Result<T, TaskListError>) {
        self.last_error = result.err();
    }
}

impl Default for TaskListWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskListWorld {
    TaskListWorld::default()
}
