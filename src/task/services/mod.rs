//! Application services for task list orchestration.

mod task_list;
mod views;

pub use task_list::{TaskListError, TaskListResult, TaskListService};
pub use views::{ProjectTasks, TasksByDeadline, TasksByProject};
