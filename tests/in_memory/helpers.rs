//! Shared test helpers for in-memory task list integration tests.

use chrono::NaiveDate;
use rstest::fixture;
use tasklist::task::{
    adapters::memory::InMemoryTaskListService,
    domain::{Task, TaskId},
};

/// Provides a fresh task list over empty stores.
#[fixture]
pub fn service() -> InMemoryTaskListService {
    InMemoryTaskListService::in_memory()
}

/// Builds a calendar date for assertions.
///
/// # Errors
///
/// Returns an error when the components do not name a real day.
pub fn date(year: i32, month: u32, day: u32) -> eyre::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| eyre::eyre!("invalid date {year}-{month}-{day}"))
}

/// Creates `project` and adds one task per description, in order.
///
/// # Errors
///
/// Returns an error when any creation step fails.
pub fn seed_project(
    service: &InMemoryTaskListService,
    project: &str,
    descriptions: &[&str],
) -> eyre::Result<Vec<Task>> {
    service.create_project(project)?;
    descriptions
        .iter()
        .map(|description| -> eyre::Result<Task> {
            Ok(service.add_task_to_project(project, description)?)
        })
        .collect()
}

/// Returns the raw identifiers of `tasks`.
pub fn ids(tasks: &[Task]) -> Vec<u64> {
    tasks.iter().map(Task::id).map(TaskId::value).collect()
}
