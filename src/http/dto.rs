//! Request and response bodies of the JSON API.
//!
//! Field names are camelCase on the wire; due dates travel as `DD-MM-YYYY`
//! strings.

use serde::{Deserialize, Serialize};

use crate::task::{
    domain::{Deadline, Project, Task, format_due_date},
    services::{ProjectTasks, TasksByDeadline, TasksByProject},
};

// =============================================================================
// Requests
// =============================================================================

/// Body of `POST /projects`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectRequest {
    /// Name of the new project.
    pub name: String,
}

/// Body of `POST /projects/{name}/tasks`.
#[derive(Debug, Clone, Deserialize)]
pub struct AddTaskRequest {
    /// Task description.
    pub description: String,
}

/// Body of `PUT /tasks/{id}/status`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ChangeStatusRequest {
    /// New completion flag.
    pub done: bool,
}

/// Body of `PUT /tasks/{id}/deadline`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetDeadlineRequest {
    /// Due date as `DD-MM-YYYY`.
    pub due_date: String,
}

// =============================================================================
// Responses
// =============================================================================

/// A project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectResponse {
    /// Project name.
    pub name: String,
}

impl From<&Project> for ProjectResponse {
    fn from(project: &Project) -> Self {
        Self {
            name: project.name().as_str().to_owned(),
        }
    }
}

/// A task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Task identifier.
    pub id: u64,
    /// Task description.
    pub description: String,
    /// Completion flag.
    pub done: bool,
    /// Due date as `DD-MM-YYYY`, or `null` when unset.
    pub due_date: Option<String>,
    /// Owning project name.
    pub project: String,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().value(),
            description: task.description().as_str().to_owned(),
            done: task.is_done(),
            due_date: task.due_date().map(format_due_date),
            project: task.project().as_str().to_owned(),
        }
    }
}

/// One entry of `GET /tasks/by-project`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTasksResponse {
    /// Project name.
    pub project: String,
    /// Tasks of the project in creation order.
    pub tasks: Vec<TaskResponse>,
}

impl From<ProjectTasks> for ProjectTasksResponse {
    fn from(group: ProjectTasks) -> Self {
        let (project, tasks) = group.into_parts();
        Self {
            project: project.name().as_str().to_owned(),
            tasks: tasks.iter().map(TaskResponse::from).collect(),
        }
    }
}

/// One entry of `GET /tasks/by-deadline`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineTasksResponse {
    /// Due date as `DD-MM-YYYY`, or `null` for the undated group.
    pub deadline: Option<String>,
    /// Tasks due on that date in creation order.
    pub tasks: Vec<TaskResponse>,
}

impl DeadlineTasksResponse {
    fn new(deadline: Deadline, tasks: &[Task]) -> Self {
        Self {
            deadline: deadline.date().map(format_due_date),
            tasks: tasks.iter().map(TaskResponse::from).collect(),
        }
    }
}

/// Converts the by-project view into its wire form.
#[must_use]
pub fn by_project_response(view: TasksByProject) -> Vec<ProjectTasksResponse> {
    view.into_iter().map(ProjectTasksResponse::from).collect()
}

/// Converts the by-deadline view into its wire form, undated group last.
#[must_use]
pub fn by_deadline_response(view: TasksByDeadline) -> Vec<DeadlineTasksResponse> {
    view.into_iter()
        .map(|(deadline, tasks)| DeadlineTasksResponse::new(deadline, &tasks))
        .collect()
}
