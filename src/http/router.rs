//! Route table.

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use super::handlers::{
    add_task, change_status, create_project, get_task, project_tasks, set_deadline,
    tasks_by_deadline, tasks_by_project,
};
use crate::task::{
    ports::{ProjectRepository, TaskIdAllocator, TaskRepository},
    services::TaskListService,
};

/// Builds the API router over a shared service.
#[must_use]
pub fn router<P, T, A>(service: TaskListService<P, T, A>) -> Router
where
    P: ProjectRepository + 'static,
    T: TaskRepository + 'static,
    A: TaskIdAllocator + 'static,
{
    Router::new()
        .route("/projects", post(create_project::<P, T, A>))
        .route(
            "/projects/{name}/tasks",
            get(project_tasks::<P, T, A>).post(add_task::<P, T, A>),
        )
        .route("/tasks/by-project", get(tasks_by_project::<P, T, A>))
        .route("/tasks/by-deadline", get(tasks_by_deadline::<P, T, A>))
        .route("/tasks/{id}", get(get_task::<P, T, A>))
        .route("/tasks/{id}/status", put(change_status::<P, T, A>))
        .route("/tasks/{id}/deadline", put(set_deadline::<P, T, A>))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
