//! Route handlers.
//!
//! Handlers translate between the wire format and [`TaskListService`] calls;
//! every failure leaves as an [`ApiErrorResponse`].

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
};

use super::{
    dto::{
        AddTaskRequest, ChangeStatusRequest, CreateProjectRequest, DeadlineTasksResponse,
        ProjectResponse, ProjectTasksResponse, SetDeadlineRequest, TaskResponse,
        by_deadline_response, by_project_response,
    },
    error::ApiErrorResponse,
};
use crate::task::{
    domain::{TaskId, parse_due_date},
    ports::{ProjectRepository, TaskIdAllocator, TaskRepository},
    services::TaskListService,
};

// =============================================================================
// POST /projects
// =============================================================================

/// Creates a project.
///
/// # Errors
///
/// Responds 400 for a malformed body or blank name and 409 when the name is
/// taken.
pub async fn create_project<P, T, A>(
    State(service): State<TaskListService<P, T, A>>,
    payload: Result<Json<CreateProjectRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ProjectResponse>), ApiErrorResponse>
where
    P: ProjectRepository + 'static,
    T: TaskRepository + 'static,
    A: TaskIdAllocator + 'static,
{
    let Json(request) = payload?;
    let project = service.create_project(&request.name)?;
    Ok((StatusCode::CREATED, Json(ProjectResponse::from(&project))))
}

// =============================================================================
// GET /projects/{name}/tasks
// =============================================================================

/// Lists the tasks of one project.
///
/// # Errors
///
/// Responds 400 when the name does not decode and 404 when the project does
/// not exist.
pub async fn project_tasks<P, T, A>(
    State(service): State<TaskListService<P, T, A>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<TaskResponse>>, ApiErrorResponse>
where
    P: ProjectRepository + 'static,
    T: TaskRepository + 'static,
    A: TaskIdAllocator + 'static,
{
    let Path(name) = path?;
    let tasks = service.tasks_for_project(&name)?;
    Ok(Json(tasks.iter().map(TaskResponse::from).collect()))
}

// =============================================================================
// POST /projects/{name}/tasks
// =============================================================================

/// Adds a task to a project and points `Location` at it.
///
/// # Errors
///
/// Responds 400 for a malformed body or blank description and 404 when the
/// project does not exist.
pub async fn add_task<P, T, A>(
    State(service): State<TaskListService<P, T, A>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<AddTaskRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse>
where
    P: ProjectRepository + 'static,
    T: TaskRepository + 'static,
    A: TaskIdAllocator + 'static,
{
    let Path(name) = path?;
    let Json(request) = payload?;
    let task = service.add_task_to_project(&name, &request.description)?;
    let location = format!("/tasks/{}", task.id());
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(TaskResponse::from(&task)),
    ))
}

// =============================================================================
// GET /tasks/by-project, GET /tasks/by-deadline
// =============================================================================

/// Lists every project with its tasks.
///
/// # Errors
///
/// Responds 500 when the stores fail.
pub async fn tasks_by_project<P, T, A>(
    State(service): State<TaskListService<P, T, A>>,
) -> Result<Json<Vec<ProjectTasksResponse>>, ApiErrorResponse>
where
    P: ProjectRepository + 'static,
    T: TaskRepository + 'static,
    A: TaskIdAllocator + 'static,
{
    let view = service.tasks_grouped_by_project()?;
    Ok(Json(by_project_response(view)))
}

/// Lists tasks grouped by due date, undated tasks last.
///
/// # Errors
///
/// Responds 500 when the stores fail.
pub async fn tasks_by_deadline<P, T, A>(
    State(service): State<TaskListService<P, T, A>>,
) -> Result<Json<Vec<DeadlineTasksResponse>>, ApiErrorResponse>
where
    P: ProjectRepository + 'static,
    T: TaskRepository + 'static,
    A: TaskIdAllocator + 'static,
{
    let view = service.tasks_grouped_by_deadline()?;
    Ok(Json(by_deadline_response(view)))
}

// =============================================================================
// /tasks/{id}
// =============================================================================

/// Returns one task.
///
/// # Errors
///
/// Responds 400 for a non-numeric ID and 404 when the task does not exist.
pub async fn get_task<P, T, A>(
    State(service): State<TaskListService<P, T, A>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<TaskResponse>, ApiErrorResponse>
where
    P: ProjectRepository + 'static,
    T: TaskRepository + 'static,
    A: TaskIdAllocator + 'static,
{
    let Path(raw_id) = path?;
    let id: TaskId = raw_id.parse()?;
    let task = service.find_task(id)?;
    Ok(Json(TaskResponse::from(&task)))
}

/// Checks or unchecks a task.
///
/// # Errors
///
/// Responds 400 for a non-numeric ID or malformed body and 404 when the task
/// does not exist.
pub async fn change_status<P, T, A>(
    State(service): State<TaskListService<P, T, A>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<ChangeStatusRequest>, JsonRejection>,
) -> Result<StatusCode, ApiErrorResponse>
where
    P: ProjectRepository + 'static,
    T: TaskRepository + 'static,
    A: TaskIdAllocator + 'static,
{
    let Path(raw_id) = path?;
    let id: TaskId = raw_id.parse()?;
    let Json(request) = payload?;
    service.change_status_on_task(id, request.done)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Sets the due date of a task.
///
/// # Errors
///
/// Responds 400 for a non-numeric ID, malformed body or invalid date and 404
/// when the task does not exist.
pub async fn set_deadline<P, T, A>(
    State(service): State<TaskListService<P, T, A>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<SetDeadlineRequest>, JsonRejection>,
) -> Result<StatusCode, ApiErrorResponse>
where
    P: ProjectRepository + 'static,
    T: TaskRepository + 'static,
    A: TaskIdAllocator + 'static,
{
    let Path(raw_id) = path?;
    let id: TaskId = raw_id.parse()?;
    let Json(request) = payload?;
    let due_date = parse_due_date(&request.due_date)?;
    service.set_deadline_on_task(id, due_date)?;
    Ok(StatusCode::NO_CONTENT)
}
