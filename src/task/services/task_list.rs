//! Service layer for project and task orchestration.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::NaiveDate;
use thiserror::Error;

use super::{TasksByDeadline, TasksByProject};
use crate::task::{
    domain::{Project, ProjectName, Task, TaskChange, TaskDescription, TaskDomainError, TaskId},
    ports::{ProjectRepository, TaskIdAllocator, TaskListRepositoryError, TaskRepository},
};

/// Service-level errors for task list operations.
///
/// The display text of each variant is the message shown to end users.
#[derive(Debug, Error)]
pub enum TaskListError {
    /// No project carries the requested name.
    #[error("Could not find a project with the name \"{0}\".")]
    ProjectNotFound(String),

    /// No task carries the requested identifier.
    #[error("Could not find a task with an ID of {0}.")]
    TaskNotFound(TaskId),

    /// A project with the requested name already exists.
    #[error("A project with the name \"{0}\" already exists.")]
    DuplicateProject(String),

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskListRepositoryError),
}

/// Result type for task list service operations.
pub type TaskListResult<T> = Result<T, TaskListError>;

/// Orchestrates the project store, the task store and identifier allocation.
///
/// Clones share the same stores, so one instance constructed at start-up can
/// be handed to every adapter.
pub struct TaskListService<P, T, A>
where
    P: ProjectRepository,
    T: TaskRepository,
    A: TaskIdAllocator,
{
    projects: Arc<P>,
    tasks: Arc<T>,
    ids: Arc<A>,
    // Serialises check-then-insert sequences; held across id allocation and
    // append so that store order matches id order.
    creation: Arc<Mutex<()>>,
}

impl<P, T, A> Clone for TaskListService<P, T, A>
where
    P: ProjectRepository,
    T: TaskRepository,
    A: TaskIdAllocator,
{
    fn clone(&self) -> Self {
        Self {
            projects: Arc::clone(&self.projects),
            tasks: Arc::clone(&self.tasks),
            ids: Arc::clone(&self.ids),
            creation: Arc::clone(&self.creation),
        }
    }
}

impl<P, T, A> TaskListService<P, T, A>
where
    P: ProjectRepository,
    T: TaskRepository,
    A: TaskIdAllocator,
{
    /// Creates a new task list service over the given stores.
    #[must_use]
    pub fn new(projects: Arc<P>, tasks: Arc<T>, ids: Arc<A>) -> Self {
        Self {
            projects,
            tasks,
            ids,
            creation: Arc::new(Mutex::new(())),
        }
    }

    /// Creates a project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Domain`] when the name is blank,
    /// [`TaskListError::DuplicateProject`] when the name is taken, or
    /// [`TaskListError::Repository`] when persistence fails.
    pub fn create_project(&self, name: &str) -> TaskListResult<Project> {
        let project_name = ProjectName::new(name)?;
        let _guard = self.creation_guard()?;
        if self.projects.find_by_name(&project_name)?.is_some() {
            return Err(TaskListError::DuplicateProject(name.to_owned()));
        }

        let project = Project::new(project_name);
        self.projects.save(&project)?;
        tracing::info!(project = %project.name(), "project created");
        Ok(project)
    }

    /// Adds an open task without a due date to the named project.
    ///
    /// The project lookup happens before an identifier is allocated, so a
    /// failed call never consumes one.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::ProjectNotFound`] when no project has the
    /// name, [`TaskListError::Domain`] when the description is blank, or
    /// [`TaskListError::Repository`] when persistence fails.
    pub fn add_task_to_project(
        &self,
        project_name: &str,
        description: &str,
    ) -> TaskListResult<Task> {
        let _guard = self.creation_guard()?;
        let project = self.find_project(project_name)?;
        let task_description = TaskDescription::new(description)?;

        let task = Task::new(
            self.ids.next_id(),
            project.name().clone(),
            task_description,
        );
        let stored = self.tasks.save(&task)?;
        tracing::info!(task_id = %stored.id(), project = %stored.project(), "task created");
        Ok(stored)
    }

    /// Marks a task as done or not done. Repeating the same value is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::TaskNotFound`] when no task has the
    /// identifier, or [`TaskListError::Repository`] when persistence fails.
    pub fn change_status_on_task(&self, id: TaskId, done: bool) -> TaskListResult<Task> {
        let task = self.update_task(id, TaskChange::Status(done))?;
        tracing::debug!(task_id = %id, done, "task status changed");
        Ok(task)
    }

    /// Sets or replaces the due date of a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::TaskNotFound`] when no task has the
    /// identifier, or [`TaskListError::Repository`] when persistence fails.
    pub fn set_deadline_on_task(&self, id: TaskId, due_date: NaiveDate) -> TaskListResult<Task> {
        let task = self.update_task(id, TaskChange::DueDate(due_date))?;
        tracing::debug!(task_id = %id, %due_date, "task deadline set");
        Ok(task)
    }

    /// Returns a snapshot of a single task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::TaskNotFound`] when no task has the
    /// identifier, or [`TaskListError::Repository`] when persistence fails.
    pub fn find_task(&self, id: TaskId) -> TaskListResult<Task> {
        self.tasks
            .find_by_id(id)?
            .ok_or(TaskListError::TaskNotFound(id))
    }

    /// Returns the tasks of one project in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::ProjectNotFound`] when no project has the
    /// name, or [`TaskListError::Repository`] when persistence fails.
    pub fn tasks_for_project(&self, project_name: &str) -> TaskListResult<Vec<Task>> {
        let _guard = self.creation_guard()?;
        let project = self.find_project(project_name)?;
        Ok(self
            .tasks
            .find_all()?
            .into_iter()
            .filter(|task| task.project() == project.name())
            .collect())
    }

    /// Returns every project with its tasks, both in creation order.
    ///
    /// Both stores are read under the creation lock, so the view never holds
    /// a task without its project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Repository`] when persistence fails.
    pub fn tasks_grouped_by_project(&self) -> TaskListResult<TasksByProject> {
        let _guard = self.creation_guard()?;
        let projects = self.projects.find_all()?;
        let tasks = self.tasks.find_all()?;
        Ok(TasksByProject::group(projects, tasks))
    }

    /// Returns every task grouped by due date, undated tasks last.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Repository`] when persistence fails.
    pub fn tasks_grouped_by_deadline(&self) -> TaskListResult<TasksByDeadline> {
        Ok(TasksByDeadline::group(self.tasks.find_all()?))
    }

    fn find_project(&self, name: &str) -> TaskListResult<Project> {
        let not_found = || TaskListError::ProjectNotFound(name.to_owned());
        // A blank name can never have been stored.
        let project_name = ProjectName::new(name).map_err(|_| not_found())?;
        self.projects
            .find_by_name(&project_name)?
            .ok_or_else(not_found)
    }

    fn update_task(&self, id: TaskId, change: TaskChange) -> TaskListResult<Task> {
        self.tasks.update(id, change)?.ok_or_else(|| {
            tracing::warn!(task_id = %id, "task not found");
            TaskListError::TaskNotFound(id)
        })
    }

    fn creation_guard(&self) -> TaskListResult<MutexGuard<'_, ()>> {
        self.creation.lock().map_err(|err| {
            TaskListError::Repository(TaskListRepositoryError::persistence(
                std::io::Error::other(err.to_string()),
            ))
        })
    }
}
