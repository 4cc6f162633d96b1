//! Task aggregate root and the changes it accepts after creation.

use super::{Deadline, ProjectName, TaskDescription, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Mutation applied to a stored task.
///
/// Identity, description and owning project are fixed at creation; only the
/// completion flag and the due date change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskChange {
    /// Sets the completion flag.
    Status(bool),
    /// Replaces the due date.
    DueDate(NaiveDate),
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    description: TaskDescription,
    done: bool,
    due_date: Option<NaiveDate>,
    project: ProjectName,
}

impl Task {
    /// Creates an open task without a due date.
    #[must_use]
    pub const fn new(id: TaskId, project: ProjectName, description: TaskDescription) -> Self {
        Self {
            id,
            description,
            done: false,
            due_date: None,
            project,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns `true` once the task has been checked off.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Returns the due date, if one was set.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the name of the owning project.
    #[must_use]
    pub const fn project(&self) -> &ProjectName {
        &self.project
    }

    /// Returns the by-deadline grouping key for this task.
    #[must_use]
    pub fn deadline(&self) -> Deadline {
        Deadline::from(self.due_date)
    }

    /// Applies a status or due-date change in place.
    pub const fn apply(&mut self, change: TaskChange) {
        match change {
            TaskChange::Status(done) => self.done = done,
            TaskChange::DueDate(date) => self.due_date = Some(date),
        }
    }
}
