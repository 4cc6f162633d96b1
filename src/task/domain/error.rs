//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyTaskDescription,

    /// The due date does not follow `DD-MM-YYYY` or is not a calendar date.
    #[error("invalid due date '{0}', expected DD-MM-YYYY")]
    InvalidDueDate(String),
}

/// Error returned while parsing task identifiers from user input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid task ID '{0}', expected a number")]
pub struct ParseTaskIdError(pub String);
