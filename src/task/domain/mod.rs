//! Domain model for the task list.
//!
//! Projects group tasks; tasks carry a completion flag and an optional due
//! date. All storage and presentation concerns stay outside this boundary.

mod deadline;
mod error;
mod ids;
mod project;
mod task;

pub use deadline::{DUE_DATE_FORMAT, Deadline, format_due_date, parse_due_date};
pub use error::{ParseTaskIdError, TaskDomainError};
pub use ids::{ProjectName, TaskDescription, TaskId};
pub use project::Project;
pub use task::{Task, TaskChange};
