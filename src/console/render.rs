//! Text rendering of the task list views.

use std::io::{self, Write};

use crate::task::{
    domain::Task,
    services::{TasksByDeadline, TasksByProject},
};

const HELP_LINES: &[&str] = &[
    "Commands:",
    "  show",
    "  show-by-deadline",
    "  add project <project name>",
    "  add task <project name> <task description>",
    "  deadline <ID> <date (format: DD-MM-YYYY)>",
    "  check <task ID>",
    "  uncheck <task ID>",
    "  help",
    "  quit",
];

/// Writes every project followed by its tasks and a blank line.
///
/// # Errors
///
/// Propagates failures from `out`.
pub fn write_tasks_by_project(out: &mut impl Write, view: &TasksByProject) -> io::Result<()> {
    for group in view {
        writeln!(out, "{}", group.project().name())?;
        for task in group.tasks() {
            let mark = if task.is_done() { 'x' } else { ' ' };
            writeln!(out, "    [{mark}] {}: {}", task.id(), task.description())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Writes each due-date group under a `DD-MM-YYYY:` or `No deadline:` header.
///
/// Nothing is written for an empty view.
///
/// # Errors
///
/// Propagates failures from `out`.
pub fn write_tasks_by_deadline(out: &mut impl Write, view: &TasksByDeadline) -> io::Result<()> {
    if view.is_empty() {
        return Ok(());
    }
    for (deadline, tasks) in view.iter() {
        writeln!(out, "{deadline}:")?;
        tasks
            .iter()
            .try_for_each(|task| write_deadline_entry(out, task))?;
    }
    writeln!(out)
}

fn write_deadline_entry(out: &mut impl Write, task: &Task) -> io::Result<()> {
    writeln!(out, "       {}: {}", task.id(), task.description())
}

/// Writes the command summary.
///
/// # Errors
///
/// Propagates failures from `out`.
pub fn write_help(out: &mut impl Write) -> io::Result<()> {
    for line in HELP_LINES {
        writeln!(out, "{line}")?;
    }
    writeln!(out)
}
