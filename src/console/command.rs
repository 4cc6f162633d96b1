//! Console command grammar.

use chrono::NaiveDate;

use super::CommandError;
use crate::task::domain::{TaskId, parse_due_date};

const ADD_USAGE: &str = "add project <project name> | add task <project name> <task description>";
const ADD_PROJECT_USAGE: &str = "add project <project name>";
const ADD_TASK_USAGE: &str = "add task <project name> <task description>";
const CHECK_USAGE: &str = "check <task ID>";
const UNCHECK_USAGE: &str = "uncheck <task ID>";
const DEADLINE_USAGE: &str = "deadline <ID> <date (format: DD-MM-YYYY)>";

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `show`: tasks grouped by project.
    Show,
    /// `show-by-deadline`: tasks grouped by due date.
    ShowByDeadline,
    /// `add project <name>`.
    AddProject {
        /// Project name; may contain spaces.
        name: String,
    },
    /// `add task <project> <description>`.
    AddTask {
        /// Owning project name; the first word after `task`.
        project: String,
        /// Remainder of the line.
        description: String,
    },
    /// `check <id>`.
    Check(TaskId),
    /// `uncheck <id>`.
    Uncheck(TaskId),
    /// `deadline <id> <DD-MM-YYYY>`.
    Deadline {
        /// Task to update.
        id: TaskId,
        /// New due date.
        date: NaiveDate,
    },
    /// `help`.
    Help,
    /// `quit`.
    Quit,
}

impl Command {
    /// Parses one console line.
    ///
    /// The command word is separated from its arguments by the first space;
    /// `add task` takes the project as one word and the rest of the line as
    /// the description.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] when the command is unknown or its arguments
    /// are missing or malformed.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let (word, rest) = split_word(line.trim());
        match word {
            "show" => Ok(Self::Show),
            "show-by-deadline" => Ok(Self::ShowByDeadline),
            "help" => Ok(Self::Help),
            "quit" => Ok(Self::Quit),
            "add" => parse_add(rest),
            "check" => parse_task_id(rest, "check", CHECK_USAGE).map(Self::Check),
            "uncheck" => parse_task_id(rest, "uncheck", UNCHECK_USAGE).map(Self::Uncheck),
            "deadline" => parse_deadline(rest),
            other => Err(CommandError::UnknownCommand(other.to_owned())),
        }
    }
}

/// Splits off the first space-delimited word; the remainder may be empty.
fn split_word(input: &str) -> (&str, &str) {
    input
        .split_once(' ')
        .map_or((input, ""), |(word, rest)| (word, rest.trim_start()))
}

fn parse_add(arguments: &str) -> Result<Command, CommandError> {
    let (target, rest) = split_word(arguments);
    match target {
        "" => Err(CommandError::MissingArguments {
            command: "add",
            usage: ADD_USAGE,
        }),
        "project" if rest.is_empty() => Err(CommandError::MissingArguments {
            command: "add project",
            usage: ADD_PROJECT_USAGE,
        }),
        "project" => Ok(Command::AddProject {
            name: rest.to_owned(),
        }),
        "task" => {
            let (project, description) = split_word(rest);
            if project.is_empty() || description.is_empty() {
                return Err(CommandError::MissingArguments {
                    command: "add task",
                    usage: ADD_TASK_USAGE,
                });
            }
            Ok(Command::AddTask {
                project: project.to_owned(),
                description: description.to_owned(),
            })
        }
        other => Err(CommandError::UnknownAddTarget(other.to_owned())),
    }
}

fn parse_task_id(
    raw: &str,
    command: &'static str,
    usage: &'static str,
) -> Result<TaskId, CommandError> {
    if raw.is_empty() {
        return Err(CommandError::MissingArguments { command, usage });
    }
    raw.parse::<TaskId>()
        .map_err(|_| CommandError::InvalidTaskId(raw.to_owned()))
}

fn parse_deadline(arguments: &str) -> Result<Command, CommandError> {
    let (raw_id, raw_date) = split_word(arguments);
    if raw_id.is_empty() || raw_date.is_empty() {
        return Err(CommandError::MissingArguments {
            command: "deadline",
            usage: DEADLINE_USAGE,
        });
    }
    let id = parse_task_id(raw_id, "deadline", DEADLINE_USAGE)?;
    let date =
        parse_due_date(raw_date).map_err(|_| CommandError::InvalidDate(raw_date.to_owned()))?;
    Ok(Command::Deadline { id, date })
}
