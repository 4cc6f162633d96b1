//! Error types for console command parsing.

use thiserror::Error;

/// Malformed console input. Each variant renders as one diagnostic line.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The command word is not recognised.
    #[error("I don't know what the command \"{0}\" is.")]
    UnknownCommand(String),

    /// The command lacks one or more arguments.
    #[error("Missing arguments for \"{command}\". Usage: {usage}")]
    MissingArguments {
        /// Command word as typed.
        command: &'static str,
        /// Usage line for the command.
        usage: &'static str,
    },

    /// `add` was followed by something other than `project` or `task`.
    #[error("I don't know how to add \"{0}\". Use \"add project\" or \"add task\".")]
    UnknownAddTarget(String),

    /// The task identifier is not a number.
    #[error("Invalid task ID \"{0}\".")]
    InvalidTaskId(String),

    /// The date does not follow `DD-MM-YYYY`.
    #[error("Invalid date \"{0}\", expected DD-MM-YYYY.")]
    InvalidDate(String),

    /// The line is not valid UTF-8.
    #[error("Could not read the command: input is not valid UTF-8.")]
    InvalidEncoding,
}
