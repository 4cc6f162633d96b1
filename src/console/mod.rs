//! Line-oriented console over the task list service.
//!
//! Each input line is parsed into a [`Command`], applied to the shared
//! service, and answered on the output stream. Malformed input and domain
//! failures produce a single diagnostic line; only I/O failures end the
//! session early.

mod command;
mod error;
pub mod render;
mod session;

pub use command::Command;
pub use error::CommandError;
pub use session::{Console, PROMPT, WELCOME};

#[cfg(test)]
mod tests;
