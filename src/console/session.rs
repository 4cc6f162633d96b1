//! Interactive read-evaluate-print loop.

use std::io::{self, BufRead, Write};

use super::{Command, CommandError, render};
use crate::task::{
    ports::{ProjectRepository, TaskIdAllocator, TaskRepository},
    services::{TaskListError, TaskListService},
};

/// Greeting written once when a session starts.
pub const WELCOME: &str = "Welcome to TaskList! Type 'help' for available commands.";

/// Prompt written before each line is read.
pub const PROMPT: &str = "> ";

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Console front end over a shared [`TaskListService`].
pub struct Console<P, T, A>
where
    P: ProjectRepository,
    T: TaskRepository,
    A: TaskIdAllocator,
{
    service: TaskListService<P, T, A>,
}

impl<P, T, A> Console<P, T, A>
where
    P: ProjectRepository,
    T: TaskRepository,
    A: TaskIdAllocator,
{
    /// Creates a console driving `service`.
    #[must_use]
    pub const fn new(service: TaskListService<P, T, A>) -> Self {
        Self { service }
    }

    /// Runs the session until `quit` or end of input.
    ///
    /// Command failures are reported on `output` and the session continues.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when reading `input` or writing `output` fails.
    pub fn run(&self, mut input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        writeln!(output, "{WELCOME}")?;
        let mut buffer = Vec::new();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                tracing::debug!("console input closed");
                break;
            }
            let Ok(line) = std::str::from_utf8(&buffer) else {
                tracing::debug!(bytes = buffer.len(), "rejected non UTF-8 console input");
                writeln!(output, "{}", CommandError::InvalidEncoding)?;
                continue;
            };
            if self.execute(line.trim_end_matches(['\r', '\n']), &mut output)? == Flow::Quit {
                break;
            }
        }
        output.flush()
    }

    fn execute(&self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(err) => {
                tracing::debug!(input = line, error = %err, "rejected console input");
                writeln!(out, "{err}")?;
                return Ok(Flow::Continue);
            }
        };
        if command == Command::Quit {
            return Ok(Flow::Quit);
        }
        if let Err(err) = self.dispatch(command, out) {
            match err {
                DispatchError::Io(io_err) => return Err(io_err),
                DispatchError::Service(service_err) => writeln!(out, "{service_err}")?,
            }
        }
        Ok(Flow::Continue)
    }

    fn dispatch(&self, command: Command, out: &mut impl Write) -> Result<(), DispatchError> {
        match command {
            Command::Show => {
                render::write_tasks_by_project(out, &self.service.tasks_grouped_by_project()?)?;
            }
            Command::ShowByDeadline => {
                render::write_tasks_by_deadline(out, &self.service.tasks_grouped_by_deadline()?)?;
            }
            Command::AddProject { name } => {
                self.service.create_project(&name)?;
            }
            Command::AddTask {
                project,
                description,
            } => {
                self.service.add_task_to_project(&project, &description)?;
            }
            Command::Check(id) => {
                self.service.change_status_on_task(id, true)?;
            }
            Command::Uncheck(id) => {
                self.service.change_status_on_task(id, false)?;
            }
            Command::Deadline { id, date } => {
                self.service.set_deadline_on_task(id, date)?;
            }
            Command::Help => render::write_help(out)?,
            Command::Quit => {}
        }
        Ok(())
    }
}

enum DispatchError {
    Io(io::Error),
    Service(TaskListError),
}

impl From<io::Error> for DispatchError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<TaskListError> for DispatchError {
    fn from(err: TaskListError) -> Self {
        Self::Service(err)
    }
}
