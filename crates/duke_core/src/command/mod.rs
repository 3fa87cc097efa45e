//! Executable user commands.
//!
//! # Responsibility
//! - Define the closed set of commands produced by the parser.
//! - Apply one command to the task list and persist mutations.
//!
//! # Invariants
//! - Mutation and save both finish before `execute` returns its reply.
//! - A failed command leaves the list unchanged.
//! - Save failures never fail the command; they are appended to the reply.

use crate::model::datetime::TaskDateTime;
use crate::model::task::{Task, TaskValidationError};
use crate::model::task_list::TaskList;
use crate::storage::TaskStore;
use log::{debug, error};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod parser;
pub mod reply;

pub use parser::{parse, ParseError};

/// One parsed user instruction. Task numbers are stored 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddTodo {
        description: String,
    },
    AddDeadline {
        description: String,
        by: TaskDateTime,
    },
    AddEvent {
        description: String,
        from: TaskDateTime,
        to: TaskDateTime,
    },
    List,
    Mark(i64),
    Unmark(i64),
    Delete(i64),
    Find {
        keyword: String,
    },
    Exit,
}

/// Reply produced by a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub message: String,
    /// Set only by `Command::Exit`; the caller stops its input loop.
    pub is_exit: bool,
}

impl CommandOutcome {
    fn reply(message: String) -> Self {
        Self {
            message,
            is_exit: false,
        }
    }
}

/// Command that parsed but cannot run against the current list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    InvalidTaskNumber { index: i64, size: usize },
    InvalidTask(TaskValidationError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTaskNumber { .. } => write!(f, "Invalid task number."),
            Self::InvalidTask(err) => write!(f, "Invalid task: {err}."),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidTaskNumber { .. } => None,
            Self::InvalidTask(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for CommandError {
    fn from(value: TaskValidationError) -> Self {
        Self::InvalidTask(value)
    }
}

impl Command {
    /// Stable name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddTodo { .. } => "todo",
            Self::AddDeadline { .. } => "deadline",
            Self::AddEvent { .. } => "event",
            Self::List => "list",
            Self::Mark(_) => "mark",
            Self::Unmark(_) => "unmark",
            Self::Delete(_) => "delete",
            Self::Find { .. } => "find",
            Self::Exit => "bye",
        }
    }

    /// Runs this command against `tasks`, saving through `store` after mutations.
    pub fn execute<S>(
        &self,
        tasks: &mut TaskList,
        store: &S,
    ) -> Result<CommandOutcome, CommandError>
    where
        S: TaskStore + ?Sized,
    {
        let outcome = match self {
            Self::AddTodo { description } => {
                add_task(tasks, store, Task::todo(description.as_str())?)
            }
            Self::AddDeadline { description, by } => {
                add_task(tasks, store, Task::deadline(description.as_str(), *by)?)
            }
            Self::AddEvent {
                description,
                from,
                to,
            } => add_task(
                tasks,
                store,
                Task::event(description.as_str(), *from, *to)?,
            ),
            Self::List => CommandOutcome::reply(reply::task_list(tasks.iter())),
            Self::Mark(index) => {
                let task = task_at(tasks, *index)?;
                task.mark_done();
                let message = reply::task_marked(task);
                CommandOutcome::reply(persist(tasks, store, message))
            }
            Self::Unmark(index) => {
                let task = task_at(tasks, *index)?;
                task.mark_not_done();
                let message = reply::task_unmarked(task);
                CommandOutcome::reply(persist(tasks, store, message))
            }
            Self::Delete(index) => {
                let position = resolve_index(*index, tasks)?;
                let removed = tasks
                    .remove(position)
                    .ok_or_else(|| invalid_number(*index, tasks))?;
                let message = reply::task_removed(&removed, tasks.len());
                CommandOutcome::reply(persist(tasks, store, message))
            }
            Self::Find { keyword } => {
                CommandOutcome::reply(reply::find_results(tasks.find(keyword)))
            }
            Self::Exit => CommandOutcome {
                message: reply::goodbye(),
                is_exit: true,
            },
        };

        debug!(
            "event=command_execute module=command status=ok command={} size={}",
            self.name(),
            tasks.len()
        );
        Ok(outcome)
    }
}

fn add_task<S>(tasks: &mut TaskList, store: &S, task: Task) -> CommandOutcome
where
    S: TaskStore + ?Sized,
{
    let message = reply::task_added(&task, tasks.len() + 1);
    tasks.add(task);
    CommandOutcome::reply(persist(tasks, store, message))
}

/// Saves `tasks`; a failure is logged and appended to `message`.
fn persist<S>(tasks: &TaskList, store: &S, message: String) -> String
where
    S: TaskStore + ?Sized,
{
    match store.save(tasks) {
        Ok(()) => message,
        Err(err) => {
            error!("event=task_save module=command status=error error={err}");
            format!("{message}\n{}", reply::save_failed(&err))
        }
    }
}

fn resolve_index(index: i64, tasks: &TaskList) -> Result<usize, CommandError> {
    usize::try_from(index)
        .ok()
        .filter(|position| *position < tasks.len())
        .ok_or_else(|| invalid_number(index, tasks))
}

fn task_at(tasks: &mut TaskList, index: i64) -> Result<&mut Task, CommandError> {
    let position = resolve_index(index, tasks)?;
    let size = tasks.len();
    tasks
        .get_mut(position)
        .ok_or(CommandError::InvalidTaskNumber { index, size })
}

fn invalid_number(index: i64, tasks: &TaskList) -> CommandError {
    CommandError::InvalidTaskNumber {
        index,
        size: tasks.len(),
    }
}
