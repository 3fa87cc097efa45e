//! Chat-style session over one task store.
//!
//! # Responsibility
//! - Load the task list once and keep it authoritative for the session.
//! - Answer each input line with reply text, turning every failure into text.
//!
//! # Invariants
//! - `respond` never fails and never panics on user input.
//! - Lines are handled strictly one at a time through `&mut self`.

use crate::command::{parse, reply, CommandOutcome};
use crate::model::task_list::TaskList;
use crate::storage::{SkippedLine, StorageError, TaskStore};
use log::{info, warn};

/// Name used in the greeting when none is configured.
pub const DEFAULT_ASSISTANT_NAME: &str = "Duke";

/// Text answer to one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// `true` after `bye`; the front end should stop reading input.
    pub is_exit: bool,
    /// The line did not parse or could not be executed; `text` says why.
    pub failed: bool,
}

impl From<CommandOutcome> for Reply {
    fn from(outcome: CommandOutcome) -> Self {
        Self {
            text: outcome.message,
            is_exit: outcome.is_exit,
            failed: false,
        }
    }
}

/// One user conversation against a task store.
pub struct Session<S: TaskStore> {
    store: S,
    tasks: TaskList,
    assistant_name: String,
    loading_notice: Option<String>,
    skipped: Vec<SkippedLine>,
}

impl<S: TaskStore> Session<S> {
    /// Opens a session, starting empty when the store cannot be loaded.
    pub fn open(store: S) -> Self {
        let (tasks, skipped, loading_notice) = match store.load() {
            Ok(loaded) => (loaded.tasks, loaded.skipped, None),
            Err(err) => {
                warn!("event=session_open module=service status=empty reason={err}");
                (TaskList::new(), Vec::new(), Some(loading_notice(&err)))
            }
        };
        info!(
            "event=session_open module=service status=ok count={} skipped={}",
            tasks.len(),
            skipped.len()
        );

        Self {
            store,
            tasks,
            assistant_name: DEFAULT_ASSISTANT_NAME.to_string(),
            loading_notice,
            skipped,
        }
    }

    /// Replaces the name used in [`Session::greeting`].
    pub fn with_assistant_name(mut self, name: impl Into<String>) -> Self {
        self.assistant_name = name.into();
        self
    }

    pub fn greeting(&self) -> String {
        reply::greeting(&self.assistant_name)
    }

    /// Notice to show when the saved list could not be loaded.
    pub fn loading_notice(&self) -> Option<&str> {
        self.loading_notice.as_deref()
    }

    /// Persisted lines dropped while loading.
    pub fn skipped_lines(&self) -> &[SkippedLine] {
        &self.skipped
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Parses and executes one input line.
    pub fn respond(&mut self, input: &str) -> Reply {
        let command = match parse(input) {
            Ok(command) => command,
            Err(err) => return failure(err.to_string()),
        };
        match command.execute(&mut self.tasks, &self.store) {
            Ok(outcome) => outcome.into(),
            Err(err) => failure(err.to_string()),
        }
    }
}

fn failure(text: String) -> Reply {
    Reply {
        text,
        is_exit: false,
        failed: true,
    }
}

fn loading_notice(err: &StorageError) -> String {
    match err {
        StorageError::NotFound(_) => {
            "Error loading file. No saved tasks found, starting with an empty list.".to_string()
        }
        StorageError::Io { .. } => {
            format!("Error loading file: {err}. Starting with an empty list.")
        }
    }
}
