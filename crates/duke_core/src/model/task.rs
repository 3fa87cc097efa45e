//! Task domain record.
//!
//! # Responsibility
//! - Model the three task variants (todo, deadline, event) as one tagged record.
//! - Render tasks into the user-facing `[T][X] description` form.
//!
//! # Invariants
//! - `description` is non-empty, single-line and free of the record separator.
//! - Only `done` changes after construction.

use crate::model::datetime::{format_display, TaskDateTime};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Field separator of persisted task records; descriptions may not contain it.
pub const RECORD_SEPARATOR: &str = " | ";

/// Variant-specific part of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Plain task without any date.
    Todo,
    /// Task due at `by`.
    Deadline { by: TaskDateTime },
    /// Task running from `from` to `to`; the order of the two is not checked.
    Event { from: TaskDateTime, to: TaskDateTime },
}

impl TaskKind {
    /// One-letter type code shared by rendering and storage.
    pub fn code(&self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline { .. } => 'D',
            Self::Event { .. } => 'E',
        }
    }
}

/// Validation failures for task construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyDescription,
    /// Description holds a line break or the ` | ` record separator.
    UnstorableDescription,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "task description cannot be empty"),
            Self::UnstorableDescription => write!(
                f,
                "task description cannot contain \"{}\" or line breaks",
                RECORD_SEPARATOR
            ),
        }
    }
}

impl Error for TaskValidationError {}

/// One tracked unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    /// Creates a not-done task after validating its description.
    pub fn new(
        description: impl Into<String>,
        kind: TaskKind,
    ) -> Result<Self, TaskValidationError> {
        let task = Self {
            description: description.into(),
            done: false,
            kind,
        };
        task.validate()?;
        Ok(task)
    }

    pub fn todo(description: impl Into<String>) -> Result<Self, TaskValidationError> {
        Self::new(description, TaskKind::Todo)
    }

    pub fn deadline(
        description: impl Into<String>,
        by: TaskDateTime,
    ) -> Result<Self, TaskValidationError> {
        Self::new(description, TaskKind::Deadline { by })
    }

    pub fn event(
        description: impl Into<String>,
        from: TaskDateTime,
        to: TaskDateTime,
    ) -> Result<Self, TaskValidationError> {
        Self::new(description, TaskKind::Event { from, to })
    }

    /// Checks the record invariants listed in the module docs.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        validate_description(&self.description)
    }

    /// Description as typed, without any date suffix.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn mark_not_done(&mut self) {
        self.done = false;
    }

    /// Description plus the human-readable date suffix of the variant.
    ///
    /// This is the text `find` searches in.
    pub fn rendered_description(&self) -> String {
        match &self.kind {
            TaskKind::Todo => self.description.clone(),
            TaskKind::Deadline { by } => {
                format!("{} (by: {})", self.description, format_display(by))
            }
            TaskKind::Event { from, to } => format!(
                "{} (from: {} to: {})",
                self.description,
                format_display(from),
                format_display(to)
            ),
        }
    }

    /// Case-insensitive substring match on the rendered description.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        self.rendered_description()
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let status = if self.done { 'X' } else { ' ' };
        write!(
            f,
            "[{}][{}] {}",
            self.kind.code(),
            status,
            self.rendered_description()
        )
    }
}

/// Checks that `description` can be stored as one record field.
pub fn validate_description(description: &str) -> Result<(), TaskValidationError> {
    if description.trim().is_empty() {
        return Err(TaskValidationError::EmptyDescription);
    }
    // A trailing " |" would fuse with the next separator into " | | ".
    if description.contains(RECORD_SEPARATOR)
        || description.ends_with(" |")
        || description.contains(['\n', '\r'])
    {
        return Err(TaskValidationError::UnstorableDescription);
    }
    Ok(())
}
