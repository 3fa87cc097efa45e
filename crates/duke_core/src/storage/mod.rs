//! Task persistence contracts and the flat-file implementation.
//!
//! # Responsibility
//! - Define the `TaskStore` seam the command layer saves through.
//! - Keep the line format and the filesystem out of `TaskList`.
//!
//! # Invariants
//! - A store is the only component that reads or writes the task file.
//! - A malformed record never fails a whole load; it is skipped and reported.

use crate::model::task_list::TaskList;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod codec;
pub mod file_store;

pub use codec::{decode_line, encode_line, DecodeError};
pub use file_store::FileTaskStore;

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-level failure for a whole load or save.
#[derive(Debug)]
pub enum StorageError {
    /// The task file does not exist yet.
    NotFound(PathBuf),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "File not found: {}", path.display()),
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// A persisted line that could not be turned back into a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the task file.
    pub line_number: usize,
    pub content: String,
    pub reason: DecodeError,
}

/// Result of a successful load: the decoded tasks plus every skipped line.
#[derive(Debug, Default)]
pub struct LoadedTasks {
    pub tasks: TaskList,
    pub skipped: Vec<SkippedLine>,
}

/// Persistence contract for the task list.
pub trait TaskStore {
    /// Reads every decodable task, in file order.
    fn load(&self) -> StorageResult<LoadedTasks>;
    /// Replaces the stored tasks with `tasks`.
    fn save(&self, tasks: &TaskList) -> StorageResult<()>;
}

impl<S: TaskStore + ?Sized> TaskStore for &S {
    fn load(&self) -> StorageResult<LoadedTasks> {
        (**self).load()
    }

    fn save(&self, tasks: &TaskList) -> StorageResult<()> {
        (**self).save(tasks)
    }
}
