//! Core domain logic for the Duke task assistant.
//! Parsing, execution and persistence live here; front ends only move text.

pub mod command;
pub mod logging;
pub mod model;
pub mod service;
pub mod storage;

pub use command::{parse, Command, CommandError, CommandOutcome, ParseError};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::datetime::TaskDateTime;
pub use model::task::{Task, TaskKind, TaskValidationError};
pub use model::task_list::TaskList;
pub use service::session::{Reply, Session, DEFAULT_ASSISTANT_NAME};
pub use storage::{
    DecodeError, FileTaskStore, LoadedTasks, SkippedLine, StorageError, StorageResult, TaskStore,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
