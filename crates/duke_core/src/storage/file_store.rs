//! Flat text file implementation of `TaskStore`.
//!
//! # Invariants
//! - Save rewrites the whole file; it writes a sibling temp file first and
//!   renames it into place, so readers see either the old or the new list.
//! - Blank lines are ignored on load; every other undecodable line is skipped
//!   with a warning and recorded in `LoadedTasks::skipped`.

use crate::model::task_list::TaskList;
use crate::storage::codec::{decode_line, encode_line};
use crate::storage::{LoadedTasks, SkippedLine, StorageError, StorageResult, TaskStore};
use log::{debug, info, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const TEMP_SUFFIX: &str = "tmp";

/// Task store backed by one line-per-task text file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTaskStore {
    path: PathBuf,
}

impl FileTaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".");
        name.push(TEMP_SUFFIX);
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl TaskStore for FileTaskStore {
    fn load(&self) -> StorageResult<LoadedTasks> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("event=task_load module=storage status=not_found");
                return Err(StorageError::NotFound(self.path.clone()));
            }
            Err(err) => {
                warn!(
                    "event=task_load module=storage status=error kind={:?}",
                    err.kind()
                );
                return Err(self.io_error(err));
            }
        };

        let text = String::from_utf8_lossy(&bytes);
        let mut loaded = LoadedTasks::default();
        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match decode_line(line) {
                Ok(task) => {
                    loaded.tasks.add(task);
                }
                Err(reason) => {
                    warn!(
                        "event=task_decode module=storage status=skip line={} reason={}",
                        index + 1,
                        reason
                    );
                    loaded.skipped.push(SkippedLine {
                        line_number: index + 1,
                        content: line.to_string(),
                        reason,
                    });
                }
            }
        }

        info!(
            "event=task_load module=storage status=ok count={} skipped={}",
            loaded.tasks.len(),
            loaded.skipped.len()
        );
        Ok(loaded)
    }

    fn save(&self, tasks: &TaskList) -> StorageResult<()> {
        let mut contents = String::new();
        for task in tasks {
            contents.push_str(&encode_line(task));
            contents.push('\n');
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
            }
        }

        let temp_path = self.temp_path();
        fs::write(&temp_path, contents.as_bytes()).map_err(|err| self.io_error(err))?;
        if let Err(err) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(self.io_error(err));
        }

        debug!(
            "event=task_save module=storage status=ok count={}",
            tasks.len()
        );
        Ok(())
    }
}
