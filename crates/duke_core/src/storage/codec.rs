//! Line codec for persisted tasks.
//!
//! One task per line, fields joined by ` | `:
//!
//! ```text
//! T | <0|1> | <description>
//! D | <0|1> | <description> | <yyyy-MM-dd HH:mm>
//! E | <0|1> | <description> | <yyyy-MM-dd HH:mm> | <yyyy-MM-dd HH:mm>
//! ```
//!
//! `decode_line(encode_line(task))` yields a task equal to `task`.

use crate::model::datetime::{format_stored, parse_stored, TaskDateTime};
use crate::model::task::{Task, TaskKind, TaskValidationError, RECORD_SEPARATOR};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DONE_FLAG: &str = "1";
const NOT_DONE_FLAG: &str = "0";

/// Why one persisted line was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    MissingFields { kind: String, expected: usize, found: usize },
    UnknownType(String),
    InvalidDateTime(String),
    InvalidTask(TaskValidationError),
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields {
                kind,
                expected,
                found,
            } => write!(
                f,
                "record of type `{kind}` needs {expected} fields, found {found}"
            ),
            Self::UnknownType(kind) => write!(f, "unknown task type `{kind}`"),
            Self::InvalidDateTime(value) => write!(f, "invalid stored datetime `{value}`"),
            Self::InvalidTask(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidTask(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TaskValidationError> for DecodeError {
    fn from(value: TaskValidationError) -> Self {
        Self::InvalidTask(value)
    }
}

/// Encodes one task as a persisted line, without the trailing newline.
pub fn encode_line(task: &Task) -> String {
    let done = if task.is_done() {
        DONE_FLAG
    } else {
        NOT_DONE_FLAG
    };
    let mut fields = vec![
        task.kind().code().to_string(),
        done.to_string(),
        task.description().to_string(),
    ];
    match task.kind() {
        TaskKind::Todo => {}
        TaskKind::Deadline { by } => fields.push(format_stored(by)),
        TaskKind::Event { from, to } => {
            fields.push(format_stored(from));
            fields.push(format_stored(to));
        }
    }
    fields.join(RECORD_SEPARATOR)
}

/// Decodes one persisted line. Trailing fields beyond the type's need are ignored.
pub fn decode_line(line: &str) -> Result<Task, DecodeError> {
    let fields: Vec<&str> = line.split(RECORD_SEPARATOR).collect();
    let kind_code = fields[0].trim();

    let required = match kind_code {
        "T" => 3,
        "D" => 4,
        "E" => 5,
        other => return Err(DecodeError::UnknownType(other.to_string())),
    };
    if fields.len() < required {
        return Err(DecodeError::MissingFields {
            kind: kind_code.to_string(),
            expected: required,
            found: fields.len(),
        });
    }

    let done = fields[1].trim() == DONE_FLAG;
    let description = fields[2];
    let kind = match kind_code {
        "D" => TaskKind::Deadline {
            by: decode_datetime(fields[3])?,
        },
        "E" => TaskKind::Event {
            from: decode_datetime(fields[3])?,
            to: decode_datetime(fields[4])?,
        },
        _ => TaskKind::Todo,
    };

    // Same description rules as typed input: a line the app could not have
    // written is skipped rather than loaded in a form that re-saves differently.
    let mut task = Task::new(description, kind)?;
    if done {
        task.mark_done();
    }
    Ok(task)
}

fn decode_datetime(value: &str) -> Result<TaskDateTime, DecodeError> {
    parse_stored(value).map_err(|_| DecodeError::InvalidDateTime(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{decode_line, encode_line, DecodeError};
    use crate::model::datetime::parse_stored;
    use crate::model::task::{Task, TaskKind, TaskValidationError};

    #[test]
    fn encodes_each_variant() {
        let mut todo = Task::todo("read book").unwrap();
        todo.mark_done();
        assert_eq!(encode_line(&todo), "T | 1 | read book");

        let by = parse_stored("2024-12-01 18:00").unwrap();
        let deadline = Task::deadline("submit report", by).unwrap();
        assert_eq!(
            encode_line(&deadline),
            "D | 0 | submit report | 2024-12-01 18:00"
        );

        let from = parse_stored("2024-12-01 09:00").unwrap();
        let to = parse_stored("2024-12-01 10:00").unwrap();
        let event = Task::event("team sync", from, to).unwrap();
        assert_eq!(
            encode_line(&event),
            "E | 0 | team sync | 2024-12-01 09:00 | 2024-12-01 10:00"
        );
    }

    #[test]
    fn decode_keeps_done_flag_only_for_one() {
        assert!(decode_line("T | 1 | a").unwrap().is_done());
        assert!(!decode_line("T | 0 | a").unwrap().is_done());
        assert!(!decode_line("T | yes | a").unwrap().is_done());
    }

    #[test]
    fn decode_ignores_extra_fields() {
        let task = decode_line("T | 0 | a | leftover").unwrap();
        assert_eq!(task.description(), "a");
    }

    #[test]
    fn decode_reports_missing_fields() {
        let err = decode_line("D | 0 | no date").unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingFields {
                kind: "D".to_string(),
                expected: 4,
                found: 3,
            }
        );
        assert!(matches!(
            decode_line("E | 0 | half | 2024-12-01 09:00"),
            Err(DecodeError::MissingFields { expected: 5, .. })
        ));
        assert!(matches!(
            decode_line("T | 0"),
            Err(DecodeError::MissingFields { expected: 3, found: 2, .. })
        ));
    }

    #[test]
    fn decode_rejects_unknown_type_and_bad_datetime() {
        assert_eq!(
            decode_line("X | 0 | what").unwrap_err(),
            DecodeError::UnknownType("X".to_string())
        );
        assert_eq!(
            decode_line("D | 0 | late | 2024-12-01 1800").unwrap_err(),
            DecodeError::InvalidDateTime("2024-12-01 1800".to_string())
        );
    }

    #[test]
    fn decode_keeps_event_that_ends_before_it_starts() {
        let line = "E | 0 | retro | 2024-12-01 10:00 | 2024-12-01 09:00";
        let task = decode_line(line).unwrap();
        assert_eq!(
            task.kind(),
            &TaskKind::Event {
                from: parse_stored("2024-12-01 10:00").unwrap(),
                to: parse_stored("2024-12-01 09:00").unwrap(),
            }
        );
        assert_eq!(encode_line(&task), line);
    }

    #[test]
    fn decode_applies_input_description_rules() {
        assert_eq!(
            decode_line("T | 0 | ").unwrap_err(),
            DecodeError::InvalidTask(TaskValidationError::EmptyDescription)
        );
        // A trailing " |" cannot be told apart from a field boundary on re-save.
        assert_eq!(
            decode_line("T | 0 | a |").unwrap_err(),
            DecodeError::InvalidTask(TaskValidationError::UnstorableDescription)
        );
        assert_eq!(decode_line("T | 0 | a|b").unwrap().description(), "a|b");
    }
}
