//! Command-line parser.
//!
//! # Responsibility
//! - Turn one raw input line into exactly one `Command`.
//! - Report malformed input with the message shown to the user.
//!
//! # Invariants
//! - Parsing is pure: the same line always gives the same result.
//! - Task numbers are converted to 0-based but not range-checked here.

use crate::command::Command;
use crate::model::datetime::{parse_input, TaskDateTime};
use crate::model::task::{validate_description, TaskValidationError};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

const DEADLINE_MARKER: &str = "/by";
const EVENT_MARKER: &str = "/at";

// `<date> <time>-<date> <time>`; the dates carry hyphens of their own.
static EVENT_INTERVAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4}-\d{1,2}-\d{1,2}\s+\d{4})\s*-\s*(\d{4}-\d{1,2}-\d{1,2}\s+\d{4})$")
        .expect("valid event interval regex")
});

/// Input that could not be turned into a command.
///
/// `Display` yields the exact text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownCommand(String),
    EmptyTodoDescription,
    InvalidDeadlineFormat,
    InvalidEventFormat,
    InvalidEventTime,
    InvalidDateFormat,
    UnstorableDescription,
    InvalidTaskNumber(String),
    EmptySearchKeyword,
}

impl ParseError {
    /// Stable name used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownCommand(_) => "unknown_command",
            Self::EmptyTodoDescription => "empty_todo",
            Self::InvalidDeadlineFormat => "deadline_format",
            Self::InvalidEventFormat => "event_format",
            Self::InvalidEventTime => "event_time",
            Self::InvalidDateFormat => "date_format",
            Self::UnstorableDescription => "unstorable_description",
            Self::InvalidTaskNumber(_) => "task_number",
            Self::EmptySearchKeyword => "empty_keyword",
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand(_) => write!(f, "Unknown command."),
            Self::EmptyTodoDescription => write!(f, "The description of a todo cannot be empty."),
            Self::InvalidDeadlineFormat => write!(f, "Invalid deadline command format."),
            Self::InvalidEventFormat => write!(f, "Invalid event command format."),
            Self::InvalidEventTime => write!(f, "Invalid time format for event command."),
            Self::InvalidDateFormat => {
                write!(f, "Invalid date format. Please use yyyy-MM-dd HHmm format.")
            }
            Self::UnstorableDescription => {
                write!(f, "Task description cannot contain \" | \" or line breaks.")
            }
            Self::InvalidTaskNumber(_) => write!(f, "Invalid task number format."),
            Self::EmptySearchKeyword => write!(f, "The search keyword cannot be empty."),
        }
    }
}

impl Error for ParseError {}

/// Parses one line of user input into a command.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let (keyword, args) = match line.split_once(char::is_whitespace) {
        Some((keyword, args)) => (keyword, args.trim()),
        None => (line, ""),
    };

    let result = match keyword {
        "todo" => parse_todo(args),
        "deadline" => parse_deadline(args),
        "event" => parse_event(args),
        "list" => Ok(Command::List),
        "mark" => parse_task_number(args).map(Command::Mark),
        "unmark" => parse_task_number(args).map(Command::Unmark),
        "delete" => parse_task_number(args).map(Command::Delete),
        "find" => parse_find(args),
        "bye" => Ok(Command::Exit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    };

    if let Err(err) = &result {
        debug!(
            "event=command_parse module=command status=error kind={}",
            err.kind()
        );
    }
    result
}

fn parse_todo(args: &str) -> Result<Command, ParseError> {
    if args.is_empty() {
        return Err(ParseError::EmptyTodoDescription);
    }
    Ok(Command::AddTodo {
        description: checked_description(args)?,
    })
}

fn parse_deadline(args: &str) -> Result<Command, ParseError> {
    let (description, by) =
        split_marker(args, DEADLINE_MARKER).ok_or(ParseError::InvalidDeadlineFormat)?;
    let by = parse_date(by)?;
    Ok(Command::AddDeadline {
        description: checked_description(description)?,
        by,
    })
}

fn parse_event(args: &str) -> Result<Command, ParseError> {
    let (description, interval) =
        split_marker(args, EVENT_MARKER).ok_or(ParseError::InvalidEventFormat)?;
    let (from, to) = split_interval(interval)?;
    let from = parse_date(from)?;
    let to = parse_date(to)?;
    Ok(Command::AddEvent {
        description: checked_description(description)?,
        from,
        to,
    })
}

fn parse_task_number(args: &str) -> Result<i64, ParseError> {
    args.parse::<i64>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .ok_or_else(|| ParseError::InvalidTaskNumber(args.to_string()))
}

fn parse_find(args: &str) -> Result<Command, ParseError> {
    if args.is_empty() {
        return Err(ParseError::EmptySearchKeyword);
    }
    Ok(Command::Find {
        keyword: args.to_string(),
    })
}

/// Splits on the first `marker`; both trimmed halves must be non-empty.
fn split_marker<'a>(args: &'a str, marker: &str) -> Option<(&'a str, &'a str)> {
    let (head, tail) = args.split_once(marker)?;
    let (head, tail) = (head.trim(), tail.trim());
    if head.is_empty() || tail.is_empty() {
        return None;
    }
    Some((head, tail))
}

fn split_interval(interval: &str) -> Result<(&str, &str), ParseError> {
    if let Some(captures) = EVENT_INTERVAL_RE.captures(interval) {
        if let (Some(from), Some(to)) = (captures.get(1), captures.get(2)) {
            return Ok((from.as_str(), to.as_str()));
        }
    }

    let (from, to) = interval
        .rsplit_once('-')
        .ok_or(ParseError::InvalidEventTime)?;
    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return Err(ParseError::InvalidEventTime);
    }
    Ok((from, to))
}

fn parse_date(text: &str) -> Result<TaskDateTime, ParseError> {
    parse_input(text).map_err(|_| ParseError::InvalidDateFormat)
}

fn checked_description(description: &str) -> Result<String, ParseError> {
    validate_description(description).map_err(|err| match err {
        TaskValidationError::EmptyDescription => ParseError::EmptyTodoDescription,
        TaskValidationError::UnstorableDescription => ParseError::UnstorableDescription,
    })?;
    Ok(description.to_string())
}
