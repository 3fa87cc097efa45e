//! Datetime text formats.
//!
//! Three formats are in play and must never be mixed up:
//! - command input: `yyyy-MM-dd HHmm` (e.g. `2024-12-01 1800`)
//! - persisted records: `yyyy-MM-dd HH:mm` (e.g. `2024-12-01 18:00`)
//! - rendered text: `MMM dd yyyy, HH:mm` (e.g. `Dec 01 2024, 18:00`)
//!
//! All values are naive local datetimes with minute precision.

use chrono::NaiveDateTime;

/// `chrono` pattern for datetimes typed in commands.
pub const INPUT_FORMAT: &str = "%Y-%m-%d %H%M";
/// `chrono` pattern for datetimes in the task file.
pub const STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M";
/// `chrono` pattern for datetimes shown to the user.
pub const DISPLAY_FORMAT: &str = "%b %d %Y, %H:%M";

pub type TaskDateTime = NaiveDateTime;

pub fn parse_input(text: &str) -> Result<TaskDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(text.trim(), INPUT_FORMAT)
}

pub fn parse_stored(text: &str) -> Result<TaskDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(text.trim(), STORAGE_FORMAT)
}

pub fn format_stored(value: &TaskDateTime) -> String {
    value.format(STORAGE_FORMAT).to_string()
}

pub fn format_display(value: &TaskDateTime) -> String {
    value.format(DISPLAY_FORMAT).to_string()
}
