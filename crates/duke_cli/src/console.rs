//! Console front end: one line in, one reply out.

use duke_core::{Session, TaskStore};
use std::io::{self, BufRead, Write};

/// Prints the greeting and startup notices.
pub fn print_banner<S, W>(session: &Session<S>, output: &mut W) -> io::Result<()>
where
    S: TaskStore,
    W: Write,
{
    writeln!(output, "{}", session.greeting())?;
    if let Some(notice) = session.loading_notice() {
        writeln!(output, "{notice}")?;
    }
    print_skipped(session, output)
}

/// Prints one diagnostic per persisted line dropped at load time.
pub fn print_skipped<S, W>(session: &Session<S>, output: &mut W) -> io::Result<()>
where
    S: TaskStore,
    W: Write,
{
    for skipped in session.skipped_lines() {
        writeln!(
            output,
            "Skipping invalid task on line {}: {} ({})",
            skipped.line_number, skipped.content, skipped.reason
        )?;
    }
    Ok(())
}

/// Answers lines from `input` until `bye` or end of input.
///
/// Returns whether the loop ended through `bye`.
pub fn run_loop<S, R, W>(session: &mut Session<S>, input: R, output: &mut W) -> io::Result<bool>
where
    S: TaskStore,
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let reply = session.respond(&line);
        writeln!(output, "{}", reply.text)?;
        output.flush()?;
        if reply.is_exit {
            return Ok(true);
        }
    }
    Ok(false)
}
