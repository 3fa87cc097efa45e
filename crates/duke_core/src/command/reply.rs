//! User-facing response text.

use crate::model::task::Task;
use crate::storage::StorageError;
use std::fmt::Write;

pub fn greeting(assistant_name: &str) -> String {
    format!("Hello! I'm {assistant_name}\nWhat can I do for you?")
}

pub fn goodbye() -> String {
    "Bye. Hope to see you again soon!".to_string()
}

pub fn task_added(task: &Task, count: usize) -> String {
    format!("Got it. I've added this task:\n  {task}\n{}", task_count(count))
}

pub fn task_removed(task: &Task, count: usize) -> String {
    format!("Noted. I've removed this task:\n  {task}\n{}", task_count(count))
}

pub fn task_marked(task: &Task) -> String {
    format!("Nice! I've marked this task as done:\n  {task}")
}

pub fn task_unmarked(task: &Task) -> String {
    format!("OK, I've marked this task as not done yet:\n  {task}")
}

pub fn task_list<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> String {
    numbered(
        "Here are the tasks in your list:",
        "There are no tasks in your list.",
        tasks,
    )
}

pub fn find_results<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> String {
    numbered(
        "Here are the matching tasks in your list:",
        "No matching tasks found.",
        tasks,
    )
}

pub fn save_failed(err: &StorageError) -> String {
    format!("An error occurred while saving tasks to file: {err}")
}

fn task_count(count: usize) -> String {
    format!("Now you have {count} tasks in the list.")
}

fn numbered<'a>(header: &str, empty: &str, tasks: impl IntoIterator<Item = &'a Task>) -> String {
    let mut text = header.to_string();
    let mut any = false;
    for (index, task) in tasks.into_iter().enumerate() {
        any = true;
        let _ = write!(text, "\n{}. {task}", index + 1);
    }
    if any {
        text
    } else {
        empty.to_string()
    }
}
