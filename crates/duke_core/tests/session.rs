use duke_core::{FileTaskStore, Session, StorageError, TaskStore};
use std::fs;

fn store_in(dir: &tempfile::TempDir) -> FileTaskStore {
    FileTaskStore::new(dir.path().join("duke.txt"))
}

#[test]
fn missing_file_starts_empty_with_notice() {
    let dir = tempfile::tempdir().unwrap();
    let session = Session::open(store_in(&dir));

    assert!(session.tasks().is_empty());
    let notice = session.loading_notice().expect("missing file should produce a notice");
    assert!(notice.starts_with("Error loading file"));
    assert!(session.skipped_lines().is_empty());
}

#[test]
fn greeting_uses_configured_name() {
    let dir = tempfile::tempdir().unwrap();
    let session = Session::open(store_in(&dir));
    assert_eq!(session.greeting(), "Hello! I'm Duke\nWhat can I do for you?");

    let session = session.with_assistant_name("SCZL");
    assert_eq!(session.greeting(), "Hello! I'm SCZL\nWhat can I do for you?");
}

#[test]
fn errors_become_reply_text_and_leave_list_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::open(store_in(&dir));

    let reply = session.respond("deadline x /by notadate");
    assert_eq!(
        reply.text,
        "Invalid date format. Please use yyyy-MM-dd HHmm format."
    );
    assert!(!reply.is_exit);
    assert!(reply.failed);
    assert!(session.tasks().is_empty());

    assert_eq!(session.respond("mark 1").text, "Invalid task number.");
    assert_eq!(session.respond("dance").text, "Unknown command.");
    assert!(session.tasks().is_empty());
    assert!(!session.store().path().exists());
}

#[test]
fn conversation_persists_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut session = Session::open(store_in(&dir));
        assert!(session.respond("todo read book").text.contains("Now you have 1 tasks"));
        session.respond("event team sync /at 2024-12-01 0900-2024-12-01 1000");
        session.respond("mark 1");
        let bye = session.respond("bye");
        assert!(bye.is_exit);
        assert!(!bye.failed);
        assert_eq!(bye.text, "Bye. Hope to see you again soon!");
    }

    let mut reopened = Session::open(store_in(&dir));
    assert!(reopened.loading_notice().is_none());
    assert_eq!(reopened.tasks().len(), 2);
    assert_eq!(
        reopened.respond("list").text,
        "Here are the tasks in your list:\n\
         1. [T][X] read book\n\
         2. [E][ ] team sync (from: Dec 01 2024, 09:00 to: Dec 01 2024, 10:00)"
    );
}

#[test]
fn skipped_lines_are_exposed() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), "T | 0 | ok\nD | 0 | broken\n").unwrap();

    let session = Session::open(store);

    assert_eq!(session.tasks().len(), 1);
    assert_eq!(session.skipped_lines().len(), 1);
    assert_eq!(session.skipped_lines()[0].line_number, 2);
    assert_eq!(session.skipped_lines()[0].content, "D | 0 | broken");
}

#[test]
fn session_keeps_answering_after_exit() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::open(store_in(&dir));

    assert!(session.respond("bye").is_exit);
    let reply = session.respond("todo after bye");
    assert!(!reply.is_exit);
    assert_eq!(session.tasks().len(), 1);
}

#[test]
fn session_can_borrow_its_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    {
        let mut session = Session::open(&store);
        session.respond("todo shared store");
    }
    let loaded = store.load().unwrap();
    assert_eq!(loaded.tasks.len(), 1);
    assert!(matches!(
        FileTaskStore::new(dir.path().join("other.txt")).load(),
        Err(StorageError::NotFound(_))
    ));
}
