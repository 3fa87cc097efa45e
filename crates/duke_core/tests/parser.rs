use duke_core::model::datetime::parse_input;
use duke_core::{parse, Command, ParseError};

fn message(line: &str) -> String {
    parse(line).unwrap_err().to_string()
}

#[test]
fn parses_todo_with_trimmed_description() {
    assert_eq!(
        parse("todo read book").unwrap(),
        Command::AddTodo {
            description: "read book".to_string()
        }
    );
    assert_eq!(
        parse("  todo   spaced out  ").unwrap(),
        Command::AddTodo {
            description: "spaced out".to_string()
        }
    );
}

#[test]
fn empty_todo_is_rejected() {
    assert_eq!(parse("todo"), Err(ParseError::EmptyTodoDescription));
    assert_eq!(parse("todo    "), Err(ParseError::EmptyTodoDescription));
    assert_eq!(message("todo"), "The description of a todo cannot be empty.");
}

#[test]
fn parses_deadline() {
    assert_eq!(
        parse("deadline submit report /by 2024-12-01 1800").unwrap(),
        Command::AddDeadline {
            description: "submit report".to_string(),
            by: parse_input("2024-12-01 1800").unwrap(),
        }
    );
}

#[test]
fn deadline_errors_are_tiered() {
    assert_eq!(message("deadline submit report"), "Invalid deadline command format.");
    assert_eq!(message("deadline /by 2024-12-01 1800"), "Invalid deadline command format.");
    assert_eq!(message("deadline x /by   "), "Invalid deadline command format.");
    assert_eq!(
        message("deadline x /by notadate"),
        "Invalid date format. Please use yyyy-MM-dd HHmm format."
    );
    assert_eq!(
        message("deadline x /by 2024-12-01 18:00"),
        "Invalid date format. Please use yyyy-MM-dd HHmm format."
    );
}

#[test]
fn parses_event_interval_despite_hyphenated_dates() {
    assert_eq!(
        parse("event team sync /at 2024-12-01 0900-2024-12-01 1000").unwrap(),
        Command::AddEvent {
            description: "team sync".to_string(),
            from: parse_input("2024-12-01 0900").unwrap(),
            to: parse_input("2024-12-01 1000").unwrap(),
        }
    );
    assert!(matches!(
        parse("event retro /at 2024-12-01 0900 - 2024-12-02 1000"),
        Ok(Command::AddEvent { .. })
    ));
}

#[test]
fn event_errors_are_tiered() {
    assert_eq!(message("event team sync"), "Invalid event command format.");
    assert_eq!(
        message("event /at 2024-12-01 0900-2024-12-01 1000"),
        "Invalid event command format."
    );
    assert_eq!(message("event sync /at tomorrow"), "Invalid time format for event command.");
    assert_eq!(
        message("event sync /at 2024-12-01 0900-"),
        "Invalid time format for event command."
    );
    assert_eq!(
        message("event sync /at soon-later"),
        "Invalid date format. Please use yyyy-MM-dd HHmm format."
    );
}

#[test]
fn event_ending_before_its_start_still_parses() {
    assert_eq!(
        parse("event retro /at 2024-12-01 1000-2024-12-01 0900").unwrap(),
        Command::AddEvent {
            description: "retro".to_string(),
            from: parse_input("2024-12-01 1000").unwrap(),
            to: parse_input("2024-12-01 0900").unwrap(),
        }
    );
}

#[test]
fn keyword_ends_at_any_whitespace() {
    assert_eq!(
        parse("todo\tread book").unwrap(),
        Command::AddTodo {
            description: "read book".to_string()
        }
    );
    assert_eq!(parse("mark\t2").unwrap(), Command::Mark(1));
    assert_eq!(parse("list\t"), Ok(Command::List));
}

#[test]
fn task_numbers_become_zero_based() {
    assert_eq!(parse("mark 1").unwrap(), Command::Mark(0));
    assert_eq!(parse("unmark 3").unwrap(), Command::Unmark(2));
    assert_eq!(parse("delete 0").unwrap(), Command::Delete(-1));
    assert_eq!(parse("mark -4").unwrap(), Command::Mark(-5));
}

#[test]
fn non_integer_task_numbers_are_rejected() {
    for line in ["mark", "mark one", "unmark 1.5", "delete 2x"] {
        assert_eq!(message(line), "Invalid task number format.", "line: {line}");
    }
}

#[test]
fn parses_find_list_and_bye() {
    assert_eq!(
        parse("find book").unwrap(),
        Command::Find {
            keyword: "book".to_string()
        }
    );
    assert_eq!(message("find"), "The search keyword cannot be empty.");
    assert_eq!(parse("list").unwrap(), Command::List);
    assert_eq!(parse("list everything please").unwrap(), Command::List);
    assert_eq!(parse("bye").unwrap(), Command::Exit);
    assert_eq!(parse("bye now").unwrap(), Command::Exit);
}

#[test]
fn unknown_keywords_are_rejected() {
    assert_eq!(message("hello"), "Unknown command.");
    assert_eq!(message(""), "Unknown command.");
    assert_eq!(message("TODO read"), "Unknown command.");
}

#[test]
fn separator_in_description_is_rejected() {
    assert_eq!(parse("todo a | b"), Err(ParseError::UnstorableDescription));
    assert_eq!(
        parse("deadline a | b /by 2024-12-01 1800"),
        Err(ParseError::UnstorableDescription)
    );
    assert_eq!(
        parse("deadline pay rent | /by 2024-12-01 1800"),
        Err(ParseError::UnstorableDescription)
    );
}

#[test]
fn parsing_is_deterministic() {
    let line = "event team sync /at 2024-12-01 0900-2024-12-01 1000";
    assert_eq!(parse(line), parse(line));
    assert_eq!(parse("deadline x /by bad"), parse("deadline x /by bad"));
}
