// Tests for command execution over the task list: mutation, bounds checks,
// reply text and the save-on-mutation contract.
use std::fs;
use std::path::PathBuf;
use taskchat::controller::Session;
use taskchat::model::Task;
use taskchat::parser;
use taskchat::storage::Storage;

fn temp_task_file(test_name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "taskchat_test_{}_{}",
        test_name,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir.join("tasks.txt")
}

fn three_todos() -> Vec<Task> {
    vec![
        Task::todo("first task"),
        Task::todo("second task"),
        Task::todo("third task"),
    ]
}

#[test]
fn test_mark_marks_only_the_target_task() {
    let storage = Storage::new(temp_task_file("mark"));
    let mut tasks = three_todos();

    let reply = parser::parse("mark 1").execute(&mut tasks, &storage);

    assert!(tasks[0].is_done());
    assert!(!tasks[1].is_done());
    assert!(!tasks[2].is_done());
    assert!(reply.contains("[T] [X] first task"));
}

#[test]
fn test_mark_invalid_input_does_not_mutate() {
    let path = temp_task_file("mark_invalid");
    let storage = Storage::new(&path);
    let mut tasks = three_todos();

    for input in ["mark 0", "mark abc"] {
        let cmd = parser::parse(input);
        let reply = cmd.execute(&mut tasks, &storage);
        assert!(reply.starts_with("Oops!"), "unexpected reply: {}", reply);
    }
    assert!(tasks.iter().all(|t| !t.is_done()));
    // Invalid commands never save.
    assert!(!path.exists());
}

#[test]
fn test_mark_out_of_range_is_friendly_and_does_not_save() {
    let path = temp_task_file("mark_oob");
    let storage = Storage::new(&path);
    let mut tasks = three_todos();

    let reply = parser::parse("mark 4").execute(&mut tasks, &storage);

    assert_eq!(
        reply,
        "Hmm, that task number doesn't exist. Try 'list' to see your tasks!"
    );
    assert!(tasks.iter().all(|t| !t.is_done()));
    assert!(!path.exists());
}

#[test]
fn test_unmark_clears_the_done_flag() {
    let storage = Storage::new(temp_task_file("unmark"));
    let mut tasks = three_todos();
    tasks[1].mark_done();

    let reply = parser::parse("unmark 2").execute(&mut tasks, &storage);

    assert!(!tasks[1].is_done());
    assert!(reply.contains("[T] [ ] second task"));
}

#[test]
fn test_delete_removes_exactly_the_second_task() {
    let storage = Storage::new(temp_task_file("delete"));
    let mut tasks = three_todos();

    let reply = parser::parse("delete 2").execute(&mut tasks, &storage);

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].description, "first task");
    assert_eq!(tasks[1].description, "third task");
    assert!(reply.contains("second task"));
    assert!(reply.contains("Now you have 2 tasks in the list."));
}

#[test]
fn test_add_todo_reply_template_and_save() {
    let path = temp_task_file("add");
    let storage = Storage::new(&path);
    let mut tasks = Vec::new();

    let reply = parser::parse("todo read book").execute(&mut tasks, &storage);

    assert_eq!(
        reply,
        "Done! I've added this task:\n  [T] [ ] read book\nNow you have 1 tasks in the list."
    );
    assert_eq!(fs::read_to_string(&path).unwrap(), "T | 0 | read book\n");
}

#[test]
fn test_fallback_todo_adds_the_raw_text() {
    let storage = Storage::new(temp_task_file("fallback"));
    let mut tasks = Vec::new();

    parser::parse("water the plants").execute(&mut tasks, &storage);

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].description, "water the plants");
}

#[test]
fn test_find_is_case_sensitive_with_original_indices() {
    let storage = Storage::new(temp_task_file("find"));
    let mut tasks = vec![Task::todo("Read book"), Task::todo("Return Book")];

    let reply = parser::parse("find Book").execute(&mut tasks, &storage);

    assert!(reply.contains("2. [T] [ ] Return Book"));
    assert!(!reply.contains("Read book"));

    let none = parser::parse("find xyz").execute(&mut tasks, &storage);
    assert_eq!(none, "No matching tasks found for: xyz");
}

#[test]
fn test_list_renders_one_based_indices() {
    let storage = Storage::new(temp_task_file("list"));
    let mut tasks = three_todos();
    tasks[2].mark_done();

    let reply = parser::parse("list").execute(&mut tasks, &storage);

    assert_eq!(
        reply,
        "Here are the tasks in your list:\n\
         1. [T] [ ] first task\n\
         2. [T] [ ] second task\n\
         3. [T] [X] third task"
    );

    let empty = parser::parse("list").execute(&mut Vec::new(), &storage);
    assert_eq!(empty, "You don't have any tasks yet!");
}

#[test]
fn test_bye_saves_the_unchanged_list() {
    let path = temp_task_file("bye");
    let storage = Storage::new(&path);
    let mut tasks = three_todos();

    let cmd = parser::parse("bye");
    assert!(cmd.is_exit());
    cmd.execute(&mut tasks, &storage);

    assert_eq!(tasks.len(), 3);
    let saved = Storage::new(&path).load();
    assert_eq!(saved, tasks);
}

#[test]
fn test_invalid_command_echoes_its_message() {
    let storage = Storage::new(temp_task_file("invalid"));
    let reply = parser::parse("").execute(&mut Vec::new(), &storage);
    assert_eq!(reply, "I don't understand that command. Please try again.");
}

// --- SESSION-LEVEL FLOW ---

#[test]
fn test_session_persists_across_instances() {
    let path = temp_task_file("session");

    let mut session = Session::new(Storage::new(&path));
    session.respond("todo read book");
    session.respond("deadline submit report /by 2025-02-20");
    session.respond("mark 1");

    let reloaded = Session::new(Storage::new(&path));
    assert_eq!(reloaded.tasks().len(), 2);
    assert!(reloaded.tasks()[0].is_done());
    assert_eq!(reloaded.tasks()[1].description, "submit report");
}

#[test]
fn test_session_exit_query_does_not_execute() {
    let path = temp_task_file("session_exit");
    assert!(Session::is_exit_command("bye"));
    assert!(Session::is_exit_command("  BYE  "));
    assert!(!Session::is_exit_command("list"));
    assert!(!Session::is_exit_command("goodbye"));
    // The query alone must not touch storage.
    assert!(!path.exists());
}
