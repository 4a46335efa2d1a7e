// Executable representation of one parsed user request.
//
// Every variant turns (task list, storage) into a reply string. Mutating
// variants save before returning, so from the caller's perspective each
// command is atomic: parse, execute, persist, reply.
use crate::model::Task;
use crate::storage::Storage;
use chrono::{NaiveDate, NaiveDateTime};

const OUT_OF_RANGE_MESSAGE: &str =
    "Hmm, that task number doesn't exist. Try 'list' to see your tasks!";

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    Bye,
    List,
    AddTodo {
        description: String,
    },
    AddDeadline {
        description: String,
        by: NaiveDate,
    },
    AddEvent {
        description: String,
        from: NaiveDateTime,
        to: NaiveDateTime,
    },
    AddDoWithin {
        description: String,
        from: NaiveDate,
        to: NaiveDate,
    },
    Mark {
        index: usize,
    },
    Unmark {
        index: usize,
    },
    Delete {
        index: usize,
    },
    Find {
        keyword: String,
    },
    /// Unrecognized non-empty input, treated as an implicit todo.
    FallbackTodo {
        description: String,
    },
    /// Carries a user-facing message and executes as a no-op.
    Invalid {
        message: String,
    },
}

impl Command {
    pub fn invalid(message: impl Into<String>) -> Self {
        Command::Invalid {
            message: message.into(),
        }
    }

    /// True only for `Bye`; the caller owns actual termination.
    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Bye)
    }

    pub fn execute(&self, tasks: &mut Vec<Task>, storage: &Storage) -> String {
        match self {
            Command::Bye => {
                storage.save(tasks);
                "See you later! 👋 Take care and stay productive!".to_string()
            }
            Command::List => render_list(tasks),
            Command::AddTodo { description } | Command::FallbackTodo { description } => {
                add_task(Task::todo(description.clone()), tasks, storage)
            }
            Command::AddDeadline { description, by } => {
                add_task(Task::deadline(description.clone(), *by), tasks, storage)
            }
            Command::AddEvent {
                description,
                from,
                to,
            } => add_task(Task::event(description.clone(), *from, *to), tasks, storage),
            Command::AddDoWithin {
                description,
                from,
                to,
            } => add_task(
                Task::do_within(description.clone(), *from, *to),
                tasks,
                storage,
            ),
            Command::Mark { index } => {
                let Some(task) = tasks.get_mut(*index) else {
                    return OUT_OF_RANGE_MESSAGE.to_string();
                };
                task.mark_done();
                let rendered = task.render();
                storage.save(tasks);
                format!("Awesome! One less thing to worry about ✓\n  {}", rendered)
            }
            Command::Unmark { index } => {
                let Some(task) = tasks.get_mut(*index) else {
                    return OUT_OF_RANGE_MESSAGE.to_string();
                };
                task.unmark();
                let rendered = task.render();
                storage.save(tasks);
                format!("Okay, I've marked this task as not done yet:\n  {}", rendered)
            }
            Command::Delete { index } => {
                if *index >= tasks.len() {
                    return OUT_OF_RANGE_MESSAGE.to_string();
                }
                let removed = tasks.remove(*index);
                storage.save(tasks);
                format!(
                    "Noted. I've removed this task:\n  {}\nNow you have {} tasks in the list.",
                    removed.render(),
                    tasks.len()
                )
            }
            Command::Find { keyword } => render_matches(tasks, keyword),
            Command::Invalid { message } => message.clone(),
        }
    }
}

fn add_task(task: Task, tasks: &mut Vec<Task>, storage: &Storage) -> String {
    let rendered = task.render();
    tasks.push(task);
    storage.save(tasks);
    format!(
        "Done! I've added this task:\n  {}\nNow you have {} tasks in the list.",
        rendered,
        tasks.len()
    )
}

fn render_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "You don't have any tasks yet!".to_string();
    }
    let mut out = String::from("Here are the tasks in your list:");
    for (i, task) in tasks.iter().enumerate() {
        out.push_str(&format!("\n{}. {}", i + 1, task.render()));
    }
    out
}

fn render_matches(tasks: &[Task], keyword: &str) -> String {
    // Case-sensitive substring search, with the original list indices.
    let matches: Vec<String> = tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| task.description.contains(keyword))
        .map(|(i, task)| format!("\n{}. {}", i + 1, task.render()))
        .collect();
    if matches.is_empty() {
        return format!("No matching tasks found for: {}", keyword);
    }
    let mut out = String::from("Here are the matching tasks in your list:");
    for line in matches {
        out.push_str(&line);
    }
    out
}
