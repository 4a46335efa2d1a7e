// Turns one raw input line into a Command.
//
// `parse` is total: every failure path resolves to `Command::Invalid`
// carrying the user-facing message. Dispatch is first-match-wins, exact
// matches before prefix matches; any non-empty line matching nothing becomes
// an implicit todo.
use crate::command::Command;
use crate::model::datetime;

const DATE_FORMAT_HELP: &str =
    "Oops! Invalid date format. Please use formats like: 2025-02-01, Feb 1 2025, or 01/02/2025";
const DATE_TIME_FORMAT_HELP: &str = "Oops! Invalid date-time format. \
     Please use formats like: 2025-02-01 1400, Feb 1 2025 2pm, or 01/02/2025 14:00";

pub fn parse(line: &str) -> Command {
    let trimmed = line.trim();

    if trimmed.eq_ignore_ascii_case("bye") {
        return Command::Bye;
    }
    if trimmed.eq_ignore_ascii_case("list") {
        return Command::List;
    }
    if let Some(rest) = trimmed.strip_prefix("find ") {
        return parse_find(rest);
    }
    if let Some(rest) = trimmed.strip_prefix("todo ") {
        return parse_todo(rest);
    }
    if let Some(rest) = trimmed.strip_prefix("deadline ") {
        return parse_deadline(rest);
    }
    if let Some(rest) = trimmed.strip_prefix("event ") {
        return parse_event(rest);
    }
    if let Some(rest) = trimmed.strip_prefix("dowithin ") {
        return parse_do_within(rest);
    }
    if let Some(rest) = trimmed.strip_prefix("mark ") {
        return parse_indexed(rest, "mark");
    }
    if trimmed.starts_with("mark") {
        // Tolerate a missing space after "mark" (e.g. tab-separated input).
        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        if parts.len() < 2 {
            return Command::invalid(
                "Oops! Please specify which task to mark. Usage: mark <task number>",
            );
        }
        return parse_indexed(parts[1], "mark");
    }
    if let Some(rest) = trimmed.strip_prefix("unmark ") {
        return parse_indexed(rest, "unmark");
    }
    if let Some(rest) = trimmed.strip_prefix("delete ") {
        return parse_indexed(rest, "delete");
    }
    if !trimmed.is_empty() {
        return Command::FallbackTodo {
            description: trimmed.to_string(),
        };
    }
    Command::invalid("I don't understand that command. Please try again.")
}

fn parse_find(rest: &str) -> Command {
    let keyword = rest.trim();
    if keyword.is_empty() {
        return Command::invalid(
            "Oops! Please specify a keyword to search for. Usage: find <keyword>",
        );
    }
    Command::Find {
        keyword: keyword.to_string(),
    }
}

fn parse_todo(rest: &str) -> Command {
    let description = rest.trim();
    if description.is_empty() {
        return Command::invalid("Oops! Todo description cannot be empty.");
    }
    Command::AddTodo {
        description: description.to_string(),
    }
}

fn parse_deadline(rest: &str) -> Command {
    let usage = "Oops! Please use the format: deadline <description> /by <date>";
    let Some((description, by_text)) = rest.trim().split_once(" /by ") else {
        return Command::invalid(usage);
    };
    let description = description.trim();
    if description.is_empty() {
        return Command::invalid(usage);
    }
    let Some(by) = datetime::parse_date(by_text) else {
        return Command::invalid(DATE_FORMAT_HELP);
    };
    Command::AddDeadline {
        description: description.to_string(),
        by,
    }
}

fn parse_event(rest: &str) -> Command {
    let usage = "Oops! Please use the format: event <description> /from <date-time> /to <date-time>";
    let Some((description, times)) = rest.trim().split_once(" /from ") else {
        return Command::invalid(usage);
    };
    let Some((from_text, to_text)) = times.split_once(" /to ") else {
        return Command::invalid(usage);
    };
    let (Some(from), Some(to)) = (
        datetime::parse_date_time(from_text),
        datetime::parse_date_time(to_text),
    ) else {
        return Command::invalid(DATE_TIME_FORMAT_HELP);
    };
    Command::AddEvent {
        description: description.trim().to_string(),
        from,
        to,
    }
}

fn parse_do_within(rest: &str) -> Command {
    let usage = "Oops! Please use the format: dowithin <description> /from <date> /to <date>";
    let Some((description, dates)) = rest.trim().split_once(" /from ") else {
        return Command::invalid(usage);
    };
    let Some((from_text, to_text)) = dates.split_once(" /to ") else {
        return Command::invalid(usage);
    };
    let (Some(from), Some(to)) = (datetime::parse_date(from_text), datetime::parse_date(to_text))
    else {
        return Command::invalid(DATE_FORMAT_HELP);
    };
    Command::AddDoWithin {
        description: description.trim().to_string(),
        from,
        to,
    }
}

fn parse_indexed(rest: &str, verb: &str) -> Command {
    let Some(index) = parse_task_index(rest) else {
        return Command::invalid(format!(
            "Oops! Task number must be an integer. Usage: {} <task number>",
            verb
        ));
    };
    match verb {
        "mark" => Command::Mark { index },
        "unmark" => Command::Unmark { index },
        _ => Command::Delete { index },
    }
}

/// Parses a 1-based task number into a 0-based index. Non-integer or
/// non-positive input yields `None`; out-of-range-high is checked at
/// execute time.
fn parse_task_index(text: &str) -> Option<usize> {
    let number = text.trim().parse::<i64>().ok()?;
    let index = number - 1;
    usize::try_from(index).ok()
}
