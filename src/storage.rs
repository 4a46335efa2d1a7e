// Flat-file persistence for the task list.
//
// The file holds one task per line, fields joined by " | ". Load is
// best-effort: missing file means an empty list, unreadable lines are
// skipped. Save rewrites the whole file and swallows I/O errors so a
// persistence failure never interrupts the interactive session. Both
// behaviours are part of the storage contract; diagnostics go through the
// `log` facade only.
use crate::model::datetime;
use crate::model::{Task, TaskKind};
use crate::paths::AppPaths;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

const DELIMITER: &str = " | ";

const TYPE_TODO: &str = "T";
const TYPE_DEADLINE: &str = "D";
const TYPE_EVENT: &str = "E";
const TYPE_DOWITHIN: &str = "P";

const DONE_FLAG: &str = "1";
const UNDONE_FLAG: &str = "0";

const MIN_PARTS_FOR_TASK: usize = 3;
const MIN_PARTS_FOR_DEADLINE: usize = 4;
const MIN_PARTS_FOR_RANGE: usize = 5;

pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at the platform data directory (or the configured override).
    pub fn at_default_location() -> Result<Self> {
        let path = AppPaths::get_task_file_path().context("Could not resolve task file path")?;
        Ok(Self::new(path))
    }

    /// Loads the task list. Missing file yields an empty list; lines that
    /// fail to parse are skipped rather than aborting the load.
    pub fn load(&self) -> Vec<Task> {
        if !self.path.exists() {
            return Vec::new();
        }
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Could not read {:?}: {}", self.path, e);
                return Vec::new();
            }
        };

        let mut tasks = Vec::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match parse_line(line) {
                Some(task) => tasks.push(task),
                None => log::warn!("Skipping malformed task line: {}", line),
            }
        }
        tasks
    }

    /// Overwrites the file with one line per task. Errors are logged and
    /// swallowed.
    pub fn save(&self, tasks: &[Task]) {
        if let Err(e) = self.try_save(tasks) {
            log::warn!("Could not save tasks to {:?}: {}", self.path, e);
        }
    }

    fn try_save(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
        let mut out = String::new();
        for task in tasks {
            out.push_str(&format_line(task));
            out.push('\n');
        }
        fs::write(&self.path, out)
            .with_context(|| format!("Failed to write task file: {:?}", self.path))?;
        Ok(())
    }
}

// --- LINE FORMAT ---

fn parse_line(line: &str) -> Option<Task> {
    let parts: Vec<&str> = line.split(DELIMITER).collect();
    if parts.len() < MIN_PARTS_FOR_TASK {
        return None;
    }
    let done = parts[1] == DONE_FLAG;
    let description = parts[2];

    let mut task = match parts[0] {
        TYPE_TODO => Task::todo(description),
        TYPE_DEADLINE => parse_deadline_parts(&parts, description)?,
        TYPE_EVENT => parse_event_parts(&parts, description)?,
        TYPE_DOWITHIN => parse_do_within_parts(&parts, description)?,
        _ => return None,
    };
    if done {
        task.mark_done();
    }
    Some(task)
}

fn parse_deadline_parts(parts: &[&str], description: &str) -> Option<Task> {
    if parts.len() < MIN_PARTS_FOR_DEADLINE {
        return None;
    }
    // Strict ISO first, then the lenient parser to tolerate files written
    // by an older format version.
    let by = datetime::parse_date_from_storage(parts[3]).or_else(|| datetime::parse_date(parts[3]))?;
    Some(Task::deadline(description, by))
}

fn parse_event_parts(parts: &[&str], description: &str) -> Option<Task> {
    if parts.len() < MIN_PARTS_FOR_RANGE {
        return None;
    }
    let mut from = datetime::parse_date_time_from_storage(parts[3]);
    let mut to = datetime::parse_date_time_from_storage(parts[4]);
    if from.is_none() || to.is_none() {
        from = datetime::parse_date_time(parts[3]);
        to = datetime::parse_date_time(parts[4]);
    }
    Some(Task::event(description, from?, to?))
}

fn parse_do_within_parts(parts: &[&str], description: &str) -> Option<Task> {
    if parts.len() < MIN_PARTS_FOR_RANGE {
        return None;
    }
    let mut from = datetime::parse_date_from_storage(parts[3]);
    let mut to = datetime::parse_date_from_storage(parts[4]);
    if from.is_none() || to.is_none() {
        from = datetime::parse_date(parts[3]);
        to = datetime::parse_date(parts[4]);
    }
    Some(Task::do_within(description, from?, to?))
}

fn format_line(task: &Task) -> String {
    let done_flag = if task.is_done() { DONE_FLAG } else { UNDONE_FLAG };
    let fields = match &task.kind {
        TaskKind::Todo => vec![TYPE_TODO.to_string(), done_flag.into(), task.description.clone()],
        TaskKind::Deadline { by } => vec![
            TYPE_DEADLINE.to_string(),
            done_flag.into(),
            task.description.clone(),
            datetime::format_date_for_storage(*by),
        ],
        TaskKind::Event { from, to } => vec![
            TYPE_EVENT.to_string(),
            done_flag.into(),
            task.description.clone(),
            datetime::format_date_time_for_storage(*from),
            datetime::format_date_time_for_storage(*to),
        ],
        TaskKind::DoWithin { from, to } => vec![
            TYPE_DOWITHIN.to_string(),
            done_flag.into(),
            task.description.clone(),
            datetime::format_date_for_storage(*from),
            datetime::format_date_for_storage(*to),
        ],
    };
    fields.join(DELIMITER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_line_deadline() {
        let by = NaiveDate::from_ymd_opt(2025, 2, 20).unwrap();
        let task = Task::deadline("submit report", by);
        assert_eq!(format_line(&task), "D | 0 | submit report | 2025-02-20");
    }

    #[test]
    fn test_format_line_done_todo() {
        let mut task = Task::todo("read book");
        task.mark_done();
        assert_eq!(format_line(&task), "T | 1 | read book");
    }

    #[test]
    fn test_parse_line_event() {
        let task = parse_line("E | 0 | team sync | 2025-02-20T14:00 | 2025-02-20T16:00").unwrap();
        let from = NaiveDate::from_ymd_opt(2025, 2, 20)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap();
        let to = NaiveDate::from_ymd_opt(2025, 2, 20)
            .unwrap()
            .and_hms_opt(16, 0, 0)
            .unwrap();
        assert_eq!(task, Task::event("team sync", from, to));
    }

    #[test]
    fn test_parse_line_legacy_date_format() {
        // Older format versions stored the display form; the lenient
        // fallback must still accept it.
        let task = parse_line("D | 1 | pay rent | Feb 1 2025").unwrap();
        assert_eq!(
            task.kind,
            TaskKind::Deadline {
                by: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
            }
        );
        assert!(task.is_done());
    }

    #[test]
    fn test_parse_line_rejects_garbage() {
        assert_eq!(parse_line("X | 0 | mystery"), None);
        assert_eq!(parse_line("T | 0"), None);
        assert_eq!(parse_line("D | 0 | no date"), None);
        assert_eq!(parse_line("D | 0 | bad date | tomorrow-ish"), None);
        assert_eq!(parse_line("E | 0 | half event | 2025-02-20T14:00"), None);
    }
}
