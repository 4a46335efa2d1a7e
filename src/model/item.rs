// The task model: one struct, four variants.
use crate::model::datetime;
use chrono::{NaiveDate, NaiveDateTime};

/// What distinguishes the four task kinds from one another.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TaskKind {
    Todo,
    Deadline {
        by: NaiveDate,
    },
    Event {
        from: NaiveDateTime,
        to: NaiveDateTime,
    },
    DoWithin {
        from: NaiveDate,
        to: NaiveDate,
    },
}

impl TaskKind {
    pub fn type_prefix(&self) -> &'static str {
        match self {
            TaskKind::Todo => "[T]",
            TaskKind::Deadline { .. } => "[D]",
            TaskKind::Event { .. } => "[E]",
            TaskKind::DoWithin { .. } => "[P]",
        }
    }
}

/// A persisted unit of work: a description, a completion flag and a kind.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Task {
    pub description: String,
    pub done: bool,
    pub kind: TaskKind,
}

impl Task {
    pub fn todo(description: impl Into<String>) -> Self {
        Self::new(description, TaskKind::Todo)
    }

    pub fn deadline(description: impl Into<String>, by: NaiveDate) -> Self {
        Self::new(description, TaskKind::Deadline { by })
    }

    pub fn event(description: impl Into<String>, from: NaiveDateTime, to: NaiveDateTime) -> Self {
        Self::new(description, TaskKind::Event { from, to })
    }

    pub fn do_within(description: impl Into<String>, from: NaiveDate, to: NaiveDate) -> Self {
        Self::new(description, TaskKind::DoWithin { from, to })
    }

    fn new(description: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind,
        }
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn unmark(&mut self) {
        self.done = false;
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    fn checkbox_symbol(&self) -> &'static str {
        if self.done { "[X]" } else { "[ ]" }
    }

    /// Renders the task for display:
    /// `<type-prefix> [<X or space>] <description> <kind-specific suffix>`.
    pub fn render(&self) -> String {
        let head = format!(
            "{} {} {}",
            self.kind.type_prefix(),
            self.checkbox_symbol(),
            self.description
        );
        match &self.kind {
            TaskKind::Todo => head,
            TaskKind::Deadline { by } => {
                format!("{} (by: {})", head, datetime::format_date(*by))
            }
            TaskKind::Event { from, to } => format!(
                "{} (from: {} to: {})",
                head,
                datetime::format_date_time(*from),
                datetime::format_date_time(*to)
            ),
            TaskKind::DoWithin { from, to } => format!(
                "{} (within: {} to {})",
                head,
                datetime::format_date(*from),
                datetime::format_date(*to)
            ),
        }
    }
}
