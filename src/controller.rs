//! Central logic controller for one interactive session.
//!
//! This is the single entry point every UI layer delegates to: feed it one
//! line of text, get one reply string back. The session owns the in-memory
//! task list and its storage; it loads once on construction and each
//! mutating command persists before replying.
use crate::model::Task;
use crate::parser;
use crate::storage::Storage;

pub struct Session {
    tasks: Vec<Task>,
    storage: Storage,
}

impl Session {
    /// Builds a session, populating the task list from storage.
    pub fn new(storage: Storage) -> Self {
        let tasks = storage.load();
        Self { tasks, storage }
    }

    /// Processes one input line to completion: parse, execute, persist,
    /// reply. Never fails; errors come back as reply text.
    pub fn respond(&mut self, line: &str) -> String {
        parser::parse(line).execute(&mut self.tasks, &self.storage)
    }

    /// Whether this input requests session termination, without executing it.
    pub fn is_exit_command(line: &str) -> bool {
        parser::parse(line).is_exit()
    }

    pub fn greeting(bot_name: &str) -> String {
        format!("Hello! I'm {}.\nWhat can I do for you?", bot_name)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}
