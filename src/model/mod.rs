pub mod datetime;
pub mod item;

pub use item::{Task, TaskKind};
