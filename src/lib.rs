// Crate root library declaration and module exports.
pub mod cli;
pub mod command;
pub mod config;
pub mod controller;
pub mod model;
pub mod parser;
pub mod paths;
pub mod storage;
