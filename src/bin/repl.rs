use anyhow::Result;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::io::{self, BufRead, Write};
use taskchat::cli;
use taskchat::config::Config;
use taskchat::controller::Session;
use taskchat::storage::Storage;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h" || args[1] == "help") {
        cli::print_help("taskchat");
        return Ok(());
    }

    // Diagnostics go to stderr so they never mix with replies.
    let _ = TermLogger::init(
        LevelFilter::Warn,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let config = Config::load();
    let storage = Storage::new(config.task_file_path()?);
    let mut session = Session::new(storage);

    println!("{}", Session::greeting(&config.bot_name));

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        println!("{}", session.respond(&line));
        io::stdout().flush()?;
        if Session::is_exit_command(&line) {
            break;
        }
    }
    Ok(())
}
