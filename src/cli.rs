//! Shared command-line interface logic, like printing help.

pub fn print_help(binary_name: &str) {
    println!(
        "Taskchat v{} - A chat-style personal task tracker",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {}              Start the interactive session", binary_name);
    println!("    {} --help       Show this help message", binary_name);
    println!();
    println!("COMMANDS (inside the session):");
    println!("    list                                        Show all tasks");
    println!("    todo <description>                          Add a todo");
    println!("    deadline <description> /by <date>           Add a deadline");
    println!("    event <description> /from <dt> /to <dt>     Add an event");
    println!("    dowithin <description> /from <d> /to <d>    Add a period task");
    println!("    mark <n> | unmark <n> | delete <n>          Update task n");
    println!("    find <keyword>                              Search descriptions");
    println!("    bye                                         Save and exit");
    println!();
    println!("DATE FORMATS:");
    println!("    2025-02-01, Feb 1 2025, 01/02/2025");
    println!("    Date-times add a time: 1400, 14:00 or 2pm");
}
