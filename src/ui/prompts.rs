// UI prompts and status messages
//
// Everything here writes to stderr. Stdout carries paths for the shell
// wrapper and must stay clean.

use colored::Colorize;
use std::io::{self, BufRead, IsTerminal, Write};

/// Whether both stdin and stderr are attached to a terminal
pub fn is_interactive() -> bool {
    io::stdin().is_terminal() && io::stderr().is_terminal()
}

/// Ask user for yes/no confirmation
pub fn confirm(message: &str) -> io::Result<bool> {
    let mut stderr = io::stderr();
    write!(stderr, "{} ", message.white().bold())?;
    stderr.flush()?;

    read_answer(&mut io::stdin().lock())
}

/// Parse a yes/no answer; anything but y/yes is a no
pub fn read_answer<R: BufRead>(input: &mut R) -> io::Result<bool> {
    let mut line = String::new();
    input.read_line(&mut line)?;

    let response = line.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}

/// Display a warning message
pub fn warn(message: &str) {
    eprintln!("{}", format!("Warning: {}", message).yellow().bold());
}
