//! Shell Command Parsing
//!
//! One command per line, arguments separated by whitespace. Everything after
//! a `#` is a comment.

use std::str::FromStr;

use crate::shell::{ShellError, ShellResult};

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the current queue with a new empty one
    New,
    /// Destroy the current queue
    Free,
    /// Insert `value` at the head `count` times
    InsertHead { value: String, count: usize },
    /// Insert `value` at the tail `count` times
    InsertTail { value: String, count: usize },
    /// Remove the head, optionally checking its value
    RemoveHead { expected: Option<String> },
    /// Remove the head without copying it out
    RemoveHeadQuiet,
    /// Report the size, optionally checking it
    Size { expected: Option<usize> },
    Reverse,
    Sort,
    Show,
    Stats,
    Help,
    Quit,
}

/// Command names with their usage, for `help`
pub const USAGE: &[(&str, &str)] = &[
    ("new", "Create a new empty queue, destroying any current one"),
    ("free", "Destroy the current queue"),
    ("ih STR [N]", "Insert STR at the head N times (default 1)"),
    ("it STR [N]", "Insert STR at the tail N times (default 1)"),
    ("rh [STR]", "Remove the head, checking it equals STR if given"),
    ("rhq", "Remove the head without copying it"),
    ("size [N]", "Report the size, checking it equals N if given"),
    ("reverse", "Reverse the queue in place"),
    ("sort", "Sort the queue in ascending order"),
    ("show", "Print the queue contents"),
    ("stats", "Print queue statistics"),
    ("help", "Show this list"),
    ("quit", "Stop reading commands"),
];

impl Command {
    /// Parse one input line, returning `None` for blank or comment lines
    pub fn parse_line(line: &str) -> ShellResult<Option<Command>> {
        let line = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };
        if line.trim().is_empty() {
            return Ok(None);
        }
        line.parse().map(Some)
    }

    /// Whether the command changes the queue's contents or existence
    pub fn is_mutating(&self) -> bool {
        !matches!(
            self,
            Command::Size { .. } | Command::Show | Command::Stats | Command::Help | Command::Quit
        )
    }
}

impl FromStr for Command {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let name = tokens
            .next()
            .ok_or_else(|| ShellError::parse("empty command"))?;
        let args: Vec<&str> = tokens.collect();

        let command = match name.to_lowercase().as_str() {
            "new" => no_args(name, &args, Command::New)?,
            "free" => no_args(name, &args, Command::Free)?,
            "ih" | "it" => {
                let (value, count) = match args.as_slice() {
                    [value] => (value.to_string(), 1),
                    [value, count] => (value.to_string(), parse_count(name, count)?),
                    _ => return Err(ShellError::parse(format!("{} needs STR [N]", name))),
                };
                if name.eq_ignore_ascii_case("ih") {
                    Command::InsertHead { value, count }
                } else {
                    Command::InsertTail { value, count }
                }
            }
            "rh" => match args.as_slice() {
                [] => Command::RemoveHead { expected: None },
                [expected] => Command::RemoveHead {
                    expected: Some(expected.to_string()),
                },
                _ => return Err(ShellError::parse("rh takes at most one argument")),
            },
            "rhq" => no_args(name, &args, Command::RemoveHeadQuiet)?,
            "size" => match args.as_slice() {
                [] => Command::Size { expected: None },
                [expected] => Command::Size {
                    expected: Some(parse_count(name, expected)?),
                },
                _ => return Err(ShellError::parse("size takes at most one argument")),
            },
            "reverse" => no_args(name, &args, Command::Reverse)?,
            "sort" => no_args(name, &args, Command::Sort)?,
            "show" => no_args(name, &args, Command::Show)?,
            "stats" => no_args(name, &args, Command::Stats)?,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(ShellError::parse(format!("unknown command '{}'", other))),
        };

        Ok(command)
    }
}

fn no_args(name: &str, args: &[&str], command: Command) -> ShellResult<Command> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(ShellError::parse(format!("{} takes no arguments", name)))
    }
}

fn parse_count(name: &str, token: &str) -> ShellResult<usize> {
    token
        .parse()
        .map_err(|_| ShellError::parse(format!("{}: '{}' is not a valid count", name, token)))
}
