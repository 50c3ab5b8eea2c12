//! Parsing user input into [`Command`]s.

use rbviz_ports::Key;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One user action against the session's tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Insert(Key),
    Delete(Key),
    Search(Key),
    Clear,
    Show,
    Check,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Insert(k) => write!(f, "insert {k}"),
            Command::Delete(k) => write!(f, "delete {k}"),
            Command::Search(k) => write!(f, "search {k}"),
            Command::Clear => write!(f, "clear"),
            Command::Show => write!(f, "show"),
            Command::Check => write!(f, "check"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (expected insert, delete, search, clear, show or check)")]
    Unknown(String),

    #[error("'{0}' needs a key")]
    MissingKey(&'static str),

    #[error("Please enter a valid integer.")]
    InvalidInteger(String),

    #[error("unexpected argument '{0}'")]
    TrailingInput(String),
}

/// Validate raw key input the way the entry box does.
pub fn parse_key(text: &str) -> Result<Key, CommandError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CommandError::Empty);
    }
    text.parse()
        .map_err(|_| CommandError::InvalidInteger(text.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // `#` starts a comment running to the end of the line.
        let code = s.split_once('#').map_or(s, |(code, _)| code);
        let mut words = code.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?;
        let verb = verb.to_ascii_lowercase();

        let keyed = |name: &'static str, arg: Option<&str>| -> Result<Key, CommandError> {
            match arg {
                Some(arg) => parse_key(arg),
                None => Err(CommandError::MissingKey(name)),
            }
        };

        let command = match verb.as_str() {
            "insert" | "i" | "add" => Command::Insert(keyed("insert", words.next())?),
            "delete" | "d" | "del" | "remove" => Command::Delete(keyed("delete", words.next())?),
            "search" | "s" | "find" => Command::Search(keyed("search", words.next())?),
            "clear" => Command::Clear,
            "show" | "print" => Command::Show,
            "check" => Command::Check,
            _ => return Err(CommandError::Unknown(verb)),
        };

        match words.next() {
            Some(extra) => Err(CommandError::TrailingInput(extra.to_string())),
            None => Ok(command),
        }
    }
}
