//! Line-protocol parser for the text rendering layer.
//!
//! # Responsibility
//! - Translate one input line into a core `Intent` or a local action.
//! - Keep parse feedback in this layer; the core stays silent.

use passionboard_core::{Intent, PassionId};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forward an intent to the core.
    Core(Intent),
    /// Redraw the board without changing state.
    Show,
    /// Print the command summary.
    Help,
    /// End the session.
    Quit,
}

/// Errors from parsing one input line.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Line was empty after trimming.
    Empty,
    /// First word is not a known command.
    UnknownCommand(String),
    /// Command recognized but an argument is missing.
    MissingArgument(&'static str),
    /// Argument present but not a number where one is required.
    InvalidNumber(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty line"),
            Self::UnknownCommand(word) => {
                write!(f, "unknown command `{word}`; try `help`")
            }
            Self::MissingArgument(name) => write!(f, "missing argument <{name}>"),
            Self::InvalidNumber(value) => write!(f, "expected a number, got `{value}`"),
        }
    }
}

impl Error for ParseError {}

/// Parses one input line into a command.
pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    match word {
        "open" => Ok(Command::Core(Intent::OpenCreateDialog)),
        "close" => Ok(Command::Core(Intent::CloseCreateDialog)),
        "title" => Ok(Command::Core(Intent::SetPendingTitle {
            text: rest.to_string(),
        })),
        "task" => Ok(Command::Core(Intent::SetPendingTask {
            text: rest.to_string(),
        })),
        "add" => Ok(Command::Core(Intent::CreatePassion {
            title: require(rest, "title")?.to_string(),
        })),
        "add-task" => {
            let (id_word, text) = split_leading_word(rest, "id")?;
            Ok(Command::Core(Intent::AddTask {
                passion_id: parse_id(id_word)?,
                text: require(text, "text")?.to_string(),
            }))
        }
        "rm" => {
            let (id_word, index_word) = split_leading_word(rest, "id")?;
            Ok(Command::Core(Intent::RemoveTask {
                passion_id: parse_id(id_word)?,
                index: parse_index(require(index_word, "index")?)?,
            }))
        }
        "toggle" => Ok(Command::Core(Intent::ToggleExpansion {
            passion_id: parse_id(require(rest, "id")?)?,
        })),
        "show" => Ok(Command::Show),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn require<'a>(value: &'a str, name: &'static str) -> Result<&'a str, ParseError> {
    if value.is_empty() {
        return Err(ParseError::MissingArgument(name));
    }
    Ok(value)
}

fn split_leading_word<'a>(
    value: &'a str,
    name: &'static str,
) -> Result<(&'a str, &'a str), ParseError> {
    let value = require(value, name)?;
    match value.split_once(char::is_whitespace) {
        Some((word, rest)) => Ok((word, rest.trim())),
        None => Ok((value, "")),
    }
}

fn parse_id(word: &str) -> Result<PassionId, ParseError> {
    word.parse::<PassionId>()
        .map_err(|_| ParseError::InvalidNumber(word.to_string()))
}

fn parse_index(word: &str) -> Result<usize, ParseError> {
    word.parse::<usize>()
        .map_err(|_| ParseError::InvalidNumber(word.to_string()))
}
