//! Command handlers: the explicit bridge between an input source and the
//! engine.
//!
//! A [`Command`] is parsed from a line of text, executed against a
//! [`RosterEngine`], and produces either an [`Outcome`] or a [`RosterError`].
//! Both carry the user-facing message the caller should display.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::engine::RosterEngine;
use crate::error::{CommandError, RosterError};
use crate::model::Record;
use crate::statistics::Average;

/// An operation requested by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Count,
    Highest,
    Average,
    Sort,
    Reset,
    RemoveLast,
    /// Raw form input; validation happens in the engine.
    Add { name: String, marks: String },
}

impl Command {
    /// Canonical command word, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Command::List => "list",
            Command::Count => "count",
            Command::Highest => "highest",
            Command::Average => "average",
            Command::Sort => "sort",
            Command::Reset => "reset",
            Command::RemoveLast => "remove-last",
            Command::Add { .. } => "add",
        }
    }

    /// The message to show when this command fails with `error`.
    pub fn failure_message(&self, error: &RosterError) -> String {
        match error {
            RosterError::EmptyRoster => match self {
                Command::Average => "No students to calculate average!",
                Command::Sort => "No students to sort!",
                Command::RemoveLast => "No students to remove!",
                _ => "No students to display!",
            }
            .to_string(),
            RosterError::InvalidName => "Please enter a student name!".to_string(),
            RosterError::InvalidMarks { .. } => "Please enter valid marks (0-100)!".to_string(),
            RosterError::DuplicateName { .. } => {
                "A student with this name already exists!".to_string()
            }
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Add { name, marks } => write!(f, "add {name} {marks}"),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parse a command line.
    ///
    /// `add` takes the marks as its last word and everything in between as
    /// the name, so `add Mary Ann 81` adds "Mary Ann". A bare `add Neha`
    /// yields empty marks, which the engine rejects.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        if word.is_empty() {
            return Err(CommandError::Empty);
        }

        match word.to_lowercase().as_str() {
            "list" | "show" => Ok(Command::List),
            "count" | "total" => Ok(Command::Count),
            "highest" | "max" => Ok(Command::Highest),
            "average" | "avg" => Ok(Command::Average),
            "sort" => Ok(Command::Sort),
            "reset" => Ok(Command::Reset),
            "remove-last" | "remove" | "pop" => Ok(Command::RemoveLast),
            "add" => {
                let (name, marks) = match rest.rsplit_once(char::is_whitespace) {
                    Some((name, marks)) => (name.trim(), marks),
                    None if rest.parse::<i64>().is_ok() => ("", rest),
                    None => (rest, ""),
                };
                Ok(Command::Add {
                    name: name.to_string(),
                    marks: marks.to_string(),
                })
            }
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// The successful result of a command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Listed { count: usize },
    Counted { count: usize },
    Highest { index: usize, record: Record },
    Average { average: Average },
    Sorted,
    Reset,
    Removed { record: Record },
    Added { record: Record },
}

impl Outcome {
    /// The message to show the user.
    pub fn message(&self) -> String {
        match self {
            Outcome::Listed { count } | Outcome::Counted { count } => {
                format!("Total students: {count}")
            }
            Outcome::Highest { record, .. } => format!(
                "Highest marks: {} with {} marks",
                record.name, record.marks
            ),
            Outcome::Average { average } => format!("Class average: {average} marks"),
            Outcome::Sorted => "Students sorted by marks (highest to lowest)".to_string(),
            Outcome::Reset => "Sample data restored".to_string(),
            Outcome::Removed { record } => format!("Removed {} from the list", record.name),
            Outcome::Added { record } => format!(
                "Added {} with {} marks to the list",
                record.name, record.marks
            ),
        }
    }

    /// Row to highlight in the rendered roster.
    pub fn highlight(&self) -> Option<usize> {
        match self {
            Outcome::Highest { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Whether the roster changed and should be re-rendered.
    pub fn changed_roster(&self) -> bool {
        matches!(
            self,
            Outcome::Sorted | Outcome::Reset | Outcome::Removed { .. } | Outcome::Added { .. }
        )
    }
}

/// Run a command against the engine.
pub fn execute(engine: &mut RosterEngine, command: &Command) -> Result<Outcome, RosterError> {
    let outcome = match command {
        Command::List => Outcome::Listed {
            count: engine.count(),
        },
        Command::Count => Outcome::Counted {
            count: engine.count(),
        },
        Command::Highest => {
            let (index, record) = engine.highest_position()?;
            Outcome::Highest {
                index,
                record: record.clone(),
            }
        }
        Command::Average => Outcome::Average {
            average: engine.average()?,
        },
        Command::Sort => {
            engine.sort_descending()?;
            Outcome::Sorted
        }
        Command::Reset => {
            engine.reset();
            Outcome::Reset
        }
        Command::RemoveLast => Outcome::Removed {
            record: engine.remove_last()?,
        },
        Command::Add { name, marks } => Outcome::Added {
            record: engine.add_from_input(name, marks)?.clone(),
        },
    };
    tracing::debug!(command = command.name(), "command executed");
    Ok(outcome)
}
