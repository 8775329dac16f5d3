//! Roster error types.
//!
//! Every engine operation either succeeds or returns one of these kinds.
//! None of them is fatal: the roster is left untouched and the caller decides
//! how to surface the failure.

use thiserror::Error;

/// Errors returned by roster engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// The operation needs at least one record.
    #[error("the roster is empty")]
    EmptyRoster,

    /// The candidate name was blank after trimming.
    #[error("student name must not be blank")]
    InvalidName,

    /// The candidate marks were not an integer in 0..=100.
    #[error("invalid marks '{input}': expected an integer between 0 and 100")]
    InvalidMarks { input: String },

    /// A record with the same name (ignoring case) already exists.
    #[error("a student named '{name}' already exists")]
    DuplicateName { name: String },
}

impl RosterError {
    /// Stable identifier for machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            RosterError::EmptyRoster => "empty_roster",
            RosterError::InvalidName => "invalid_name",
            RosterError::InvalidMarks { .. } => "invalid_marks",
            RosterError::DuplicateName { .. } => "duplicate_name",
        }
    }

    /// Returns `true` if the error was caused by rejected user input rather
    /// than by the state of the roster.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, RosterError::EmptyRoster)
    }
}

/// Errors raised while parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The line held nothing but whitespace.
    #[error("empty command")]
    Empty,

    /// The first word did not name a known command.
    #[error("unknown command: {0}")]
    Unknown(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
