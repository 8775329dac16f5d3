//! Collaborator seams around the engine.
//!
//! The engine reports results by return value only. Whatever displays those
//! results as transient messages implements [`NotificationSink`]; the CLI
//! provides a timer-backed implementation, and [`RecordingSink`] keeps
//! everything in memory for tests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::command::{Command, Outcome};
use crate::error::RosterError;

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// Whether a notification reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
            created_at: Utc::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
            created_at: Utc::now(),
        }
    }

    /// Build the notification for a command's result.
    pub fn for_result(command: &Command, result: &Result<Outcome, RosterError>) -> Self {
        match result {
            Ok(outcome) => Self::success(outcome.message()),
            Err(e) => Self::error(command.failure_message(e)),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

// ---------------------------------------------------------------------------
// Notification sink trait
// ---------------------------------------------------------------------------

/// Displays one notification at a time.
///
/// A new notification supersedes the current one, including any pending
/// auto-dismissal.
pub trait NotificationSink {
    /// Show a notification, replacing the current one.
    fn notify(&mut self, notification: Notification);

    /// Clear the current notification now.
    fn dismiss(&mut self);

    /// The notification currently on display, if any.
    fn current(&self) -> Option<Notification>;
}

/// In-memory sink that never expires anything. Keeps a full history.
#[derive(Debug, Default)]
pub struct RecordingSink {
    history: Vec<Notification>,
    showing: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every notification received, oldest first.
    pub fn history(&self) -> &[Notification] {
        &self.history
    }

    /// Messages only, oldest first.
    pub fn messages(&self) -> Vec<&str> {
        self.history.iter().map(|n| n.message.as_str()).collect()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&mut self, notification: Notification) {
        self.history.push(notification);
        self.showing = true;
    }

    fn dismiss(&mut self) {
        self.showing = false;
    }

    fn current(&self) -> Option<Notification> {
        if self.showing {
            self.history.last().cloned()
        } else {
            None
        }
    }
}
