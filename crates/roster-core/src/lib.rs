//! roster-core: Roster engine, data model, and command handlers.
//!
//! This crate owns the student roster and every operation on it. Rendering
//! and notification display live in other crates and only consume what the
//! engine returns.

pub mod command;
pub mod engine;
pub mod error;
pub mod model;
pub mod statistics;
pub mod traits;

pub use command::{execute, Command, Outcome};
pub use engine::RosterEngine;
pub use error::{CommandError, RosterError};
pub use model::{sample_roster, Record, SAMPLE_SEED};
pub use statistics::Average;
pub use traits::{Notification, NotificationKind, NotificationSink, RecordingSink};
