//! roster-report: Rendering of roster state.
//!
//! Turns the engine's records into an HTML document, a terminal table, or
//! JSON. Renderers only read; they never call back into the engine.

pub mod html;
pub mod json;
pub mod text;

use std::path::Path;

use anyhow::Result;
use roster_core::{Notification, Record};

/// Everything a renderer needs to draw one frame of the roster.
#[derive(Debug, Clone, Copy)]
pub struct RosterView<'a> {
    /// Records in display order.
    pub records: &'a [Record],
    /// Row to highlight (e.g. the top scorer).
    pub highlight: Option<usize>,
    /// Message to show alongside the table.
    pub notification: Option<&'a Notification>,
}

impl<'a> RosterView<'a> {
    pub fn new(records: &'a [Record]) -> Self {
        Self {
            records,
            highlight: None,
            notification: None,
        }
    }

    pub fn with_highlight(mut self, highlight: Option<usize>) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn with_notification(mut self, notification: Option<&'a Notification>) -> Self {
        self.notification = notification;
        self
    }

    pub fn total_line(&self) -> String {
        format!("Total students: {}", self.records.len())
    }

    fn is_highlighted(&self, index: usize) -> bool {
        self.highlight == Some(index)
    }
}

/// Write a rendered roster to `path`, creating parent directories.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}
