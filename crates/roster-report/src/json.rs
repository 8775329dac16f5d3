//! JSON roster snapshot.

use anyhow::Result;
use serde::Serialize;

use roster_core::{Notification, Record};

use crate::RosterView;

/// Serializable snapshot of a roster view.
#[derive(Debug, Serialize)]
pub struct RosterSnapshot<'a> {
    pub count: usize,
    pub students: &'a [Record],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<&'a Notification>,
}

impl<'a> From<&RosterView<'a>> for RosterSnapshot<'a> {
    fn from(view: &RosterView<'a>) -> Self {
        Self {
            count: view.records.len(),
            students: view.records,
            highlight: view.highlight,
            notification: view.notification,
        }
    }
}

/// Render the roster as pretty-printed JSON.
pub fn render_json(view: &RosterView<'_>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&RosterSnapshot::from(view))?)
}
