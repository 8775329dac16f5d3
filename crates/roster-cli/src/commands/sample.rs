//! The `roster sample` command.

use std::path::PathBuf;

use anyhow::Result;

use roster_core::sample_roster;
use roster_report::{html, json, text, RosterView};

use crate::config::{load_config_from, OutputFormat};

pub fn execute(format: Option<OutputFormat>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let format = format.unwrap_or(config.default_format);
    let records = sample_roster();
    let view = RosterView::new(&records);
    let rendered = match format {
        OutputFormat::Text => text::render_table(&view),
        OutputFormat::Html => html::generate_html(&view),
        OutputFormat::Json => json::render_json(&view)?,
    };
    println!("{rendered}");
    Ok(())
}
