//! HTML roster renderer.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use anyhow::Result;
use std::path::Path;

use roster_core::NotificationKind;

use crate::{write_output, RosterView};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML document for a roster view.
pub fn generate_html(view: &RosterView<'_>) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Student Marks</title>\n");
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str("<header>\n<h1>Student Marks</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\" id=\"total-students\">{}</p>\n",
        view.total_line()
    ));
    html.push_str("</header>\n");

    if let Some(note) = view.notification {
        let class = match note.kind {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        };
        html.push_str(&format!(
            "<div class=\"results-display {}\" id=\"results-display\"><span id=\"result-text\">{}</span> <small>{}</small></div>\n",
            class,
            html_escape(&note.message),
            note.created_at.format("%H:%M:%S UTC")
        ));
    }

    html.push_str("<table class=\"students\">\n");
    html.push_str("<thead><tr><th>Name</th><th>Marks</th></tr></thead>\n");
    html.push_str("<tbody id=\"students-tbody\">\n");
    for (i, record) in view.records.iter().enumerate() {
        let row_open = if view.is_highlighted(i) {
            "<tr class=\"highlight\">"
        } else {
            "<tr>"
        };
        html.push_str(&format!(
            "{}<td>{}</td><td>{}</td></tr>\n",
            row_open,
            html_escape(&record.name),
            record.marks
        ));
    }
    html.push_str("</tbody></table>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML rendering to a file.
pub fn write_html(view: &RosterView<'_>, path: &Path) -> Result<()> {
    write_output(path, &generate_html(view))
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --highlight: #fef3c7; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --highlight: #78350f; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
.meta { color: #6b7280; }
table { border-collapse: collapse; width: 100%; max-width: 40rem; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
tr.highlight { background: var(--highlight); font-weight: bold; }
.results-display { padding: 0.75rem 1rem; border-radius: 8px; border: 1px solid; max-width: 38rem; }
.results-display.success { background: rgba(34, 197, 94, 0.1); border-color: rgba(34, 197, 94, 0.3); }
.results-display.error { background: rgba(255, 84, 89, 0.1); border-color: rgba(255, 84, 89, 0.3); }
"#;
