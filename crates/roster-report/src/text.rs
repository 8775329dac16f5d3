//! Terminal table renderer.

use comfy_table::{Cell, Table};

use crate::RosterView;

/// Marker shown in the first column of the highlighted row.
pub const HIGHLIGHT_MARKER: &str = "*";

/// Render the roster as a terminal table followed by the total line.
pub fn render_table(view: &RosterView<'_>) -> String {
    let mut table = Table::new();
    table.set_header(vec!["", "#", "Name", "Marks"]);

    for (i, record) in view.records.iter().enumerate() {
        let marker = if view.is_highlighted(i) {
            HIGHLIGHT_MARKER
        } else {
            ""
        };
        table.add_row(vec![
            Cell::new(marker),
            Cell::new(i + 1),
            Cell::new(&record.name),
            Cell::new(record.marks),
        ]);
    }

    format!("{table}\n{}", view.total_line())
}
