//! Table rendering.
//!
//! Two-column metadata tables render as plain `label: value` lines;
//! everything else becomes a standard wikitable. Merged cells are emitted
//! by replicating the origin text into each continuation slot, which
//! keeps the markup rectangular and diff-friendly.

use crate::model::TableModel;

/// Render a resolved grid as wikitext.
pub fn render_table(table: &TableModel) -> String {
    if table.is_field_table() {
        return render_field_table(table);
    }
    render_wikitable(table)
}

fn render_field_table(table: &TableModel) -> String {
    let mut lines = Vec::with_capacity(table.height());
    for r in 0..table.height() {
        lines.push(format!("{}: {}", table.text_at(r, 0), table.text_at(r, 1)));
    }
    lines.join("\n")
}

fn render_wikitable(table: &TableModel) -> String {
    let mut lines = vec![String::from("{| class=\"wikitable\"")];
    for r in 0..table.height() {
        lines.push(String::from("|-"));
        for c in 0..table.width() {
            lines.push(format!("| {}", table.text_at(r, c)));
        }
    }
    lines.push(String::from("|}"));
    lines.join("\n")
}
