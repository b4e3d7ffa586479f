use comfy_table::{presets, CellAlignment, ContentArrangement, Table};
use serde::Serialize;

use crate::app::GlobalOptions;

/// Print `data` as JSON (if `--json`) or call `display_fn` for human-readable output.
pub fn print_output<T: Serialize>(
    data: &T,
    opts: &GlobalOptions,
    display_fn: impl FnOnce(&T),
) -> anyhow::Result<()> {
    if opts.json {
        let json = serde_json::to_string_pretty(data)?;
        println!("{json}");
    } else {
        display_fn(data);
    }
    Ok(())
}

/// Column alignment for tabular output.
#[derive(Clone, Copy)]
pub enum Align {
    Left,
    Right,
}

/// Borderless route and node tables for the text views.
///
/// `paths` lists one ranked route per row (rank, weight, hops, node sequence) and
/// `info` prints the adjacency and distance tables through it. Numeric columns are
/// right-aligned so weights line up, and the last column is left unpadded so long
/// routes never leave trailing whitespace.
pub struct TabWriter {
    table: Table,
    indent: String,
}

impl TabWriter {
    /// Create a new `TabWriter` from `(header, alignment)` column definitions.
    pub fn new(columns: &[(&str, Align)]) -> Self {
        let mut table = Table::new();
        table
            .load_preset(presets::NOTHING)
            .set_content_arrangement(ContentArrangement::Dynamic);

        let headers: Vec<&str> = columns.iter().map(|(name, _)| *name).collect();
        table.set_header(headers);

        // Outer columns get no padding on their outer side
        let last = columns.len().saturating_sub(1);
        for (i, (_, align)) in columns.iter().enumerate() {
            let cell_align = match align {
                Align::Left => CellAlignment::Left,
                Align::Right => CellAlignment::Right,
            };
            if let Some(col) = table.column_mut(i) {
                col.set_cell_alignment(cell_align);
                let pad_left = if i == 0 { 0 } else { 1 };
                let pad_right = if i == last { 0 } else { 1 };
                col.set_padding((pad_left, pad_right));
            }
        }

        Self {
            table,
            indent: String::new(),
        }
    }

    /// Set the indent prefix for every line.
    pub fn indent(mut self, prefix: &str) -> Self {
        self.indent = prefix.to_string();
        self
    }

    /// Add a row. Values are given in column order.
    pub fn row(&mut self, values: Vec<String>) {
        self.table.add_row(values);
    }

    /// Render the table, one trimmed line per row, header first.
    pub fn render(&self) -> Vec<String> {
        self.table
            .to_string()
            .lines()
            .map(|line| format!("{}{}", self.indent, line.trim_end()))
            .collect()
    }

    /// Print the table to stdout.
    pub fn print(&self) {
        for line in self.render() {
            println!("{line}");
        }
    }
}

/// Horizontal rule used to frame text panels.
pub fn rule() -> String {
    "=".repeat(40)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_writer_alignment() {
        let mut tw = TabWriter::new(&[("Node", Align::Left), ("Degree", Align::Right)]).indent("  ");
        tw.row(vec!["14".to_string(), "4".to_string()]);
        tw.row(vec!["harbor".to_string(), "3".to_string()]);

        let lines = tw.render();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.starts_with("  ")));
        assert!(lines[0].contains("Node"));
        assert!(lines[1].ends_with('4'));
        assert!(lines[2].starts_with("  harbor"));
    }

    #[test]
    fn test_rule() {
        assert_eq!(rule().len(), 40);
    }
}
