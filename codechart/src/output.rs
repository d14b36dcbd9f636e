//! Human-readable rendering of a flowchart for the terminal.

use crate::graph::{Bucket, Flowchart};
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use std::io::Write;

fn create_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers);

    if cfg!(test) {
        table.set_width(120);
    }
    table
}

fn bucket_color(bucket: Bucket) -> Color {
    match bucket {
        Bucket::High => Color::Red,
        Bucket::Medium => Color::Yellow,
        Bucket::Low => Color::Blue,
    }
}

/// Prints the node table and edge list.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_flowchart(writer: &mut impl Write, flowchart: &Flowchart) -> std::io::Result<()> {
    writeln!(writer, "\n{}", "Nodes".bold().underline())?;
    let mut table = create_table(vec!["Id", "Label", "Type", "Score", "Bucket"]);
    for node in &flowchart.nodes {
        table.add_row(vec![
            Cell::new(&node.id),
            Cell::new(&node.label),
            Cell::new(node.kind),
            Cell::new(node.complexity_score),
            Cell::new(node.complexity_bucket).fg(bucket_color(node.complexity_bucket)),
        ]);
    }
    writeln!(writer, "{table}")?;

    writeln!(writer, "\n{}", "Edges".bold().underline())?;
    for edge in &flowchart.edges {
        match &edge.label {
            Some(label) => writeln!(writer, "  {} -> {} [{}]", edge.from, edge.to, label)?,
            None => writeln!(writer, "  {} -> {}", edge.from, edge.to)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::build_flowchart;

    #[test]
    fn test_print_flowchart_lists_every_node_and_edge() {
        let chart = build_flowchart("def f():\n    if x:\n        return 1\n");
        let mut buffer = Vec::new();
        print_flowchart(&mut buffer, &chart).expect("write to buffer");
        let rendered = String::from_utf8(buffer).expect("utf-8 output");

        for node in &chart.nodes {
            assert!(rendered.contains(&node.id), "missing {}", node.id);
        }
        assert!(rendered.contains("[No]"));
    }
}
