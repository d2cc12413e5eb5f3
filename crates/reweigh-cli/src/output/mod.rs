//! Output formatting for CLI commands.

use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};
use reweigh_common::types::Weight;
use reweigh_engine::{DistanceTable, PathTable};
use serde::Serialize;

/// Output format selection.
#[derive(Clone, Copy)]
pub enum Format {
    Table,
    Json,
}

impl From<crate::OutputFormat> for Format {
    fn from(f: crate::OutputFormat) -> Self {
        match f {
            crate::OutputFormat::Table => Format::Table,
            crate::OutputFormat::Json => Format::Json,
        }
    }
}

/// Print data as pretty JSON (respects quiet mode).
pub fn print_json<T: Serialize>(data: &T, quiet: bool) -> anyhow::Result<()> {
    if !quiet {
        println!("{}", serde_json::to_string_pretty(data)?);
    }
    Ok(())
}

/// Create a styled table with consistent formatting.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.load_preset(comfy_table::presets::UTF8_FULL_CONDENSED);
    table
}

/// Add a header row to a table.
pub fn add_header(table: &mut Table, headers: &[&str]) {
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).fg(Color::Cyan))
            .collect::<Vec<_>>(),
    );
}

/// Print a key-value table (for summaries).
pub fn print_key_value_table(items: &[(&str, String)], quiet: bool) {
    if quiet {
        return;
    }

    let mut table = create_table();
    add_header(&mut table, &["Property", "Value"]);
    for (key, value) in items {
        table.add_row(vec![Cell::new(key).fg(Color::Green), Cell::new(value)]);
    }
    println!("{table}");
}

/// Formats one matrix cell.
///
/// `-` on the diagonal, `∞` for unreachable pairs, otherwise the distance
/// followed by the path when one is known.
pub fn matrix_cell(
    source: &str,
    target: &str,
    distance: Option<Weight>,
    path: Option<&[String]>,
) -> String {
    if source == target {
        return "-".to_string();
    }
    match (distance, path) {
        (None, _) => "∞".to_string(),
        (Some(d), None) => format!("{d}"),
        (Some(d), Some(path)) => format!("{d} ({})", path.join(" -> ")),
    }
}

/// Build the all-pairs matrix: one row per source, one column per target.
pub fn distance_matrix(
    vertices: &[String],
    distances: &DistanceTable<String>,
    paths: Option<&PathTable<String>>,
) -> Table {
    let mut table = create_table();
    let mut headers = vec!["from \\ to"];
    headers.extend(vertices.iter().map(String::as_str));
    add_header(&mut table, &headers);

    for source in vertices {
        let mut row = vec![Cell::new(source).fg(Color::Green)];
        for target in vertices {
            let text = matrix_cell(
                source,
                target,
                distances.get(source, target),
                paths.and_then(|p| p.get(source, target)),
            );
            let cell = Cell::new(text).set_alignment(CellAlignment::Right);
            row.push(if source != target && distances.get(source, target).is_none() {
                cell.fg(Color::DarkGrey)
            } else {
                cell
            });
        }
        table.add_row(row);
    }
    table
}

/// Print a status message (respects quiet mode).
pub fn status(msg: &str, quiet: bool) {
    if !quiet {
        println!("{msg}");
    }
}

/// Print a success message.
pub fn success(msg: &str, quiet: bool) {
    if !quiet {
        println!("✓ {msg}");
    }
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("✗ {msg}");
}
