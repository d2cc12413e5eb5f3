//! Built-in sample graph.

use anyhow::Result;
use reweigh_core::graph::DiGraph;

use crate::commands::solve;
use crate::output::{self, Format};
use crate::{OutputFormat, SolveOptions};

const SAMPLE_EDGES: [(&str, &str, f64); 6] = [
    ("A", "B", 3.0),
    ("A", "C", 8.0),
    ("B", "C", 2.0),
    ("B", "D", 5.0),
    ("C", "D", 1.0),
    ("D", "A", -4.0),
];

/// Four vertices with one negative edge and no negative cycle.
pub fn sample_graph() -> reweigh_common::Result<DiGraph<String>> {
    DiGraph::from_edges(
        SAMPLE_EDGES
            .iter()
            .map(|&(source, target, weight)| (source.to_string(), target.to_string(), weight)),
    )
}

/// Run the demo command.
pub fn run(options: SolveOptions, format: OutputFormat, quiet: bool) -> Result<()> {
    if matches!(Format::from(format), Format::Table) {
        output::status("Sample graph:", quiet);
        for (source, target, weight) in SAMPLE_EDGES {
            output::status(&format!("  {source} -> {target}  {weight}"), quiet);
        }
        output::status("", quiet);
    }
    solve::solve_graph(sample_graph()?, options, format, quiet)
}
