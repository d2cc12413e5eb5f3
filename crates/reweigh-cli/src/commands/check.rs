//! Graph check command.

use std::path::Path;

use anyhow::Result;
use reweigh_common::Error;
use reweigh_core::graph::DiGraph;
use reweigh_engine::compute_potential;
use serde::Serialize;

use crate::OutputFormat;
use crate::input;
use crate::output::{self, Format};

/// Check result output.
#[derive(Serialize, Debug)]
struct CheckOutput {
    vertices: usize,
    edges: usize,
    negative_edges: usize,
    self_loops: usize,
    negative_cycle: bool,
    min_potential: Option<f64>,
}

fn summarize(graph: &DiGraph<String>) -> Result<CheckOutput> {
    let (negative_cycle, min_potential) = match compute_potential(graph) {
        Ok(potential) => (false, potential.iter().map(|(_, h)| h).reduce(f64::min)),
        Err(Error::NegativeCycleDetected) => (true, None),
        Err(e) => return Err(e.into()),
    };

    Ok(CheckOutput {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        negative_edges: graph.edges().filter(|e| e.weight < 0.0).count(),
        self_loops: graph.edges().filter(|e| e.source == e.target).count(),
        negative_cycle,
        min_potential,
    })
}

/// Run the check command.
pub fn run(path: &Path, format: OutputFormat, quiet: bool) -> Result<()> {
    let graph = input::load(path)?;
    let output = summarize(&graph)?;

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(&output, quiet)?,
        Format::Table => {
            let items = vec![
                ("Vertices", output.vertices.to_string()),
                ("Edges", output.edges.to_string()),
                ("Negative edges", output.negative_edges.to_string()),
                ("Self-loops", output.self_loops.to_string()),
                (
                    "Min potential",
                    output
                        .min_potential
                        .map_or_else(|| "-".to_string(), |h| h.to_string()),
                ),
            ];
            output::print_key_value_table(&items, quiet);

            if output.negative_cycle {
                output::error("Graph contains a negative-weight cycle");
            } else {
                output::success("No negative-weight cycle", quiet);
            }
        }
    }

    // Return error exit code if a cycle was found
    if output.negative_cycle {
        std::process::exit(1);
    }

    Ok(())
}
