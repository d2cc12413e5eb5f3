//! All-pairs solve command.

use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Cell, Color};
use reweigh_core::graph::DiGraph;
use reweigh_engine::{DistanceTable, Johnson, JohnsonConfig, JohnsonOutput, PathTable};
use serde::Serialize;

use crate::output::{self, Format};
use crate::progress::ProgressBarObserver;
use crate::{OutputFormat, SolveOptions, input};

/// Edge weight before and after reweighting.
#[derive(Serialize, Debug, PartialEq)]
pub struct ReweightedEdge {
    source: String,
    target: String,
    weight: f64,
    reweighted: f64,
}

/// Solve result output.
#[derive(Serialize)]
struct SolveOutput<'a> {
    vertices: &'a [String],
    distances: &'a DistanceTable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    paths: Option<&'a PathTable<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reweighted_edges: Option<&'a [ReweightedEdge]>,
}

/// A completed run with everything needed for printing.
#[derive(Debug)]
pub struct Solved {
    vertices: Vec<String>,
    output: JohnsonOutput<String>,
    reweighted: Option<Vec<ReweightedEdge>>,
    record_paths: bool,
}

/// Run the solve command.
pub fn run(path: &Path, options: SolveOptions, format: OutputFormat, quiet: bool) -> Result<()> {
    let graph = input::load(path)?;
    tracing::info!(
        "Loaded {} vertices and {} edges from {}",
        graph.vertex_count(),
        graph.edge_count(),
        path.display()
    );
    solve_graph(graph, options, format, quiet)
}

/// Solve `graph` and print the result.
pub fn solve_graph(
    graph: DiGraph<String>,
    options: SolveOptions,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let fmt: Format = format.into();
    let hide_progress = quiet || matches!(fmt, Format::Json);
    let solved = solve(graph, options, hide_progress)?;
    print(&solved, fmt, quiet)
}

/// Runs Johnson on `graph`, keeping the original weights when requested.
pub fn solve(graph: DiGraph<String>, options: SolveOptions, quiet: bool) -> Result<Solved> {
    let original = options.show_reweighted.then(|| graph.clone());
    let mut graph = graph;

    let config = if options.no_paths {
        JohnsonConfig::distances_only()
    } else {
        JohnsonConfig::default()
    };
    let record_paths = config.record_paths;

    let observer = ProgressBarObserver::new(graph.vertex_count(), quiet);
    let mut johnson = Johnson::with_config(config).with_observer(observer);
    let output = johnson
        .run(&mut graph)
        .context("cannot compute shortest paths")?;
    let observer = johnson.into_observer();
    tracing::debug!(
        "Finished {} Dijkstra sources, {} paths recorded",
        observer.sources_done(),
        observer.paths_found()
    );

    let reweighted = original.map(|original| {
        original
            .edges()
            .filter_map(|edge| {
                let reweighted = graph.edge_weight(edge.source, edge.target)?;
                Some(ReweightedEdge {
                    source: edge.source.clone(),
                    target: edge.target.clone(),
                    weight: edge.weight,
                    reweighted,
                })
            })
            .collect()
    });

    Ok(Solved {
        vertices: graph.vertices().cloned().collect(),
        output,
        reweighted,
        record_paths,
    })
}

fn print(solved: &Solved, fmt: Format, quiet: bool) -> Result<()> {
    let paths = solved.record_paths.then_some(&solved.output.paths);

    match fmt {
        Format::Json => {
            let output = SolveOutput {
                vertices: &solved.vertices,
                distances: &solved.output.distances,
                paths,
                reweighted_edges: solved.reweighted.as_deref(),
            };
            output::print_json(&output, quiet)?;
        }
        Format::Table => {
            if quiet {
                return Ok(());
            }

            if let Some(edges) = &solved.reweighted {
                let mut table = output::create_table();
                output::add_header(&mut table, &["Source", "Target", "Weight", "Reweighted"]);
                for edge in edges {
                    table.add_row(vec![
                        Cell::new(&edge.source).fg(Color::Green),
                        Cell::new(&edge.target).fg(Color::Green),
                        Cell::new(edge.weight),
                        Cell::new(edge.reweighted),
                    ]);
                }
                println!("Reweighted edges:\n{table}\n");
            }

            let matrix =
                output::distance_matrix(&solved.vertices, &solved.output.distances, paths);
            println!("{matrix}");

            output::success(
                &format!(
                    "{} vertices, {} reachable pairs",
                    solved.vertices.len(),
                    solved.output.distances.len()
                ),
                quiet,
            );
        }
    }

    Ok(())
}
