//! Progress bar driven by Johnson observer callbacks.

use indicatif::{ProgressBar, ProgressStyle};
use reweigh_core::graph::DiGraph;
use reweigh_engine::{DistanceTable, JohnsonPhase, PathTable, ProgressObserver};

const TEMPLATE: &str = "{spinner:.green} {msg:<24} [{bar:32.cyan/blue}] {pos}/{len} sources";

/// Shows one tick per finished Dijkstra source. Hidden in quiet mode.
pub struct ProgressBarObserver {
    bar: ProgressBar,
    sources_done: usize,
    paths_found: usize,
}

impl ProgressBarObserver {
    /// Creates an observer for a graph with `vertex_count` sources.
    pub fn new(vertex_count: usize, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            let style = ProgressStyle::with_template(TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> ");
            ProgressBar::new(vertex_count as u64).with_style(style)
        };
        Self {
            bar,
            sources_done: 0,
            paths_found: 0,
        }
    }

    /// Returns the number of finished Dijkstra sources.
    pub fn sources_done(&self) -> usize {
        self.sources_done
    }

    /// Returns the number of paths reported so far.
    pub fn paths_found(&self) -> usize {
        self.paths_found
    }
}

impl ProgressObserver<String> for ProgressBarObserver {
    fn on_phase(&mut self, phase: JohnsonPhase) {
        let message = match phase {
            JohnsonPhase::Initialized => "Starting",
            JohnsonPhase::Reweighting => "Computing potentials",
            JohnsonPhase::ReweightingFailed => {
                self.bar.abandon_with_message("Negative cycle");
                return;
            }
            JohnsonPhase::SingleSourcePhase => "Running Dijkstra",
            JohnsonPhase::Restoring => "Restoring distances",
            JohnsonPhase::Done => "Done",
        };
        self.bar.set_message(message);
        tracing::debug!("Phase {:?}", phase);
    }

    fn on_reweighted(&mut self, graph: &DiGraph<String>) {
        tracing::debug!("Reweighted {} edges", graph.edge_count());
    }

    fn on_path_found(&mut self, _source: &String, _target: &String, _path: &[String]) {
        self.paths_found += 1;
    }

    fn on_source_finished(&mut self, _source: &String, _reached: usize) {
        self.sources_done += 1;
        self.bar.inc(1);
    }

    fn on_complete(&mut self, _distances: &DistanceTable<String>, _paths: &PathTable<String>) {
        self.bar.finish_and_clear();
    }
}
