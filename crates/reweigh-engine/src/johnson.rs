//! Johnson's all-pairs shortest paths.
//!
//! ```text
//! Initialized -> Reweighting -> ReweightingFailed
//!                    |
//!                    v
//!            SingleSourcePhase -> Restoring -> Done
//! ```
//!
//! 1. Reweighting: potentials from a synthetic-source Bellman-Ford run, then
//!    every edge is rewritten in place to `w + h(u) - h(v)`.
//! 2. SingleSourcePhase: one Dijkstra run per vertex on the reweighted graph.
//! 3. Restoring: `d(u, v) = d'(u, v) - h(u) + h(v)`. Paths are unchanged.
//!
//! The graph keeps its reweighted weights after a successful run. Clone it
//! first if the original weights are still needed.

use crate::config::JohnsonConfig;
use crate::observer::{NoopObserver, ProgressObserver};
use crate::potential::{Potential, compute_potential, reweight, verify_non_negative};
use crate::table::{DistanceTable, PathTable};
use reweigh_common::types::{VertexId, Weight};
use reweigh_common::utils::error::Result;
use reweigh_common::utils::hash::FxIndexMap;
use reweigh_core::algorithms::dijkstra;
use reweigh_core::graph::DiGraph;

/// States of a Johnson run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JohnsonPhase {
    /// Ready to run.
    Initialized,
    /// Computing potentials and rewriting edge weights.
    Reweighting,
    /// A negative cycle (or internal fault) stopped the run. Terminal.
    ReweightingFailed,
    /// Running Dijkstra from every vertex.
    SingleSourcePhase,
    /// Converting reweighted distances back to true distances.
    Restoring,
    /// Tables are complete. Terminal.
    Done,
}

impl JohnsonPhase {
    /// Returns true for `ReweightingFailed` and `Done`.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::ReweightingFailed | Self::Done)
    }
}

/// Distance and path tables of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct JohnsonOutput<V: VertexId> {
    /// True shortest distances.
    pub distances: DistanceTable<V>,
    /// One shortest path per reachable pair. Empty when paths are not recorded.
    pub paths: PathTable<V>,
}

impl<V: VertexId> JohnsonOutput<V> {
    /// Splits the output into its tables.
    pub fn into_parts(self) -> (DistanceTable<V>, PathTable<V>) {
        (self.distances, self.paths)
    }
}

/// Johnson orchestrator.
///
/// # Examples
///
/// ```
/// use reweigh_core::graph::DiGraph;
/// use reweigh_engine::{Johnson, JohnsonConfig, JohnsonPhase};
///
/// let mut graph = DiGraph::from_edges([("a", "b", -2.0), ("b", "c", 3.0)])?;
///
/// let mut johnson = Johnson::with_config(JohnsonConfig::distances_only());
/// let output = johnson.run(&mut graph)?;
///
/// assert_eq!(output.distances.distance(&"a", &"c")?, 1.0);
/// assert_eq!(johnson.phase(), JohnsonPhase::Done);
/// # Ok::<(), reweigh_common::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Johnson<O = NoopObserver> {
    config: JohnsonConfig,
    observer: O,
    phase: JohnsonPhase,
}

impl Johnson<NoopObserver> {
    /// Creates an orchestrator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(JohnsonConfig::default())
    }

    /// Creates an orchestrator with the given configuration.
    #[must_use]
    pub fn with_config(config: JohnsonConfig) -> Self {
        Self {
            config,
            observer: NoopObserver,
            phase: JohnsonPhase::Initialized,
        }
    }
}

impl Default for Johnson<NoopObserver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> Johnson<O> {
    /// Replaces the observer.
    pub fn with_observer<P>(self, observer: P) -> Johnson<P> {
        Johnson {
            config: self.config,
            observer,
            phase: self.phase,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &JohnsonConfig {
        &self.config
    }

    /// Returns the phase reached by the latest run.
    #[must_use]
    pub fn phase(&self) -> JohnsonPhase {
        self.phase
    }

    /// Returns the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Consumes the orchestrator and returns the observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Computes all-pairs shortest paths.
    ///
    /// Takes exclusive access to `graph` for the whole run. On success every
    /// edge holds its reweighted (non-negative) weight; on
    /// [`NegativeCycleDetected`] the graph is left unchanged and no table is
    /// produced.
    ///
    /// # Errors
    ///
    /// Returns [`NegativeCycleDetected`] if the graph has a negative-weight
    /// cycle, and [`Internal`] if a reweighted weight overflows `f64`. The
    /// graph is unchanged in both cases. Any other error indicates an
    /// internal fault.
    ///
    /// [`NegativeCycleDetected`]: reweigh_common::Error::NegativeCycleDetected
    /// [`Internal`]: reweigh_common::Error::Internal
    pub fn run<V: VertexId>(&mut self, graph: &mut DiGraph<V>) -> Result<JohnsonOutput<V>>
    where
        O: ProgressObserver<V>,
    {
        self.enter::<V>(JohnsonPhase::Initialized);
        tracing::debug!(
            "Johnson: {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        self.enter::<V>(JohnsonPhase::Reweighting);
        let potential = match self.reweighting(graph) {
            Ok(potential) => potential,
            Err(e) => {
                if e.is_negative_cycle() {
                    tracing::warn!("Negative-weight cycle detected, no distances computed");
                }
                self.enter::<V>(JohnsonPhase::ReweightingFailed);
                return Err(e);
            }
        };
        self.observer.on_reweighted(graph);

        let graph: &DiGraph<V> = graph;

        self.enter::<V>(JohnsonPhase::SingleSourcePhase);
        let mut paths = PathTable::with_sources(graph.vertices());
        let mut reweighted = Vec::with_capacity(graph.vertex_count());
        for source in graph.vertices() {
            let result = dijkstra(graph, source)?;

            let mut row = FxIndexMap::default();
            let mut path_row = FxIndexMap::default();
            for (target, distance) in result.distances() {
                if target == source {
                    continue;
                }
                row.insert(target.clone(), distance);
                if self.config.record_paths {
                    let path = result.path_to(target)?;
                    self.observer.on_path_found(source, target, &path);
                    path_row.insert(target.clone(), path);
                }
            }

            self.observer.on_source_finished(source, row.len());
            tracing::debug!("Dijkstra from {:?} reached {} vertices", source, row.len());
            if self.config.record_paths {
                paths.insert_row(source.clone(), path_row);
            }
            reweighted.push((source.clone(), row));
        }

        self.enter::<V>(JohnsonPhase::Restoring);
        let distances = restore(graph, reweighted, &potential)?;

        self.enter::<V>(JohnsonPhase::Done);
        self.observer.on_complete(&distances, &paths);
        tracing::info!(
            "Johnson complete: {} reachable pairs over {} vertices",
            distances.len(),
            graph.vertex_count()
        );

        Ok(JohnsonOutput { distances, paths })
    }

    fn reweighting<V: VertexId>(&self, graph: &mut DiGraph<V>) -> Result<Potential<V>> {
        let potential = compute_potential(graph)?;
        let clamped = reweight(graph, &potential, self.config.reweight_tolerance)?;
        if clamped > 0 {
            tracing::warn!(
                "{} reweighted edges were slightly negative and clamped to zero",
                clamped
            );
        }
        if self.config.verify_reweighting {
            verify_non_negative(graph)?;
        }
        Ok(potential)
    }

    fn enter<V: VertexId>(&mut self, phase: JohnsonPhase)
    where
        O: ProgressObserver<V>,
    {
        self.phase = phase;
        ProgressObserver::<V>::on_phase(&mut self.observer, phase);
    }
}

/// Restores true distances row by row.
fn restore<V: VertexId>(
    graph: &DiGraph<V>,
    reweighted: Vec<(V, FxIndexMap<V, Weight>)>,
    potential: &Potential<V>,
) -> Result<DistanceTable<V>> {
    let mut distances = DistanceTable::with_sources(graph.vertices());
    for (source, row) in reweighted {
        let mut restored = FxIndexMap::with_capacity_and_hasher(row.len(), Default::default());
        for (target, distance) in row {
            let distance = potential.restore(&source, &target, distance)?;
            restored.insert(target, distance);
        }
        distances.insert_row(source, restored);
    }
    Ok(distances)
}

/// Computes all-pairs shortest paths with the default configuration.
///
/// Irreversibly rewrites the edge weights of `graph` (see [`Johnson::run`]).
///
/// # Errors
///
/// Returns [`NegativeCycleDetected`] if the graph has a negative-weight cycle.
///
/// [`NegativeCycleDetected`]: reweigh_common::Error::NegativeCycleDetected
pub fn run_johnson<V: VertexId>(
    graph: &mut DiGraph<V>,
) -> Result<(DistanceTable<V>, PathTable<V>)> {
    Johnson::new().run(graph).map(JohnsonOutput::into_parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use reweigh_common::Error;
    use reweigh_core::algorithms::bellman_ford;

    fn sample() -> DiGraph<&'static str> {
        DiGraph::from_edges([
            ("A", "B", 3.0),
            ("A", "C", 8.0),
            ("B", "C", 2.0),
            ("B", "D", 5.0),
            ("C", "D", 1.0),
            ("D", "A", -4.0),
        ])
        .unwrap()
    }

    fn path_weight<V: VertexId>(graph: &DiGraph<V>, path: &[V]) -> Weight {
        path.windows(2)
            .map(|pair| graph.edge_weight(&pair[0], &pair[1]).unwrap())
            .sum()
    }

    #[derive(Default)]
    struct Recorder {
        phases: Vec<JohnsonPhase>,
        reweighted_min: Option<Weight>,
        paths_found: usize,
        sources: Vec<(&'static str, usize)>,
        completed: usize,
    }

    impl ProgressObserver<&'static str> for Recorder {
        fn on_phase(&mut self, phase: JohnsonPhase) {
            self.phases.push(phase);
        }

        fn on_reweighted(&mut self, graph: &DiGraph<&'static str>) {
            self.reweighted_min = graph.edges().map(|e| e.weight).reduce(f64::min);
        }

        fn on_path_found(
            &mut self,
            source: &&'static str,
            target: &&'static str,
            path: &[&'static str],
        ) {
            assert_eq!(path.first(), Some(source));
            assert_eq!(path.last(), Some(target));
            self.paths_found += 1;
        }

        fn on_source_finished(&mut self, source: &&'static str, reached: usize) {
            self.sources.push((*source, reached));
        }

        fn on_complete(
            &mut self,
            distances: &DistanceTable<&'static str>,
            paths: &PathTable<&'static str>,
        ) {
            assert_eq!(distances.len(), paths.len());
            self.completed += 1;
        }
    }

    #[test]
    fn test_sample_graph_distances_and_paths() {
        let mut graph = sample();
        let (distances, paths) = run_johnson(&mut graph).unwrap();

        assert_eq!(distances.distance(&"A", &"D").unwrap(), 6.0);
        assert_eq!(paths.path(&"A", &"D").unwrap(), &["A", "B", "C", "D"]);

        assert_eq!(distances.distance(&"D", &"B").unwrap(), -1.0);
        assert_eq!(paths.path(&"D", &"B").unwrap(), &["D", "A", "B"]);

        assert_eq!(distances.distance(&"C", &"A").unwrap(), -3.0);
        assert_eq!(paths.path(&"C", &"A").unwrap(), &["C", "D", "A"]);

        // Strongly connected: every ordered pair of distinct vertices
        assert_eq!(distances.len(), 12);
        assert_eq!(paths.len(), 12);
    }

    #[test]
    fn test_graph_keeps_reweighted_weights() {
        let original = sample();
        let mut graph = original.clone();
        run_johnson(&mut graph).unwrap();

        assert!(graph.edges().all(|e| e.weight >= 0.0));
        assert_eq!(graph.edge_weight(&"D", &"A"), Some(0.0));
        assert_eq!(graph.edge_weight(&"A", &"C"), Some(4.0));
        assert_eq!(original.edge_weight(&"D", &"A"), Some(-4.0));
    }

    #[test]
    fn test_path_weights_match_distances() {
        let original = sample();
        let mut graph = original.clone();
        let (distances, paths) = run_johnson(&mut graph).unwrap();

        for (source, target, path) in paths.iter() {
            assert_eq!(
                path_weight(&original, path),
                distances.distance(source, target).unwrap()
            );
        }
    }

    #[test]
    fn test_negative_cycle_stops_the_run() {
        let mut graph = DiGraph::from_edges([
            ("A", "B", 1.0),
            ("B", "C", -3.0),
            ("C", "A", 1.0),
            ("C", "D", 2.0),
        ])
        .unwrap();
        let before = graph.clone();

        let mut johnson = Johnson::new();
        let err = johnson.run(&mut graph).unwrap_err();

        assert_eq!(err, Error::NegativeCycleDetected);
        assert_eq!(johnson.phase(), JohnsonPhase::ReweightingFailed);
        assert!(johnson.phase().is_terminal());
        for edge in before.edges() {
            assert_eq!(graph.edge_weight(edge.source, edge.target), Some(edge.weight));
        }
    }

    #[test]
    fn test_reweight_overflow_fails_before_any_write() {
        let mut graph =
            DiGraph::from_edges([(0, 1, -1e308), (2, 1, 1.5e308), (0, 2, 1.0)]).unwrap();
        let before = graph.clone();

        let mut johnson = Johnson::new();
        let err = johnson.run(&mut graph).unwrap_err();

        assert!(matches!(err, Error::Internal(_)));
        assert_eq!(johnson.phase(), JohnsonPhase::ReweightingFailed);
        for edge in before.edges() {
            assert_eq!(graph.edge_weight(edge.source, edge.target), Some(edge.weight));
        }
    }

    #[test]
    fn test_negative_self_loop() {
        let mut graph = DiGraph::from_edges([
            ("v", "v", -5.0),
            ("v", "w", 2.0),
            ("w", "x", -1.0),
        ])
        .unwrap();

        let config = JohnsonConfig::default().with_verify_reweighting(true);
        let mut johnson = Johnson::with_config(config);
        let output = johnson.run(&mut graph).unwrap();

        assert_eq!(output.distances.distance(&"v", &"v").unwrap(), 0.0);
        assert_eq!(output.distances.get(&"v", &"v"), None);
        assert_eq!(output.distances.distance(&"v", &"x").unwrap(), 1.0);
        assert_eq!(output.paths.path(&"v", &"x").unwrap(), &["v", "w", "x"]);
        // The self-loop survives reweighting unchanged
        assert_eq!(graph.edge_weight(&"v", &"v"), Some(-5.0));
    }

    #[test]
    fn test_unreachable_pairs_are_absent() {
        let mut graph = DiGraph::from_edges([(1, 2, -1.0), (3, 4, 2.0)]).unwrap();

        let (distances, paths) = run_johnson(&mut graph).unwrap();

        assert_eq!(distances.len(), 2);
        assert_eq!(distances.get(&1, &2), Some(-1.0));
        assert_eq!(distances.get(&1, &3), None);
        assert!(matches!(
            distances.distance(&2, &1),
            Err(Error::NoPathExists { .. })
        ));
        assert!(matches!(paths.path(&1, &4), Err(Error::NoPathExists { .. })));
        assert_eq!(distances.sources().count(), 4);
    }

    #[test]
    fn test_empty_graph() {
        let mut graph: DiGraph<u32> = DiGraph::new();
        let (distances, paths) = run_johnson(&mut graph).unwrap();

        assert!(distances.is_empty());
        assert!(paths.is_empty());
    }

    #[test]
    fn test_observer_notifications() {
        let mut graph = sample();
        let mut recorder = Recorder::default();

        let mut johnson = Johnson::new().with_observer(&mut recorder);
        let output = johnson.run(&mut graph).unwrap();
        drop(johnson);

        assert_eq!(
            recorder.phases,
            vec![
                JohnsonPhase::Initialized,
                JohnsonPhase::Reweighting,
                JohnsonPhase::SingleSourcePhase,
                JohnsonPhase::Restoring,
                JohnsonPhase::Done,
            ]
        );
        assert_eq!(recorder.reweighted_min, Some(0.0));
        assert_eq!(recorder.paths_found, output.paths.len());
        assert_eq!(
            recorder.sources,
            vec![("A", 3), ("B", 3), ("C", 3), ("D", 3)]
        );
        assert_eq!(recorder.completed, 1);
    }

    #[test]
    fn test_observer_sees_failure() {
        let mut graph = DiGraph::from_edges([("A", "B", -1.0), ("B", "A", -1.0)]).unwrap();

        let mut johnson = Johnson::new().with_observer(Recorder::default());
        assert!(johnson.run(&mut graph).is_err());

        let recorder = johnson.into_observer();
        assert_eq!(
            recorder.phases,
            vec![
                JohnsonPhase::Initialized,
                JohnsonPhase::Reweighting,
                JohnsonPhase::ReweightingFailed,
            ]
        );
        assert_eq!(recorder.reweighted_min, None);
        assert_eq!(recorder.completed, 0);
    }

    #[test]
    fn test_distances_only() {
        let mut graph = sample();
        let mut johnson = Johnson::with_config(JohnsonConfig::distances_only())
            .with_observer(Recorder::default());

        let output = johnson.run(&mut graph).unwrap();
        assert!(output.paths.is_empty());
        assert_eq!(output.distances.distance(&"A", &"D").unwrap(), 6.0);
        assert_eq!(johnson.observer().paths_found, 0);
    }

    #[test]
    fn test_orchestrator_is_reusable() {
        let mut johnson = Johnson::new();

        let mut bad = DiGraph::from_edges([(0, 1, -1.0), (1, 0, 0.0)]).unwrap();
        assert!(johnson.run(&mut bad).is_err());

        let mut good = DiGraph::from_edges([(0, 1, -1.0), (1, 0, 1.0)]).unwrap();
        let output = johnson.run(&mut good).unwrap();
        assert_eq!(output.distances.distance(&1, &0).unwrap(), 1.0);
        assert_eq!(johnson.phase(), JohnsonPhase::Done);
    }

    #[test]
    fn test_identical_graphs_give_identical_tables() {
        let mut first = sample();
        let mut second = sample();

        let a = run_johnson(&mut first).unwrap();
        let b = run_johnson(&mut second).unwrap();
        assert_eq!(a.0, b.0);
        assert_eq!(a.1, b.1);
    }

    #[test]
    fn test_restoration_identity() {
        let mut graph = sample();
        let potential = compute_potential(&graph).unwrap();

        let mut reweighted_graph = graph.clone();
        reweight(&mut reweighted_graph, &potential, 0.0).unwrap();
        let (distances, _) = run_johnson(&mut graph).unwrap();

        for (source, target, distance) in distances.iter() {
            let reweighted = dijkstra(&reweighted_graph, source)
                .unwrap()
                .distance(target)
                .unwrap();
            let h_u = potential.get(source).unwrap();
            let h_v = potential.get(target).unwrap();
            assert_eq!(distance, reweighted - h_u + h_v);
        }
    }

    /// Graphs without negative cycles: non-self-loop weights are
    /// `base + p(u) - p(v)` with `base >= 0`, so every cycle has weight
    /// `sum(base) >= 0`. Self-loops get arbitrary signed weights.
    fn acyclic_negative_graph() -> impl Strategy<Value = DiGraph<u8>> {
        (1u8..8)
            .prop_flat_map(|n| {
                (
                    Just(n),
                    prop::collection::vec(-10i32..10, n as usize),
                    prop::collection::vec((0..n, 0..n, 0i32..10), 0..24),
                )
            })
            .prop_map(|(n, potential, edges)| {
                let mut graph = DiGraph::new();
                for v in 0..n {
                    graph.add_vertex(v);
                }
                for (u, v, base) in edges {
                    let weight = if u == v {
                        base - 5
                    } else {
                        base + potential[u as usize] - potential[v as usize]
                    };
                    graph.add_edge(u, v, f64::from(weight)).unwrap();
                }
                graph
            })
    }

    proptest! {
        #[test]
        fn prop_matches_bellman_ford_from_every_vertex(original in acyclic_negative_graph()) {
            let mut graph = original.clone();
            let (distances, paths) = run_johnson(&mut graph).unwrap();

            for source in original.vertices() {
                let expected = bellman_ford(&original, source).unwrap();
                for target in original.vertices() {
                    if source == target {
                        continue;
                    }
                    prop_assert_eq!(distances.get(source, target), expected.distance(target));
                }
            }

            for (source, target, path) in paths.iter() {
                prop_assert_eq!(path.first(), Some(source));
                prop_assert_eq!(path.last(), Some(target));
                prop_assert_eq!(
                    Some(path_weight(&original, path)),
                    distances.get(source, target)
                );
            }
        }

        #[test]
        fn prop_reweighted_edges_are_non_negative(original in acyclic_negative_graph()) {
            let mut graph = original.clone();
            let potential = compute_potential(&graph).unwrap();
            reweight(&mut graph, &potential, 0.0).unwrap();

            prop_assert_eq!(graph.edge_count(), original.edge_count());
            for edge in graph.edges() {
                if edge.source != edge.target {
                    prop_assert!(edge.weight >= 0.0);
                }
            }
        }

        #[test]
        fn prop_negative_cycle_is_rejected(
            original in acyclic_negative_graph(),
            forward in -10i32..10,
            deficit in 1i32..5,
        ) {
            let mut graph = original.clone();
            graph.add_vertex(100);
            graph.add_vertex(101);
            graph.add_edge(100, 101, f64::from(forward)).unwrap();
            graph.add_edge(101, 100, f64::from(-forward - deficit)).unwrap();
            let before = graph.clone();

            let err = run_johnson(&mut graph).unwrap_err();
            prop_assert_eq!(err, Error::NegativeCycleDetected);
            for edge in before.edges() {
                prop_assert_eq!(graph.edge_weight(edge.source, edge.target), Some(edge.weight));
            }
        }

        #[test]
        fn prop_identical_graphs_agree(original in acyclic_negative_graph()) {
            let mut first = original.clone();
            let mut second = original.clone();

            let (d1, p1) = run_johnson(&mut first).unwrap();
            let (d2, p2) = run_johnson(&mut second).unwrap();
            prop_assert_eq!(d1, d2);
            prop_assert_eq!(p1, p2);
        }
    }
}
