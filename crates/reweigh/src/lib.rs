//! # Reweigh
//!
//! All-pairs shortest paths on directed graphs whose edges may have negative
//! weights, using Johnson's algorithm.
//!
//! Start with [`run_johnson`]. It takes a [`DiGraph`], reweights its edges in
//! place so they are all non-negative, runs Dijkstra from every vertex, and
//! returns a [`DistanceTable`] and a [`PathTable`]. A negative-weight cycle
//! makes it fail with [`Error::NegativeCycleDetected`].
//!
//! ## Quick Start
//!
//! ```rust
//! use reweigh::{DiGraph, run_johnson};
//!
//! let mut graph = DiGraph::from_edges([
//!     ("A", "B", 3.0),
//!     ("A", "C", 8.0),
//!     ("B", "C", 2.0),
//!     ("B", "D", 5.0),
//!     ("C", "D", 1.0),
//!     ("D", "A", -4.0),
//! ])?;
//!
//! // Weights are rewritten in place; clone first to keep the originals
//! let original = graph.clone();
//! let (distances, paths) = run_johnson(&mut graph)?;
//!
//! assert_eq!(distances.distance(&"C", &"A")?, -3.0);
//! assert_eq!(paths.path(&"C", &"A")?, &["C", "D", "A"]);
//! assert_eq!(original.edge_weight(&"D", &"A"), Some(-4.0));
//! # Ok::<(), reweigh::Error>(())
//! ```
//!
//! For configured runs or progress callbacks use [`Johnson`] with a
//! [`JohnsonConfig`] and a [`ProgressObserver`].

// Re-export the orchestrator API
pub use reweigh_engine::{
    DistanceTable, Johnson, JohnsonConfig, JohnsonOutput, JohnsonPhase, NoopObserver, PathTable,
    ProgressObserver, TracingObserver, run_johnson,
};

// Re-export the graph model and single-source solvers
pub use reweigh_core::{
    BellmanFordResult, DiGraph, DijkstraResult, PriorityQueue, WeightedDigraph, bellman_ford,
    dijkstra, dijkstra_path,
};

// Re-export core types
pub use reweigh_common::{Error, QueueError, Result, VertexId, Weight};
