//! # reweigh-core
//!
//! Core layer for Reweigh: the directed weighted graph and the
//! single-source shortest path solvers built on it.
//!
//! This crate depends only on `reweigh-common`.
//!
//! ## Modules
//!
//! - [`graph`] - Directed weighted graph and the synthetic-source view
//! - [`queue`] - Min-priority queue with decrease-key
//! - [`algorithms`] - Bellman-Ford and Dijkstra

#![warn(missing_docs)]

pub mod algorithms;
pub mod graph;
pub mod queue;

// Re-export commonly used types
pub use algorithms::{BellmanFordResult, DijkstraResult, bellman_ford, dijkstra, dijkstra_path};
pub use graph::{Augmented, DiGraph, EdgeRef, SyntheticSource, WeightedDigraph};
pub use queue::PriorityQueue;
