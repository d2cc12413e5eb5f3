//! Single-source shortest path solvers.
//!
//! - [`bellman_ford()`] - Negative weights allowed, detects negative cycles
//! - [`dijkstra()`] - Non-negative weights, label-setting over [`PriorityQueue`]
//!
//! [`PriorityQueue`]: crate::queue::PriorityQueue

mod bellman_ford;
mod dijkstra;

pub use bellman_ford::{BellmanFordResult, bellman_ford};
pub use dijkstra::{DijkstraResult, dijkstra, dijkstra_path};
