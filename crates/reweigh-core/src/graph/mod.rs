//! Graph model.
//!
//! - [`DiGraph`] - Directed weighted graph with at most one edge per ordered pair
//! - [`SyntheticSource`] - Read-only view adding a zero-weight source vertex
//! - [`WeightedDigraph`] - The read interface solvers are written against

mod digraph;
mod synthetic;

pub use digraph::{DiGraph, EdgeRef};
pub use synthetic::{Augmented, SyntheticSource};

use reweigh_common::types::{VertexId, Weight};

/// Read access to a directed weighted graph.
///
/// Vertices are yielded by value so that views can synthesize vertices
/// that are not stored anywhere (see [`SyntheticSource`]).
pub trait WeightedDigraph {
    /// Vertex identifier type.
    type Vertex: VertexId;

    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Returns true if the vertex is in the graph.
    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool;

    /// Iterates over all vertices.
    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_;

    /// Iterates over all edges as `(source, target, weight)`.
    fn edges(&self) -> impl Iterator<Item = (Self::Vertex, Self::Vertex, Weight)> + '_;
}
