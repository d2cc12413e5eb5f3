//! Synthetic source view.
//!
//! Johnson's reweighting needs a shortest-path run from a vertex with a
//! zero-weight edge to every real vertex. Vertex identifiers are generic, so
//! instead of inventing an identifier and mutating the caller's graph, the
//! source is attached through a borrowed view over an augmented vertex type.

use super::{DiGraph, WeightedDigraph};
use reweigh_common::types::{VertexId, Weight};
use std::iter;

/// Vertex of a graph extended with one synthetic vertex.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Augmented<V> {
    /// The synthetic source.
    Synthetic,
    /// A vertex of the underlying graph.
    Vertex(V),
}

impl<V> Augmented<V> {
    /// Returns the underlying vertex, or `None` for the synthetic source.
    pub fn into_vertex(self) -> Option<V> {
        match self {
            Self::Synthetic => None,
            Self::Vertex(v) => Some(v),
        }
    }
}

/// A graph with a synthetic source attached.
///
/// The source has a zero-weight edge to every vertex of the underlying
/// graph and no incoming edges. Dropping the view detaches it.
#[derive(Debug, Clone, Copy)]
pub struct SyntheticSource<'g, V: VertexId> {
    graph: &'g DiGraph<V>,
}

impl<'g, V: VertexId> SyntheticSource<'g, V> {
    /// Attaches a synthetic source to `graph`.
    #[must_use]
    pub fn attach(graph: &'g DiGraph<V>) -> Self {
        Self { graph }
    }

    /// Returns the synthetic source vertex.
    #[must_use]
    pub fn source(&self) -> Augmented<V> {
        Augmented::Synthetic
    }

    /// Returns the underlying graph.
    #[must_use]
    pub fn graph(&self) -> &'g DiGraph<V> {
        self.graph
    }
}

impl<V: VertexId> WeightedDigraph for SyntheticSource<'_, V> {
    type Vertex = Augmented<V>;

    fn vertex_count(&self) -> usize {
        self.graph.vertex_count() + 1
    }

    fn contains_vertex(&self, vertex: &Augmented<V>) -> bool {
        match vertex {
            Augmented::Synthetic => true,
            Augmented::Vertex(v) => self.graph.contains_vertex(v),
        }
    }

    fn vertices(&self) -> impl Iterator<Item = Augmented<V>> + '_ {
        iter::once(Augmented::Synthetic)
            .chain(self.graph.vertices().cloned().map(Augmented::Vertex))
    }

    fn edges(&self) -> impl Iterator<Item = (Augmented<V>, Augmented<V>, Weight)> + '_ {
        let source_edges = self
            .graph
            .vertices()
            .map(|v| (Augmented::Synthetic, Augmented::Vertex(v.clone()), 0.0));
        let graph_edges = self.graph.edges().map(|edge| {
            (
                Augmented::Vertex(edge.source.clone()),
                Augmented::Vertex(edge.target.clone()),
                edge.weight,
            )
        });
        source_edges.chain(graph_edges)
    }
}
