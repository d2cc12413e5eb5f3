//! Directed weighted graph.

use super::WeightedDigraph;
use reweigh_common::types::{VertexId, Weight, ensure_finite};
use reweigh_common::utils::error::{Error, Result};
use reweigh_common::utils::hash::FxIndexMap;

/// A borrowed view of one edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRef<'a, V> {
    /// Source vertex.
    pub source: &'a V,
    /// Target vertex.
    pub target: &'a V,
    /// Edge weight.
    pub weight: Weight,
}

/// Directed weighted graph.
///
/// Each vertex owns an ordered map from target to weight, so there is at
/// most one edge per ordered pair and re-adding an edge replaces its weight.
/// Vertices and edges iterate in insertion order, which makes every
/// algorithm run over two identically built graphs visit them identically.
///
/// Self-loops are stored like any other edge.
#[derive(Debug, Clone)]
pub struct DiGraph<V: VertexId> {
    /// Outgoing adjacency indexed by source vertex.
    adjacency: FxIndexMap<V, FxIndexMap<V, Weight>>,
    /// Number of edges across all adjacency rows.
    edge_count: usize,
}

impl<V: VertexId> DiGraph<V> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            adjacency: FxIndexMap::default(),
            edge_count: 0,
        }
    }

    /// Creates an empty graph with room for `vertices` vertices.
    #[must_use]
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            adjacency: FxIndexMap::with_capacity_and_hasher(vertices, Default::default()),
            edge_count: 0,
        }
    }

    /// Builds a graph from `(source, target, weight)` triples, adding
    /// endpoints as they appear.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWeight`] if any weight is not finite.
    pub fn from_edges(edges: impl IntoIterator<Item = (V, V, Weight)>) -> Result<Self> {
        let mut graph = Self::new();
        for (source, target, weight) in edges {
            graph.add_edge_with_vertices(source, target, weight)?;
        }
        Ok(graph)
    }

    // === Vertex Operations ===

    /// Adds a vertex. Returns false if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, FxIndexMap::default());
        true
    }

    /// Returns true if the vertex is in the graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Removes a vertex and every edge incident to it.
    ///
    /// Returns false if the vertex was not present.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(outgoing) = self.adjacency.shift_remove(vertex) else {
            return false;
        };
        self.edge_count -= outgoing.len();

        for targets in self.adjacency.values_mut() {
            if targets.shift_remove(vertex).is_some() {
                self.edge_count -= 1;
            }
        }
        true
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns true if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterates over vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    // === Edge Operations ===

    /// Adds an edge, or replaces the weight of an existing one.
    ///
    /// Returns the previous weight if the edge existed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEdge`] if either endpoint is not in the graph,
    /// or [`Error::InvalidWeight`] if the weight is not finite. The graph is
    /// unchanged on error.
    pub fn add_edge(&mut self, source: V, target: V, weight: Weight) -> Result<Option<Weight>> {
        let weight = ensure_finite(weight)?;

        let missing = if !self.adjacency.contains_key(&source) {
            Some(&source)
        } else if !self.adjacency.contains_key(&target) {
            Some(&target)
        } else {
            None
        };
        if let Some(missing) = missing {
            return Err(Error::InvalidEdge {
                source_vertex: format!("{source:?}"),
                target_vertex: format!("{target:?}"),
                missing: format!("{missing:?}"),
            });
        }

        let targets = self
            .adjacency
            .get_mut(&source)
            .ok_or_else(|| Error::vertex_not_found(&source))?;
        let previous = targets.insert(target, weight);
        if previous.is_none() {
            self.edge_count += 1;
        }
        Ok(previous)
    }

    /// Adds an edge, inserting either endpoint that is not yet in the graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWeight`] if the weight is not finite. No
    /// vertex is added in that case.
    pub fn add_edge_with_vertices(
        &mut self,
        source: V,
        target: V,
        weight: Weight,
    ) -> Result<Option<Weight>> {
        ensure_finite(weight)?;
        self.add_vertex(source.clone());
        self.add_vertex(target.clone());
        self.add_edge(source, target, weight)
    }

    /// Removes an edge, returning its weight.
    pub fn remove_edge(&mut self, source: &V, target: &V) -> Option<Weight> {
        let removed = self.adjacency.get_mut(source)?.shift_remove(target);
        if removed.is_some() {
            self.edge_count -= 1;
        }
        removed
    }

    /// Returns the weight of the edge `source -> target`.
    #[must_use]
    pub fn edge_weight(&self, source: &V, target: &V) -> Option<Weight> {
        self.adjacency.get(source)?.get(target).copied()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the number of outgoing edges of a vertex.
    #[must_use]
    pub fn out_degree(&self, vertex: &V) -> usize {
        self.adjacency.get(vertex).map_or(0, |targets| targets.len())
    }

    /// Iterates over the outgoing edges of a vertex as `(target, weight)`.
    ///
    /// Yields nothing for a vertex that is not in the graph.
    pub fn out_edges(&self, vertex: &V) -> impl Iterator<Item = (&V, Weight)> + '_ {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flat_map(|targets| targets.iter().map(|(target, &weight)| (target, weight)))
    }

    /// Iterates over all edges, grouped by source in vertex order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_, V>> + '_ {
        self.adjacency.iter().flat_map(|(source, targets)| {
            targets.iter().map(move |(target, &weight)| EdgeRef {
                source,
                target,
                weight,
            })
        })
    }
}

impl<V: VertexId> Default for DiGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexId> WeightedDigraph for DiGraph<V> {
    type Vertex = V;

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.adjacency.keys().cloned()
    }

    fn edges(&self) -> impl Iterator<Item = (V, V, Weight)> + '_ {
        DiGraph::edges(self).map(|edge| (edge.source.clone(), edge.target.clone(), edge.weight))
    }
}
