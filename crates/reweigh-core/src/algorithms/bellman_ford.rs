//! Bellman-Ford single-source shortest paths.
//!
//! Handles negative edge weights and detects negative cycles reachable
//! from the source. O(V * E).

use crate::graph::WeightedDigraph;
use reweigh_common::types::{VertexId, Weight};
use reweigh_common::utils::error::{Error, Result};
use reweigh_common::utils::hash::{FxHashMap, FxIndexMap};

/// Result of a Bellman-Ford run.
#[derive(Debug, Clone)]
pub struct BellmanFordResult<V: VertexId> {
    source: V,
    /// Distances of reachable vertices, in vertex order.
    distances: FxIndexMap<V, Weight>,
    /// Predecessor on one shortest path, for every reachable vertex but the source.
    predecessors: FxHashMap<V, V>,
}

impl<V: VertexId> BellmanFordResult<V> {
    /// Returns the source vertex.
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Returns the distance to `target`, or `None` if it is unreachable.
    #[must_use]
    pub fn distance(&self, target: &V) -> Option<Weight> {
        self.distances.get(target).copied()
    }

    /// Iterates over `(vertex, distance)` for every reachable vertex.
    pub fn distances(&self) -> impl Iterator<Item = (&V, Weight)> + '_ {
        self.distances.iter().map(|(v, &d)| (v, d))
    }

    /// Returns the number of reachable vertices, the source included.
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    /// Consumes the result and returns the distance map.
    pub fn into_distances(self) -> FxIndexMap<V, Weight> {
        self.distances
    }

    /// Reconstructs a shortest path from the source to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoPathExists`] if `target` is unreachable.
    pub fn path_to(&self, target: &V) -> Result<Vec<V>> {
        if !self.distances.contains_key(target) {
            return Err(Error::no_path(&self.source, target));
        }
        let mut path = vec![target.clone()];
        let mut current = target;
        while let Some(prev) = self.predecessors.get(current) {
            path.push(prev.clone());
            current = prev;
        }
        path.reverse();
        Ok(path)
    }
}

/// Runs Bellman-Ford from `source`.
///
/// Self-loops are ignored: they never lie on a shortest path between two
/// distinct vertices, and a negative self-loop is not reported as a cycle.
///
/// # Errors
///
/// Returns [`Error::VertexNotFound`] if `source` is not in the graph, or
/// [`Error::NegativeCycleDetected`] if a negative-weight cycle is reachable
/// from it.
pub fn bellman_ford<G: WeightedDigraph>(
    graph: &G,
    source: &G::Vertex,
) -> Result<BellmanFordResult<G::Vertex>> {
    if !graph.contains_vertex(source) {
        return Err(Error::vertex_not_found(source));
    }

    // Extract an index-based edge list once; relaxation runs on indices.
    let vertices: Vec<G::Vertex> = graph.vertices().collect();
    let index: FxHashMap<&G::Vertex, usize> =
        vertices.iter().enumerate().map(|(i, v)| (v, i)).collect();
    let mut edges: Vec<(usize, usize, Weight)> = Vec::new();
    for (u, v, w) in graph.edges() {
        let (Some(&u), Some(&v)) = (index.get(&u), index.get(&v)) else {
            return Err(Error::Internal(format!(
                "edge {u:?} -> {v:?} has an endpoint outside the vertex set"
            )));
        };
        if u != v {
            edges.push((u, v, w));
        }
    }

    let n = vertices.len();
    let src = *index
        .get(source)
        .ok_or_else(|| Error::vertex_not_found(source))?;
    let mut dist = vec![Weight::INFINITY; n];
    let mut pred: Vec<Option<usize>> = vec![None; n];
    dist[src] = 0.0;

    let mut rounds = 0;
    for _ in 1..n {
        rounds += 1;
        let mut updated = false;
        for &(u, v, w) in &edges {
            if dist[u].is_finite() && dist[u] + w < dist[v] {
                dist[v] = dist[u] + w;
                pred[v] = Some(u);
                updated = true;
            }
        }
        if !updated {
            break;
        }
    }

    // One more pass: any further improvement means a negative cycle.
    if let Some(&(_, v, _)) = edges
        .iter()
        .find(|&&(u, v, w)| dist[u].is_finite() && dist[u] + w < dist[v])
    {
        tracing::debug!(
            "Bellman-Ford: {:?} still relaxes after {} rounds",
            vertices[v],
            rounds
        );
        return Err(Error::NegativeCycleDetected);
    }

    tracing::debug!(
        "Bellman-Ford converged after {} rounds over {} edges",
        rounds,
        edges.len()
    );

    let mut distances = FxIndexMap::default();
    let mut predecessors = FxHashMap::default();
    for (i, vertex) in vertices.iter().enumerate() {
        if dist[i].is_finite() {
            distances.insert(vertex.clone(), dist[i]);
            if let Some(p) = pred[i] {
                predecessors.insert(vertex.clone(), vertices[p].clone());
            }
        }
    }

    Ok(BellmanFordResult {
        source: source.clone(),
        distances,
        predecessors,
    })
}
