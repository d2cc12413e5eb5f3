//! Dijkstra single-source shortest paths.
//!
//! Label-setting over [`PriorityQueue`]: a vertex's distance is final once
//! it is extracted. Weights must be non-negative; this is not checked.

use crate::graph::DiGraph;
use crate::queue::PriorityQueue;
use reweigh_common::types::{VertexId, Weight};
use reweigh_common::utils::error::{Error, Result};
use reweigh_common::utils::hash::{FxHashMap, FxIndexMap};

/// Result of a Dijkstra run.
#[derive(Debug, Clone)]
pub struct DijkstraResult<V: VertexId> {
    source: V,
    /// Final distances in settle order. Unreachable vertices are absent.
    distances: FxIndexMap<V, Weight>,
    /// Predecessor on the shortest path, for every settled vertex but the source.
    predecessors: FxHashMap<V, V>,
}

impl<V: VertexId> DijkstraResult<V> {
    /// Returns the source vertex.
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Returns the distance to `target`, or `None` if it is unreachable.
    #[must_use]
    pub fn distance(&self, target: &V) -> Option<Weight> {
        self.distances.get(target).copied()
    }

    /// Returns true if `target` was reached.
    #[must_use]
    pub fn is_reachable(&self, target: &V) -> bool {
        self.distances.contains_key(target)
    }

    /// Iterates over `(vertex, distance)` in the order vertices were settled.
    ///
    /// The source comes first with distance 0.
    pub fn distances(&self) -> impl Iterator<Item = (&V, Weight)> + '_ {
        self.distances.iter().map(|(v, &d)| (v, d))
    }

    /// Returns the immediate predecessor of `target` on its shortest path.
    #[must_use]
    pub fn predecessor(&self, target: &V) -> Option<&V> {
        self.predecessors.get(target)
    }

    /// Returns the number of reached vertices, the source included.
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    /// Reconstructs the shortest path from the source to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoPathExists`] if `target` was never reached.
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

/// Runs Dijkstra from `source`.
///
/// Self-loops are skipped. Among equally short paths, the one whose last
/// vertex reached its final tentative distance first wins.
///
/// # Errors
///
/// Returns [`Error::VertexNotFound`] if `source` is not in the graph.
pub fn dijkstra<V: VertexId>(graph: &DiGraph<V>, source: &V) -> Result<DijkstraResult<V>> {
    if !graph.contains_vertex(source) {
        return Err(Error::vertex_not_found(source));
    }

    let mut distances: FxIndexMap<V, Weight> = FxIndexMap::default();
    let mut predecessors: FxHashMap<V, V> = FxHashMap::default();
    let mut queue = PriorityQueue::new();
    queue.insert(source.clone(), 0.0)?;

    while !queue.is_empty() {
        let (vertex, dist) = queue.extract_min()?;

        for (target, weight) in graph.out_edges(&vertex) {
            if *target == vertex || distances.contains_key(target) {
                continue;
            }
            let candidate = dist + weight;
            match queue.priority(target) {
                Some(current) if candidate < current => {
                    queue.decrease_priority(target, candidate)?;
                }
                Some(_) => continue,
                None => queue.insert(target.clone(), candidate)?,
            }
            predecessors.insert(target.clone(), vertex.clone());
        }

        distances.insert(vertex, dist);
    }

    Ok(DijkstraResult {
        source: source.clone(),
        distances,
        predecessors,
    })
}

/// Returns the distance and shortest path from `source` to `target`.
///
/// # Errors
///
/// Returns [`Error::VertexNotFound`] if `source` is not in the graph, or
/// [`Error::NoPathExists`] if `target` is unreachable from it.
pub fn dijkstra_path<V: VertexId>(
    graph: &DiGraph<V>,
    source: &V,
    target: &V,
) -> Result<(Weight, Vec<V>)> {
    let result = dijkstra(graph, source)?;
    let path = result.path_to(target)?;
    let distance = result
        .distance(target)
        .ok_or_else(|| Error::no_path(source, target))?;
    Ok((distance, path))
}
