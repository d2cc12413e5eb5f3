//! Vertex potentials and edge reweighting.
//!
//! A potential `h` is the shortest-path distance from a synthetic source
//! joined to every vertex by a zero-weight edge. For every edge `(u, v, w)`
//! the triangle inequality gives `h(v) <= h(u) + w`, so the reweighted
//! edge `w + h(u) - h(v)` is non-negative, and along any path the
//! reweighted length differs from the true length by `h(u) - h(target)`.

use reweigh_common::types::{VertexId, Weight};
use reweigh_common::utils::error::{Error, Result};
use reweigh_common::utils::hash::FxIndexMap;
use reweigh_core::algorithms::bellman_ford;
use reweigh_core::graph::{Augmented, DiGraph, SyntheticSource};

/// Reweighting potential, one value per vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Potential<V: VertexId> {
    values: FxIndexMap<V, Weight>,
}

impl<V: VertexId> Potential<V> {
    /// Returns `h(vertex)`.
    #[must_use]
    pub fn get(&self, vertex: &V) -> Option<Weight> {
        self.values.get(vertex).copied()
    }

    /// Iterates over `(vertex, h)` in graph vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, Weight)> + '_ {
        self.values.iter().map(|(v, &h)| (v, h))
    }

    /// Returns the number of vertices with a potential.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no vertex has a potential.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `w + h(source) - h(target)`.
    pub fn reweight(&self, source: &V, target: &V, weight: Weight) -> Result<Weight> {
        Ok(weight + self.require(source)? - self.require(target)?)
    }

    /// Returns the true distance `d - h(source) + h(target)` for a
    /// reweighted distance `d`.
    pub fn restore(&self, source: &V, target: &V, reweighted: Weight) -> Result<Weight> {
        Ok(reweighted - self.require(source)? + self.require(target)?)
    }

    fn require(&self, vertex: &V) -> Result<Weight> {
        self.get(vertex)
            .ok_or_else(|| Error::Internal(format!("no potential for vertex {vertex:?}")))
    }
}

/// Computes the potential of every vertex with one Bellman-Ford run from
/// a synthetic source.
///
/// The graph is not modified; the source exists only for the duration of
/// the run.
///
/// # Errors
///
/// Returns [`Error::NegativeCycleDetected`] if the graph contains a
/// negative-weight cycle (every cycle is reachable from the synthetic source).
pub fn compute_potential<V: VertexId>(graph: &DiGraph<V>) -> Result<Potential<V>> {
    let view = SyntheticSource::attach(graph);
    let result = bellman_ford(&view, &view.source())?;

    let mut values =
        FxIndexMap::with_capacity_and_hasher(graph.vertex_count(), Default::default());
    for (vertex, h) in result.into_distances() {
        if let Augmented::Vertex(v) = vertex {
            values.insert(v, h);
        }
    }

    if values.len() != graph.vertex_count() {
        return Err(Error::Internal(format!(
            "potential covers {} of {} vertices",
            values.len(),
            graph.vertex_count()
        )));
    }
    Ok(Potential { values })
}

/// Rewrites every edge `(u, v, w)` to `w + h(u) - h(v)` in place.
///
/// Results in `[-tolerance, 0)` are clamped to zero. Returns the number of
/// clamped edges. Every new weight is computed before the first write, so
/// the graph is unchanged on error.
///
/// # Errors
///
/// Returns [`Error::Internal`] if a vertex has no potential or a reweighted
/// weight is not finite (`f64` overflow near `f64::MAX`).
pub fn reweight<V: VertexId>(
    graph: &mut DiGraph<V>,
    potential: &Potential<V>,
    tolerance: f64,
) -> Result<usize> {
    let mut clamped = 0;
    let mut rewritten = Vec::with_capacity(graph.edge_count());
    for edge in graph.edges() {
        let mut weight = potential.reweight(edge.source, edge.target, edge.weight)?;
        if !weight.is_finite() {
            return Err(Error::Internal(format!(
                "reweighted edge {:?} -> {:?} overflows ({} becomes {})",
                edge.source, edge.target, edge.weight, weight
            )));
        }
        if weight < 0.0 && weight >= -tolerance {
            weight = 0.0;
            clamped += 1;
        }
        rewritten.push((edge.source.clone(), edge.target.clone(), weight));
    }

    // Re-adding an existing edge replaces its weight.
    for (source, target, weight) in rewritten {
        graph.add_edge(source, target, weight)?;
    }

    if clamped > 0 {
        tracing::debug!("Clamped {} reweighted edges to zero", clamped);
    }
    Ok(clamped)
}

/// Checks that every edge between distinct vertices has a non-negative weight.
///
/// Self-loops keep their original weight under reweighting and are skipped
/// by the solvers, so they are not checked.
///
/// # Errors
///
/// Returns [`Error::Internal`] naming the first offending edge.
pub fn verify_non_negative<V: VertexId>(graph: &DiGraph<V>) -> Result<()> {
    match graph
        .edges()
        .find(|edge| edge.source != edge.target && edge.weight < 0.0)
    {
        Some(edge) => Err(Error::Internal(format!(
            "reweighted edge {:?} -> {:?} is negative ({})",
            edge.source, edge.target, edge.weight
        ))),
        None => Ok(()),
    }
}
