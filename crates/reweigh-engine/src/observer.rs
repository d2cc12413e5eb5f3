//! Progress notifications.
//!
//! The orchestrator calls a [`ProgressObserver`] synchronously at each phase
//! transition and after every per-pair path computation. Observers only get
//! shared references, so they can render or record but never mutate the
//! graph under computation.

use crate::johnson::JohnsonPhase;
use crate::table::{DistanceTable, PathTable};
use reweigh_common::types::VertexId;
use reweigh_core::graph::DiGraph;

/// Receives progress from a Johnson run. Every callback defaults to a no-op.
pub trait ProgressObserver<V: VertexId> {
    /// The orchestrator entered `phase`.
    fn on_phase(&mut self, phase: JohnsonPhase) {
        let _ = phase;
    }

    /// All edges were rewritten to their non-negative reweighted values.
    fn on_reweighted(&mut self, graph: &DiGraph<V>) {
        let _ = graph;
    }

    /// A shortest path from `source` to `target` was found.
    fn on_path_found(&mut self, source: &V, target: &V, path: &[V]) {
        let _ = (source, target, path);
    }

    /// The single-source run from `source` finished, reaching `reached`
    /// vertices other than itself.
    fn on_source_finished(&mut self, source: &V, reached: usize) {
        let _ = (source, reached);
    }

    /// The run completed with these final tables.
    fn on_complete(&mut self, distances: &DistanceTable<V>, paths: &PathTable<V>) {
        let _ = (distances, paths);
    }
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<V: VertexId> ProgressObserver<V> for NoopObserver {}

impl<V: VertexId, O: ProgressObserver<V> + ?Sized> ProgressObserver<V> for &mut O {
    fn on_phase(&mut self, phase: JohnsonPhase) {
        (**self).on_phase(phase);
    }

    fn on_reweighted(&mut self, graph: &DiGraph<V>) {
        (**self).on_reweighted(graph);
    }

    fn on_path_found(&mut self, source: &V, target: &V, path: &[V]) {
        (**self).on_path_found(source, target, path);
    }

    fn on_source_finished(&mut self, source: &V, reached: usize) {
        (**self).on_source_finished(source, reached);
    }

    fn on_complete(&mut self, distances: &DistanceTable<V>, paths: &PathTable<V>) {
        (**self).on_complete(distances, paths);
    }
}

/// Observer that forwards notifications to `tracing` at TRACE/DEBUG level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl<V: VertexId> ProgressObserver<V> for TracingObserver {
    fn on_phase(&mut self, phase: JohnsonPhase) {
        tracing::debug!("Johnson phase: {:?}", phase);
    }

    fn on_reweighted(&mut self, graph: &DiGraph<V>) {
        tracing::debug!(
            "Reweighted {} edges over {} vertices",
            graph.edge_count(),
            graph.vertex_count()
        );
    }

    fn on_path_found(&mut self, source: &V, target: &V, path: &[V]) {
        tracing::trace!("Path {:?} -> {:?}: {:?}", source, target, path);
    }

    fn on_source_finished(&mut self, source: &V, reached: usize) {
        tracing::debug!("Source {:?} reached {} vertices", source, reached);
    }

    fn on_complete(&mut self, distances: &DistanceTable<V>, paths: &PathTable<V>) {
        tracing::debug!(
            "Johnson complete: {} distances, {} paths",
            distances.len(),
            paths.len()
        );
    }
}
