//! Error types for Reweigh.
//!
//! Graph construction errors ([`Error::InvalidEdge`], [`Error::InvalidWeight`])
//! are reported at the call site and leave the graph unchanged.
//! [`Error::NegativeCycleDetected`] is the only way an all-pairs computation
//! terminates without a result. Queue errors indicate a solver bug.

use thiserror::Error;

/// Result type alias for Reweigh operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An edge endpoint is not a member of the vertex set.
    #[error("invalid edge {source_vertex} -> {target_vertex}: endpoint {missing} is not in the graph")]
    InvalidEdge {
        /// Debug rendering of the source vertex.
        source_vertex: String,
        /// Debug rendering of the target vertex.
        target_vertex: String,
        /// Debug rendering of the missing endpoint.
        missing: String,
    },

    /// An edge weight is NaN or infinite.
    #[error("invalid edge weight {0}: weights must be finite")]
    InvalidWeight(f64),

    /// A solver was started from, or asked about, an unknown vertex.
    #[error("vertex not found: {0}")]
    VertexNotFound(String),

    /// A negative-weight cycle is reachable from the source.
    #[error("negative-weight cycle detected")]
    NegativeCycleDetected,

    /// The target is not reachable from the source.
    #[error("no path exists from {source_vertex} to {target_vertex}")]
    NoPathExists {
        /// Debug rendering of the source vertex.
        source_vertex: String,
        /// Debug rendering of the target vertex.
        target_vertex: String,
    },

    /// Priority queue misuse.
    #[error("priority queue error: {0}")]
    Queue(#[from] QueueError),

    /// An internal invariant was violated.
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Builds an [`Error::NoPathExists`] from two vertices.
    pub fn no_path(source: &impl std::fmt::Debug, target: &impl std::fmt::Debug) -> Self {
        Self::NoPathExists {
            source_vertex: format!("{source:?}"),
            target_vertex: format!("{target:?}"),
        }
    }

    /// Builds an [`Error::VertexNotFound`] from a vertex.
    pub fn vertex_not_found(vertex: &impl std::fmt::Debug) -> Self {
        Self::VertexNotFound(format!("{vertex:?}"))
    }

    /// Returns true for [`Error::NegativeCycleDetected`].
    #[must_use]
    pub fn is_negative_cycle(&self) -> bool {
        matches!(self, Self::NegativeCycleDetected)
    }
}

/// Priority queue errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// Extract from an empty queue.
    #[error("queue is empty")]
    EmptyQueue,

    /// Insert of a key that is already queued.
    #[error("key is already queued")]
    DuplicateKey,

    /// Decrease of a key that is not queued.
    #[error("key is not queued")]
    KeyNotFound,

    /// Decrease to a priority that is not strictly lower.
    #[error("new priority is not lower than the current one")]
    PriorityNotLower,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::no_path(&"A", &"Z");
        assert_eq!(err.to_string(), "no path exists from \"A\" to \"Z\"");

        let err: Error = QueueError::EmptyQueue.into();
        assert_eq!(err.to_string(), "priority queue error: queue is empty");
    }

    #[test]
    fn test_is_negative_cycle() {
        assert!(Error::NegativeCycleDetected.is_negative_cycle());
        assert!(!Error::InvalidWeight(f64::NAN).is_negative_cycle());
    }
}
