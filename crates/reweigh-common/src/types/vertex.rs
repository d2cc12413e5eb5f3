//! Vertex identifiers.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for values that can identify a vertex.
///
/// Any cloneable, hashable value with equality works: integers, strings,
/// `Arc<str>`, small enums. Identifiers are cloned into result tables, so
/// cheap-to-clone types are preferable for large graphs.
pub trait VertexId: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> VertexId for T {}
