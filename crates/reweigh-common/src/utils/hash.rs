//! Hash map aliases backed by `ahash`.
//!
//! [`FxIndexMap`] keeps insertion order and is used wherever iteration order
//! is observable (graph adjacency, result tables). The unordered map is for
//! internal lookups only.

use ahash::RandomState;

/// Unordered hash map.
pub type FxHashMap<K, V> = hashbrown::HashMap<K, V, RandomState>;

/// Insertion-ordered hash map.
pub type FxIndexMap<K, V> = indexmap::IndexMap<K, V, RandomState>;
