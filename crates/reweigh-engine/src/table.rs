//! All-pairs result tables.
//!
//! Both tables have one row per source vertex, in graph vertex order, and
//! hold entries only for reachable targets distinct from the source. An
//! unreachable pair is absent; explicit lookups of such a pair fail with
//! [`Error::NoPathExists`].

use reweigh_common::types::{VertexId, Weight};
use reweigh_common::utils::error::{Error, Result};
use reweigh_common::utils::hash::FxIndexMap;
use serde::Serialize;

/// Shortest distances between ordered vertex pairs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DistanceTable<V: VertexId> {
    rows: FxIndexMap<V, FxIndexMap<V, Weight>>,
}

impl<V: VertexId> DistanceTable<V> {
    pub(crate) fn with_sources<'a>(sources: impl Iterator<Item = &'a V>) -> Self
    where
        V: 'a,
    {
        Self {
            rows: sources.map(|v| (v.clone(), FxIndexMap::default())).collect(),
        }
    }

    pub(crate) fn insert_row(&mut self, source: V, row: FxIndexMap<V, Weight>) {
        self.rows.insert(source, row);
    }

    /// Returns the distance from `source` to `target` if it is stored.
    ///
    /// Pairs with `source == target` are never stored.
    #[must_use]
    pub fn get(&self, source: &V, target: &V) -> Option<Weight> {
        self.rows.get(source)?.get(target).copied()
    }

    /// Returns the shortest distance from `source` to `target`.
    ///
    /// The distance from a vertex to itself is 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if `source` has no row, or
    /// [`Error::NoPathExists`] if `target` is unreachable from it.
    pub fn distance(&self, source: &V, target: &V) -> Result<Weight> {
        let row = self
            .rows
            .get(source)
            .ok_or_else(|| Error::vertex_not_found(source))?;
        if source == target {
            return Ok(0.0);
        }
        row.get(target)
            .copied()
            .ok_or_else(|| Error::no_path(source, target))
    }

    /// Iterates over the reachable targets of `source` with their distances.
    pub fn row(&self, source: &V) -> impl Iterator<Item = (&V, Weight)> + '_ {
        self.rows
            .get(source)
            .into_iter()
            .flat_map(|row| row.iter().map(|(v, &d)| (v, d)))
    }

    /// Iterates over source vertices in graph order.
    pub fn sources(&self) -> impl Iterator<Item = &V> + '_ {
        self.rows.keys()
    }

    /// Iterates over all stored `(source, target, distance)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &V, Weight)> + '_ {
        self.rows
            .iter()
            .flat_map(|(s, row)| row.iter().map(move |(t, &d)| (s, t, d)))
    }

    /// Returns the number of stored pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.values().map(|row| row.len()).sum()
    }

    /// Returns true if no pair is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One shortest path per reachable ordered vertex pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PathTable<V: VertexId> {
    rows: FxIndexMap<V, FxIndexMap<V, Vec<V>>>,
}

impl<V: VertexId> PathTable<V> {
    pub(crate) fn with_sources<'a>(sources: impl Iterator<Item = &'a V>) -> Self
    where
        V: 'a,
    {
        Self {
            rows: sources.map(|v| (v.clone(), FxIndexMap::default())).collect(),
        }
    }

    pub(crate) fn insert_row(&mut self, source: V, row: FxIndexMap<V, Vec<V>>) {
        self.rows.insert(source, row);
    }

    /// Returns the stored path from `source` to `target`, endpoints included.
    ///
    /// Pairs with `source == target` are never stored.
    #[must_use]
    pub fn get(&self, source: &V, target: &V) -> Option<&[V]> {
        self.rows.get(source)?.get(target).map(Vec::as_slice)
    }

    /// Returns the shortest path from `source` to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if `source` has no row, or
    /// [`Error::NoPathExists`] if no path is stored for the pair (including
    /// `source == target`).
    pub fn path(&self, source: &V, target: &V) -> Result<&[V]> {
        let row = self
            .rows
            .get(source)
            .ok_or_else(|| Error::vertex_not_found(source))?;
        row.get(target)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::no_path(source, target))
    }

    /// Iterates over source vertices in graph order.
    pub fn sources(&self) -> impl Iterator<Item = &V> + '_ {
        self.rows.keys()
    }

    /// Iterates over all stored `(source, target, path)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &V, &[V])> + '_ {
        self.rows
            .iter()
            .flat_map(|(s, row)| row.iter().map(move |(t, p)| (s, t, p.as_slice())))
    }

    /// Returns the number of stored paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.values().map(|row| row.len()).sum()
    }

    /// Returns true if no path is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
