//! Insertion-ordered adjacency maps.
//!
//! This is the single edge storage structure behind both graph variants:
//! - O(1) expected edge insertion, lookup and weight update
//! - Neighbor scans in insertion order, so every algorithm is deterministic
//! - Removal that keeps the relative order of the remaining neighbors
//!
//! The map stores *directed* entries only. Pairing `u -> v` with `v -> u`
//! for undirected graphs is the caller's job.

use indexmap::IndexMap;
use vertexa_common::types::VertexId;
use vertexa_common::utils::error::{Error, Result};

/// Neighbor map of a single vertex: neighbor index to edge weight.
type NeighborMap<W> = IndexMap<VertexId, W>;

/// Adjacency engine with a fixed number of vertices.
///
/// The vertex count is set at construction and never changes. Inserting an
/// edge that already exists overwrites its weight in place.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMap<W> {
    /// Neighbor maps indexed by source vertex.
    lists: Vec<NeighborMap<W>>,
    /// Number of directed entries across all lists.
    entry_count: usize,
}

impl<W> AdjacencyMap<W> {
    /// Creates an adjacency map for `vertex_count` isolated vertices.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        let mut lists = Vec::with_capacity(vertex_count);
        lists.resize_with(vertex_count, IndexMap::new);
        Self {
            lists,
            entry_count: 0,
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    /// Returns the number of directed entries.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Fails with [`Error::OutOfRange`] unless `vertex < vertex_count`.
    pub fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex < self.lists.len() {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                vertex,
                vertex_count: self.lists.len(),
            })
        }
    }

    /// Inserts or overwrites the entry `from -> to`.
    ///
    /// Returns the previous weight if the entry existed.
    pub fn insert(&mut self, from: VertexId, to: VertexId, weight: W) -> Result<Option<W>> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        let previous = self.lists[from].insert(to, weight);
        if previous.is_none() {
            self.entry_count += 1;
        }
        Ok(previous)
    }

    /// Removes the entry `from -> to` and returns its weight.
    pub fn remove(&mut self, from: VertexId, to: VertexId) -> Result<W> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        let weight = self.lists[from]
            .shift_remove(&to)
            .ok_or(Error::EdgeNotFound { from, to })?;
        self.entry_count -= 1;
        Ok(weight)
    }

    /// Returns true if the entry `from -> to` exists.
    #[must_use]
    pub fn contains(&self, from: VertexId, to: VertexId) -> bool {
        self.lists
            .get(from)
            .is_some_and(|list| list.contains_key(&to))
    }

    /// Returns the weight of `from -> to`, if present.
    #[must_use]
    pub fn get(&self, from: VertexId, to: VertexId) -> Option<&W> {
        self.lists.get(from)?.get(&to)
    }

    /// Returns the number of entries leaving `vertex`.
    pub fn out_degree(&self, vertex: VertexId) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(self.lists[vertex].len())
    }

    /// Returns an iterator over `(neighbor, weight)` pairs leaving `vertex`.
    ///
    /// An out-of-range vertex has no neighbors.
    pub fn edges_from(&self, vertex: VertexId) -> impl Iterator<Item = (VertexId, &W)> + '_ {
        self.lists
            .get(vertex)
            .into_iter()
            .flat_map(|list| list.iter().map(|(&to, weight)| (to, weight)))
    }

    /// Returns an iterator over every `(from, to, weight)` entry.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, VertexId, &W)> + '_ {
        self.lists.iter().enumerate().flat_map(|(from, list)| {
            list.iter().map(move |(&to, weight)| (from, to, weight))
        })
    }

    /// Removes every entry, keeping the vertex count.
    pub fn clear(&mut self) {
        for list in &mut self.lists {
            list.clear();
        }
        self.entry_count = 0;
    }

    /// Returns a map holding `to -> from` for every entry `from -> to`.
    #[must_use]
    pub fn reversed(&self) -> Self
    where
        W: Clone,
    {
        let mut reversed = Self::new(self.vertex_count());
        for (from, to, weight) in self.iter() {
            reversed.lists[to].insert(from, weight.clone());
        }
        reversed.entry_count = self.entry_count;
        reversed
    }
}
