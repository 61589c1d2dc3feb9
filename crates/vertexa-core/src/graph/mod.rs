//! Graph representations.
//!
//! Both variants sit on the same [`AdjacencyMap`](crate::index::adjacency::AdjacencyMap)
//! engine and expose the same [`Graph`] capability set. They differ only in
//! how a logical edge maps to adjacency entries:
//!
//! - [`DirectedGraph`] stores each added edge once
//! - [`UndirectedGraph`] stores `u -> v` and `v -> u` and always mutates them together
//!
//! Vertices are dense indices `0..vertex_count` fixed at construction.

mod directed;
pub mod traversal;
mod undirected;

pub use directed::DirectedGraph;
pub use undirected::UndirectedGraph;

use vertexa_common::types::{Edge, VertexId};
use vertexa_common::utils::error::{Error, Result};

/// Capability set shared by all weighted graphs.
///
/// Algorithms take `&impl Graph<W>` and never mutate the graph.
pub trait Graph<W: Clone> {
    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Returns the number of logical edges.
    fn edge_count(&self) -> usize;

    /// Adds an edge, overwriting the weight if it already exists.
    ///
    /// Fails with [`Error::OutOfRange`] if either endpoint is invalid.
    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: W) -> Result<()>;

    /// Removes an edge.
    ///
    /// Fails with [`Error::EdgeNotFound`] if the edge is absent.
    fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Result<()>;

    /// Returns true if the edge `from -> to` exists.
    fn has_edge(&self, from: VertexId, to: VertexId) -> bool;

    /// Returns the weight of `from -> to`.
    fn edge_weight(&self, from: VertexId, to: VertexId) -> Result<&W>;

    /// Out-degree for directed graphs, incident-edge count for undirected ones.
    fn degree(&self, vertex: VertexId) -> Result<usize>;

    /// Returns the `(neighbor, weight)` pairs reachable over one edge.
    ///
    /// An out-of-range vertex has no neighbors.
    fn neighbors<'a>(&'a self, vertex: VertexId) -> impl Iterator<Item = (VertexId, &'a W)> + 'a
    where
        W: 'a;

    /// Returns every logical edge exactly once.
    fn edges(&self) -> Vec<Edge<W>>;

    /// Fails with [`Error::OutOfRange`] unless `vertex < vertex_count`.
    fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// Depth-first traversal from `start`, calling `visit` in pre-order.
    ///
    /// See [`traversal::dfs`].
    fn dfs<F>(&self, start: VertexId, visited: &mut Vec<bool>, visit: F) -> Result<()>
    where
        F: FnMut(VertexId),
        Self: Sized,
    {
        traversal::dfs(self, start, visited, visit)
    }

    /// Returns true if `to` is reachable from `from`.
    ///
    /// See [`traversal::has_path`].
    fn has_path(&self, from: VertexId, to: VertexId) -> Result<bool>
    where
        Self: Sized,
    {
        traversal::has_path(self, from, to)
    }
}
