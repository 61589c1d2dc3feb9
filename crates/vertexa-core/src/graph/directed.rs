//! Directed weighted graph.

use std::fmt;

use vertexa_common::types::{Edge, VertexId};
use vertexa_common::utils::error::{Error, Result};

use super::Graph;
use crate::index::adjacency::AdjacencyMap;

/// A directed graph: each added edge is stored once, `from -> to`.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectedGraph<W> {
    adjacency: AdjacencyMap<W>,
}

impl<W> DirectedGraph<W> {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: AdjacencyMap::new(vertex_count),
        }
    }

    /// Returns the underlying adjacency engine.
    #[must_use]
    pub fn adjacency(&self) -> &AdjacencyMap<W> {
        &self.adjacency
    }
}

impl<W: Clone> DirectedGraph<W> {
    /// Builds a graph from an edge list.
    ///
    /// Fails with [`Error::OutOfRange`] on the first invalid triple.
    pub fn from_edges<I, E>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<W>>,
    {
        let mut graph = Self::new(vertex_count);
        for edge in edges {
            let Edge { from, to, weight } = edge.into();
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Returns the transposed graph: every edge reversed, weights preserved.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            adjacency: self.adjacency.reversed(),
        }
    }
}

impl<W: Clone> Graph<W> for DirectedGraph<W> {
    fn vertex_count(&self) -> usize {
        self.adjacency.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.entry_count()
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: W) -> Result<()> {
        self.adjacency.insert(from, to, weight)?;
        Ok(())
    }

    fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        self.adjacency.remove(from, to)?;
        Ok(())
    }

    fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.adjacency.contains(from, to)
    }

    fn edge_weight(&self, from: VertexId, to: VertexId) -> Result<&W> {
        self.adjacency
            .get(from, to)
            .ok_or(Error::EdgeNotFound { from, to })
    }

    fn degree(&self, vertex: VertexId) -> Result<usize> {
        self.adjacency.out_degree(vertex)
    }

    fn neighbors<'a>(&'a self, vertex: VertexId) -> impl Iterator<Item = (VertexId, &'a W)> + 'a
    where
        W: 'a,
    {
        self.adjacency.edges_from(vertex)
    }

    fn edges(&self) -> Vec<Edge<W>> {
        self.adjacency
            .iter()
            .map(|(from, to, weight)| Edge::new(from, to, weight.clone()))
            .collect()
    }
}

impl<W: fmt::Display> fmt::Display for DirectedGraph<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (from, to, weight) in self.adjacency.iter() {
            writeln!(f, "Edge ({from} -> {to}) with weight: {weight}")?;
        }
        Ok(())
    }
}
