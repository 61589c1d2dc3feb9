//! Undirected weighted graph.

use std::fmt;

use vertexa_common::types::{Edge, VertexId};
use vertexa_common::utils::error::{Error, Result};

use super::Graph;
use crate::index::adjacency::AdjacencyMap;

/// An undirected graph.
///
/// Each logical edge `{u, v}` is stored as the entries `u -> v` and `v -> u`,
/// which are always added and removed together. A self-loop is a single entry.
#[derive(Debug, Clone, PartialEq)]
pub struct UndirectedGraph<W> {
    adjacency: AdjacencyMap<W>,
}

impl<W> UndirectedGraph<W> {
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

    /// Iterates logical edges once each, as `(from, to, weight)` with `from <= to`.
    fn logical_edges(&self) -> impl Iterator<Item = (VertexId, VertexId, &W)> + '_ {
        self.adjacency.iter().filter(|(from, to, _)| from <= to)
    }
}

impl<W: Clone> UndirectedGraph<W> {
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
}

impl<W: Clone> Graph<W> for UndirectedGraph<W> {
    fn vertex_count(&self) -> usize {
        self.adjacency.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.logical_edges().count()
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: W) -> Result<()> {
        // Validate both endpoints before touching either direction.
        self.adjacency.check_vertex(from)?;
        self.adjacency.check_vertex(to)?;

        if from != to {
            self.adjacency.insert(to, from, weight.clone())?;
        }
        self.adjacency.insert(from, to, weight)?;
        Ok(())
    }

    fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        self.adjacency.check_vertex(from)?;
        self.adjacency.check_vertex(to)?;

        // A half-present pair is treated as absent and left untouched.
        if !(self.adjacency.contains(from, to) && self.adjacency.contains(to, from)) {
            return Err(Error::EdgeNotFound { from, to });
        }

        self.adjacency.remove(from, to)?;
        if from != to {
            self.adjacency.remove(to, from)?;
        }
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
        self.logical_edges()
            .map(|(from, to, weight)| Edge::new(from, to, weight.clone()))
            .collect()
    }
}

impl<W: fmt::Display> fmt::Display for UndirectedGraph<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (from, to, weight) in self.logical_edges() {
            writeln!(f, "Edge ({from} -- {to}) with weight: {weight}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor() {
        let graph: UndirectedGraph<i32> = UndirectedGraph::new(5);
        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut graph = UndirectedGraph::new(3);
        graph.add_edge(0, 1, 10).unwrap();

        assert!(graph.has_edge(0, 1));
        assert!(graph.has_edge(1, 0));
        assert_eq!(*graph.edge_weight(1, 0).unwrap(), 10);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges(), vec![Edge::new(0, 1, 10)]);
    }

    #[test]
    fn test_add_edge_invalid_leaves_graph_untouched() {
        let mut graph = UndirectedGraph::new(3);
        assert!(matches!(
            graph.add_edge(1, 5, 1),
            Err(Error::OutOfRange { vertex: 5, .. })
        ));
        assert_eq!(graph.degree(1).unwrap(), 0);
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = UndirectedGraph::new(3);
        graph.add_edge(0, 1, 10).unwrap();
        graph.add_edge(1, 2, 20).unwrap();

        graph.remove_edge(1, 0).unwrap();

        assert!(!graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));
        assert!(graph.has_edge(2, 1));
        assert_eq!(
            graph.remove_edge(0, 1),
            Err(Error::EdgeNotFound { from: 0, to: 1 })
        );
    }

    #[test]
    fn test_degree_counts_incident_edges() {
        let mut graph = UndirectedGraph::new(4);
        graph.add_edge(0, 1, 1).unwrap();
        graph.add_edge(0, 2, 1).unwrap();
        graph.add_edge(3, 0, 1).unwrap();

        assert_eq!(graph.degree(0).unwrap(), 3);
        assert_eq!(graph.degree(3).unwrap(), 1);

        let mut neighbors: Vec<_> = graph.neighbors(0).map(|(v, _)| v).collect();
        neighbors.sort_unstable();
        assert_eq!(neighbors, vec![1, 2, 3]);
    }

    #[test]
    fn test_self_loop_reported_once() {
        let mut graph = UndirectedGraph::new(2);
        graph.add_edge(1, 1, 4).unwrap();
        graph.add_edge(0, 1, 2).unwrap();

        assert_eq!(graph.degree(1).unwrap(), 2);
        assert_eq!(graph.edge_count(), 2);

        graph.remove_edge(1, 1).unwrap();
        assert_eq!(graph.edges(), vec![Edge::new(0, 1, 2)]);
    }

    #[test]
    fn test_edges_once_per_logical_edge() {
        let graph =
            UndirectedGraph::from_edges(4, [(2, 0, 1), (3, 1, 2), (0, 1, 3)]).unwrap();

        let mut edges = graph.edges();
        edges.sort_by_key(|e| e.endpoints());
        assert_eq!(
            edges,
            vec![Edge::new(0, 1, 3), Edge::new(0, 2, 1), Edge::new(1, 3, 2)]
        );
    }

    #[test]
    fn test_display() {
        let graph = UndirectedGraph::from_edges(3, [(0, 1, 5), (2, 1, 6)]).unwrap();
        assert_eq!(
            graph.to_string(),
            "Edge (0 -- 1) with weight: 5\nEdge (1 -- 2) with weight: 6\n"
        );
    }
}
