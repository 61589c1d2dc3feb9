//! Minimum spanning tree (forest) with Kruskal's algorithm.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use vertexa_common::types::{Edge, Weight};
use vertexa_core::{Graph, UndirectedGraph};

use crate::components::UnionFind;

/// Result of a minimum spanning tree computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MstResult<W> {
    /// Accepted edges, in acceptance (non-decreasing weight) order.
    pub edges: Vec<Edge<W>>,
    /// Sum of the accepted edge weights.
    pub total_weight: W,
}

impl<W> MstResult<W> {
    /// Returns the number of accepted edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the result connects all `vertex_count` vertices.
    #[must_use]
    pub fn is_spanning_tree(&self, vertex_count: usize) -> bool {
        self.edges.len() + 1 == vertex_count.max(1)
    }
}

/// Computes a minimum spanning forest of an undirected graph.
///
/// Edges are sorted by weight (stable, so equal weights keep [`Graph::edges`]
/// order) and accepted when their endpoints lie in different trees. The scan
/// stops once `n - 1` edges are accepted. A disconnected graph yields one tree
/// per component, `n - component_count` edges in total.
pub fn kruskal<W: Weight>(graph: &UndirectedGraph<W>) -> MstResult<W> {
    let n = graph.vertex_count();
    let mut result = MstResult {
        edges: Vec::new(),
        total_weight: W::zero(),
    };
    if n <= 1 {
        return result;
    }

    let mut edges = graph.edges();
    edges.sort_by(|a, b| a.weight.partial_cmp(&b.weight).unwrap_or(Ordering::Equal));

    let mut uf = UnionFind::new(n);
    for edge in edges {
        if result.edges.len() == n - 1 {
            break;
        }
        if uf.union(edge.from, edge.to) {
            result.total_weight = result.total_weight.saturating_add(edge.weight);
            result.edges.push(edge);
        }
    }

    tracing::debug!(
        vertices = n,
        edges = result.edges.len(),
        total_weight = ?result.total_weight,
        "kruskal finished"
    );
    result
}
