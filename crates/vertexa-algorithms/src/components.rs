//! Connected components, strongly connected components, and union-find.
//!
//! Components are returned as `Vec<Vec<VertexId>>`: a partition of the whole
//! vertex set in which isolated vertices form singleton groups.

use vertexa_common::types::VertexId;
use vertexa_core::graph::traversal::{dfs, dfs_post_order};
use vertexa_core::{DirectedGraph, Graph, UndirectedGraph};

/// Partitions an undirected graph into connected components.
///
/// Components appear in the order their smallest vertex is first seen while
/// scanning `0..n`; vertices inside a component are in DFS pre-order.
pub fn connected_components<W: Clone>(graph: &UndirectedGraph<W>) -> Vec<Vec<VertexId>> {
    let n = graph.vertex_count();
    let mut visited = vec![false; n];
    let mut components = Vec::new();

    for root in 0..n {
        if visited[root] {
            continue;
        }
        let mut component = Vec::new();
        let walked = dfs(graph, root, &mut visited, |v| component.push(v));
        debug_assert!(walked.is_ok(), "root {root} is a vertex");
        components.push(component);
    }

    tracing::debug!(
        vertices = n,
        components = components.len(),
        "connected components computed"
    );
    components
}

/// Returns the number of connected components.
pub fn connected_component_count<W: Clone>(graph: &UndirectedGraph<W>) -> usize {
    connected_components(graph).len()
}

/// Finds strongly connected components with Kosaraju's two-pass algorithm.
///
/// 1. A DFS over every unvisited vertex (ascending) records finish order.
/// 2. The transposed graph is explored in reverse finish order; each tree of
///    that second pass is one component.
///
/// The output is deterministic for a fixed graph. Singletons are included.
pub fn strongly_connected_components<W: Clone>(graph: &DirectedGraph<W>) -> Vec<Vec<VertexId>> {
    let n = graph.vertex_count();
    let mut visited = vec![false; n];
    let mut finish_order = Vec::with_capacity(n);

    for v in 0..n {
        if !visited[v] {
            let walked = dfs_post_order(graph, v, &mut visited, |u| finish_order.push(u));
            debug_assert!(walked.is_ok(), "vertex {v} is in range");
        }
    }

    let transposed = graph.transpose();
    visited.fill(false);

    let mut components = Vec::new();
    for &v in finish_order.iter().rev() {
        if visited[v] {
            continue;
        }
        let mut component = Vec::new();
        let walked = dfs(&transposed, v, &mut visited, |u| component.push(u));
        debug_assert!(walked.is_ok(), "transpose keeps vertex {v}");
        components.push(component);
    }

    tracing::debug!(
        vertices = n,
        components = components.len(),
        "strongly connected components computed"
    );
    components
}

/// Returns the number of strongly connected components.
pub fn strongly_connected_component_count<W: Clone>(graph: &DirectedGraph<W>) -> usize {
    strongly_connected_components(graph).len()
}

/// Disjoint-set forest with path compression.
///
/// Union links the first representative under the second.
#[derive(Debug, Clone)]
pub(crate) struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    /// Creates `n` singleton sets.
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    /// Returns the representative of `x`, compressing the path to it.
    pub(crate) fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merges the sets of `a` and `b`. Returns false if they were already joined.
    pub(crate) fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        self.parent[root_a] = root_b;
        true
    }
}
