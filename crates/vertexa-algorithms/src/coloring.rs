//! Greedy sequential vertex coloring.

use serde::{Deserialize, Serialize};
use vertexa_common::types::VertexId;
use vertexa_common::utils::error::{Error, Result};
use vertexa_core::Graph;

/// A color per vertex, indexed by vertex id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColoringResult {
    /// Color of each vertex, from `0..color_count`.
    pub colors: Vec<usize>,
    /// Number of distinct colors used.
    pub color_count: usize,
}

impl ColoringResult {
    /// Returns the color of `vertex`, or `None` if it is out of range.
    #[must_use]
    pub fn color_of(&self, vertex: VertexId) -> Option<usize> {
        self.colors.get(vertex).copied()
    }

    /// Groups vertices by color. Class `c` lists the vertices with color `c` in ascending order.
    #[must_use]
    pub fn classes(&self) -> Vec<Vec<VertexId>> {
        let mut classes = vec![Vec::new(); self.color_count];
        for (vertex, &color) in self.colors.iter().enumerate() {
            classes[color].push(vertex);
        }
        classes
    }

    /// Returns true if no edge of `graph` joins two vertices of the same color.
    ///
    /// Self-loops are ignored.
    pub fn is_proper<W: Clone, G: Graph<W>>(&self, graph: &G) -> bool {
        graph.edges().iter().all(|edge| {
            edge.from == edge.to || self.color_of(edge.from) != self.color_of(edge.to)
        })
    }
}

/// Colors vertices in index order, giving each the smallest color not used by
/// an already-colored neighbor.
///
/// The result is proper but not necessarily minimal. On a directed graph only
/// out-neighbors are considered, so the coloring is proper with respect to the
/// edges `v -> u` where `u < v`; color the undirected version for a fully
/// proper coloring.
///
/// Fails with [`Error::OutOfRange`] if a neighbor index is invalid.
pub fn greedy_coloring<W: Clone, G: Graph<W>>(graph: &G) -> Result<ColoringResult> {
    let n = graph.vertex_count();
    let mut colors: Vec<Option<usize>> = vec![None; n];
    let mut color_count = 0;
    let mut unavailable = Vec::new();

    for v in 0..n {
        unavailable.clear();
        unavailable.resize(color_count, false);

        for (u, _) in graph.neighbors(v) {
            let color = colors.get(u).ok_or(Error::OutOfRange {
                vertex: u,
                vertex_count: n,
            })?;
            if let Some(c) = *color {
                unavailable[c] = true;
            }
        }

        let color = unavailable
            .iter()
            .position(|&taken| !taken)
            .unwrap_or(color_count);
        if color == color_count {
            color_count += 1;
        }
        colors[v] = Some(color);
    }

    tracing::debug!(vertices = n, colors = color_count, "greedy coloring finished");
    Ok(ColoringResult {
        colors: colors.into_iter().flatten().collect(),
        color_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vertexa_core::{DirectedGraph, UndirectedGraph};

    #[test]
    fn test_empty_graph() {
        let graph: UndirectedGraph<()> = UndirectedGraph::new(0);
        let result = greedy_coloring(&graph).unwrap();
        assert!(result.colors.is_empty());
        assert_eq!(result.color_count, 0);
    }

    #[test]
    fn test_triangle_needs_three_colors() {
        let graph = UndirectedGraph::from_edges(3, [(0, 1, ()), (1, 2, ()), (2, 0, ())]).unwrap();

        let result = greedy_coloring(&graph).unwrap();
        assert_eq!(result.colors, vec![0, 1, 2]);
        assert_eq!(result.color_count, 3);
        assert!(result.is_proper(&graph));
    }

    #[test]
    fn test_bipartite_path() {
        let graph = UndirectedGraph::from_edges(4, [(0, 1, 1), (1, 2, 1), (2, 3, 1)]).unwrap();

        let result = greedy_coloring(&graph).unwrap();
        assert_eq!(result.colors, vec![0, 1, 0, 1]);
        assert_eq!(result.classes(), vec![vec![0, 2], vec![1, 3]]);
    }

    #[test]
    fn test_isolated_vertices_share_color() {
        let graph: UndirectedGraph<i32> = UndirectedGraph::new(3);
        let result = greedy_coloring(&graph).unwrap();
        assert_eq!(result.colors, vec![0, 0, 0]);
        assert_eq!(result.color_count, 1);
    }

    #[test]
    fn test_order_dependence() {
        // A path visited out of order still ends up with three colors.
        let graph =
            UndirectedGraph::from_edges(4, [(0, 3, 1), (1, 2, 1), (2, 3, 1)]).unwrap();
        let result = greedy_coloring(&graph).unwrap();
        assert_eq!(result.colors, vec![0, 0, 1, 2]);
        assert!(result.is_proper(&graph));
    }

    #[test]
    fn test_directed_uses_out_neighbors() {
        let graph = DirectedGraph::from_edges(3, [(1, 0, 1), (2, 1, 1)]).unwrap();
        let result = greedy_coloring(&graph).unwrap();
        assert_eq!(result.colors, vec![0, 1, 0]);
        assert!(result.is_proper(&graph));
        assert_eq!(result.color_of(5), None);
    }
}
