//! Single-source shortest paths.
//!
//! [`dijkstra`] produces a [`ShortestPathResult`]: one `(distance, predecessor)`
//! entry per vertex. Unreached vertices keep the weight type's infinity and
//! no predecessor. [`ShortestPathResult::path_to`] walks predecessors back to
//! the source and validates the chain on the way.

use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};
use vertexa_common::types::{VertexId, Weight};
use vertexa_common::utils::error::{Error, Result};
use vertexa_core::Graph;

use crate::traits::MinScored;

/// Distance and predecessor recorded for one vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathEntry<W> {
    /// Best known distance from the source; infinity if unreached.
    pub distance: W,
    /// Previous vertex on the best path; `None` for the source and unreached vertices.
    pub predecessor: Option<VertexId>,
}

impl<W: Weight> PathEntry<W> {
    /// Entry of a vertex that has not been reached.
    #[must_use]
    pub fn unreached() -> Self {
        Self {
            distance: W::infinity(),
            predecessor: None,
        }
    }
}

/// Distance/predecessor table of a single-source query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathResult<W> {
    source: VertexId,
    entries: Vec<PathEntry<W>>,
}

impl<W: Weight> ShortestPathResult<W> {
    /// Wraps a table produced elsewhere.
    ///
    /// Fails with [`Error::OutOfRange`] if `source` is not a row of the table.
    pub fn from_entries(source: VertexId, entries: Vec<PathEntry<W>>) -> Result<Self> {
        if source >= entries.len() {
            return Err(Error::OutOfRange {
                vertex: source,
                vertex_count: entries.len(),
            });
        }
        Ok(Self { source, entries })
    }

    /// Returns the source vertex of the query.
    #[must_use]
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Returns the raw table.
    #[must_use]
    pub fn entries(&self) -> &[PathEntry<W>] {
        &self.entries
    }

    /// Returns the number of rows (the graph's vertex count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, vertex: VertexId) -> Result<&PathEntry<W>> {
        self.entries.get(vertex).ok_or(Error::OutOfRange {
            vertex,
            vertex_count: self.entries.len(),
        })
    }

    /// Returns the distance to `vertex` (infinity if unreached).
    pub fn distance(&self, vertex: VertexId) -> Result<W> {
        Ok(self.entry(vertex)?.distance)
    }

    /// Returns the predecessor of `vertex` on its best path.
    pub fn predecessor(&self, vertex: VertexId) -> Result<Option<VertexId>> {
        Ok(self.entry(vertex)?.predecessor)
    }

    /// Returns true if `vertex` has a finite distance.
    #[must_use]
    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.entries
            .get(vertex)
            .is_some_and(|entry| !entry.distance.is_infinity())
    }

    /// Returns all distances, indexed by vertex.
    #[must_use]
    pub fn distances(&self) -> Vec<W> {
        self.entries.iter().map(|entry| entry.distance).collect()
    }

    /// Returns all predecessors, indexed by vertex.
    #[must_use]
    pub fn predecessors(&self) -> Vec<Option<VertexId>> {
        self.entries.iter().map(|entry| entry.predecessor).collect()
    }

    /// Reconstructs the path from the source to `target`, both inclusive.
    ///
    /// # Errors
    ///
    /// - [`Error::OutOfRange`] if `target` is not a row of the table
    /// - [`Error::Unreachable`] if `target` has no finite distance
    /// - [`Error::CycleDetected`] if the chain is longer than the vertex count
    /// - [`Error::DiscontinuousPath`] if the chain leaves the table or ends
    ///   somewhere other than the source
    pub fn path_to(&self, target: VertexId) -> Result<Vec<VertexId>> {
        if self.entry(target)?.distance.is_infinity() {
            return Err(Error::Unreachable(target));
        }

        let discontinuous = Error::DiscontinuousPath {
            target,
            origin: self.source,
        };

        let mut path = Vec::new();
        let mut current = Some(target);
        while let Some(vertex) = current {
            let entry = self.entries.get(vertex).ok_or(discontinuous.clone())?;
            path.push(vertex);
            if path.len() > self.entries.len() {
                return Err(Error::CycleDetected(target));
            }
            current = entry.predecessor;
        }
        path.reverse();

        if path.first() != Some(&self.source) {
            return Err(discontinuous);
        }
        Ok(path)
    }
}

/// Dijkstra's algorithm from `source`.
///
/// Edge weights must be non-negative. This is a precondition and is not
/// checked. Stale heap entries are skipped lazily when popped. Fails with
/// [`Error::OutOfRange`] if `source` is invalid.
pub fn dijkstra<W, G>(graph: &G, source: VertexId) -> Result<ShortestPathResult<W>>
where
    W: Weight,
    G: Graph<W>,
{
    graph.check_vertex(source)?;

    let n = graph.vertex_count();
    let mut entries = vec![PathEntry::unreached(); n];
    entries[source].distance = W::zero();

    let mut heap = BinaryHeap::new();
    heap.push(MinScored(W::zero(), source));

    while let Some(MinScored(dist_u, u)) = heap.pop() {
        if dist_u > entries[u].distance {
            continue;
        }

        for (v, &weight) in graph.neighbors(u) {
            if weight.is_infinity() {
                continue;
            }
            let candidate = dist_u.saturating_add(weight);
            if candidate < entries[v].distance {
                entries[v] = PathEntry {
                    distance: candidate,
                    predecessor: Some(u),
                };
                heap.push(MinScored(candidate, v));
            }
        }
    }

    tracing::debug!(
        source,
        vertices = n,
        reached = entries.iter().filter(|e| !e.distance.is_infinity()).count(),
        "dijkstra finished"
    );
    Ok(ShortestPathResult { source, entries })
}

/// Runs [`dijkstra`] and returns the path to `target` with its total cost.
pub fn dijkstra_path<W, G>(graph: &G, source: VertexId, target: VertexId) -> Result<(Vec<VertexId>, W)>
where
    W: Weight,
    G: Graph<W>,
{
    graph.check_vertex(target)?;
    let result = dijkstra(graph, source)?;
    let path = result.path_to(target)?;
    Ok((path, result.distance(target)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vertexa_core::{DirectedGraph, UndirectedGraph};

    #[test]
    fn test_single_vertex() {
        let graph: DirectedGraph<i32> = DirectedGraph::new(1);
        let result = dijkstra(&graph, 0).unwrap();

        assert_eq!(result.distances(), vec![0]);
        assert_eq!(result.predecessors(), vec![None]);
        assert_eq!(result.path_to(0).unwrap(), vec![0]);
    }

    #[test]
    fn test_simple_chain() {
        let graph = DirectedGraph::from_edges(3, [(0, 1, 1), (1, 2, 2)]).unwrap();
        let result = dijkstra(&graph, 0).unwrap();

        assert_eq!(result.distances(), vec![0, 1, 3]);
        assert_eq!(result.predecessors(), vec![None, Some(0), Some(1)]);
        assert_eq!(result.path_to(2).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_prefers_cheaper_detour() {
        let graph =
            UndirectedGraph::from_edges(4, [(0, 1, 1.0), (1, 2, 1.5), (0, 2, 4.0), (2, 3, 0.5)])
                .unwrap();

        let (path, cost) = dijkstra_path(&graph, 0, 3).unwrap();
        assert_eq!(path, vec![0, 1, 2, 3]);
        assert_eq!(cost, 3.0);
    }

    #[test]
    fn test_unreachable_vertex() {
        let graph = DirectedGraph::from_edges(3, [(0, 1, 1)]).unwrap();
        let result = dijkstra(&graph, 0).unwrap();

        assert_eq!(result.distance(2).unwrap(), i32::MAX);
        assert_eq!(result.predecessor(2).unwrap(), None);
        assert!(!result.is_reachable(2));
        assert_eq!(result.path_to(2), Err(Error::Unreachable(2)));
    }

    #[test]
    fn test_invalid_source_and_target() {
        let graph: DirectedGraph<u32> = DirectedGraph::new(3);
        assert!(matches!(
            dijkstra(&graph, 3),
            Err(Error::OutOfRange { vertex: 3, .. })
        ));

        let result = dijkstra(&graph, 0).unwrap();
        assert!(matches!(
            result.path_to(4),
            Err(Error::OutOfRange { vertex: 4, .. })
        ));
    }

    #[test]
    fn test_saturating_weights() {
        let graph = DirectedGraph::from_edges(3, [(0, 1, u8::MAX - 1), (1, 2, 10)]).unwrap();
        let result = dijkstra(&graph, 0).unwrap();

        assert_eq!(result.distance(1).unwrap(), 254);
        assert!(!result.is_reachable(2));
    }

    #[test]
    fn test_cycle_detected() {
        let entries = vec![
            PathEntry {
                distance: 0,
                predecessor: None,
            },
            PathEntry {
                distance: 1,
                predecessor: Some(2),
            },
            PathEntry {
                distance: 2,
                predecessor: Some(1),
            },
        ];
        let table = ShortestPathResult::from_entries(0, entries).unwrap();
        assert_eq!(table.path_to(2), Err(Error::CycleDetected(2)));
    }

    #[test]
    fn test_discontinuous_path() {
        let entries = vec![
            PathEntry {
                distance: 0,
                predecessor: None,
            },
            PathEntry {
                distance: 5,
                predecessor: None,
            },
            PathEntry {
                distance: 6,
                predecessor: Some(1),
            },
        ];
        let table = ShortestPathResult::from_entries(0, entries).unwrap();
        assert_eq!(
            table.path_to(2),
            Err(Error::DiscontinuousPath {
                target: 2,
                origin: 0
            })
        );

        let dangling = vec![
            PathEntry {
                distance: 0,
                predecessor: None,
            },
            PathEntry {
                distance: 1,
                predecessor: Some(9),
            },
        ];
        let table = ShortestPathResult::from_entries(0, dangling).unwrap();
        assert!(matches!(
            table.path_to(1),
            Err(Error::DiscontinuousPath { .. })
        ));
    }

    #[test]
    fn test_result_accessors() {
        let graph = DirectedGraph::from_edges(2, [(1, 0, 3)]).unwrap();
        let result = dijkstra(&graph, 1).unwrap();

        assert_eq!(result.source(), 1);
        assert_eq!(result.len(), 2);
        assert!(!result.is_empty());
        assert_eq!(
            result.entries()[0],
            PathEntry {
                distance: 3,
                predecessor: Some(1)
            }
        );
    }

    #[test]
    fn test_from_entries_rejects_bad_source() {
        let result = ShortestPathResult::<i32>::from_entries(1, vec![PathEntry::unreached()]);
        assert!(result.is_err());
    }
}
