//! Weighted edge triples.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::VertexId;

/// A weighted edge `(from, to, weight)`.
///
/// In an undirected graph `from <= to` for edges reported by `edges()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<W> {
    /// Source vertex.
    pub from: VertexId,
    /// Destination vertex.
    pub to: VertexId,
    /// Weight attached to the edge.
    pub weight: W,
}

impl<W> Edge<W> {
    /// Creates a new edge.
    #[must_use]
    pub const fn new(from: VertexId, to: VertexId, weight: W) -> Self {
        Self { from, to, weight }
    }

    /// Returns the same edge with its endpoints swapped.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }

    /// Returns the endpoints as a pair.
    #[must_use]
    pub const fn endpoints(&self) -> (VertexId, VertexId) {
        (self.from, self.to)
    }
}

impl<W> From<(VertexId, VertexId, W)> for Edge<W> {
    fn from((from, to, weight): (VertexId, VertexId, W)) -> Self {
        Self { from, to, weight }
    }
}

impl<W> From<Edge<W>> for (VertexId, VertexId, W) {
    fn from(edge: Edge<W>) -> Self {
        (edge.from, edge.to, edge.weight)
    }
}

impl<W: fmt::Display> fmt::Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} -> {}, {})", self.from, self.to, self.weight)
    }
}
