//! Error types shared across Vertexa.
//!
//! Every failure is raised synchronously at the point of violation and
//! handed back to the immediate caller. Nothing is retried and no partial
//! result is substituted.

use thiserror::Error;

use crate::types::VertexId;

/// Result alias used throughout Vertexa.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by graphs and graph algorithms.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vertex index outside `0..vertex_count`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    OutOfRange {
        /// The offending index.
        vertex: VertexId,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },

    /// Removing or reading the weight of an edge that does not exist.
    #[error("edge ({from} -> {to}) not found")]
    EdgeNotFound {
        /// Source vertex.
        from: VertexId,
        /// Destination vertex.
        to: VertexId,
    },

    /// Malformed construction input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A path was requested to a vertex with no finite distance.
    #[error("vertex {0} is unreachable from the source")]
    Unreachable(VertexId),

    /// The predecessor chain of a result table loops.
    #[error("predecessor chain of vertex {0} contains a cycle")]
    CycleDetected(VertexId),

    /// The predecessor chain of a result table does not lead back to its source.
    #[error("predecessor chain of vertex {target} does not lead back to source {origin}")]
    DiscontinuousPath {
        /// Vertex whose chain was walked.
        target: VertexId,
        /// Source the table was computed from.
        origin: VertexId,
    },

    /// No tour visits every mandatory vertex and returns to the start.
    #[error("no tour from vertex {start} visits every mandatory vertex and returns")]
    Infeasible {
        /// Start (and return) vertex of the tour.
        start: VertexId,
    },
}

impl Error {
    /// Convenience constructor for [`Error::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Error::OutOfRange {
            vertex: 5,
            vertex_count: 3,
        };
        assert_eq!(
            err.to_string(),
            "vertex 5 is out of range for a graph with 3 vertices"
        );

        let err = Error::EdgeNotFound { from: 1, to: 2 };
        assert_eq!(err.to_string(), "edge (1 -> 2) not found");

        let err = Error::invalid_argument("duplicate element");
        assert_eq!(err.to_string(), "invalid argument: duplicate element");
    }
}
