//! Index structures backing the graph representations.
//!
//! - [`adjacency`] - Per-vertex neighbor maps shared by directed and undirected graphs

pub mod adjacency;
