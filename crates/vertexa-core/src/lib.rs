//! # vertexa-core
//!
//! Core layer for Vertexa: graph representations, the adjacency engine they
//! share, and the depth-first traversal primitive.
//!
//! This crate provides the data structures every algorithm runs against.
//! It depends only on `vertexa-common`.
//!
//! ## Modules
//!
//! - [`graph`] - The [`Graph`] capability set plus directed and undirected variants
//! - [`index`] - Index structures (the insertion-ordered adjacency map)

pub mod graph;
pub mod index;

// Re-export commonly used types
pub use graph::{DirectedGraph, Graph, UndirectedGraph};
pub use index::adjacency::AdjacencyMap;
