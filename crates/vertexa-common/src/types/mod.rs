//! Core type definitions for Vertexa.
//!
//! This module contains the fundamental types shared by every graph and algorithm:
//! - Identifier types ([`VertexId`])
//! - Edge triples ([`Edge`])
//! - Numeric weights ([`Weight`])

mod edge;
mod weight;

pub use edge::Edge;
pub use weight::Weight;

/// Dense index of a vertex in `0..vertex_count`.
///
/// There is no separate vertex object: the index *is* the vertex.
pub type VertexId = usize;
