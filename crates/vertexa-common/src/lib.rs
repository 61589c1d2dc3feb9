//! # vertexa-common
//!
//! Foundation layer for Vertexa: vertex identifiers, weight arithmetic, and errors.
//!
//! This crate provides the fundamental building blocks used by all other
//! Vertexa crates. It has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions (VertexId, Edge, Weight)
//! - [`utils`] - Utility functions and helpers (errors)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use types::{Edge, VertexId, Weight};
pub use utils::error::{Error, Result};
