//! Utility functions and helpers.
//!
//! - [`error`] - Error taxonomy shared by the graph core and all algorithms

pub mod error;
