//! # vertexa-algorithms
//!
//! Classical graph algorithms over the Vertexa graph representations.
//!
//! Every algorithm is a pure function of a borrowed graph plus parameters and
//! returns a fresh result structure. Nothing is cached between calls.
//!
//! ## Algorithm Categories
//!
//! - [`components`] - Connected components, strongly connected components (Kosaraju)
//! - [`shortest_path`] - Dijkstra with predecessor tables and path reconstruction
//! - [`dynamic_weight`] - Dijkstra under time-dependent (and optionally jittered) weights
//! - [`mst`] - Kruskal's minimum spanning tree / forest
//! - [`coloring`] - Greedy sequential vertex coloring
//! - [`lattice`] - Hasse diagrams, reachability order, meet and join
//! - [`tsp`] - Tours through a mandatory vertex subset (bitmask DP)
//!
//! ## Usage
//!
//! ```
//! use vertexa_algorithms::{dijkstra, kruskal, strongly_connected_components};
//! use vertexa_core::{DirectedGraph, Graph, UndirectedGraph};
//!
//! let mut roads = DirectedGraph::new(3);
//! roads.add_edge(0, 1, 1_u32)?;
//! roads.add_edge(1, 2, 2)?;
//!
//! let result = dijkstra(&roads, 0)?;
//! assert_eq!(result.distances(), vec![0, 1, 3]);
//! assert_eq!(result.path_to(2)?, vec![0, 1, 2]);
//!
//! let sccs = strongly_connected_components(&roads);
//! assert_eq!(sccs.len(), 3);
//!
//! let forest = UndirectedGraph::from_edges(4, [(0, 1, 1_u32), (2, 3, 2)])?;
//! assert_eq!(kruskal(&forest).edges.len(), 2);
//! # Ok::<(), vertexa_common::Error>(())
//! ```

pub mod coloring;
pub mod components;
pub mod dynamic_weight;
pub mod lattice;
pub mod mst;
pub mod shortest_path;
mod traits;
pub mod tsp;

// Core traits
pub use traits::MinScored;

// Component algorithms
pub use components::{
    connected_component_count, connected_components, strongly_connected_component_count,
    strongly_connected_components,
};

// Shortest path algorithms
pub use dynamic_weight::{
    DynamicWeightConfig, DynamicWeightShortestPath, LinearGrowth, TimeSource, WeightTransform,
    apply_jitter,
};
pub use shortest_path::{PathEntry, ShortestPathResult, dijkstra, dijkstra_path};

// Minimum Spanning Tree algorithms
pub use mst::{MstResult, kruskal};

// Coloring
pub use coloring::{ColoringResult, greedy_coloring};

// Partial orders
pub use lattice::Lattice;

// Tours
pub use tsp::{TravelingSalesman, TspConfig, TspResult, solve_tsp};
