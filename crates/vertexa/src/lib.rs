//! # Vertexa
//!
//! Classical graph algorithms over dense, index-addressed weighted graphs.
//!
//! Build a [`DirectedGraph`] or [`UndirectedGraph`], fill it with
//! `(from, to, weight)` edges, then hand it by reference to any algorithm.
//! Every algorithm returns a fresh result and leaves the graph untouched.
//!
//! ## Algorithms
//!
//! | Function | Graph | Result |
//! | -------- | ----- | ------ |
//! | [`connected_components`] | undirected | vertex partition |
//! | [`strongly_connected_components`] | directed | vertex partition (Kosaraju) |
//! | [`dijkstra`] | any | [`ShortestPathResult`] |
//! | [`DynamicWeightShortestPath`] | any | [`ShortestPathResult`] under time-varying weights |
//! | [`kruskal`] | undirected | [`MstResult`] |
//! | [`greedy_coloring`] | any | [`ColoringResult`] |
//! | [`Lattice`] | element set | Hasse diagram, meet and join |
//! | [`solve_tsp`] | any | [`TspResult`] through a mandatory vertex set |
//!
//! ## Quick Start
//!
//! ```rust
//! use vertexa::{DirectedGraph, Graph, dijkstra, solve_tsp};
//!
//! let mut graph = DirectedGraph::new(3);
//! graph.add_edge(0, 1, 1_u32)?;
//! graph.add_edge(1, 2, 2)?;
//! graph.add_edge(2, 0, 4)?;
//!
//! let paths = dijkstra(&graph, 0)?;
//! assert_eq!(paths.path_to(2)?, vec![0, 1, 2]);
//!
//! let tour = solve_tsp(&graph, [0, 1, 2])?;
//! assert_eq!(tour.cost, 7);
//! # Ok::<(), vertexa::Error>(())
//! ```

// Core types
pub use vertexa_common::types::{Edge, VertexId, Weight};
pub use vertexa_common::utils::error::{Error, Result};

// Graphs
pub use vertexa_core::graph::traversal::{dfs, has_path};
pub use vertexa_core::{DirectedGraph, Graph, UndirectedGraph};

// Algorithms
pub use vertexa_algorithms::{
    ColoringResult, DynamicWeightConfig, DynamicWeightShortestPath, Lattice, LinearGrowth,
    MstResult, PathEntry, ShortestPathResult, TimeSource, TravelingSalesman, TspConfig,
    TspResult, WeightTransform, apply_jitter, connected_component_count, connected_components,
    dijkstra, dijkstra_path, greedy_coloring, kruskal, solve_tsp,
    strongly_connected_component_count, strongly_connected_components,
};
