//! Shortest closed tour through a mandatory subset of vertices.
//!
//! The tour starts and ends at the first mandatory vertex and must visit all
//! other mandatory vertices at least once. Vertices outside the mandatory set
//! may be passed through between two mandatory visits; mandatory vertices are
//! entered only to be visited. The tour closes with a direct edge from the
//! last mandatory vertex back to the start, so a lone mandatory vertex needs a
//! self-loop.
//!
//! # Algorithm
//!
//! A Held–Karp style table `cost[mask][pos]` holds the cheapest completion
//! from `pos` once the mandatory vertices in `mask` are visited. The full
//! mask holds only the closing edge to the start. Masks are solved from the
//! full set downwards. Within every smaller mask, moves that visit a
//! new mandatory vertex read an already-solved larger mask; moves through
//! non-mandatory vertices stay in the same mask and are resolved with a
//! Dijkstra pass over reversed edges, which handles cycles among transit
//! vertices. The start bit is always set, so only `2^(m-1)` masks are stored.
//!
//! Time is `O(2^m * (n + e) * log n)` and memory `O(2^m * n)`, so `m` is
//! capped by [`TspConfig::max_mandatory`].

use std::collections::BinaryHeap;
use std::marker::PhantomData;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use vertexa_common::types::{VertexId, Weight};
use vertexa_common::utils::error::{Error, Result};
use vertexa_core::Graph;

use crate::traits::MinScored;

/// Default cap on the number of mandatory vertices.
pub const DEFAULT_MAX_MANDATORY: usize = 20;

/// Configuration of the tour solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TspConfig {
    /// Largest accepted mandatory set.
    pub max_mandatory: usize,
}

impl Default for TspConfig {
    fn default() -> Self {
        Self {
            max_mandatory: DEFAULT_MAX_MANDATORY,
        }
    }
}

impl TspConfig {
    /// Sets the largest accepted mandatory set.
    #[must_use]
    pub fn with_max_mandatory(mut self, max_mandatory: usize) -> Self {
        self.max_mandatory = max_mandatory;
        self
    }

    /// Fails with [`Error::InvalidArgument`] unless the cap fits a bitmask.
    pub fn validate(&self) -> Result<()> {
        if self.max_mandatory == 0 || self.max_mandatory >= usize::BITS as usize {
            return Err(Error::invalid_argument(format!(
                "max_mandatory must lie in 1..{}, got {}",
                usize::BITS,
                self.max_mandatory
            )));
        }
        Ok(())
    }
}

/// A solved tour.
///
/// An infeasible instance is reported as the path `[start]` with an infinite cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TspResult<W> {
    /// Start and end vertex of the tour.
    pub start: VertexId,
    /// Vertices in visiting order, beginning and ending at `start`.
    pub path: Vec<VertexId>,
    /// Total weight of the tour.
    pub cost: W,
}

impl<W: Weight> TspResult<W> {
    /// Returns true if a tour exists.
    #[must_use]
    pub fn is_feasible(&self) -> bool {
        !self.cost.is_infinity()
    }

    /// Returns the tour and its cost, or [`Error::Infeasible`] if none exists.
    pub fn into_tour(self) -> Result<(Vec<VertexId>, W)> {
        if self.is_feasible() {
            Ok((self.path, self.cost))
        } else {
            Err(Error::Infeasible { start: self.start })
        }
    }
}

/// Tour solver bound to a graph and a mandatory vertex set.
#[derive(Debug, Clone)]
pub struct TravelingSalesman<'g, W, G> {
    graph: &'g G,
    mandatory: Vec<VertexId>,
    bit_of: HashMap<VertexId, usize>,
    _weight: PhantomData<fn() -> W>,
}

impl<'g, W, G> TravelingSalesman<'g, W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Creates a solver with the default configuration.
    ///
    /// The first mandatory vertex is the start of the tour.
    pub fn new(graph: &'g G, mandatory: impl IntoIterator<Item = VertexId>) -> Result<Self> {
        Self::with_config(graph, mandatory, TspConfig::default())
    }

    /// Creates a solver with an explicit configuration.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] for an invalid config, an empty or
    ///   oversized mandatory set, or a repeated mandatory vertex
    /// - [`Error::OutOfRange`] for a mandatory vertex outside the graph
    pub fn with_config(
        graph: &'g G,
        mandatory: impl IntoIterator<Item = VertexId>,
        config: TspConfig,
    ) -> Result<Self> {
        config.validate()?;

        let mandatory: Vec<VertexId> = mandatory.into_iter().collect();
        if mandatory.is_empty() {
            return Err(Error::invalid_argument("mandatory vertex set is empty"));
        }
        if mandatory.len() > config.max_mandatory {
            return Err(Error::invalid_argument(format!(
                "{} mandatory vertices exceed the limit of {}",
                mandatory.len(),
                config.max_mandatory
            )));
        }

        let mut bit_of = HashMap::with_capacity(mandatory.len());
        for (bit, &vertex) in mandatory.iter().enumerate() {
            graph.check_vertex(vertex)?;
            if bit_of.insert(vertex, bit).is_some() {
                return Err(Error::invalid_argument(format!(
                    "vertex {vertex} is listed as mandatory more than once"
                )));
            }
        }

        Ok(Self {
            graph,
            mandatory,
            bit_of,
            _weight: PhantomData,
        })
    }

    /// Returns the start (and end) vertex of the tour.
    #[must_use]
    pub fn start(&self) -> VertexId {
        self.mandatory[0]
    }

    /// Returns the mandatory vertices in bit order.
    #[must_use]
    pub fn mandatory(&self) -> &[VertexId] {
        &self.mandatory
    }

    /// Returns true if `vertex` may be the current position once `mask` is visited.
    fn is_open(&self, mask: usize, vertex: VertexId) -> bool {
        self.bit_of
            .get(&vertex)
            .is_none_or(|&bit| mask & (1 << bit) != 0)
    }

    /// For every vertex, the edges entering it as `(from, weight)`.
    fn reverse_adjacency(&self) -> Vec<Vec<(VertexId, W)>> {
        let n = self.graph.vertex_count();
        let mut reverse = vec![Vec::new(); n];
        for u in 0..n {
            for (v, &weight) in self.graph.neighbors(u) {
                if v < n && !weight.is_infinity() {
                    reverse[v].push((u, weight));
                }
            }
        }
        reverse
    }

    /// Computes the cheapest tour.
    ///
    /// A single mandatory vertex yields `[start, start]` weighted by its
    /// self-loop. If no tour exists the result is `[start]` with an infinite
    /// cost; use [`TspResult::into_tour`] to turn that into an error.
    ///
    /// Fails with [`Error::InvalidArgument`] if the table size overflows `usize`.
    pub fn solve(&self) -> Result<TspResult<W>> {
        let start = self.start();
        let m = self.mandatory.len();
        let n = self.graph.vertex_count();
        let full = (1_usize << m) - 1;
        let slot = |mask: usize, pos: VertexId| (mask >> 1) * n + pos;

        let states = (1_usize << (m - 1)).checked_mul(n).ok_or_else(|| {
            Error::invalid_argument(format!(
                "{m} mandatory vertices over {n} vertices overflow the tour table"
            ))
        })?;
        let mut cost = vec![W::infinity(); states];
        let mut next: Vec<Option<VertexId>> = vec![None; states];
        let reverse = self.reverse_adjacency();
        let mut heap = BinaryHeap::new();

        // Odd masks are exactly those containing the start bit.
        for mask in (1..=full).rev().step_by(2) {
            for pos in 0..n {
                if !self.is_open(mask, pos) {
                    continue;
                }

                let mut best = W::infinity();
                let mut via = None;
                for (v, &weight) in self.graph.neighbors(pos) {
                    if weight.is_infinity() || v >= n {
                        continue;
                    }
                    let candidate = if mask == full {
                        if v != start {
                            continue;
                        }
                        weight
                    } else {
                        match self.bit_of.get(&v) {
                            Some(&bit) if mask & (1 << bit) == 0 => {
                                weight.saturating_add(cost[slot(mask | (1 << bit), v)])
                            }
                            _ => continue,
                        }
                    };
                    if candidate < best {
                        best = candidate;
                        via = Some(v);
                    }
                }

                cost[slot(mask, pos)] = best;
                next[slot(mask, pos)] = via;
                if !best.is_infinity() {
                    heap.push(MinScored(best, pos));
                }
            }

            // The closing edge must be direct.
            if mask == full {
                heap.clear();
                continue;
            }

            // Relay through non-mandatory vertices within the same mask.
            while let Some(MinScored(dist_v, v)) = heap.pop() {
                if dist_v > cost[slot(mask, v)] || self.bit_of.contains_key(&v) {
                    continue;
                }
                for &(u, weight) in &reverse[v] {
                    if !self.is_open(mask, u) {
                        continue;
                    }
                    let candidate = dist_v.saturating_add(weight);
                    if candidate < cost[slot(mask, u)] {
                        cost[slot(mask, u)] = candidate;
                        next[slot(mask, u)] = Some(v);
                        heap.push(MinScored(candidate, u));
                    }
                }
            }
        }

        let total = cost[slot(1, start)];
        tracing::debug!(
            vertices = n,
            mandatory = m,
            states,
            cost = ?total,
            "tsp table solved"
        );

        if total.is_infinity() {
            return Ok(TspResult {
                start,
                path: vec![start],
                cost: total,
            });
        }

        let mut path = vec![start];
        let mut mask = 1;
        let mut pos = start;
        loop {
            let v = next[slot(mask, pos)].ok_or(Error::DiscontinuousPath {
                target: pos,
                origin: start,
            })?;
            path.push(v);
            if mask == full && v == start {
                break;
            }
            if let Some(&bit) = self.bit_of.get(&v) {
                mask |= 1 << bit;
            }
            pos = v;
            if path.len() > states + 1 {
                return Err(Error::CycleDetected(start));
            }
        }

        Ok(TspResult {
            start,
            path,
            cost: total,
        })
    }
}

/// Solves a tour with the default configuration.
///
/// See [`TravelingSalesman::solve`].
pub fn solve_tsp<W, G>(graph: &G, mandatory: impl IntoIterator<Item = VertexId>) -> Result<TspResult<W>>
where
    W: Weight,
    G: Graph<W>,
{
    TravelingSalesman::new(graph, mandatory)?.solve()
}
