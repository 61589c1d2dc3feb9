//! Dijkstra under time-dependent edge weights.
//!
//! The effective weight of an edge is recomputed every time the edge is
//! relaxed, as `transform(original_weight, elapsed)`, optionally scaled by a
//! random jitter factor. Once a vertex is popped from the queue its distance
//! is committed and never revised, even if a later relaxation would have
//! produced a smaller value under a different clock reading.
//!
//! ```
//! use std::time::Duration;
//! use vertexa_algorithms::{DynamicWeightShortestPath, LinearGrowth};
//! use vertexa_core::{DirectedGraph, Graph};
//!
//! let mut graph = DirectedGraph::new(3);
//! graph.add_edge(0, 1, 10.0)?;
//! graph.add_edge(1, 2, 10.0)?;
//!
//! let solver = DynamicWeightShortestPath::new(LinearGrowth::new(0.1));
//! let result = solver.dijkstra_at(&graph, 0, Duration::from_secs(5))?;
//! assert_eq!(result.distance(2)?, 30.0);
//! # Ok::<(), vertexa_common::Error>(())
//! ```

use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use vertexa_common::types::{VertexId, Weight};
use vertexa_common::utils::error::{Error, Result};
use vertexa_core::Graph;

use crate::shortest_path::{PathEntry, ShortestPathResult};
use crate::traits::MinScored;

/// Maps an original edge weight and the elapsed query time to an effective weight.
pub trait WeightTransform<W> {
    /// Returns the effective weight of an edge at `elapsed`.
    fn apply(&self, weight: W, elapsed: Duration) -> W;
}

impl<W, F> WeightTransform<W> for F
where
    F: Fn(W, Duration) -> W,
{
    fn apply(&self, weight: W, elapsed: Duration) -> W {
        self(weight, elapsed)
    }
}

/// Weights grow linearly with time: `w * (1 + factor * seconds)`.
///
/// A factor of `0.1` makes every edge 10% more expensive per elapsed second.
/// Infinite weights stay infinite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearGrowth {
    /// Relative growth per second.
    pub factor: f64,
}

impl LinearGrowth {
    /// Creates a transform with the given relative growth per second.
    #[must_use]
    pub const fn new(factor: f64) -> Self {
        Self { factor }
    }
}

impl<W: Weight> WeightTransform<W> for LinearGrowth {
    fn apply(&self, weight: W, elapsed: Duration) -> W {
        if weight.is_infinity() {
            return weight;
        }
        let scale = 1.0 + self.factor * elapsed.as_secs_f64();
        W::from_f64(weight.to_f64() * scale)
    }
}

/// Where the elapsed time fed to the transform comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeSource {
    /// Wall-clock time since the solver was created (or last reset).
    #[default]
    WallClock,
    /// A constant elapsed time for every relaxation.
    Fixed(Duration),
}

/// Configuration of a [`DynamicWeightShortestPath`] solver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DynamicWeightConfig {
    /// Clock used by [`DynamicWeightShortestPath::dijkstra`].
    pub time_source: TimeSource,
    /// Relative jitter amplitude in `[0, 1]`; `None` disables jitter.
    pub jitter: Option<f64>,
    /// Seed for the jitter generator; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl DynamicWeightConfig {
    /// Sets the time source.
    #[must_use]
    pub fn with_time_source(mut self, time_source: TimeSource) -> Self {
        self.time_source = time_source;
        self
    }

    /// Enables jitter with the given relative amplitude.
    #[must_use]
    pub fn with_jitter(mut self, amplitude: f64) -> Self {
        self.jitter = Some(amplitude);
        self
    }

    /// Seeds the jitter generator for reproducible runs.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fails with [`Error::InvalidArgument`] on a non-finite or out-of-range jitter amplitude.
    pub fn validate(&self) -> Result<()> {
        if let Some(amplitude) = self.jitter
            && !(amplitude.is_finite() && (0.0..=1.0).contains(&amplitude))
        {
            return Err(Error::invalid_argument(format!(
                "jitter amplitude must lie in [0, 1], got {amplitude}"
            )));
        }
        Ok(())
    }
}

/// Scales `weight` by a random factor drawn uniformly from `[1 - amplitude, 1 + amplitude]`.
///
/// Infinite weights and a zero amplitude are returned unchanged.
pub fn apply_jitter<W: Weight, R: Rng + ?Sized>(weight: W, amplitude: f64, rng: &mut R) -> W {
    if weight.is_infinity() || amplitude <= 0.0 {
        return weight;
    }
    let factor = 1.0 + rng.gen_range(-amplitude..=amplitude);
    W::from_f64(weight.to_f64() * factor)
}

/// Shortest-path solver whose edge weights depend on elapsed time.
#[derive(Debug, Clone)]
pub struct DynamicWeightShortestPath<T> {
    transform: T,
    config: DynamicWeightConfig,
    started: Instant,
}

impl<T> DynamicWeightShortestPath<T> {
    /// Creates a solver on the wall clock without jitter. The clock starts now.
    pub fn new(transform: T) -> Self {
        Self {
            transform,
            config: DynamicWeightConfig::default(),
            started: Instant::now(),
        }
    }

    /// Creates a solver with an explicit configuration.
    ///
    /// Fails with [`Error::InvalidArgument`] if the configuration is invalid.
    pub fn with_config(transform: T, config: DynamicWeightConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            transform,
            config,
            started: Instant::now(),
        })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &DynamicWeightConfig {
        &self.config
    }

    /// Returns the transform.
    pub fn transform(&self) -> &T {
        &self.transform
    }

    /// Restarts the wall clock.
    pub fn reset_clock(&mut self) {
        self.started = Instant::now();
    }

    /// Time elapsed on the configured time source.
    pub fn elapsed(&self) -> Duration {
        match self.config.time_source {
            TimeSource::WallClock => self.started.elapsed(),
            TimeSource::Fixed(elapsed) => elapsed,
        }
    }

    /// Runs the query on the configured time source.
    ///
    /// With [`TimeSource::WallClock`] every relaxation reads the clock anew.
    pub fn dijkstra<W, G>(&self, graph: &G, source: VertexId) -> Result<ShortestPathResult<W>>
    where
        W: Weight,
        G: Graph<W>,
        T: WeightTransform<W>,
    {
        self.run(graph, source, || self.elapsed())
    }

    /// Runs the query with a caller-supplied elapsed time for every relaxation.
    pub fn dijkstra_at<W, G>(
        &self,
        graph: &G,
        source: VertexId,
        elapsed: Duration,
    ) -> Result<ShortestPathResult<W>>
    where
        W: Weight,
        G: Graph<W>,
        T: WeightTransform<W>,
    {
        self.run(graph, source, || elapsed)
    }

    fn run<W, G, C>(&self, graph: &G, source: VertexId, clock: C) -> Result<ShortestPathResult<W>>
    where
        W: Weight,
        G: Graph<W>,
        T: WeightTransform<W>,
        C: Fn() -> Duration,
    {
        graph.check_vertex(source)?;

        let mut rng = self.config.jitter.map(|_| match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        });

        let n = graph.vertex_count();
        let mut entries = vec![PathEntry::unreached(); n];
        let mut settled = vec![false; n];
        entries[source].distance = W::zero();

        let mut heap = BinaryHeap::new();
        heap.push(MinScored(W::zero(), source));

        while let Some(MinScored(dist_u, u)) = heap.pop() {
            if settled[u] {
                continue;
            }
            settled[u] = true;

            for (v, &original) in graph.neighbors(u) {
                if settled[v] || original.is_infinity() {
                    continue;
                }

                let elapsed = clock();
                let mut weight = self.transform.apply(original, elapsed);
                if let (Some(amplitude), Some(rng)) = (self.config.jitter, rng.as_mut()) {
                    weight = apply_jitter(weight, amplitude, rng);
                }
                tracing::trace!(from = u, to = v, ?original, ?weight, ?elapsed, "relaxing edge");

                if weight.is_infinity() {
                    continue;
                }
                let candidate = dist_u.saturating_add(weight);
                if candidate < entries[v].distance {
                    entries[v] = PathEntry {
                        distance: candidate,
                        predecessor: Some(u),
                    };
                    heap.push(MinScored(candidate, v));
                }
            }
        }

        tracing::debug!(
            source,
            vertices = n,
            settled = settled.iter().filter(|&&s| s).count(),
            jitter = self.config.jitter.is_some(),
            "dynamic-weight dijkstra finished"
        );
        ShortestPathResult::from_entries(source, entries)
    }
}
