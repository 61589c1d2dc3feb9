//! Shared helper types for the algorithm implementations.

use std::cmp::Ordering;

/// A `BinaryHeap` entry ordered so that the *smallest* score pops first.
///
/// Ties (and incomparable scores such as NaN) fall back to the smaller key,
/// which keeps heap-driven algorithms deterministic.
#[derive(Debug, Clone, Copy)]
pub struct MinScored<S, K>(pub S, pub K);

impl<S: PartialOrd, K: Ord> PartialEq for MinScored<S, K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S: PartialOrd, K: Ord> Eq for MinScored<S, K> {}

impl<S: PartialOrd, K: Ord> PartialOrd for MinScored<S, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: PartialOrd, K: Ord> Ord for MinScored<S, K> {
    fn cmp(&self, other: &Self) -> Ordering {
        match other.0.partial_cmp(&self.0) {
            Some(Ordering::Equal) | None => other.1.cmp(&self.1),
            Some(ordering) => ordering,
        }
    }
}
