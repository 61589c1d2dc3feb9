//! Partial orders stored as Hasse diagrams.
//!
//! A [`Lattice`] maps a finite set of distinct elements to dense indices and
//! keeps only the covering relation as a [`DirectedGraph`]: an edge `i -> j`
//! means element `i` is directly below element `j`. The order itself is
//! recovered by reachability, so `a <= b` iff `b` is reachable from `a`.
//!
//! Despite the name, the structure holds any finite poset. [`Lattice::meet`]
//! and [`Lattice::join`] return `None` where a bound does not exist, and
//! [`Lattice::is_lattice`] checks whether every pair has both.
//!
//! ## Construction
//!
//! - [`Lattice::from_diagram`] takes the covering edges as given
//! - [`Lattice::from_relation`] derives them from a `<=` predicate by
//!   transitive reduction
//!
//! ```
//! use vertexa_algorithms::Lattice;
//!
//! let divisors = Lattice::from_relation([1, 2, 3, 4, 6, 12], |a, b| b % a == 0)?;
//! assert_eq!(divisors.meet(&4, &6)?, Some(&2));
//! assert_eq!(divisors.join(&4, &6)?, Some(&12));
//! assert!(divisors.is_lattice());
//! # Ok::<(), vertexa_common::Error>(())
//! ```

use std::fmt;
use std::hash::Hash;

use indexmap::IndexSet;
use vertexa_common::types::VertexId;
use vertexa_common::utils::error::{Error, Result};
use vertexa_core::graph::traversal::dfs;
use vertexa_core::{DirectedGraph, Graph};

/// A finite partial order represented by its Hasse diagram.
#[derive(Debug, Clone)]
pub struct Lattice<T> {
    elements: IndexSet<T>,
    hasse: DirectedGraph<()>,
    explicit: bool,
}

/// Collects `elements` into an index set, rejecting duplicates.
fn index_elements<T: Eq + Hash>(elements: impl IntoIterator<Item = T>) -> Result<IndexSet<T>> {
    let mut set = IndexSet::new();
    for element in elements {
        let (index, inserted) = set.insert_full(element);
        if !inserted {
            return Err(Error::invalid_argument(format!(
                "duplicate lattice element (first seen at index {index})"
            )));
        }
    }
    Ok(set)
}

/// Row `x` holds every vertex reachable from `x`, including `x` itself.
fn reachability(graph: &DirectedGraph<()>) -> Vec<Vec<bool>> {
    let n = graph.vertex_count();
    (0..n)
        .map(|start| {
            let mut visited = vec![false; n];
            let walked = dfs(graph, start, &mut visited, |_| {});
            debug_assert!(walked.is_ok(), "start {start} is a vertex");
            visited
        })
        .collect()
}

/// Returns the unique candidate that reaches every other candidate, if any.
///
/// `reach` is oriented so that `reach[g][c]` means `g` dominates `c`.
fn dominating(candidates: &[VertexId], reach: &[Vec<bool>]) -> Option<VertexId> {
    let mut winners = candidates
        .iter()
        .copied()
        .filter(|&g| candidates.iter().all(|&c| reach[g][c]));
    match (winners.next(), winners.next()) {
        (Some(g), None) => Some(g),
        _ => None,
    }
}

impl<T: Eq + Hash> Lattice<T> {
    /// Wraps an existing covering diagram.
    ///
    /// Element `i` of `elements` labels vertex `i` of `diagram`; edge weights
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `elements` contains duplicates
    /// or its length differs from the diagram's vertex count.
    pub fn from_diagram<W, G>(diagram: &G, elements: impl IntoIterator<Item = T>) -> Result<Self>
    where
        W: Clone,
        G: Graph<W>,
    {
        let elements = index_elements(elements)?;
        if elements.len() != diagram.vertex_count() {
            return Err(Error::invalid_argument(format!(
                "{} elements supplied for a diagram of {} vertices",
                elements.len(),
                diagram.vertex_count()
            )));
        }

        let mut hasse = DirectedGraph::new(elements.len());
        for edge in diagram.edges() {
            hasse.add_edge(edge.from, edge.to, ())?;
        }

        Ok(Self {
            elements,
            hasse,
            explicit: true,
        })
    }

    /// Builds the Hasse diagram of the order `rel` by transitive reduction.
    ///
    /// `rel(a, b)` must mean `a <= b` and encode a partial order; this is not
    /// validated. For each related pair `a != b`, the edge `a -> b` is kept
    /// only if no third element `c` satisfies `rel(a, c) && rel(c, b)`.
    /// Runs in `O(n^3)` predicate calls.
    ///
    /// Returns [`Error::InvalidArgument`] if `elements` contains duplicates.
    pub fn from_relation<F>(elements: impl IntoIterator<Item = T>, rel: F) -> Result<Self>
    where
        F: Fn(&T, &T) -> bool,
    {
        let elements = index_elements(elements)?;
        let n = elements.len();
        let mut hasse = DirectedGraph::new(n);

        for (i, a) in elements.iter().enumerate() {
            for (j, b) in elements.iter().enumerate() {
                if i == j || !rel(a, b) {
                    continue;
                }
                let covered = elements
                    .iter()
                    .enumerate()
                    .any(|(k, c)| k != i && k != j && rel(a, c) && rel(c, b));
                if !covered {
                    hasse.add_edge(i, j, ())?;
                }
            }
        }

        tracing::debug!(
            elements = n,
            covers = hasse.edge_count(),
            "hasse diagram built from relation"
        );
        Ok(Self {
            elements,
            hasse,
            explicit: false,
        })
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the order has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the elements in index order.
    pub fn elements(&self) -> impl Iterator<Item = &T> {
        self.elements.iter()
    }

    /// Returns the element with the given index.
    #[must_use]
    pub fn element(&self, index: VertexId) -> Option<&T> {
        self.elements.get_index(index)
    }

    /// Returns the index of `element`.
    pub fn index_of(&self, element: &T) -> Option<VertexId> {
        self.elements.get_index_of(element)
    }

    /// Returns the covering relation as a directed graph over element indices.
    #[must_use]
    pub fn hasse_diagram(&self) -> &DirectedGraph<()> {
        &self.hasse
    }

    /// Returns true if the diagram was supplied rather than derived.
    #[must_use]
    pub fn is_explicit(&self) -> bool {
        self.explicit
    }

    /// Returns every covering pair `(lower, upper)`.
    pub fn covers(&self) -> Vec<(&T, &T)> {
        self.hasse
            .edges()
            .into_iter()
            .filter_map(|edge| Some((self.element(edge.from)?, self.element(edge.to)?)))
            .collect()
    }

    fn require(&self, element: &T) -> Result<VertexId> {
        self.index_of(element)
            .ok_or_else(|| Error::invalid_argument("element is not part of the lattice"))
    }

    /// Returns true if `a <= b`, that is, `b` is reachable from `a` in the diagram.
    ///
    /// Fails with [`Error::InvalidArgument`] if either operand is unknown.
    pub fn less_equal(&self, a: &T, b: &T) -> Result<bool> {
        let ia = self.require(a)?;
        let ib = self.require(b)?;
        if ia == ib {
            return Ok(true);
        }
        self.hasse.has_path(ia, ib)
    }

    /// Returns the greatest lower bound of `a` and `b`.
    ///
    /// `None` if there is no common lower bound or no unique greatest one.
    /// Fails with [`Error::InvalidArgument`] if either operand is unknown.
    pub fn meet(&self, a: &T, b: &T) -> Result<Option<&T>> {
        let ia = self.require(a)?;
        let ib = self.require(b)?;
        let below = reachability(&self.hasse.transpose());
        Ok(self.bound(ia, ib, &below))
    }

    /// Returns the least upper bound of `a` and `b`.
    ///
    /// `None` if there is no common upper bound or no unique least one.
    /// Fails with [`Error::InvalidArgument`] if either operand is unknown.
    pub fn join(&self, a: &T, b: &T) -> Result<Option<&T>> {
        let ia = self.require(a)?;
        let ib = self.require(b)?;
        let above = reachability(&self.hasse);
        Ok(self.bound(ia, ib, &above))
    }

    /// Returns true if every pair of elements has both a meet and a join.
    ///
    /// The empty order is trivially a lattice.
    #[must_use]
    pub fn is_lattice(&self) -> bool {
        let below = reachability(&self.hasse.transpose());
        let above = reachability(&self.hasse);
        let n = self.len();

        (0..n).all(|a| {
            (a..n).all(|b| self.bound(a, b, &below).is_some() && self.bound(a, b, &above).is_some())
        })
    }

    /// Common bound of `a` and `b` dominating all others, in the direction of `reach`.
    fn bound(&self, a: VertexId, b: VertexId, reach: &[Vec<bool>]) -> Option<&T> {
        let candidates: Vec<VertexId> = (0..self.len())
            .filter(|&c| reach[a][c] && reach[b][c])
            .collect();
        dominating(&candidates, reach).and_then(|g| self.element(g))
    }
}

impl<T: fmt::Display> fmt::Display for Lattice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (from, to, _) in self.hasse.adjacency().iter() {
            if let (Some(lower), Some(upper)) =
                (self.elements.get_index(from), self.elements.get_index(to))
            {
                writeln!(f, "{lower} -> {upper}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn divisors_of_12() -> Lattice<u32> {
        Lattice::from_relation([1, 2, 3, 4, 6, 12], |a, b| b % a == 0).unwrap()
    }

    #[test]
    fn test_total_order_covers() {
        let lattice = Lattice::from_relation([1, 2, 3, 4], |a, b| a <= b).unwrap();

        assert_eq!(lattice.covers(), vec![(&1, &2), (&2, &3), (&3, &4)]);
        assert_eq!(lattice.meet(&2, &3).unwrap(), Some(&2));
        assert_eq!(lattice.join(&2, &3).unwrap(), Some(&3));
        assert!(lattice.less_equal(&1, &4).unwrap());
        assert!(!lattice.less_equal(&4, &1).unwrap());
        assert!(!lattice.is_explicit());
    }

    #[test]
    fn test_divisibility_lattice() {
        let lattice = divisors_of_12();

        let mut covers = lattice.covers();
        covers.sort_unstable();
        assert_eq!(
            covers,
            vec![
                (&1, &2),
                (&1, &3),
                (&2, &4),
                (&2, &6),
                (&3, &6),
                (&4, &12),
                (&6, &12)
            ]
        );
        assert_eq!(lattice.meet(&4, &6).unwrap(), Some(&2));
        assert_eq!(lattice.join(&2, &3).unwrap(), Some(&6));
        assert_eq!(lattice.join(&4, &3).unwrap(), Some(&12));
        assert!(lattice.is_lattice());
    }

    #[test]
    fn test_reflexive_without_self_loop() {
        let lattice = divisors_of_12();
        assert!(lattice.less_equal(&6, &6).unwrap());
        assert!(!lattice.hasse_diagram().has_edge(5, 5));
        assert_eq!(lattice.meet(&6, &6).unwrap(), Some(&6));
        assert_eq!(lattice.join(&6, &6).unwrap(), Some(&6));
    }

    #[test]
    fn test_no_unique_bound() {
        // Two minimal elements both below two maximal ones.
        let lattice = Lattice::from_relation(["a", "b", "c", "d"], |x, y| {
            x == y || matches!((*x, *y), ("a" | "b", "c" | "d"))
        })
        .unwrap();

        assert_eq!(lattice.meet(&"c", &"d").unwrap(), None);
        assert_eq!(lattice.join(&"a", &"b").unwrap(), None);
        assert_eq!(lattice.meet(&"a", &"b").unwrap(), None);
        assert_eq!(lattice.join(&"a", &"c").unwrap(), Some(&"c"));
        assert!(!lattice.is_lattice());
    }

    #[test]
    fn test_explicit_diagram() {
        let diagram = DirectedGraph::from_edges(3, [(0, 1, 1), (1, 2, 1)]).unwrap();
        let lattice = Lattice::from_diagram(&diagram, ["bottom", "middle", "top"]).unwrap();

        assert!(lattice.is_explicit());
        assert!(lattice.less_equal(&"bottom", &"top").unwrap());
        assert_eq!(lattice.meet(&"middle", &"top").unwrap(), Some(&"middle"));
        assert_eq!(lattice.index_of(&"top"), Some(2));
        assert_eq!(lattice.element(0), Some(&"bottom"));
        assert_eq!(lattice.to_string(), "bottom -> middle\nmiddle -> top\n");
    }

    #[test]
    fn test_duplicate_elements_rejected() {
        let result = Lattice::from_relation([1, 2, 1], |a, b| a <= b);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));

        let diagram: DirectedGraph<()> = DirectedGraph::new(2);
        let result = Lattice::from_diagram(&diagram, ["x", "x"]);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_element_count_mismatch() {
        let diagram: DirectedGraph<()> = DirectedGraph::new(3);
        let result = Lattice::from_diagram(&diagram, [1, 2]);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_unknown_element() {
        let lattice = divisors_of_12();
        assert!(matches!(
            lattice.less_equal(&5, &12),
            Err(Error::InvalidArgument(_))
        ));
        assert!(lattice.meet(&1, &7).is_err());
        assert!(lattice.join(&9, &1).is_err());
    }

    #[test]
    fn test_empty_lattice() {
        let lattice: Lattice<u8> = Lattice::from_relation([], |a, b| a <= b).unwrap();
        assert!(lattice.is_empty());
        assert!(lattice.is_lattice());
        assert_eq!(lattice.to_string(), "");
    }
}
