//! Weighted shortest paths.
//!
//! - [`dijkstra`]: single source, non-negative weights.
//! - [`bellman_ford`] / [`has_negative_cycle`]: single source, any weights,
//!   detects negative cycles reachable from the source.
//! - [`floyd_warshall`]: all pairs, any weights, no cycle detection.
//!
//! Unreached nodes have a `None` distance rather than a sentinel value, so no
//! relaxation ever adds to "infinity".
//!
//! The single-source algorithms accumulate path costs in `i128` and narrow them
//! back to `W` at the end. A candidate cost that overflows `W` on the way is
//! still compared correctly, and only a final distance outside `W` is an
//! error.

mod bellman_ford;
mod dijkstra;
mod floyd_warshall;

pub use bellman_ford::{bellman_ford, has_negative_cycle};
pub use dijkstra::dijkstra;
pub use floyd_warshall::{floyd_warshall, DistanceMatrix};

use crate::error::{GraphError, Result};
use crate::graph::weight::Weight;
use serde::{Deserialize, Serialize};

/// Extends an accumulated cost by one edge.
///
/// `Ok(None)` means the sum is above `i128::MAX`, which is above every
/// distance `W` can hold, so the candidate can never be a shortest path.
pub(crate) fn extend_cost(cost: i128, weight: i128) -> Result<Option<i128>> {
    match cost.checked_add(weight) {
        Some(sum) => Ok(Some(sum)),
        None if weight > 0 => Ok(None),
        None => Err(GraphError::WeightOverflow),
    }
}

/// Result of a single-source shortest-path run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ShortestPathsParts<W>")]
#[serde(bound(deserialize = "W: Deserialize<'de>"))]
pub struct ShortestPaths<W> {
    source: usize,
    distances: Vec<Option<W>>,
    predecessors: Vec<Option<usize>>,
}

#[derive(Deserialize)]
struct ShortestPathsParts<W> {
    source: usize,
    distances: Vec<Option<W>>,
    predecessors: Vec<Option<usize>>,
}

impl<W> TryFrom<ShortestPathsParts<W>> for ShortestPaths<W> {
    type Error = GraphError;

    fn try_from(parts: ShortestPathsParts<W>) -> Result<Self> {
        let n = parts.distances.len();
        if parts.predecessors.len() != n {
            return Err(GraphError::Inconsistent {
                reason: "distances and predecessors differ in length",
            });
        }
        if n > 0 && parts.source >= n {
            return Err(GraphError::NodeOutOfBounds {
                node: parts.source,
                node_count: n,
            });
        }
        if let Some(&node) = parts.predecessors.iter().flatten().find(|&&p| p >= n) {
            return Err(GraphError::NodeOutOfBounds { node, node_count: n });
        }
        Ok(Self {
            source: parts.source,
            distances: parts.distances,
            predecessors: parts.predecessors,
        })
    }
}

impl<W: Weight> ShortestPaths<W> {
    /// Narrows costs accumulated in `i128` back to `W`.
    ///
    /// `beyond_range[v]` records that `v` was offered a cost above `i128::MAX`;
    /// if `v` never got a finite cost, its true distance is unrepresentable.
    pub(crate) fn from_wide(
        source: usize,
        costs: Vec<Option<i128>>,
        predecessors: Vec<Option<usize>>,
        beyond_range: &[bool],
    ) -> Result<Self> {
        let distances = costs
            .into_iter()
            .zip(beyond_range)
            .map(|(cost, &beyond)| match cost {
                Some(cost) => W::narrow(cost).map(Some),
                None if beyond => Err(GraphError::WeightOverflow),
                None => Ok(None),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(source, distances, predecessors))
    }
}

impl<W: Copy> ShortestPaths<W> {
    pub(crate) fn new(
        source: usize,
        distances: Vec<Option<W>>,
        predecessors: Vec<Option<usize>>,
    ) -> Self {
        Self {
            source,
            distances,
            predecessors,
        }
    }

    /// The node the paths start from.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Distance to `node`, or `None` if it is unreachable or not a node.
    pub fn distance(&self, node: usize) -> Option<W> {
        self.distances.get(node).copied().flatten()
    }

    /// Distance to every node, indexed by node.
    pub fn distances(&self) -> &[Option<W>] {
        &self.distances
    }

    /// Preceding node on the shortest path to each node. `None` for the
    /// source and for unreachable nodes.
    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.predecessors
    }

    /// Returns `true` if `node` is reachable from the source.
    pub fn is_reachable(&self, node: usize) -> bool {
        self.distance(node).is_some()
    }

    /// Reconstructs the path `source, ..., node`.
    ///
    /// Returns `None` if `node` is unreachable.
    pub fn path_to(&self, node: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(node) {
            return None;
        }
        let mut path = vec![node];
        let mut current = node;
        while current != self.source {
            current = self.predecessors[current]?;
            path.push(current);
            if path.len() > self.distances.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }

    /// Consumes the result, returning the distance vector.
    pub fn into_distances(self) -> Vec<Option<W>> {
        self.distances
    }
}
