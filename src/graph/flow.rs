//! Maximum flow by Edmonds-Karp.
//!
//! Edge weights are read as capacities. The [`ResidualNetwork`] keeps a dense
//! `n x n` residual matrix; pushing `f` units along `u -> v` lowers
//! `residual(u, v)` by `f` and raises `residual(v, u)` by `f`, so the sum of the
//! two never changes. Augmenting paths are found by BFS, which bounds the number
//! of augmentations by `O(n m)` regardless of capacities.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `ResidualNetwork::from_graph` | \(O(n^2 + m)\) | Dense residual matrix |
//! | `augmenting_path` | \(O(n + m)\) | BFS over forward and backward edges |
//! | `edmonds_karp` | \(O(n m^2)\) | |

use crate::error::{GraphError, Result};
use crate::graph::adjacency::{AdjacencyList, WeightedEdge};
use crate::graph::invariants::invariant;
use crate::graph::weight::Weight;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Residual capacities of a flow network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidualNetwork<W> {
    node_count: usize,
    residual: Vec<W>,
    /// Nodes joined to each node by an edge in either direction, ascending.
    neighbors: Vec<Vec<usize>>,
}

impl<W: Weight> ResidualNetwork<W> {
    /// Builds the residual network of `graph`.
    ///
    /// Parallel edges add their capacities. Backward residuals start at zero
    /// unless the graph has an edge in that direction too.
    ///
    /// # Errors
    /// - [`GraphError::NegativeWeight`] if a capacity is negative.
    /// - [`GraphError::WeightOverflow`] if parallel capacities overflow.
    pub fn from_graph(graph: &AdjacencyList<W>) -> Result<Self> {
        let n = graph.node_count();
        let mut residual = vec![W::zero(); n * n];
        let mut neighbors = vec![Vec::new(); n];

        for (u, edge) in graph.iter_edges() {
            if edge.weight.is_negative() {
                return Err(GraphError::NegativeWeight { from: u, to: edge.to });
            }
            let cell = &mut residual[u * n + edge.to];
            *cell = cell.try_add(edge.weight)?;
            neighbors[u].push(edge.to);
            neighbors[edge.to].push(u);
        }
        for list in &mut neighbors {
            list.sort_unstable();
            list.dedup();
        }

        Ok(Self {
            node_count: n,
            residual,
            neighbors,
        })
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Remaining capacity on `from -> to`; zero for an unknown pair.
    pub fn residual(&self, from: usize, to: usize) -> W {
        if from >= self.node_count || to >= self.node_count {
            return W::zero();
        }
        self.residual[from * self.node_count + to]
    }

    /// Finds a shortest augmenting path by BFS.
    ///
    /// Steps along `u -> v` only when `residual(u, v) > 0`. Returns the
    /// bottleneck capacity and the path `source, ..., sink`, or `None` if the
    /// sink cannot be reached.
    pub fn augmenting_path(&self, source: usize, sink: usize) -> Option<(W, Vec<usize>)> {
        if source >= self.node_count || sink >= self.node_count || source == sink {
            return None;
        }

        let mut parent: Vec<Option<usize>> = vec![None; self.node_count];
        let mut queue = VecDeque::from([(source, W::max_value())]);

        while let Some((u, flow_u)) = queue.pop_front() {
            for &v in &self.neighbors[u] {
                if v == source || parent[v].is_some() {
                    continue;
                }
                let capacity = self.residual(u, v);
                if capacity <= W::zero() {
                    continue;
                }
                parent[v] = Some(u);
                let bottleneck = flow_u.min(capacity);
                if v == sink {
                    return Some((bottleneck, Self::trace_back(&parent, source, sink)));
                }
                queue.push_back((v, bottleneck));
            }
        }

        None
    }

    fn trace_back(parent: &[Option<usize>], source: usize, sink: usize) -> Vec<usize> {
        let mut path = vec![sink];
        let mut current = sink;
        while current != source {
            match parent[current] {
                Some(previous) => current = previous,
                None => break,
            }
            path.push(current);
        }
        path.reverse();
        path
    }

    /// Pushes `amount` units along consecutive pairs of `path`.
    ///
    /// # Errors
    /// Returns [`GraphError::WeightOverflow`] if a backward residual overflows.
    pub fn augment(&mut self, path: &[usize], amount: W) -> Result<()> {
        let n = self.node_count;
        for pair in path.windows(2) {
            let (u, v) = (pair[0], pair[1]);
            self.residual[u * n + v] = self.residual[u * n + v] - amount;
            self.residual[v * n + u] = self.residual[v * n + u].try_add(amount)?;
        }
        Ok(())
    }

    /// Nodes reachable from `source` through edges with positive residual.
    pub fn reachable_from(&self, source: usize) -> Vec<bool> {
        let mut seen = vec![false; self.node_count];
        if source >= self.node_count {
            return seen;
        }
        seen[source] = true;
        let mut queue = VecDeque::from([source]);
        while let Some(u) = queue.pop_front() {
            for &v in &self.neighbors[u] {
                if !seen[v] && self.residual(u, v) > W::zero() {
                    seen[v] = true;
                    queue.push_back(v);
                }
            }
        }
        seen
    }
}

/// A maximum flow together with its minimum cut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MaxFlowParts<W>")]
#[serde(bound(deserialize = "W: Deserialize<'de>"))]
pub struct MaxFlow<W> {
    value: W,
    node_count: usize,
    capacities: Vec<W>,
    flows: Vec<W>,
    source_side: Vec<bool>,
}

#[derive(Deserialize)]
struct MaxFlowParts<W> {
    value: W,
    node_count: usize,
    capacities: Vec<W>,
    flows: Vec<W>,
    source_side: Vec<bool>,
}

impl<W> TryFrom<MaxFlowParts<W>> for MaxFlow<W> {
    type Error = GraphError;

    fn try_from(parts: MaxFlowParts<W>) -> Result<Self> {
        let cells = parts.node_count.checked_mul(parts.node_count);
        if cells != Some(parts.capacities.len()) || cells != Some(parts.flows.len()) {
            return Err(GraphError::Inconsistent {
                reason: "capacity or flow matrix is not node_count squared",
            });
        }
        if parts.source_side.len() != parts.node_count {
            return Err(GraphError::Inconsistent {
                reason: "source_side length differs from node_count",
            });
        }
        Ok(Self {
            value: parts.value,
            node_count: parts.node_count,
            capacities: parts.capacities,
            flows: parts.flows,
            source_side: parts.source_side,
        })
    }
}

impl<W: Weight> MaxFlow<W> {
    /// Total flow from source to sink.
    pub fn value(&self) -> W {
        self.value
    }

    /// Flow carried on `from -> to` (zero if none or out of range).
    pub fn flow(&self, from: usize, to: usize) -> W {
        if from >= self.node_count || to >= self.node_count {
            return W::zero();
        }
        self.flows[from * self.node_count + to]
    }

    /// Membership of each node in the source side of the minimum cut.
    pub fn source_side(&self) -> &[bool] {
        &self.source_side
    }

    /// Edges leaving the source side, with their full capacities.
    ///
    /// Every such edge is saturated and their capacities sum to [`value`](Self::value).
    pub fn cut_edges(&self) -> Vec<WeightedEdge<W>> {
        let n = self.node_count;
        let mut edges = Vec::new();
        for from in (0..n).filter(|&u| self.source_side[u]) {
            for to in (0..n).filter(|&v| !self.source_side[v]) {
                let weight = self.capacities[from * n + to];
                if weight > W::zero() {
                    edges.push(WeightedEdge { from, to, weight });
                }
            }
        }
        edges
    }

    /// Sum of the capacities in [`cut_edges`](Self::cut_edges).
    ///
    /// # Errors
    /// Returns [`GraphError::WeightOverflow`] if the sum does not fit in `W`.
    pub fn cut_capacity(&self) -> Result<W> {
        self.cut_edges()
            .into_iter()
            .try_fold(W::zero(), |acc, edge| acc.try_add(edge.weight))
    }
}

/// Maximum `source -> sink` flow by Edmonds-Karp.
///
/// # Errors
/// - [`GraphError::NodeOutOfBounds`] if `source` or `sink` is not a node.
/// - [`GraphError::SourceIsSink`] if they are the same node.
/// - [`GraphError::NegativeWeight`] if a capacity is negative.
/// - [`GraphError::WeightOverflow`] if a capacity sum does not fit in `W`.
///
/// ```rust
/// use graphkit::{AdjacencyList, graph::edmonds_karp};
///
/// // source = 0, a = 1, b = 2, sink = 3
/// let graph = AdjacencyList::from_edges(4, [(0, 1, 3i64), (1, 3, 2), (0, 2, 2), (2, 3, 3)]).unwrap();
/// assert_eq!(edmonds_karp(&graph, 0, 3).unwrap().value(), 4);
/// ```
pub fn edmonds_karp<W: Weight>(
    graph: &AdjacencyList<W>,
    source: usize,
    sink: usize,
) -> Result<MaxFlow<W>> {
    graph.check_node(source)?;
    graph.check_node(sink)?;
    if source == sink {
        return Err(GraphError::SourceIsSink { node: source });
    }

    let mut network = ResidualNetwork::from_graph(graph)?;
    let capacities = network.residual.clone();
    let mut value = W::zero();

    while let Some((bottleneck, path)) = network.augmenting_path(source, sink) {
        trace!(bottleneck = ?bottleneck, hops = path.len() - 1, "augmenting path");
        value = value.try_add(bottleneck)?;
        network.augment(&path, bottleneck)?;
    }

    let n = network.node_count;
    if cfg!(debug_assertions) {
        let conserved = (0..n).all(|u| {
            (0..n).all(|v| {
                network.residual(u, v).checked_add(&network.residual(v, u))
                    == capacities[u * n + v].checked_add(&capacities[v * n + u])
            })
        });
        invariant(conserved, "forward plus backward residual is constant");
    }

    let flows = capacities
        .iter()
        .zip(&network.residual)
        .map(|(&capacity, &residual)| (capacity - residual).max(W::zero()))
        .collect();
    let source_side = network.reachable_from(source);
    trace!(value = ?value, "edmonds-karp done");

    let result = MaxFlow {
        value,
        node_count: n,
        capacities,
        flows,
        source_side,
    };
    if cfg!(debug_assertions) {
        invariant(
            result.cut_capacity() == Ok(value),
            "max flow equals min cut capacity",
        );
    }
    Ok(result)
}
