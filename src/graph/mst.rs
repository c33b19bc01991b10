//! Minimum spanning trees: Kruskal and Prim.
//!
//! Both expect an undirected graph stored with both directions present (see
//! [`AdjacencyList::add_undirected_edge`]). Kruskal sees each undirected edge
//! twice; the second copy always joins two nodes already in the same set, so
//! it is skipped.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `kruskal` | \(O(m \log m)\) | Sort + union-find with path compression |
//! | `prim` | \(O(m \log m)\) | Lazy binary min-heap |

use crate::collections::DisjointSet;
use crate::error::{GraphError, Result};
use crate::graph::adjacency::{AdjacencyList, WeightedEdge};
use crate::graph::weight::Weight;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// The edges chosen by a spanning-tree algorithm and their total weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningTree<W> {
    /// Sum of the chosen edge weights.
    pub total_weight: W,
    /// Chosen edges in the order they were accepted.
    pub edges: Vec<WeightedEdge<W>>,
    /// Number of trees; `1` for a spanning tree of a non-empty connected graph.
    pub components: usize,
}

impl<W> SpanningTree<W> {
    /// Returns `true` if the edges connect every node into a single tree.
    pub fn is_spanning(&self) -> bool {
        self.components <= 1
    }
}

/// Kruskal's algorithm without the connectivity check.
///
/// Edges are sorted by `(weight, from, to)` and accepted whenever their
/// endpoints are still in different sets. On a disconnected graph the result
/// is a minimum spanning forest with one tree per component.
///
/// # Errors
/// Returns [`GraphError::WeightOverflow`] if the total does not fit in `W`.
pub fn minimum_spanning_forest<W: Weight>(graph: &AdjacencyList<W>) -> Result<SpanningTree<W>> {
    let n = graph.node_count();
    let mut candidates = graph.edges();
    candidates.sort_unstable_by_key(|e| (e.weight, e.from, e.to));

    let mut sets = DisjointSet::new(n);
    let mut total_weight = W::zero();
    let mut edges = Vec::with_capacity(n.saturating_sub(1));

    for edge in candidates {
        if sets.union(edge.from, edge.to) {
            total_weight = total_weight.try_add(edge.weight)?;
            edges.push(edge);
        }
    }

    let components = n - edges.len();
    trace!(nodes = n, components, "kruskal done");
    Ok(SpanningTree {
        total_weight,
        edges,
        components,
    })
}

/// Minimum spanning tree by Kruskal's algorithm.
///
/// # Errors
/// - [`GraphError::Disconnected`] if the graph has more than one component.
/// - [`GraphError::WeightOverflow`] if the total does not fit in `W`.
///
/// ```rust
/// use graphkit::{AdjacencyList, graph::kruskal};
///
/// let mut graph = AdjacencyList::new(3);
/// graph.add_undirected_edge(0, 1, 1i64).unwrap();
/// graph.add_undirected_edge(1, 2, 2).unwrap();
/// graph.add_undirected_edge(0, 2, 3).unwrap();
/// assert_eq!(kruskal(&graph).unwrap().total_weight, 3);
/// ```
pub fn kruskal<W: Weight>(graph: &AdjacencyList<W>) -> Result<SpanningTree<W>> {
    let forest = minimum_spanning_forest(graph)?;
    if forest.is_spanning() {
        Ok(forest)
    } else {
        Err(GraphError::Disconnected {
            components: forest.components,
        })
    }
}

/// Minimum spanning tree by Prim's algorithm, grown from node `0`.
///
/// # Errors
/// See [`prim_from`].
pub fn prim<W: Weight>(graph: &AdjacencyList<W>) -> Result<SpanningTree<W>> {
    if graph.is_empty() {
        return Ok(SpanningTree {
            total_weight: W::zero(),
            edges: Vec::new(),
            components: 0,
        });
    }
    prim_from(graph, 0)
}

/// Minimum spanning tree by Prim's algorithm, grown from `start`.
///
/// A min-heap holds `(weight, node, parent)` candidates; a node is settled the
/// first time it is popped and later entries for it are skipped.
///
/// # Errors
/// - [`GraphError::NodeOutOfBounds`] if `start` is not a node.
/// - [`GraphError::NegativeWeight`] if an edge weight is negative.
/// - [`GraphError::Disconnected`] if some node is not reachable from `start`.
/// - [`GraphError::WeightOverflow`] if the total does not fit in `W`.
pub fn prim_from<W: Weight>(graph: &AdjacencyList<W>, start: usize) -> Result<SpanningTree<W>> {
    graph.check_node(start)?;
    if let Some((from, edge)) = graph.iter_edges().find(|(_, edge)| edge.weight.is_negative()) {
        return Err(GraphError::NegativeWeight { from, to: edge.to });
    }

    let n = graph.node_count();
    let mut visited = vec![false; n];
    let mut heap = BinaryHeap::new();
    let mut total_weight = W::zero();
    let mut edges = Vec::with_capacity(n - 1);

    heap.push(Reverse((W::zero(), start, start)));

    while let Some(Reverse((weight, u, parent))) = heap.pop() {
        if visited[u] {
            continue;
        }
        visited[u] = true;

        if u != parent {
            total_weight = total_weight.try_add(weight)?;
            edges.push(WeightedEdge {
                from: parent,
                to: u,
                weight,
            });
        }

        for edge in graph.neighbors(u) {
            if !visited[edge.to] {
                heap.push(Reverse((edge.weight, edge.to, u)));
            }
        }
    }

    if edges.len() + 1 < n {
        let components = crate::graph::connected_component_count(graph);
        return Err(GraphError::Disconnected { components });
    }

    trace!(nodes = n, start, "prim done");
    Ok(SpanningTree {
        total_weight,
        edges,
        components: 1,
    })
}
