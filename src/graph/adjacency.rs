//! Adjacency-list graph shared by every algorithm in the crate.
//!
//! Nodes are dense indices `0..n`. Each node owns an ordered list of outgoing
//! [`Edge`]s; insertion order is preserved and is the order every traversal
//! visits neighbours in. Undirected graphs store both directions explicitly.
//!
//! Edge endpoints are validated on insertion, so algorithms only need to check
//! the source/sink arguments they are handed.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_edge` | \(O(1)\) amortized | Bounds-checked |
//! | `neighbors` | \(O(1)\) | Borrowed slice |
//! | `edges` | \(O(n + m)\) | Allocates the edge list |
//! | `transpose` | \(O(n + m)\) | Allocates a new graph |

use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};

/// An outgoing edge stored in a node's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<W> {
    /// Head of the edge.
    pub to: usize,
    /// Edge weight (capacity for flow networks, `()` for unweighted graphs).
    pub weight: W,
}

/// A fully specified directed edge `from -> to` with its weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightedEdge<W> {
    /// Tail of the edge.
    pub from: usize,
    /// Head of the edge.
    pub to: usize,
    /// Edge weight.
    pub weight: W,
}

/// A directed graph stored as per-node adjacency lists.
///
/// `W` is the edge weight type; unweighted graphs use `()`.
///
/// # Example
///
/// ```rust
/// use graphkit::AdjacencyList;
///
/// let mut graph = AdjacencyList::new(3);
/// graph.add_edge(0, 1, 4i64).unwrap();
/// graph.add_edge(1, 2, 1).unwrap();
/// assert_eq!(graph.edge_count(), 2);
/// assert!(graph.add_edge(0, 3, 1).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Edge<W>>>", into = "Vec<Vec<Edge<W>>>")]
#[serde(bound(
    serialize = "W: Serialize + Clone",
    deserialize = "W: Deserialize<'de>"
))]
pub struct AdjacencyList<W = ()> {
    adjacency: Vec<Vec<Edge<W>>>,
}

impl<W> AdjacencyList<W> {
    /// Creates a graph with `node_count` nodes and no edges.
    pub fn new(node_count: usize) -> Self {
        let mut adjacency = Vec::with_capacity(node_count);
        adjacency.resize_with(node_count, Vec::new);
        Self { adjacency }
    }

    /// Builds a graph from `(from, to, weight)` triples.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfBounds`] if an endpoint is `>= node_count`.
    pub fn from_edges<I>(node_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::new(node_count);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Returns `true` if the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Appends an isolated node and returns its index.
    pub fn add_node(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    /// Adds the directed edge `from -> to`.
    ///
    /// Parallel edges and self-loops are stored as given.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfBounds`] if either endpoint is not a node.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.check_node(from)?;
        self.check_node(to)?;
        self.adjacency[from].push(Edge { to, weight });
        Ok(())
    }

    /// Adds `from -> to` for endpoints the caller has already validated.
    pub(crate) fn push_edge_unchecked(&mut self, from: usize, to: usize, weight: W) {
        debug_assert!(from < self.adjacency.len() && to < self.adjacency.len());
        self.adjacency[from].push(Edge { to, weight });
    }

    /// Checks that `node` is a valid index.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfBounds`] otherwise.
    #[inline]
    pub fn check_node(&self, node: usize) -> Result<()> {
        if node < self.adjacency.len() {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfBounds {
                node,
                node_count: self.adjacency.len(),
            })
        }
    }

    /// Outgoing edges of `node`, in insertion order. Empty for an invalid index.
    #[inline]
    pub fn neighbors(&self, node: usize) -> &[Edge<W>] {
        self.adjacency.get(node).map_or(&[][..], Vec::as_slice)
    }

    /// Heads of the outgoing edges of `node`, in insertion order.
    #[inline]
    pub fn neighbor_indices(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.neighbors(node).iter().map(|edge| edge.to)
    }

    /// Iterates every edge as `(from, &Edge)`, grouped by tail in node order.
    pub fn iter_edges(&self) -> impl Iterator<Item = (usize, &Edge<W>)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| edges.iter().map(move |edge| (from, edge)))
    }
}

impl<W: Clone> AdjacencyList<W> {
    /// Builds a graph from per-node `(neighbor, weight)` lists.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfBounds`] if a neighbor is not a node.
    pub fn from_weighted_adjacency(adjacency: &[Vec<(usize, W)>]) -> Result<Self> {
        let mut graph = Self::new(adjacency.len());
        for (from, edges) in adjacency.iter().enumerate() {
            for (to, weight) in edges {
                graph.add_edge(from, *to, weight.clone())?;
            }
        }
        Ok(graph)
    }

    /// Adds `a -> b` and `b -> a` with the same weight.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfBounds`] if either endpoint is not a node.
    pub fn add_undirected_edge(&mut self, a: usize, b: usize, weight: W) -> Result<()> {
        self.check_node(a)?;
        self.check_node(b)?;
        self.adjacency[a].push(Edge {
            to: b,
            weight: weight.clone(),
        });
        self.adjacency[b].push(Edge { to: a, weight });
        Ok(())
    }

    /// Collects every edge, grouped by tail in node order.
    pub fn edges(&self) -> Vec<WeightedEdge<W>> {
        self.iter_edges()
            .map(|(from, edge)| WeightedEdge {
                from,
                to: edge.to,
                weight: edge.weight.clone(),
            })
            .collect()
    }

    /// Returns the graph with every edge reversed.
    ///
    /// The reversed edges entering `v` keep the order of their original tails,
    /// so traversals of the transpose are deterministic.
    pub fn transpose(&self) -> Self {
        let mut reversed = Self::new(self.node_count());
        for (from, edge) in self.iter_edges() {
            reversed.adjacency[edge.to].push(Edge {
                to: from,
                weight: edge.weight.clone(),
            });
        }
        reversed
    }
}

impl AdjacencyList<()> {
    /// Builds an unweighted graph from per-node neighbor lists.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfBounds`] if a neighbor is not a node.
    ///
    /// ```rust
    /// use graphkit::AdjacencyList;
    ///
    /// let graph = AdjacencyList::from_adjacency(&[vec![1, 2], vec![2], vec![]]).unwrap();
    /// assert_eq!(graph.neighbor_indices(0).collect::<Vec<_>>(), vec![1, 2]);
    /// ```
    pub fn from_adjacency(adjacency: &[Vec<usize>]) -> Result<Self> {
        let mut graph = Self::new(adjacency.len());
        for (from, targets) in adjacency.iter().enumerate() {
            for &to in targets {
                graph.add_edge(from, to, ())?;
            }
        }
        Ok(graph)
    }
}

impl<W> Default for AdjacencyList<W> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<W> TryFrom<Vec<Vec<Edge<W>>>> for AdjacencyList<W> {
    type Error = GraphError;

    fn try_from(adjacency: Vec<Vec<Edge<W>>>) -> Result<Self> {
        let node_count = adjacency.len();
        if let Some(edge) = adjacency
            .iter()
            .flatten()
            .find(|edge| edge.to >= node_count)
        {
            return Err(GraphError::NodeOutOfBounds {
                node: edge.to,
                node_count,
            });
        }
        Ok(Self { adjacency })
    }
}

impl<W> From<AdjacencyList<W>> for Vec<Vec<Edge<W>>> {
    fn from(graph: AdjacencyList<W>) -> Self {
        graph.adjacency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_rejects_unknown_nodes() {
        let mut graph = AdjacencyList::<i32>::new(2);
        assert_eq!(
            graph.add_edge(0, 2, 1),
            Err(GraphError::NodeOutOfBounds {
                node: 2,
                node_count: 2
            })
        );
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn edges_are_grouped_by_tail_in_insertion_order() {
        let graph =
            AdjacencyList::from_edges(3, [(2, 0, 7i64), (0, 2, 5), (0, 1, 1), (1, 2, 2)]).unwrap();
        let edges: Vec<_> = graph
            .edges()
            .into_iter()
            .map(|e| (e.from, e.to, e.weight))
            .collect();
        assert_eq!(edges, vec![(0, 2, 5), (0, 1, 1), (1, 2, 2), (2, 0, 7)]);
    }

    #[test]
    fn transpose_reverses_every_edge() {
        let graph = AdjacencyList::from_adjacency(&[vec![1, 2], vec![2], vec![0]]).unwrap();
        let reversed = graph.transpose();
        assert_eq!(reversed.edge_count(), graph.edge_count());
        assert_eq!(reversed.neighbor_indices(0).collect::<Vec<_>>(), vec![2]);
        assert_eq!(reversed.neighbor_indices(1).collect::<Vec<_>>(), vec![0]);
        assert_eq!(reversed.neighbor_indices(2).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(reversed.transpose(), graph);
    }

    #[test]
    fn undirected_edges_are_stored_twice() {
        let mut graph = AdjacencyList::new(2);
        graph.add_undirected_edge(0, 1, 3i64).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors(1), &[Edge { to: 0, weight: 3 }]);
    }

    #[test]
    fn neighbors_of_invalid_node_is_empty() {
        let graph = AdjacencyList::<()>::new(1);
        assert!(graph.neighbors(5).is_empty());
        assert!(graph.check_node(1).is_err());
    }

    #[test]
    fn try_from_validates_targets() {
        let raw = vec![vec![Edge { to: 3, weight: 1i64 }], vec![]];
        assert_eq!(
            AdjacencyList::try_from(raw),
            Err(GraphError::NodeOutOfBounds {
                node: 3,
                node_count: 2
            })
        );
    }
}
