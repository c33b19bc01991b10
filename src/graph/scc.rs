//! Strongly connected components (Kosaraju).
//!
//! 1. Compute the DFS finish order of the original graph.
//! 2. Build the transpose.
//! 3. Pop nodes from the finish stack; each still-unvisited node seeds a DFS over
//!    the transpose, and everything that DFS newly reaches is one component.
//!
//! Components come out in topological order of the condensation: every edge of
//! the original graph either stays inside a component or goes from an earlier
//! component to a later one.

use crate::error::{GraphError, Result};
use crate::graph::adjacency::AdjacencyList;
use crate::graph::invariants::{invariant, is_partition};
use crate::graph::topological::finish_order;
use crate::graph::traversal::dfs_preorder;
use serde::{Deserialize, Serialize};

/// A partition of the nodes into strongly connected components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ComponentsParts")]
pub struct Components {
    groups: Vec<Vec<usize>>,
    component_of: Vec<usize>,
}

#[derive(Deserialize)]
struct ComponentsParts {
    groups: Vec<Vec<usize>>,
    component_of: Vec<usize>,
}

impl TryFrom<ComponentsParts> for Components {
    type Error = GraphError;

    fn try_from(parts: ComponentsParts) -> Result<Self> {
        let n = parts.component_of.len();
        if !is_partition(&parts.groups, n) || parts.groups.iter().any(Vec::is_empty) {
            return Err(GraphError::Inconsistent {
                reason: "groups do not partition the nodes",
            });
        }
        let agrees = parts
            .groups
            .iter()
            .enumerate()
            .all(|(index, group)| group.iter().all(|&node| parts.component_of[node] == index));
        if !agrees {
            return Err(GraphError::Inconsistent {
                reason: "component_of disagrees with groups",
            });
        }
        Ok(Self {
            groups: parts.groups,
            component_of: parts.component_of,
        })
    }
}

impl Components {
    fn from_groups(groups: Vec<Vec<usize>>, node_count: usize) -> Self {
        let mut component_of = vec![0; node_count];
        for (index, group) in groups.iter().enumerate() {
            for &node in group {
                component_of[node] = index;
            }
        }
        Self {
            groups,
            component_of,
        }
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if there are no components (the graph was empty).
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The components, each listing its nodes in discovery order.
    pub fn groups(&self) -> &[Vec<usize>] {
        &self.groups
    }

    /// Index into [`groups`](Self::groups) of the component holding `node`.
    pub fn component_of(&self, node: usize) -> Option<usize> {
        self.component_of.get(node).copied()
    }

    /// Returns `true` if `a` and `b` are mutually reachable.
    pub fn same_component(&self, a: usize, b: usize) -> bool {
        match (self.component_of(a), self.component_of(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// Builds the condensation: one node per component, one edge per distinct
    /// pair of components joined by an original edge.
    ///
    /// The result is acyclic and every edge goes from a lower component index
    /// to a higher one.
    ///
    /// # Errors
    /// Returns [`GraphError::Inconsistent`] if `graph` does not have exactly
    /// the nodes this partition was computed for.
    pub fn condensation<W>(&self, graph: &AdjacencyList<W>) -> Result<AdjacencyList<()>> {
        if graph.node_count() != self.component_of.len() {
            return Err(GraphError::Inconsistent {
                reason: "graph node count differs from the partition",
            });
        }
        let mut condensed = AdjacencyList::new(self.groups.len());
        let mut seen = vec![usize::MAX; self.groups.len()];
        for (from_component, group) in self.groups.iter().enumerate() {
            for &u in group {
                for v in graph.neighbor_indices(u) {
                    let to_component = self.component_of[v];
                    if to_component != from_component && seen[to_component] != from_component {
                        seen[to_component] = from_component;
                        condensed.push_edge_unchecked(from_component, to_component, ());
                    }
                }
            }
        }
        Ok(condensed)
    }

    /// Consumes the partition, returning the groups.
    pub fn into_groups(self) -> Vec<Vec<usize>> {
        self.groups
    }
}

/// Partitions the graph into strongly connected components with Kosaraju's
/// algorithm.
///
/// ```rust
/// use graphkit::{AdjacencyList, graph::strongly_connected_components};
///
/// // 0 <-> 1 -> 2
/// let graph = AdjacencyList::from_adjacency(&[vec![1], vec![0, 2], vec![]]).unwrap();
/// let components = strongly_connected_components(&graph);
/// assert_eq!(components.groups(), &[vec![0, 1], vec![2]]);
/// ```
pub fn strongly_connected_components<W: Clone>(graph: &AdjacencyList<W>) -> Components {
    let n = graph.node_count();
    let mut stack = finish_order(graph);
    let transposed = graph.transpose();

    let mut visited = vec![false; n];
    let mut groups = Vec::new();

    while let Some(u) = stack.pop() {
        if visited[u] {
            continue;
        }
        let mut group = Vec::new();
        dfs_preorder(&transposed, u, &mut visited, |v| group.push(v));
        groups.push(group);
    }

    trace!(nodes = n, components = groups.len(), "kosaraju done");
    invariant(is_partition(&groups, n), "components partition the node set");
    Components::from_groups(groups, n)
}
