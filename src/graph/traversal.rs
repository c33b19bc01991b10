//! Breadth-first and depth-first traversal.
//!
//! Every traversal here is iterative. DFS uses an explicit stack and pushes
//! neighbours in reverse so nodes are visited in exactly the order a recursive
//! DFS would visit them, without the recursion depth.

use crate::collections::DisjointSet;
use crate::error::Result;
use crate::graph::adjacency::AdjacencyList;
use crate::graph::invariants::invariant;
use std::collections::VecDeque;

/// Unweighted hop distances from `source`.
///
/// `source` gets `Some(0)`, every node first discovered from `u` gets
/// `dist[u] + 1`, and nodes that cannot be reached stay `None`. Edge weights
/// are ignored; use the shortest-path family for weighted costs.
///
/// # Errors
/// Returns [`GraphError::NodeOutOfBounds`](crate::GraphError::NodeOutOfBounds)
/// if `source` is not a node.
///
/// ```rust
/// use graphkit::{AdjacencyList, graph::bfs_distances};
///
/// let graph = AdjacencyList::from_adjacency(&[vec![1], vec![2], vec![], vec![0]]).unwrap();
/// assert_eq!(bfs_distances(&graph, 0).unwrap(), vec![Some(0), Some(1), Some(2), None]);
/// ```
pub fn bfs_distances<W>(graph: &AdjacencyList<W>, source: usize) -> Result<Vec<Option<usize>>> {
    graph.check_node(source)?;
    trace!(nodes = graph.node_count(), source, "bfs start");

    let mut dist = vec![None; graph.node_count()];
    dist[source] = Some(0);
    let mut queue = VecDeque::from([(source, 0usize)]);

    while let Some((u, hops)) = queue.pop_front() {
        for v in graph.neighbor_indices(u) {
            if dist[v].is_none() {
                dist[v] = Some(hops + 1);
                queue.push_back((v, hops + 1));
            }
        }
    }

    invariant(dist[source] == Some(0), "bfs source distance is zero");
    Ok(dist)
}

/// Marks every node reachable from `source`.
///
/// # Errors
/// Returns [`GraphError::NodeOutOfBounds`](crate::GraphError::NodeOutOfBounds)
/// if `source` is not a node.
pub fn dfs_reachable<W>(graph: &AdjacencyList<W>, source: usize) -> Result<Vec<bool>> {
    graph.check_node(source)?;
    let mut visited = vec![false; graph.node_count()];
    dfs_mark(graph, source, &mut visited);
    Ok(visited)
}

/// Marks every node reachable from `start` that is not already marked.
///
/// This is the building block for multi-source passes: nodes already set in
/// `visited` act as walls. Does nothing if `start` is already visited.
///
/// # Panics
/// Panics if `visited` is shorter than the node count or `start` is out of range.
pub fn dfs_mark<W>(graph: &AdjacencyList<W>, start: usize, visited: &mut [bool]) {
    dfs_preorder(graph, start, visited, |_| {});
}

/// Visits unmarked nodes reachable from `start` in recursive-DFS preorder,
/// calling `on_visit` for each one as it is marked.
pub(crate) fn dfs_preorder<W, F>(
    graph: &AdjacencyList<W>,
    start: usize,
    visited: &mut [bool],
    mut on_visit: F,
) where
    F: FnMut(usize),
{
    if visited[start] {
        return;
    }
    let mut stack = vec![start];
    while let Some(u) = stack.pop() {
        if visited[u] {
            continue;
        }
        visited[u] = true;
        on_visit(u);
        stack.extend(
            graph
                .neighbors(u)
                .iter()
                .rev()
                .map(|edge| edge.to)
                .filter(|&v| !visited[v]),
        );
    }
}

/// Computes the weakly connected components of the graph.
///
/// Returns a vector where the index corresponds to the node ID,
/// and the value is the component ID (representative node ID).
/// Edge direction is ignored.
pub fn connected_components<W>(graph: &AdjacencyList<W>) -> Vec<usize> {
    let sets = component_sets(graph);
    (0..graph.node_count()).map(|u| sets.find(u)).collect()
}

/// Number of weakly connected components.
pub fn connected_component_count<W>(graph: &AdjacencyList<W>) -> usize {
    component_sets(graph).set_count()
}

fn component_sets<W>(graph: &AdjacencyList<W>) -> DisjointSet {
    let mut sets = DisjointSet::new(graph.node_count());
    for (u, edge) in graph.iter_edges() {
        sets.union(u, edge.to);
    }
    sets
}

/// An iterator for Breadth-First Search (BFS).
///
/// This iterator yields node ids in BFS order.
/// It uses an internal `VecDeque` and `Vec<bool>` for state management.
pub struct Bfs<'a, W> {
    graph: &'a AdjacencyList<W>,
    visited: Vec<bool>,
    queue: VecDeque<usize>,
}

impl<'a, W> Bfs<'a, W> {
    /// Creates a new BFS iterator starting from `start_node`.
    ///
    /// An out-of-range start yields an empty traversal.
    pub fn new(graph: &'a AdjacencyList<W>, start_node: usize) -> Self {
        let len = graph.node_count();
        let mut visited = vec![false; len];
        let mut queue = VecDeque::new();

        if start_node < len {
            visited[start_node] = true;
            queue.push_back(start_node);
        }

        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl<W> Iterator for Bfs<'_, W> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.neighbor_indices(u) {
            if !self.visited[v] {
                self.visited[v] = true;
                self.queue.push_back(v);
            }
        }

        Some(u)
    }
}

/// An iterator for Depth-First Search (DFS).
///
/// Yields node ids in the preorder a recursive DFS produces.
pub struct Dfs<'a, W> {
    graph: &'a AdjacencyList<W>,
    visited: Vec<bool>,
    stack: Vec<usize>,
}

impl<'a, W> Dfs<'a, W> {
    /// Creates a new DFS iterator starting from `start_node`.
    ///
    /// An out-of-range start yields an empty traversal.
    pub fn new(graph: &'a AdjacencyList<W>, start_node: usize) -> Self {
        let len = graph.node_count();
        let mut stack = Vec::new();

        if start_node < len {
            stack.push(start_node);
        }

        Self {
            graph,
            visited: vec![false; len],
            stack,
        }
    }
}

impl<W> Iterator for Dfs<'_, W> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let u = self.stack.pop()?;
            if self.visited[u] {
                continue;
            }
            self.visited[u] = true;

            let visited = &self.visited;
            self.stack.extend(
                self.graph
                    .neighbors(u)
                    .iter()
                    .rev()
                    .map(|edge| edge.to)
                    .filter(|&v| !visited[v]),
            );
            return Some(u);
        }
    }
}
