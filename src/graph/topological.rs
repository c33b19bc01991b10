//! DFS-based topological ordering.
//!
//! Nodes are pushed onto a stack as they finish (post-order) during a DFS that
//! starts from every unvisited node in index order. Popping that stack gives a
//! topological order when the graph is acyclic.
//!
//! [`topological_order`] does not look for cycles: on a cyclic graph it still
//! returns a permutation of the nodes, it just is not a valid ordering. Use
//! [`try_topological_order`] when the caller needs to know.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `finish_order` | \(O(n + m)\) | Iterative, explicit frame stack |
//! | `topological_order` | \(O(n + m)\) | Reversed finish order |
//! | `try_topological_order` | \(O(n + m)\) | Adds one pass over the edges |

use crate::error::{GraphError, Result};
use crate::graph::adjacency::AdjacencyList;
use crate::graph::invariants::{invariant, is_permutation};

/// Returns nodes in the order a full DFS finishes them.
///
/// This is the post-order stack from bottom to top: the last element is the
/// first node of the topological order.
pub fn finish_order<W>(graph: &AdjacencyList<W>) -> Vec<usize> {
    let n = graph.node_count();
    let mut visited = vec![false; n];
    let mut finished = Vec::with_capacity(n);
    // (node, index of the next outgoing edge to look at)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..n {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (u, next) = *frame;
            if let Some(edge) = graph.neighbors(u).get(next) {
                frame.1 += 1;
                let v = edge.to;
                if !visited[v] {
                    visited[v] = true;
                    stack.push((v, 0));
                }
            } else {
                stack.pop();
                finished.push(u);
            }
        }
    }

    invariant(is_permutation(&finished, n), "finish order covers every node once");
    finished
}

/// Returns the topological order of an acyclic graph.
///
/// The result is always a permutation of `0..n`. If the graph has a cycle the
/// ordering is not valid and no error is reported.
///
/// ```rust
/// use graphkit::{AdjacencyList, graph::topological_order};
///
/// let graph = AdjacencyList::from_adjacency(&[vec![], vec![0], vec![1, 0]]).unwrap();
/// assert_eq!(topological_order(&graph), vec![2, 1, 0]);
/// ```
pub fn topological_order<W>(graph: &AdjacencyList<W>) -> Vec<usize> {
    let mut order = finish_order(graph);
    order.reverse();
    order
}

/// Returns the topological order, or the first back edge found.
///
/// # Errors
/// Returns [`GraphError::Cycle`] naming an edge that points backwards in the
/// computed order; such an edge exists iff the graph has a cycle.
pub fn try_topological_order<W>(graph: &AdjacencyList<W>) -> Result<Vec<usize>> {
    let order = topological_order(graph);

    let mut position = vec![0; graph.node_count()];
    for (pos, &node) in order.iter().enumerate() {
        position[node] = pos;
    }

    for (from, edge) in graph.iter_edges() {
        if position[from] >= position[edge.to] {
            trace!(from, to = edge.to, "topological sort found a back edge");
            return Err(GraphError::Cycle { from, to: edge.to });
        }
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_edges_point_forward(graph: &AdjacencyList, order: &[usize]) {
        let mut position = vec![0; order.len()];
        for (pos, &node) in order.iter().enumerate() {
            position[node] = pos;
        }
        for (from, edge) in graph.iter_edges() {
            assert!(position[from] < position[edge.to], "{from} -> {}", edge.to);
        }
    }

    #[test]
    fn finish_order_is_post_order() {
        // 0 -> 1 -> 2, 0 -> 3
        let graph = AdjacencyList::from_adjacency(&[vec![1, 3], vec![2], vec![], vec![]]).unwrap();
        assert_eq!(finish_order(&graph), vec![2, 1, 3, 0]);
        assert_eq!(topological_order(&graph), vec![0, 3, 1, 2]);
    }

    #[test]
    fn order_respects_every_edge_of_a_dag() {
        let graph = AdjacencyList::from_adjacency(&[
            vec![],
            vec![0, 3],
            vec![3],
            vec![0],
            vec![1, 2],
            vec![2],
        ])
        .unwrap();
        let order = try_topological_order(&graph).unwrap();
        assert!(is_permutation(&order, 6));
        assert_edges_point_forward(&graph, &order);
    }

    #[test]
    fn cyclic_graph_still_yields_a_permutation() {
        let graph = AdjacencyList::from_adjacency(&[vec![1], vec![2], vec![0]]).unwrap();
        let order = topological_order(&graph);
        assert!(is_permutation(&order, 3));
        assert_eq!(
            try_topological_order(&graph),
            Err(GraphError::Cycle { from: 2, to: 0 })
        );
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let graph = AdjacencyList::from_adjacency(&[vec![0]]).unwrap();
        assert_eq!(
            try_topological_order(&graph),
            Err(GraphError::Cycle { from: 0, to: 0 })
        );
    }

    #[test]
    fn empty_graph_has_empty_order() {
        let graph = AdjacencyList::<()>::new(0);
        assert!(topological_order(&graph).is_empty());
        assert_eq!(try_topological_order(&graph), Ok(vec![]));
    }
}
