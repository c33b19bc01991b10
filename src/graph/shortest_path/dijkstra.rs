use super::{extend_cost, ShortestPaths};
use crate::error::{GraphError, Result};
use crate::graph::adjacency::AdjacencyList;
use crate::graph::invariants::invariant;
use crate::graph::weight::Weight;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Single-source shortest paths for non-negative weights.
///
/// Uses a binary min-heap keyed by tentative distance with lazy deletion:
/// an entry whose recorded distance is worse than the current best is stale
/// and skipped.
///
/// # Errors
/// - [`GraphError::NodeOutOfBounds`] if `source` is not a node.
/// - [`GraphError::NegativeWeight`] if any edge weight is negative.
/// - [`GraphError::WeightOverflow`] if a shortest distance does not fit in
///   `W`. Longer candidates that overflow are simply never chosen.
///
/// ```rust
/// use graphkit::{AdjacencyList, graph::dijkstra};
///
/// let graph = AdjacencyList::from_edges(4, [(0, 1, 1i64), (1, 2, 2), (0, 2, 5)]).unwrap();
/// let paths = dijkstra(&graph, 0).unwrap();
/// assert_eq!(paths.distances(), &[Some(0), Some(1), Some(3), None]);
/// ```
pub fn dijkstra<W: Weight>(graph: &AdjacencyList<W>, source: usize) -> Result<ShortestPaths<W>> {
    graph.check_node(source)?;
    if let Some((from, edge)) = graph.iter_edges().find(|(_, edge)| edge.weight.is_negative()) {
        return Err(GraphError::NegativeWeight { from, to: edge.to });
    }
    trace!(nodes = graph.node_count(), source, "dijkstra start");

    let n = graph.node_count();
    let mut dist: Vec<Option<i128>> = vec![None; n];
    let mut pred = vec![None; n];
    let mut beyond_range = vec![false; n];
    let mut heap = BinaryHeap::new();

    dist[source] = Some(0);
    heap.push(Reverse((0i128, source)));

    while let Some(Reverse((d, u))) = heap.pop() {
        if matches!(dist[u], Some(best) if best < d) {
            continue;
        }

        for edge in graph.neighbors(u) {
            let Some(candidate) = extend_cost(d, edge.weight.widen()?)? else {
                beyond_range[edge.to] = true;
                continue;
            };
            let improves = match dist[edge.to] {
                Some(current) => candidate < current,
                None => true,
            };
            if improves {
                dist[edge.to] = Some(candidate);
                pred[edge.to] = Some(u);
                heap.push(Reverse((candidate, edge.to)));
            }
        }
    }

    invariant(dist[source] == Some(0), "dijkstra source distance is zero");
    ShortestPaths::from_wide(source, dist, pred, &beyond_range)
}
