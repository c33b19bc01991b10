use super::{extend_cost, ShortestPaths};
use crate::error::{GraphError, Result};
use crate::graph::adjacency::AdjacencyList;
use crate::graph::weight::Weight;

/// Outcome of the relaxation rounds: costs widened to `i128`, predecessors,
/// and whether the last permitted round still improved something.
struct Relaxation {
    dist: Vec<Option<i128>>,
    pred: Vec<Option<usize>>,
    beyond_range: Vec<bool>,
    improved_in_last_round: bool,
}

/// Relaxes every edge (node order, then adjacency order) for up to `n` rounds,
/// stopping after the first round that changes nothing.
///
/// A shortest path without a negative cycle has at most `n - 1` edges, so an
/// improvement in round `n` means a negative cycle is reachable.
fn relax<W: Weight>(graph: &AdjacencyList<W>, source: usize) -> Result<Relaxation> {
    let n = graph.node_count();
    let mut dist: Vec<Option<i128>> = vec![None; n];
    let mut pred = vec![None; n];
    let mut beyond_range = vec![false; n];
    dist[source] = Some(0);

    let mut updated = true;
    let mut rounds = 0;
    while rounds < n && updated {
        updated = false;
        for (u, edge) in graph.iter_edges() {
            let Some(du) = dist[u] else { continue };
            let Some(candidate) = extend_cost(du, edge.weight.widen()?)? else {
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
                updated = true;
            }
        }
        rounds += 1;
    }

    trace!(rounds, negative_cycle = updated, "bellman-ford relaxation done");
    Ok(Relaxation {
        dist,
        pred,
        beyond_range,
        improved_in_last_round: updated,
    })
}

/// Returns `true` if a negative-weight cycle is reachable from `source`.
///
/// Cycles that the source cannot reach do not count.
///
/// # Errors
/// - [`GraphError::NodeOutOfBounds`] if `source` is not a node.
/// - [`GraphError::WeightOverflow`] only for `i128` weights whose running
///   cost falls below `i128::MIN`; narrower weights never overflow here.
///
/// ```rust
/// use graphkit::{AdjacencyList, graph::has_negative_cycle};
///
/// let graph = AdjacencyList::from_edges(2, [(0, 1, -1i64), (1, 0, -1)]).unwrap();
/// assert!(has_negative_cycle(&graph, 0).unwrap());
/// ```
pub fn has_negative_cycle<W: Weight>(graph: &AdjacencyList<W>, source: usize) -> Result<bool> {
    graph.check_node(source)?;
    Ok(relax(graph, source)?.improved_in_last_round)
}

/// Single-source shortest paths for arbitrary weights.
///
/// # Errors
/// - [`GraphError::NodeOutOfBounds`] if `source` is not a node.
/// - [`GraphError::NegativeCycle`] if a negative cycle is reachable from
///   `source`; no distances are returned since none would be meaningful.
/// - [`GraphError::WeightOverflow`] if a shortest distance does not fit in
///   `W`. Longer candidates that overflow are simply never chosen.
pub fn bellman_ford<W: Weight>(graph: &AdjacencyList<W>, source: usize) -> Result<ShortestPaths<W>> {
    graph.check_node(source)?;
    let relaxation = relax(graph, source)?;
    if relaxation.improved_in_last_round {
        return Err(GraphError::NegativeCycle);
    }
    ShortestPaths::from_wide(
        source,
        relaxation.dist,
        relaxation.pred,
        &relaxation.beyond_range,
    )
}
