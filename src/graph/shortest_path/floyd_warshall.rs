use crate::error::{GraphError, Result};
use crate::graph::adjacency::AdjacencyList;
use crate::graph::weight::Weight;
use serde::{Deserialize, Serialize};

/// All-pairs distances, stored row-major.
///
/// `get(i, j)` is the shortest known cost from `i` to `j`, or `None` when `j`
/// is unreachable from `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DistanceMatrixParts<W>")]
#[serde(bound(deserialize = "W: Deserialize<'de>"))]
pub struct DistanceMatrix<W> {
    node_count: usize,
    cells: Vec<Option<W>>,
}

#[derive(Deserialize)]
struct DistanceMatrixParts<W> {
    node_count: usize,
    cells: Vec<Option<W>>,
}

impl<W> TryFrom<DistanceMatrixParts<W>> for DistanceMatrix<W> {
    type Error = GraphError;

    fn try_from(parts: DistanceMatrixParts<W>) -> Result<Self> {
        if parts.node_count.checked_mul(parts.node_count) != Some(parts.cells.len()) {
            return Err(GraphError::Inconsistent {
                reason: "cell count is not node_count squared",
            });
        }
        Ok(Self {
            node_count: parts.node_count,
            cells: parts.cells,
        })
    }
}

impl<W: Copy> DistanceMatrix<W> {
    /// Number of rows (and columns).
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Distance from `from` to `to`; `None` if unreachable or out of range.
    pub fn get(&self, from: usize, to: usize) -> Option<W> {
        if from >= self.node_count || to >= self.node_count {
            return None;
        }
        self.cells[from * self.node_count + to]
    }

    /// Distances from `from` to every node.
    ///
    /// # Panics
    /// Panics if `from` is out of range.
    pub fn row(&self, from: usize) -> &[Option<W>] {
        let start = from * self.node_count;
        &self.cells[start..start + self.node_count]
    }

    /// Iterates over the rows in node order.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<W>]> + '_ {
        // `max(1)` keeps `chunks` valid for the empty matrix.
        self.cells.chunks(self.node_count.max(1))
    }
}

impl<W: Weight> DistanceMatrix<W> {
    /// Returns `true` if some node reaches itself at negative cost.
    ///
    /// Floyd-Warshall does not report negative cycles on its own; a negative
    /// diagonal entry is the tell-tale, and every entry routed through such a
    /// node is invalid.
    pub fn has_negative_diagonal(&self) -> bool {
        (0..self.node_count).any(|i| matches!(self.get(i, i), Some(d) if d.is_negative()))
    }
}

/// All-pairs shortest paths.
///
/// The matrix starts with `0` on the diagonal, the direct edge weight where an
/// edge exists, and `None` elsewhere. With parallel edges the last one in
/// adjacency order wins. A self-loop only replaces the diagonal when it is
/// negative. Then every pair `(i, j)` is relaxed through every intermediate
/// `k`, in node order.
///
/// Negative cycles are not detected. Entries that touch one end up too small
/// and are not flagged; the arithmetic saturates so they cannot overflow. See
/// [`DistanceMatrix::has_negative_diagonal`].
///
/// ```rust
/// use graphkit::{AdjacencyList, graph::floyd_warshall};
///
/// let graph = AdjacencyList::from_edges(3, [(0, 1, 4i64), (1, 2, -1), (0, 2, 5)]).unwrap();
/// let matrix = floyd_warshall(&graph);
/// assert_eq!(matrix.row(0), &[Some(0), Some(4), Some(3)]);
/// assert_eq!(matrix.get(2, 0), None);
/// ```
pub fn floyd_warshall<W: Weight>(graph: &AdjacencyList<W>) -> DistanceMatrix<W> {
    let n = graph.node_count();
    trace!(nodes = n, "floyd-warshall start");

    let mut cells: Vec<Option<W>> = vec![None; n * n];
    for i in 0..n {
        cells[i * n + i] = Some(W::zero());
    }
    for (u, edge) in graph.iter_edges() {
        if u == edge.to && !edge.weight.is_negative() {
            continue;
        }
        cells[u * n + edge.to] = Some(edge.weight);
    }

    for k in 0..n {
        for i in 0..n {
            let Some(ik) = cells[i * n + k] else { continue };
            for j in 0..n {
                let Some(kj) = cells[k * n + j] else { continue };
                let through_k = ik.saturating_sum(kj);
                let cell = &mut cells[i * n + j];
                let improves = match *cell {
                    Some(current) => through_k < current,
                    None => true,
                };
                if improves {
                    *cell = Some(through_k);
                }
            }
        }
    }

    DistanceMatrix { node_count: n, cells }
}
