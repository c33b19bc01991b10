//! # `graphkit` - Classic Graph Algorithms
//!
//! Traversal, shortest paths, minimum spanning trees, maximum flow, and
//! structural analysis over a plain in-memory adjacency list. Every algorithm
//! is a small, independent function: it borrows a graph, runs to completion,
//! and returns an owned result.
//!
//! ## Guarantees
//!
//! ### Explicit Failure
//! - **No sentinels**: unreachable nodes have `None` distances, never a
//!   maximum-integer stand-in that could overflow during relaxation.
//! - **Reported misuse**: out-of-range nodes, negative weights where they are
//!   not allowed, negative cycles, disconnected spanning-tree inputs, and weight
//!   overflow all come back as [`GraphError`] values.
//! - **Validated graphs**: [`AdjacencyList`] checks edge endpoints on insertion
//!   and on deserialization, so algorithms never index outside the graph.
//!
//! ### Bounded Stack Usage
//! - **Iterative DFS**: depth-first passes (DFS, topological sort, Kosaraju)
//!   keep an explicit stack, so a long chain cannot overflow the call stack.
//!   Visiting order still matches the recursive formulation exactly.
//!
//! ### Determinism
//! - **Insertion order**: neighbours are visited in the order their edges were
//!   added; ties in priority queues break on node index.
//!
//! ## Algorithms
//!
//! | Family | Functions |
//! |--------|-----------|
//! | Traversal | [`graph::bfs_distances`], [`graph::dfs_reachable`], [`graph::Bfs`], [`graph::Dfs`] |
//! | Ordering | [`graph::topological_order`], [`graph::try_topological_order`] |
//! | Components | [`graph::strongly_connected_components`], [`graph::connected_components`] |
//! | Shortest paths | [`graph::dijkstra`], [`graph::bellman_ford`], [`graph::floyd_warshall`] |
//! | Spanning trees | [`graph::kruskal`], [`graph::prim`] |
//! | Flow | [`graph::edmonds_karp`] |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `tracing` | Emit `tracing` debug events from the algorithms |
//!
//! ## Example
//!
//! ```rust
//! use graphkit::{AdjacencyList, graph::dijkstra};
//!
//! let graph = AdjacencyList::from_edges(4, [(0, 1, 1i64), (1, 2, 2), (0, 2, 5)])?;
//! let paths = dijkstra(&graph, 0)?;
//!
//! assert_eq!(paths.distances(), &[Some(0), Some(1), Some(3), None]);
//! assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
//! # Ok::<(), graphkit::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::DisjointSet;
pub use error::{GraphError, Result};
pub use graph::{AdjacencyList, Edge, Weight, WeightedEdge};

// Compile-time assertions for layout and thread-safety claims
const _: () = {
    use core::mem;

    const fn assert_send_sync<T: Send + Sync>() {}

    // Unweighted edges carry no payload beyond the target index.
    assert!(mem::size_of::<Edge<()>>() == mem::size_of::<usize>());

    // Results can be handed across threads.
    assert_send_sync::<AdjacencyList<i64>>();
    assert_send_sync::<graph::ShortestPaths<i64>>();
    assert_send_sync::<graph::DistanceMatrix<i64>>();
    assert_send_sync::<graph::SpanningTree<i64>>();
    assert_send_sync::<graph::MaxFlow<i64>>();
    assert_send_sync::<graph::Components>();
    assert_send_sync::<GraphError>();
};
