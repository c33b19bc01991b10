//! Graph representation and the algorithms that run over it.
//!
//! Algorithms are organized by family:
//! - `traversal`: BFS hop distances, DFS reachability, BFS/DFS iterators
//! - `topological`: DFS finish order and topological sort
//! - `scc`: strongly connected components (Kosaraju)
//! - `shortest_path`: Dijkstra, Bellman-Ford, Floyd-Warshall
//! - `mst`: Kruskal and Prim
//! - `flow`: Edmonds-Karp maximum flow
//!
//! Every algorithm is a free function taking `&AdjacencyList<W>` and returning
//! an owned result; nothing is cached on the graph.

pub mod adjacency;
pub mod flow;
pub mod mst;
pub mod scc;
pub mod shortest_path;
pub mod topological;
pub mod traversal;
pub mod weight;
pub(crate) mod invariants;

// Re-export commonly used items from submodules
pub use adjacency::{AdjacencyList, Edge, WeightedEdge};
pub use flow::{edmonds_karp, MaxFlow, ResidualNetwork};
pub use mst::{kruskal, minimum_spanning_forest, prim, prim_from, SpanningTree};
pub use scc::{strongly_connected_components, Components};
pub use shortest_path::{
    bellman_ford, dijkstra, floyd_warshall, has_negative_cycle, DistanceMatrix, ShortestPaths,
};
pub use topological::{finish_order, topological_order, try_topological_order};
pub use traversal::{
    bfs_distances, connected_component_count, connected_components, dfs_mark, dfs_reachable, Bfs,
    Dfs,
};
pub use weight::Weight;
