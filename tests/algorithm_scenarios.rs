use graphkit::graph::{
    bellman_ford, bfs_distances, dijkstra, edmonds_karp, floyd_warshall, has_negative_cycle,
    kruskal, prim, strongly_connected_components, topological_order, try_topological_order, Bfs,
    Dfs,
};
use graphkit::{AdjacencyList, GraphError};

fn undirected(n: usize, edges: &[(usize, usize, i64)]) -> AdjacencyList<i64> {
    let mut graph = AdjacencyList::new(n);
    for &(a, b, w) in edges {
        graph.add_undirected_edge(a, b, w).unwrap();
    }
    graph
}

// ===== SHORTEST PATHS =====

#[test]
fn dijkstra_leaves_isolated_node_unreached() {
    let graph = AdjacencyList::from_edges(4, [(0, 1, 1i64), (1, 2, 2), (0, 2, 5)]).unwrap();
    let paths = dijkstra(&graph, 0).unwrap();

    assert_eq!(paths.distances(), &[Some(0), Some(1), Some(3), None]);
    assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
    assert_eq!(paths.path_to(3), None);
    assert!(!paths.is_reachable(3));
}

#[test]
fn two_node_negative_cycle_is_detected() {
    let graph = AdjacencyList::from_edges(2, [(0, 1, -1i64), (1, 0, -1)]).unwrap();

    assert!(has_negative_cycle(&graph, 0).unwrap());
    assert_eq!(bellman_ford(&graph, 0), Err(GraphError::NegativeCycle));
    assert!(floyd_warshall(&graph).has_negative_diagonal());
}

#[test]
fn negative_cycle_out_of_reach_does_not_count() {
    // 2 <-> 3 is negative but nothing leads there from 0.
    let graph =
        AdjacencyList::from_edges(4, [(0, 1, 4i64), (2, 3, -5), (3, 2, 1)]).unwrap();

    assert!(!has_negative_cycle(&graph, 0).unwrap());
    let paths = bellman_ford(&graph, 0).unwrap();
    assert_eq!(paths.distances(), &[Some(0), Some(4), None, None]);
    assert!(has_negative_cycle(&graph, 2).unwrap());
}

#[test]
fn bellman_ford_handles_negative_edges_dijkstra_refuses() {
    let graph = AdjacencyList::from_edges(3, [(0, 1, 5i64), (0, 2, 2), (2, 1, -4)]).unwrap();

    let paths = bellman_ford(&graph, 0).unwrap();
    assert_eq!(paths.distances(), &[Some(0), Some(-2), Some(2)]);
    assert_eq!(paths.path_to(1), Some(vec![0, 2, 1]));
    assert_eq!(
        dijkstra(&graph, 0).unwrap_err(),
        GraphError::NegativeWeight { from: 2, to: 1 }
    );
}

#[test]
fn floyd_rows_match_single_source_runs() {
    let graph = AdjacencyList::from_edges(
        5,
        [(0, 1, 3i64), (0, 2, 8), (1, 3, 1), (2, 1, 4), (3, 0, 2), (3, 2, -5)],
    )
    .unwrap();
    let matrix = floyd_warshall(&graph);

    for source in 0..graph.node_count() {
        let paths = bellman_ford(&graph, source).unwrap();
        assert_eq!(matrix.row(source), paths.distances(), "row {source}");
    }
    assert_eq!(matrix.get(0, 4), None);
}

#[test]
fn every_source_rejects_out_of_range() {
    let graph = AdjacencyList::<i64>::new(2);
    let expected = GraphError::NodeOutOfBounds {
        node: 2,
        node_count: 2,
    };

    assert_eq!(bfs_distances(&graph, 2).unwrap_err(), expected);
    assert_eq!(dijkstra(&graph, 2).unwrap_err(), expected);
    assert_eq!(bellman_ford(&graph, 2).unwrap_err(), expected);
    assert_eq!(edmonds_karp(&graph, 2, 0).unwrap_err(), expected);
    assert_eq!(edmonds_karp(&graph, 0, 2).unwrap_err(), expected);
}

#[test]
fn weight_overflow_is_reported() {
    let graph = AdjacencyList::from_edges(3, [(0, 1, i8::MAX), (1, 2, 1)]).unwrap();

    assert_eq!(dijkstra(&graph, 0).unwrap_err(), GraphError::WeightOverflow);
    assert_eq!(bellman_ford(&graph, 0).unwrap_err(), GraphError::WeightOverflow);
}

#[test]
fn longer_route_overflowing_does_not_hide_the_shortest() {
    let graph =
        AdjacencyList::from_edges(4, [(0, 1, 100i8), (0, 3, 110), (1, 2, 100), (3, 2, 1)]).unwrap();
    let expected = [Some(0), Some(100), Some(111), Some(110)];

    assert_eq!(dijkstra(&graph, 0).unwrap().distances(), &expected);
    assert_eq!(bellman_ford(&graph, 0).unwrap().distances(), &expected);
    assert!(!has_negative_cycle(&graph, 0).unwrap());
}

#[test]
fn steep_negative_cycle_in_a_narrow_type_is_still_a_cycle() {
    let graph = AdjacencyList::from_edges(2, [(0, 1, -100i8), (1, 0, -100)]).unwrap();

    assert_eq!(has_negative_cycle(&graph, 0), Ok(true));
    assert_eq!(bellman_ford(&graph, 0), Err(GraphError::NegativeCycle));
}

// ===== FLOW =====

#[test]
fn two_route_network_carries_four() {
    // source = 0, a = 1, b = 2, sink = 3
    let graph =
        AdjacencyList::from_edges(4, [(0, 1, 3i64), (1, 3, 2), (0, 2, 2), (2, 3, 3)]).unwrap();
    let flow = edmonds_karp(&graph, 0, 3).unwrap();

    assert_eq!(flow.value(), 4);
    assert_eq!(flow.flow(0, 1), 2);
    assert_eq!(flow.flow(0, 2), 2);
    assert_eq!(flow.cut_capacity().unwrap(), 4);
}

#[test]
fn unit_capacities_route_two_units() {
    let graph = AdjacencyList::from_edges(
        4,
        [(0, 1, 1i64), (0, 2, 1), (1, 2, 1), (1, 3, 1), (2, 3, 1)],
    )
    .unwrap();
    let flow = edmonds_karp(&graph, 0, 3).unwrap();

    assert_eq!(flow.value(), 2);
    assert!(flow.source_side()[0]);
    assert!(!flow.source_side()[3]);
}

#[test]
fn source_equal_to_sink_is_rejected() {
    let graph = AdjacencyList::from_edges(2, [(0, 1, 1i64)]).unwrap();
    assert_eq!(
        edmonds_karp(&graph, 1, 1).unwrap_err(),
        GraphError::SourceIsSink { node: 1 }
    );
}

// ===== SPANNING TREES =====

#[test]
fn kruskal_and_prim_find_the_same_weight() {
    let graph = undirected(
        6,
        &[
            (0, 1, 4),
            (0, 2, 4),
            (1, 2, 2),
            (2, 3, 3),
            (2, 5, 2),
            (2, 4, 4),
            (3, 4, 3),
            (5, 4, 3),
        ],
    );

    let k = kruskal(&graph).unwrap();
    let p = prim(&graph).unwrap();
    assert_eq!(k.total_weight, 14);
    assert_eq!(p.total_weight, 14);
    assert_eq!(k.edges.len(), 5);
    assert_eq!(p.edges.len(), 5);
}

#[test]
fn spanning_tree_of_disconnected_graph_is_an_error() {
    let graph = undirected(5, &[(0, 1, 1), (1, 2, 1), (3, 4, 1)]);
    assert_eq!(kruskal(&graph), Err(GraphError::Disconnected { components: 2 }));
    assert_eq!(prim(&graph), Err(GraphError::Disconnected { components: 2 }));
}

// ===== STRUCTURE =====

#[test]
fn topological_order_of_a_dag_respects_every_edge() {
    let graph = AdjacencyList::from_adjacency(&[
        vec![1, 2],
        vec![3],
        vec![3, 4],
        vec![5],
        vec![5],
        vec![],
    ])
    .unwrap();
    let order = try_topological_order(&graph).unwrap();

    let mut position = vec![0; order.len()];
    for (i, &node) in order.iter().enumerate() {
        position[node] = i;
    }
    for (u, edge) in graph.iter_edges() {
        assert!(position[u] < position[edge.to], "{u} -> {}", edge.to);
    }
    assert_eq!(order, topological_order(&graph));
}

#[test]
fn cycle_stops_strict_topological_sort() {
    let graph = AdjacencyList::from_adjacency(&[vec![1], vec![2], vec![0]]).unwrap();
    assert!(matches!(
        try_topological_order(&graph),
        Err(GraphError::Cycle { .. })
    ));
    // The lenient variant still produces a permutation.
    let mut order = topological_order(&graph);
    order.sort_unstable();
    assert_eq!(order, vec![0, 1, 2]);
}

#[test]
fn scc_groups_and_condensation() {
    // {0,1,2} -> {3,4} -> {5}
    let graph = AdjacencyList::from_adjacency(&[
        vec![1],
        vec![2, 3],
        vec![0],
        vec![4],
        vec![3, 5],
        vec![],
    ])
    .unwrap();
    let components = strongly_connected_components(&graph);

    assert_eq!(components.len(), 3);
    assert!(components.same_component(0, 2));
    assert!(components.same_component(3, 4));
    assert!(!components.same_component(2, 3));

    let dag = components.condensation(&graph).unwrap();
    assert_eq!(dag.node_count(), 3);
    assert!(try_topological_order(&dag).is_ok());
    for (u, edge) in dag.iter_edges() {
        assert!(u < edge.to);
    }
}

#[test]
fn traversal_iterators_cover_the_reachable_set() {
    let graph =
        AdjacencyList::from_adjacency(&[vec![1, 2], vec![3], vec![3], vec![], vec![0]]).unwrap();

    let bfs: Vec<_> = Bfs::new(&graph, 0).collect();
    let dfs: Vec<_> = Dfs::new(&graph, 0).collect();
    assert_eq!(bfs, vec![0, 1, 2, 3]);
    assert_eq!(dfs, vec![0, 1, 3, 2]);
    assert_eq!(
        bfs_distances(&graph, 0).unwrap(),
        vec![Some(0), Some(1), Some(1), Some(2), None]
    );
}
