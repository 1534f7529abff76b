//! Property-based tests for the matrix graph store.
//!
//! These exercise randomized vertex/edge workloads to protect the structural
//! invariants (symmetry, counts, persistence round-trip) against refactors.

use std::collections::HashSet;

use proptest::{
    collection::{hash_set, vec},
    prelude::{any, Just, Strategy},
    proptest,
    test_runner::Config as ProptestConfig,
};
use tempfile::TempDir;

use matgraph_core::MatrixGraph;

const GRAPH_PROP_CASES: u32 = 64;

/// Distinct vertex values plus random candidate edges over them, expressed
/// as index pairs so they always reference present vertices.
fn graph_input_strategy() -> impl Strategy<Value = (Vec<u16>, Vec<(usize, usize, f64)>)> {
    hash_set(any::<u16>(), 2..32).prop_flat_map(|set| {
        let vertices: Vec<u16> = set.into_iter().collect();
        let n = vertices.len();
        let edges = vec((0..n, 0..n, 0.001_f64..1000.0), 0..64);
        (Just(vertices), edges)
    })
}

/// Build a graph from strategy output, skipping self-loop candidates.
fn build_graph(vertices: &[u16], edges: &[(usize, usize, f64)]) -> MatrixGraph<u16> {
    let mut graph = MatrixGraph::with_capacity(vertices.len());
    for &v in vertices {
        graph.insert_vertex(v).unwrap();
    }
    for &(a, b, w) in edges {
        if a != b {
            graph.insert_edge(&vertices[a], &vertices[b], w).unwrap();
        }
    }
    graph
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: GRAPH_PROP_CASES,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_vertex_count_tracks_inserts_and_deletes(
        (vertices, _) in graph_input_strategy(),
        delete_mask in vec(any::<bool>(), 32),
    ) {
        let mut graph = MatrixGraph::with_capacity(vertices.len());
        for &v in &vertices {
            graph.insert_vertex(v).unwrap();
        }

        let mut deleted = 0;
        for (i, &v) in vertices.iter().enumerate() {
            if *delete_mask.get(i).unwrap_or(&false) {
                graph.delete_vertex(&v).unwrap();
                deleted += 1;
            }
        }
        assert_eq!(graph.vertex_count(), vertices.len() - deleted);
    }

    #[test]
    fn prop_weights_stay_symmetric((vertices, edges) in graph_input_strategy()) {
        let graph = build_graph(&vertices, &edges);
        for u in graph.vertices() {
            for v in graph.vertices() {
                if u != v {
                    let forward = graph.weight(u, v).unwrap();
                    let backward = graph.weight(v, u).unwrap();
                    assert_eq!(forward, backward);
                    assert!(forward == 0.0 || forward > 0.0);
                }
            }
        }
    }

    #[test]
    fn prop_save_load_round_trip((vertices, edges) in graph_input_strategy()) {
        let graph = build_graph(&vertices, &edges);

        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("graph.bin");
        graph.save(&path).unwrap();

        let restored: MatrixGraph<u16> = MatrixGraph::from_file(&path).unwrap();
        assert_eq!(restored.vertex_count(), graph.vertex_count());
        assert_eq!(restored.edge_count(), graph.edge_count());
        assert_eq!(restored.vertices(), graph.vertices());
        for u in graph.vertices() {
            for v in graph.vertices() {
                if u != v {
                    assert_eq!(
                        restored.weight(u, v).unwrap(),
                        graph.weight(u, v).unwrap()
                    );
                }
            }
        }
    }

    #[test]
    fn prop_traversals_cover_reachable_without_duplicates(
        (vertices, edges) in graph_input_strategy(),
    ) {
        let graph = build_graph(&vertices, &edges);
        let start = vertices[0];

        for order in [
            graph.breadth_first(&start).unwrap(),
            graph.depth_first(&start).unwrap(),
        ] {
            let unique: HashSet<u16> = order.iter().copied().collect();
            assert_eq!(unique.len(), order.len(), "no vertex may repeat");
            assert_eq!(order[0], start);
        }

        // BFS and DFS agree on the reachable set.
        let bfs: HashSet<u16> = graph.breadth_first(&start).unwrap().into_iter().collect();
        let dfs: HashSet<u16> = graph.depth_first(&start).unwrap().into_iter().collect();
        assert_eq!(bfs, dfs);
    }

    #[test]
    fn prop_shortest_paths_bounded_by_direct_edges(
        (vertices, edges) in graph_input_strategy(),
    ) {
        let graph = build_graph(&vertices, &edges);
        let start = vertices[0];
        let distances = graph.shortest_paths(&start).unwrap();

        assert_eq!(distances[&start], 0.0);
        for neighbor in graph.neighbors(&start).unwrap() {
            let direct = graph.weight(&start, neighbor).unwrap();
            assert!(distances[neighbor] <= direct);
        }
        for distance in distances.values() {
            assert!(distance.is_finite() && *distance >= 0.0);
        }
    }
}
