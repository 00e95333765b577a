use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use bmssp::graph::generators::{grid_2d, random_gnm};
use bmssp::graph::{Graph, MutableGraph};
use bmssp::{
    shortest_paths, BellmanFord, Bmssp, BmsspParams, Dijkstra, DirectedGraph, Error,
    ShortestPathAlgorithm,
};

fn w(value: f64) -> OrderedFloat<f64> {
    OrderedFloat(value)
}

/// Random graph with weights drawn from a small integer range, so equal
/// path lengths are common instead of measure-zero
fn random_tied_graph(
    n: usize,
    m: usize,
    min_weight: u32,
    max_weight: u32,
    rng: &mut StdRng,
) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_vertices(n);
    for _ in 0..m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(min_weight..=max_weight) as f64;
            graph.add_edge(u, v, OrderedFloat(weight)).unwrap();
        }
    }
    graph
}

#[test]
fn test_single_vertex_graph() {
    let graph: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_vertices(1);
    let result = Bmssp::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distances, vec![Some(w(0.0))]);
    assert_eq!(result.predecessors, vec![None]);
}

#[test]
fn test_single_edge() {
    let mut graph: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_vertices(2);
    graph.add_edge(0, 1, w(2.5)).unwrap();

    let result = Bmssp::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distances[0], Some(w(0.0)));
    assert_eq!(result.distances[1], Some(w(2.5)));
    assert_eq!(result.predecessors[1], Some(0));
}

#[test]
fn test_unreachable_vertices_stay_none() {
    let mut graph: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_vertices(4);
    graph.add_edge(0, 1, w(1.0)).unwrap();
    // 2 and 3 connect only to each other
    graph.add_edge(2, 3, w(1.0)).unwrap();

    let result = Bmssp::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distances[1], Some(w(1.0)));
    assert_eq!(result.distances[2], None);
    assert_eq!(result.distances[3], None);
    assert_eq!(result.predecessors[2], None);
    assert_eq!(result.predecessors[3], None);
}

#[test]
fn test_zero_weight_cycle_terminates() {
    let mut graph: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_vertices(4);
    graph.add_edge(0, 1, w(0.0)).unwrap();
    graph.add_edge(1, 2, w(0.0)).unwrap();
    graph.add_edge(2, 0, w(0.0)).unwrap();
    graph.add_edge(0, 3, w(1.0)).unwrap();

    let result = Bmssp::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distances[0], Some(w(0.0)));
    assert_eq!(result.distances[1], Some(w(0.0)));
    assert_eq!(result.distances[2], Some(w(0.0)));
    assert_eq!(result.distances[3], Some(w(1.0)));
    assert_eq!(result.predecessors[0], None);
}

#[test]
fn test_equal_cost_paths_agree_on_distance() {
    // diamond: 0 -> 1 -> 3 and 0 -> 2 -> 3 both cost 3
    let mut graph: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_vertices(4);
    graph.add_edge(0, 1, w(1.0)).unwrap();
    graph.add_edge(0, 2, w(2.0)).unwrap();
    graph.add_edge(1, 3, w(2.0)).unwrap();
    graph.add_edge(2, 3, w(1.0)).unwrap();

    let result = Bmssp::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distances[3], Some(w(3.0)));
    // the recorded parent must realize the optimal distance
    let pred = result.predecessors[3].unwrap();
    let edge = graph.edge_weight(pred, 3).unwrap();
    assert_eq!(result.distances[pred].unwrap() + edge, w(3.0));
}

#[test]
fn test_invalid_source_rejected() {
    let graph: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_vertices(3);

    assert_eq!(
        Bmssp::new().compute_shortest_paths(&graph, 7),
        Err(Error::InvalidSource(7))
    );
    assert_eq!(
        Dijkstra::new().compute_shortest_paths(&graph, 7),
        Err(Error::InvalidSource(7))
    );
    assert_eq!(
        BellmanFord::new().compute_shortest_paths(&graph, 7),
        Err(Error::InvalidSource(7))
    );

    let empty: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::new();
    assert_eq!(
        Bmssp::new().compute_shortest_paths(&empty, 0),
        Err(Error::InvalidSource(0))
    );
}

#[test]
fn test_agrees_with_dijkstra_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(7);
    for &n in &[50, 200, 500] {
        let graph = random_gnm(n, 4 * n, &mut rng);

        let fast = Bmssp::new().compute_shortest_paths(&graph, 0).unwrap();
        let reference = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

        assert_eq!(fast.distances, reference.distances, "n = {}", n);
    }
}

#[test]
fn test_agrees_with_dijkstra_on_tied_weights() {
    // weights from {0, 1, 2} make equal-length routes the common case,
    // so batch boundaries keep landing inside groups of equal distances
    for seed in 0..8 {
        let mut rng = StdRng::seed_from_u64(seed);
        for &n in &[30, 60] {
            let graph = random_tied_graph(n, 4 * n, 0, 2, &mut rng);

            let fast = Bmssp::new().compute_shortest_paths(&graph, 0).unwrap();
            let reference = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

            assert_eq!(fast.distances, reference.distances, "seed = {}, n = {}", seed, n);
        }
    }
}

#[test]
fn test_pinned_params_on_tied_weights() {
    // tiny parameters push every tie group through many pulls and levels
    for seed in 0..8 {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_tied_graph(50, 200, 1, 3, &mut rng);

        let solver = Bmssp::new().with_params(BmsspParams { k: 2, t: 2 });
        let fast = solver.compute_shortest_paths(&graph, 0).unwrap();
        let reference = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

        assert_eq!(fast.distances, reference.distances, "seed = {}", seed);
    }
}

#[test]
fn test_cheaper_indirect_route_beats_direct_edge() {
    // 0 -> 2 directly costs 4; 0 -> 1 -> 2 costs 2 and carries on to 3
    let mut graph: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_vertices(4);
    graph.add_edge(0, 1, w(1.0)).unwrap();
    graph.add_edge(0, 2, w(4.0)).unwrap();
    graph.add_edge(1, 2, w(1.0)).unwrap();
    graph.add_edge(2, 3, w(1.0)).unwrap();

    let result = Bmssp::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(
        result.distances,
        vec![Some(w(0.0)), Some(w(1.0)), Some(w(2.0)), Some(w(3.0))]
    );
    assert_eq!(result.predecessors[2], Some(1));
    assert_eq!(result.predecessors[3], Some(2));
}

#[test]
fn test_agrees_with_bellman_ford() {
    let mut rng = StdRng::seed_from_u64(11);
    let graph = random_gnm(60, 240, &mut rng);

    let fast = Bmssp::new().compute_shortest_paths(&graph, 0).unwrap();
    let reference = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(fast.distances, reference.distances);
}

#[test]
fn test_predecessors_realize_distances() {
    let mut rng = StdRng::seed_from_u64(23);
    let graph = random_gnm(120, 480, &mut rng);

    let result = Bmssp::new().compute_shortest_paths(&graph, 0).unwrap();

    for v in 0..graph.vertex_count() {
        let d = match result.distances[v] {
            Some(d) => d,
            None => continue,
        };
        if v == 0 {
            assert_eq!(d, w(0.0));
            assert_eq!(result.predecessors[v], None);
            continue;
        }
        let u = result.predecessors[v].expect("reachable vertex must have a parent");
        let weight = graph.edge_weight(u, v).expect("parent edge must exist");
        assert_eq!(result.distances[u].unwrap() + weight, d);
    }
}

#[test]
fn test_grid_path_reconstruction() {
    let graph = grid_2d(10, 10);
    let result = shortest_paths(&graph, 0).unwrap();

    // opposite corner: 9 steps right, 9 steps down
    assert_eq!(result.distances[99], Some(w(18.0)));

    let path = result.path_to(99).unwrap();
    assert_eq!(path.first(), Some(&0));
    assert_eq!(path.last(), Some(&99));
    assert_eq!(path.len(), 19);
    for pair in path.windows(2) {
        assert!(graph.has_edge(pair[0], pair[1]));
    }
}

#[test]
fn test_get_path_for_unreachable_target() {
    let mut graph: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_vertices(3);
    graph.add_edge(0, 1, w(1.0)).unwrap();

    let solver = Bmssp::new();
    let result = solver.compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.path_to(2), None);
    assert_eq!(result.path_to(5), None);
    assert_eq!(result.path_to(0), Some(vec![0]));

    // the trait surface forwards to the same walk
    let via_trait = <Bmssp as ShortestPathAlgorithm<OrderedFloat<f64>, DirectedGraph<OrderedFloat<f64>>>>::get_path(
        &solver, &result, 1,
    );
    assert_eq!(via_trait, Some(vec![0, 1]));
}

#[test]
fn test_pinned_params_still_correct() {
    let mut rng = StdRng::seed_from_u64(31);
    let graph = random_gnm(150, 600, &mut rng);

    // deliberately tiny parameters force deep recursion and many batches
    let solver = Bmssp::new().with_params(BmsspParams { k: 2, t: 2 });
    let fast = solver.compute_shortest_paths(&graph, 0).unwrap();
    let reference = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(fast.distances, reference.distances);
}
