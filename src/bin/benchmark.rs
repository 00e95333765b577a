use std::time::{Duration, Instant};

use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;

use bmssp::graph::generators::random_gnm;
use bmssp::graph::Graph;
use bmssp::{BellmanFord, Bmssp, Dijkstra, DirectedGraph, ShortestPathAlgorithm};

// Bellman-Ford is O(n * m); above this size it stops being a useful
// reference point.
const BELLMAN_FORD_LIMIT: usize = 10_000;

fn benchmark_algorithm<A>(
    name: &str,
    algorithm: &A,
    graph: &DirectedGraph<OrderedFloat<f64>>,
    source: usize,
) -> Duration
where
    A: ShortestPathAlgorithm<OrderedFloat<f64>, DirectedGraph<OrderedFloat<f64>>>,
{
    println!(
        "Running {} on graph with {} vertices...",
        name,
        graph.vertex_count()
    );

    let start = Instant::now();
    let result = algorithm.compute_shortest_paths(graph, source).unwrap();
    let duration = start.elapsed();

    let reachable = result.distances.iter().filter(|d| d.is_some()).count();
    println!("  - Found {} reachable vertices in {:?}", reachable, duration);

    duration
}

fn main() {
    env_logger::init();

    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000, 200_000, 500_000];

    // Average number of edges per vertex
    let edge_factor = 2.0;

    println!("=====================================================");
    println!("Benchmark: BMSSP vs Dijkstra vs Bellman-Ford");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let bmssp = Bmssp::new();
    let dijkstra = Dijkstra::new();
    let bellman_ford = BellmanFord::new();

    let mut rng = StdRng::seed_from_u64(42);
    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let edges = (edge_factor * size as f64) as usize;
        let graph = random_gnm(size, edges, &mut rng);
        let source = 0;

        println!(
            "Graph has {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        let dijkstra_time = benchmark_algorithm("Dijkstra", &dijkstra, &graph, source);
        let bmssp_time = benchmark_algorithm("BMSSP", &bmssp, &graph, source);
        let bellman_ford_time = if size <= BELLMAN_FORD_LIMIT {
            Some(benchmark_algorithm(
                "Bellman-Ford",
                &bellman_ford,
                &graph,
                source,
            ))
        } else {
            None
        };

        let speedup = dijkstra_time.as_secs_f64() / bmssp_time.as_secs_f64();
        println!("Speedup - BMSSP vs Dijkstra: {:.2}x", speedup);

        results.push((size, dijkstra_time, bmssp_time, bellman_ford_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<15} | {:<18} | {:<10}",
        "Vertices", "Dijkstra (ms)", "BMSSP (ms)", "Bellman-Ford (ms)", "Speedup"
    );
    println!("-----------------------------------------------------");

    for (size, dijkstra_time, bmssp_time, bellman_ford_time) in &results {
        let speedup = dijkstra_time.as_secs_f64() / bmssp_time.as_secs_f64();
        let bellman_ford_ms = match bellman_ford_time {
            Some(t) => format!("{}", t.as_millis()),
            None => "-".to_string(),
        };

        println!(
            "{:<10} | {:<15} | {:<15} | {:<18} | {:<10.2}",
            size,
            dijkstra_time.as_millis(),
            bmssp_time.as_millis(),
            bellman_ford_ms,
            speedup
        );
    }
}
