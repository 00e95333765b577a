use ordered_float::OrderedFloat;
use rand::prelude::*;

use crate::graph::{DirectedGraph, MutableGraph};

/// Generates a random directed graph with `n` vertices and about `m` edges
///
/// Edges pick both endpoints uniformly (self-loops are skipped, duplicate
/// edges overwrite), with weights uniform in `[1, 100)`. Callers pass the
/// RNG so tests can seed it for reproducible graphs.
pub fn random_gnm(n: usize, m: usize, rng: &mut impl Rng) -> DirectedGraph<OrderedFloat<f64>> {
    assert!(n > 0, "graph needs at least one vertex");

    let mut graph = DirectedGraph::with_vertices(n);
    for _ in 0..m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            graph
                .add_edge(u, v, weight)
                .expect("endpoints generated in range with positive weight");
        }
    }
    graph
}

/// Generates a `width * height` grid with unit-weight edges in both
/// directions between 4-neighbors
///
/// Vertex `(x, y)` has index `y * width + x`. Useful for tests and benches
/// where exact shortest distances are easy to predict (Manhattan distance).
pub fn grid_2d(width: usize, height: usize) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_vertices(width * height);

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                let right = vertex + 1;
                graph
                    .add_edge(vertex, right, OrderedFloat(1.0))
                    .expect("grid edge endpoints are in range");
                graph
                    .add_edge(right, vertex, OrderedFloat(1.0))
                    .expect("grid edge endpoints are in range");
            }
            if y + 1 < height {
                let down = vertex + width;
                graph
                    .add_edge(vertex, down, OrderedFloat(1.0))
                    .expect("grid edge endpoints are in range");
                graph
                    .add_edge(down, vertex, OrderedFloat(1.0))
                    .expect("grid edge endpoints are in range");
            }
        }
    }
    graph
}
