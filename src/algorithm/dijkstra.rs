use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::traits::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinHeap;
use crate::graph::Graph;
use crate::{Error, Result};

/// Textbook Dijkstra over a binary heap, the primary correctness baseline
///
/// Uses lazy deletion: a vertex may sit in the heap several times, and
/// every pop is checked against the current best distance.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        let n = graph.vertex_count();
        if source >= n {
            return Err(Error::InvalidSource(source));
        }

        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut heap: MinHeap<usize, W> = MinHeap::new();

        distances[source] = Some(W::zero());
        heap.push(source, W::zero());

        while let Some((u, dist_u)) = heap.pop() {
            if let Some(current) = distances[u] {
                if current < dist_u {
                    continue; // stale entry
                }
            }

            for (v, weight) in graph.successors(u) {
                let candidate = dist_u + weight;
                let should_update = match distances[v] {
                    None => true,
                    Some(current) => candidate < current,
                };
                if should_update {
                    distances[v] = Some(candidate);
                    predecessors[v] = Some(u);
                    heap.push(v, candidate);
                }
            }
        }

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }

    fn name(&self) -> &'static str {
        "Dijkstra"
    }
}
