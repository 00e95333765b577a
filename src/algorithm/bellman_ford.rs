use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::traits::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::Graph;
use crate::{Error, Result};

/// Bellman-Ford, the slow reference: up to `n - 1` full edge-scan passes
/// with an early exit once a pass changes nothing
///
/// No negative-cycle detection pass: graph construction already rejects
/// negative weights.
#[derive(Debug, Default, Clone, Copy)]
pub struct BellmanFord;

impl BellmanFord {
    pub fn new() -> Self {
        BellmanFord
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
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
        distances[source] = Some(W::zero());

        for _pass in 1..n {
            let mut updated = false;
            for u in 0..n {
                let du = match distances[u] {
                    Some(d) => d,
                    None => continue,
                };
                for (v, weight) in graph.successors(u) {
                    let candidate = du + weight;
                    let should_update = match distances[v] {
                        None => true,
                        Some(current) => candidate < current,
                    };
                    if should_update {
                        distances[v] = Some(candidate);
                        predecessors[v] = Some(u);
                        updated = true;
                    }
                }
            }
            if !updated {
                break;
            }
        }

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }

    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }
}
