use num_traits::{Float, Zero};
use std::collections::HashSet;
use std::fmt::Debug;

use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path computation
///
/// Unreachable vertices carry `None` in both arrays; the source has
/// distance zero and no predecessor.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distance from the source to each vertex
    pub distances: Vec<Option<W>>,

    /// Predecessor of each vertex in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Reconstructs the path from the source to `target` by walking
    /// predecessor links, or `None` if `target` is unreachable
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if target >= self.predecessors.len() || self.distances[target].is_none() {
            return None;
        }

        let mut path = Vec::new();
        let mut visited = HashSet::new();
        let mut current = target;
        while current != self.source {
            // A repeated vertex means corrupt predecessor links, not a path
            if !visited.insert(current) {
                return None;
            }
            path.push(current);
            current = self.predecessors[current]?;
        }
        path.push(self.source);
        path.reverse();
        Some(path)
    }
}

/// Trait for single-source shortest path solvers
///
/// Every solver in the crate (BMSSP, Dijkstra, Bellman-Ford) exposes the
/// same entry point so tests and benchmark harnesses can compare outputs
/// and timings directly.
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Computes shortest paths from `source` to every vertex
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Returns the name of the algorithm
    fn name(&self) -> &'static str;

    /// Reconstructs the path from the source to `target`; see
    /// [`ShortestPathResult::path_to`]
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        result.path_to(target)
    }
}
