use log::debug;
use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::bmssp::{BmsspEngine, BmsspParams, SearchState};
use crate::algorithm::traits::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::Graph;
use crate::{Error, Result};

/// Single-source shortest paths via bounded multi-source recursion
///
/// Runs the recursive engine from the source with an infinite bound, then
/// keeps re-running it over whatever discovered vertices are left
/// unfinalized until none remain. Parameters are derived from the vertex
/// count unless pinned with [`with_params`](Bmssp::with_params).
///
/// ```
/// use bmssp::{Bmssp, DirectedGraph, ShortestPathAlgorithm};
/// use bmssp::graph::MutableGraph;
/// use ordered_float::OrderedFloat;
///
/// let mut graph: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_vertices(3);
/// graph.add_edge(0, 1, OrderedFloat(2.0)).unwrap();
/// graph.add_edge(1, 2, OrderedFloat(3.0)).unwrap();
///
/// let result = Bmssp::new().compute_shortest_paths(&graph, 0).unwrap();
/// assert_eq!(result.distances[2], Some(OrderedFloat(5.0)));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Bmssp {
    params: Option<BmsspParams>,
}

impl Bmssp {
    /// Creates a solver that derives its parameters per graph
    pub fn new() -> Self {
        Bmssp { params: None }
    }

    /// Pins the recursion parameters instead of deriving them; both are
    /// clamped to at least 1
    pub fn with_params(mut self, params: BmsspParams) -> Self {
        self.params = Some(BmsspParams {
            k: params.k.max(1),
            t: params.t.max(1),
        });
        self
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Bmssp
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        let n = graph.vertex_count();
        if source >= n {
            return Err(Error::InvalidSource(source));
        }

        let params = self
            .params
            .unwrap_or_else(|| BmsspParams::for_vertex_count(n));
        let level = params.top_level(n);
        debug!(
            "bmssp: n={}, m={}, k={}, t={}, top level {}",
            n,
            graph.edge_count(),
            params.k,
            params.t,
            level
        );

        let engine = BmsspEngine::new(params);
        let mut state = SearchState::new(n, source);

        let mut frontier = vec![source];
        let mut passes = 0usize;
        while !frontier.is_empty() {
            passes += 1;
            let outcome = engine.execute(graph, level, W::infinity(), &frontier, &mut state)?;
            debug_assert!(
                !outcome.finalized.is_empty(),
                "a pass over a non-empty frontier must settle at least one vertex"
            );
            // Vertices discovered but not finalized seed the next pass.
            frontier = (0..n)
                .filter(|&v| !state.settled[v] && state.dist[v].is_finite())
                .collect();
        }
        if passes > 1 {
            debug!("bmssp: {} passes to drain the frontier", passes);
        }

        let distances = state
            .dist
            .iter()
            .map(|&d| if d.is_finite() { Some(d) } else { None })
            .collect();
        Ok(ShortestPathResult {
            distances,
            predecessors: state.pred,
            source,
        })
    }

    fn name(&self) -> &'static str {
        "BMSSP"
    }
}

/// One-call entry point: shortest paths from `source` over `graph`
pub fn shortest_paths<W, G>(graph: &G, source: usize) -> Result<ShortestPathResult<W>>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    Bmssp::new().compute_shortest_paths(graph, source)
}
