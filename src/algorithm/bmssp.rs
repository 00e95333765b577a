use log::trace;
use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::pivots::find_pivots;
use crate::data_structures::{BoundedQueue, MinHeap};
use crate::graph::Graph;
use crate::{Error, Result};

/// Tuning parameters of the recursion, derived from the vertex count
///
/// `k` is the pivot pass's relaxation depth, the base case's expansion cap
/// and the pivot subtree threshold; `t` is the level width: every level
/// multiplies the pull batch size by `2^t`. The derivation follows Duan et
/// al. (2025): `k ~ log^(1/3) n`, `t ~ log^(2/3) n`. Both fields are public
/// so callers can tune them against their own graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmsspParams {
    /// Relaxation depth / base expansion cap / pivot subtree threshold
    pub k: usize,

    /// Level width exponent
    pub t: usize,
}

impl BmsspParams {
    /// Derives parameters for a graph with `n` vertices
    pub fn for_vertex_count(n: usize) -> Self {
        let lg = (n.max(2) as f64).log2();
        let k = (lg.powf(1.0 / 3.0)).ceil() as usize;
        let t = (lg.powf(2.0 / 3.0)).ceil() as usize;
        BmsspParams {
            k: k.max(2),
            t: t.max(2),
        }
    }

    /// Top recursion level for a graph with `n` vertices: `ceil(log2(n)/t)`,
    /// which makes the top-level result cap cover the whole graph
    pub fn top_level(&self, n: usize) -> usize {
        let lg = (n.max(2) as f64).log2();
        ((lg / self.t as f64).ceil() as usize).max(1)
    }

    /// Pull batch and queue block size at a level: `2^((level-1)*t)`
    pub fn block_size(&self, level: usize) -> usize {
        let exp = level
            .saturating_sub(1)
            .saturating_mul(self.t)
            .min(usize::BITS as usize) as u32;
        2usize.saturating_pow(exp)
    }

    /// Cap on the finalized set of one level: `k * 2^(level*t)`
    pub fn level_capacity(&self, level: usize) -> usize {
        let exp = level.saturating_mul(self.t).min(usize::BITS as usize) as u32;
        self.k.saturating_mul(2usize.saturating_pow(exp))
    }
}

/// Mutable search state shared by every component of one computation
///
/// Distances only ever decrease, and a vertex whose `settled` flag is set
/// has its true shortest distance recorded and is never touched again. All
/// writes go through [`relax`](SearchState::relax), which enforces both
/// invariants.
#[derive(Debug, Clone)]
pub struct SearchState<W> {
    /// Best known distance per vertex, `+inf` when undiscovered
    pub dist: Vec<W>,

    /// Shortest-path-tree parent recorded by the improving relaxation
    pub pred: Vec<Option<usize>>,

    /// Finalized markers
    pub settled: Vec<bool>,
}

impl<W> SearchState<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Fresh state for a computation from `source`
    pub fn new(vertex_count: usize, source: usize) -> Self {
        assert!(source < vertex_count, "source vertex out of range");
        let mut dist = vec![W::infinity(); vertex_count];
        dist[source] = W::zero();
        SearchState {
            dist,
            pred: vec![None; vertex_count],
            settled: vec![false; vertex_count],
        }
    }

    /// Relaxes the edge `from -> to`; returns true when it strictly
    /// improved `to`'s distance. Settled vertices are never written.
    pub fn relax(&mut self, from: usize, to: usize, weight: W) -> bool {
        let candidate = self.dist[from] + weight;
        if self.settled[to] {
            debug_assert!(
                candidate >= self.dist[to],
                "relaxation would lower the distance of settled vertex {}",
                to
            );
            return false;
        }
        if candidate < self.dist[to] {
            self.dist[to] = candidate;
            self.pred[to] = Some(from);
            true
        } else {
            false
        }
    }
}

/// Outcome of one recursion level
#[derive(Debug)]
pub struct LevelResult<W> {
    /// Tightest bound this call achieved: every vertex whose shortest
    /// path runs through the sources with distance below it is settled
    pub bound: W,

    /// Vertices this call settled, with distances at most `bound`
    pub finalized: Vec<usize>,
}

/// The recursive bounded multi-source shortest path procedure
///
/// A call `execute(graph, level, bound, sources, state)` settles every
/// vertex whose shortest path runs through the sources and whose distance
/// lies below the bound it returns. Level 0 is a capped binary-heap
/// expansion; higher levels shrink their frontier to pivots, then stream
/// batches of the queue's smallest entries through the level below.
#[derive(Debug, Clone, Copy)]
pub struct BmsspEngine {
    params: BmsspParams,
}

impl BmsspEngine {
    /// Creates an engine with the given parameters
    pub fn new(params: BmsspParams) -> Self {
        BmsspEngine { params }
    }

    /// Returns the engine's parameters
    pub fn params(&self) -> BmsspParams {
        self.params
    }

    /// Runs one recursion level; see the type-level docs
    pub fn execute<W, G>(
        &self,
        graph: &G,
        level: usize,
        bound: W,
        sources: &[usize],
        state: &mut SearchState<W>,
    ) -> Result<LevelResult<W>>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
    {
        if sources.is_empty() {
            return Ok(LevelResult {
                bound,
                finalized: Vec::new(),
            });
        }
        if level == 0 {
            return self.base_case(graph, bound, sources, state);
        }

        let selection = find_pivots(graph, bound, sources, state, self.params.k);
        trace!(
            "level {}: {} sources -> {} pivots, {} reached",
            level,
            sources.len(),
            selection.pivots.len(),
            selection.reached.len()
        );

        let block_size = self.params.block_size(level);
        let capacity = self.params.level_capacity(level);
        let mut queue: BoundedQueue<usize, W> = BoundedQueue::new(block_size, bound);
        for &pivot in &selection.pivots {
            queue.insert(pivot, state.dist[pivot]);
        }

        let mut finalized: Vec<usize> = Vec::new();
        let mut achieved = bound;
        let mut capped = false;

        while !queue.is_empty() {
            let (batch, sub_bound) = queue.pull(block_size);
            // Pulled pairs are only hints: anything settled since its
            // insertion is dropped, the live distance rules the rest.
            let sub_sources: Vec<usize> = batch
                .iter()
                .filter(|&&(v, _)| !state.settled[v])
                .map(|&(v, _)| v)
                .collect();
            if sub_sources.is_empty() {
                continue;
            }

            let sub = self.execute(graph, level - 1, sub_bound, &sub_sources, state)?;
            achieved = sub.bound;

            let mut prepend: Vec<(usize, W)> = Vec::new();
            for &u in &sub.finalized {
                let du = state.dist[u];
                for (v, weight) in graph.successors(u) {
                    if state.settled[v] {
                        continue;
                    }
                    let candidate = du + weight;
                    let improved = state.relax(u, v, weight);
                    // Equal-distance targets re-enter as well, so a vertex
                    // the sub-call improved but could not finalize is never
                    // stranded outside the queue.
                    if improved || candidate == state.dist[v] {
                        let d = state.dist[v];
                        if d >= sub_bound {
                            queue.insert(v, d);
                        } else {
                            prepend.push((v, d));
                        }
                    }
                }
            }
            // Batch members the sub-call left unfinalized stay at the front
            // of the window.
            for &v in &sub_sources {
                if !state.settled[v] && state.dist[v] < sub_bound {
                    prepend.push((v, state.dist[v]));
                }
            }
            queue.batch_prepend(prepend);

            finalized.extend_from_slice(&sub.finalized);
            if finalized.len() >= capacity {
                capped = true;
                break;
            }
        }

        // A drained queue means the whole window below `bound` is done; a
        // capped run only vouches for the last sub-call's bound.
        if !capped {
            achieved = bound;
        }
        // Reached labels below the achieved bound are final: any label
        // still improvable would have to route through a pivot subtree,
        // and those settled in the loop. Settling relaxes the outgoing
        // edges too, so what these labels prove keeps propagating even
        // when this is the outermost call.
        for &v in &selection.reached {
            if !state.settled[v] && state.dist[v] < achieved {
                state.settled[v] = true;
                finalized.push(v);
                for (to, weight) in graph.successors(v) {
                    if !state.settled[to] {
                        state.relax(v, to, weight);
                    }
                }
            }
        }

        let hard_cap = capacity.saturating_mul(4);
        if finalized.len() > hard_cap {
            return Err(Error::CapacityExceeded {
                level,
                found: finalized.len(),
                cap: hard_cap,
            });
        }

        Ok(LevelResult {
            bound: achieved,
            finalized,
        })
    }

    /// Level 0: bounded multi-source expansion with a plain binary heap,
    /// capped at `k` settled vertices
    fn base_case<W, G>(
        &self,
        graph: &G,
        bound: W,
        sources: &[usize],
        state: &mut SearchState<W>,
    ) -> Result<LevelResult<W>>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
    {
        let cap = self.params.k;
        let mut heap: MinHeap<usize, W> = MinHeap::with_capacity(sources.len() + cap);
        for &s in sources {
            if !state.settled[s] && state.dist[s] < bound {
                heap.push(s, state.dist[s]);
            }
        }

        let mut expanded: Vec<usize> = Vec::with_capacity(cap);
        let mut achieved = bound;

        while let Some((u, d)) = heap.pop() {
            if state.settled[u] || d > state.dist[u] {
                continue; // stale entry
            }
            if expanded.len() == cap {
                // The first vertex past the cap bounds what this call
                // actually finished.
                achieved = d;
                break;
            }
            expanded.push(u);
            for (v, weight) in graph.successors(u) {
                if state.relax(u, v, weight) && state.dist[v] < bound {
                    heap.push(v, state.dist[v]);
                }
            }
        }

        // Everything expanded was popped at its true distance, so vertices
        // tying with the cut-off settle as well. Excluding them would let a
        // zero-weight cluster starve the level above: the whole batch could
        // tie and nothing would ever finalize.
        for &u in &expanded {
            state.settled[u] = true;
        }
        Ok(LevelResult {
            bound: achieved,
            finalized: expanded,
        })
    }
}
