use log::trace;
use num_traits::{Float, Zero};
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

use crate::algorithm::bmssp::SearchState;
use crate::graph::Graph;

/// Outcome of the pivot pass
#[derive(Debug)]
pub struct PivotSelection {
    /// Frontier vertices worth recursing on individually
    pub pivots: Vec<usize>,

    /// Every vertex the bounded relaxation touched, sources included
    pub reached: Vec<usize>,
}

/// Shrinks a frontier to its pivots with `k` rounds of bounded relaxation
///
/// Runs synchronous Bellman-Ford-style rounds from all of `sources`,
/// exploring only below `bound`, and labels every vertex it reaches with
/// the source whose tree captured it. Three ways out:
///
/// - the relaxation hits a fixpoint before `k` rounds: every reached
///   distance is already final inside the window and no pivots are needed;
/// - the reached set outgrows `k * |sources|`: the pass stops early and
///   every source is kept as a pivot;
/// - otherwise the pivots are the sources rooting trees of at least `k`
///   vertices, or the whole frontier when no tree is that large.
pub fn find_pivots<W, G>(
    graph: &G,
    bound: W,
    sources: &[usize],
    state: &mut SearchState<W>,
    k: usize,
) -> PivotSelection
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    let mut reached: Vec<usize> = sources.to_vec();
    // Forest labels, scoped to this call: reached vertex -> the source
    // rooting its current shortest-path tree. Re-parented whenever a better
    // path arrives through another tree.
    let mut origin: HashMap<usize, usize> = sources.iter().map(|&s| (s, s)).collect();

    let mut frontier: Vec<usize> = sources.to_vec();
    let mut next: Vec<usize> = Vec::new();
    let mut queued: HashSet<usize> = HashSet::new();

    let limit = k.saturating_mul(sources.len()).max(k);
    let mut overgrown = false;
    let mut converged = false;

    for _round in 0..k {
        for &u in &frontier {
            let root = origin.get(&u).copied().unwrap_or(u);
            for (v, weight) in graph.successors(u) {
                if state.settled[v] {
                    continue;
                }
                if state.relax(u, v, weight) && state.dist[v] < bound {
                    if origin.insert(v, root).is_none() {
                        reached.push(v);
                    }
                    if queued.insert(v) {
                        next.push(v);
                    }
                }
            }
        }

        if reached.len() > limit {
            overgrown = true;
            break;
        }
        std::mem::swap(&mut frontier, &mut next);
        next.clear();
        queued.clear();
        if frontier.is_empty() {
            converged = true;
            break;
        }
    }

    let pivots = if overgrown {
        sources.to_vec()
    } else if converged {
        Vec::new()
    } else {
        let mut captured: HashMap<usize, usize> = HashMap::new();
        for &v in &reached {
            if let Some(&root) = origin.get(&v) {
                *captured.entry(root).or_insert(0) += 1;
            }
        }
        let selected: Vec<usize> = sources
            .iter()
            .copied()
            .filter(|s| captured.get(s).map_or(false, |&size| size >= k))
            .collect();
        if selected.is_empty() {
            sources.to_vec()
        } else {
            selected
        }
    };

    trace!(
        "pivot pass: {} sources, {} reached, {} pivots (overgrown={}, converged={})",
        sources.len(),
        reached.len(),
        pivots.len(),
        overgrown,
        converged
    );

    PivotSelection { pivots, reached }
}
