use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};

/// A directed graph stored as per-vertex adjacency lists
///
/// Vertices are dense indices in `[0, vertex_count)`; each vertex owns the
/// list of its outgoing `(target, weight)` pairs. Adding an edge that
/// already exists overwrites its weight.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Outgoing edges for each vertex: `out[v] = [(target, weight), ...]`
    out: Vec<Vec<(usize, W)>>,

    /// Total number of edges
    edge_count: usize,
}

impl<W> DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            out: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates a directed graph with `vertices` vertices and no edges
    pub fn with_vertices(vertices: usize) -> Self {
        DirectedGraph {
            out: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.out.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn successors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.out.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.out.len()
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.out
            .get(from)
            .map_or(false, |edges| edges.iter().any(|&(target, _)| target == to))
    }

    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.out.get(from).and_then(|edges| {
            edges
                .iter()
                .find(|&&(target, _)| target == to)
                .map(|&(_, weight)| weight)
        })
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self) -> usize {
        self.out.push(Vec::new());
        self.out.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return Err(Error::InvalidEdge(from, to));
        }
        if weight < W::zero() {
            return Err(Error::NegativeWeight {
                from,
                to,
                weight: weight.to_f64().unwrap_or(f64::NAN),
            });
        }

        let edges = &mut self.out[from];
        if let Some(edge) = edges.iter_mut().find(|(target, _)| *target == to) {
            edge.1 = weight;
        } else {
            edges.push((to, weight));
            self.edge_count += 1;
        }
        Ok(())
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        if let Some(edges) = self.out.get_mut(from) {
            let before = edges.len();
            edges.retain(|&(target, _)| target != to);
            if edges.len() < before {
                self.edge_count -= 1;
                return true;
            }
        }
        false
    }
}
