use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::Result;

/// Trait representing a weighted directed graph
///
/// The shortest-path engine only reads [`vertex_count`](Graph::vertex_count)
/// and [`successors`](Graph::successors); the rest of the interface exists
/// for construction, tests and tooling. Implementations must be read-only
/// for the duration of a shortest-path computation.
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges of a vertex as
    /// `(target, weight)` pairs
    fn successors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: usize, to: usize) -> Option<W>;
}

/// Trait for mutable graph construction
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Adds a directed edge between vertices with the given weight
    ///
    /// Fails with [`Error::InvalidEdge`](crate::Error::InvalidEdge) if either
    /// endpoint is missing and with
    /// [`Error::NegativeWeight`](crate::Error::NegativeWeight) if the weight
    /// is negative. Negative weights are rejected here, at load time, because
    /// the shortest-path engine assumes non-negativity as a precondition and
    /// does not defend against violations.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()>;

    /// Removes an edge from the graph, returning whether it existed
    fn remove_edge(&mut self, from: usize, to: usize) -> bool;
}
