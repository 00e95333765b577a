//! BMSSP - Bounded Multi-Source Shortest Path
//!
//! Single-source shortest paths on directed graphs with real non-negative
//! edge weights, computed by the recursive bounded-frontier algorithm from
//! "Breaking the Sorting Barrier for Directed Single-Source Shortest Paths"
//! by Duan et al. (2025). Instead of keeping the whole frontier in a
//! comparison heap, the algorithm decomposes the distance axis into bounded
//! windows, shrinks each window's frontier to a handful of pivots and orders
//! work through a block-based batch queue, finalizing vertices in groups.
//!
//! The driver entry point is [`shortest_paths`] (or the [`Bmssp`] solver via
//! the [`ShortestPathAlgorithm`] trait); classic Dijkstra and Bellman-Ford
//! solvers are included behind the same trait for cross-checking and
//! benchmarks.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    bellman_ford::BellmanFord, bmssp::BmsspParams, dijkstra::Dijkstra, driver::shortest_paths,
    driver::Bmssp, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Source vertex {0} is outside the graph")]
    InvalidSource(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight { from: usize, to: usize, weight: f64 },

    #[error("Finalized {found} vertices at level {level} where the cap allows {cap}")]
    CapacityExceeded {
        level: usize,
        found: usize,
        cap: usize,
    },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
