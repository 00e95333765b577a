pub mod traits;

pub mod bellman_ford;
pub mod bmssp;
pub mod dijkstra;
pub mod driver;
pub mod pivots;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
