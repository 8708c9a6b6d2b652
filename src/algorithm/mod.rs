pub mod traits;
pub mod dijkstra;
pub mod prim;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
