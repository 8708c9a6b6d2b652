//! Fib SSSP - priority queues for label-setting shortest paths
//!
//! This library provides two interchangeable decrease-key priority queues and a
//! Dijkstra driver that runs over either of them:
//!
//! - [`FibonacciHeap`]: forest of heap-ordered trees with O(1) amortized insert,
//!   merge and decrease-key, O(log n) amortized extract-min.
//! - [`BinaryMinHeap`]: array heap with an identity index, O(log n) for every
//!   mutating operation.
//!
//! Edge weights must be non-negative. This is a precondition of the algorithm
//! and is not checked at runtime.
//!
//! ```rust
//! use fib_sssp::{run_shortest_path, DirectedGraph, HeapBackend};
//! use fib_sssp::graph::MutableGraph;
//!
//! let mut graph: DirectedGraph<u64> = DirectedGraph::with_capacity(3);
//! graph.add_edge(0, 1, 4);
//! graph.add_edge(1, 2, 1);
//!
//! let result = run_shortest_path(&graph, 0, HeapBackend::Fibonacci).unwrap();
//! assert_eq!(result.distance(2), Some(5));
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;

/// Re-export main types for convenient use
pub use algorithm::{
    dijkstra::{run_shortest_path, Dijkstra, HeapBackend},
    prim::{prim_minimum_spanning_tree, MinimumSpanningTree},
    ShortestPathAlgorithm, ShortestPathResult,
};
pub use data_structures::{BinaryMinHeap, FibonacciHandle, FibonacciHeap, HeapItem, PriorityItem};
pub use graph::directed::DirectedGraph;
pub use graph::Weight;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Heap is empty")]
    EmptyHeap,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Identity {0} is not present in the heap")]
    OutOfRange(usize),

    #[error("Stale heap handle: slot {index}, generation {generation}")]
    StaleHandle { index: usize, generation: u32 },

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Graph generation failed: {0}")]
    GraphGeneration(String),

    #[error("Heap invariant violated: {0}")]
    InvariantViolation(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
