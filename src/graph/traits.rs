use std::fmt::Debug;
use num_traits::{Bounded, Zero};

/// Edge weight / path length type.
///
/// `Bounded::max_value()` doubles as the "infinite distance" sentinel, so finite
/// path lengths must stay below it. Weights are expected to be non-negative.
pub trait Weight: Copy + Ord + Debug + Zero + Bounded {}

impl<T> Weight for T where T: Copy + Ord + Debug + Zero + Bounded {}

/// Trait representing a weighted directed graph
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Adds a directed edge between vertices with the given weight.
    /// Adding an edge that already exists overwrites its weight.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: usize, to: usize) -> bool;

    /// Updates the weight of an existing edge
    fn update_edge_weight(&mut self, from: usize, to: usize, weight: W) -> bool;
}
