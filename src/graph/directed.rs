use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::{Error, Result};

/// A directed graph implementation using adjacency lists
///
/// Vertices are the dense range `0..vertex_count`. Parallel edges are not kept:
/// adding an edge twice overwrites the weight of the first one.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            outgoing_edges: Vec::new(),
        }
    }

    /// Creates a new directed graph with the specified number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            outgoing_edges: vec![Vec::new(); vertices],
        }
    }

    /// Creates a graph with `vertices` vertices from a list of `(from, to, weight)` edges
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::with_capacity(vertices);
        for (from, to, weight) in edges {
            if !graph.has_vertex(from) {
                return Err(Error::InvalidVertex(from));
            }
            if !graph.has_vertex(to) {
                return Err(Error::InvalidVertex(to));
            }
            graph.add_edge(from, to, weight);
        }
        Ok(graph)
    }

    /// Adds the edge in both directions with the same weight
    pub fn add_undirected_edge(&mut self, u: usize, v: usize, weight: W) -> bool {
        self.add_edge(u, v, weight) && self.add_edge(v, u, weight)
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.outgoing_edges
            .iter()
            .flatten()
            .all(|(_, weight)| *weight >= W::zero())
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.iter().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.outgoing_edges.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.outgoing_edges.len()
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges
            .get(from)?
            .iter()
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| *weight)
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn add_vertex(&mut self) -> usize {
        self.outgoing_edges.push(Vec::new());
        self.outgoing_edges.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) || weight < W::zero() {
            return false;
        }

        let outgoing = &mut self.outgoing_edges[from];
        match outgoing.iter_mut().find(|(target, _)| *target == to) {
            Some(edge) => edge.1 = weight,
            None => outgoing.push((to, weight)),
        }
        true
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        match self.outgoing_edges.get_mut(from) {
            Some(outgoing) => {
                let len_before = outgoing.len();
                outgoing.retain(|(target, _)| *target != to);
                len_before > outgoing.len()
            }
            None => false,
        }
    }

    fn update_edge_weight(&mut self, from: usize, to: usize, weight: W) -> bool {
        if weight < W::zero() {
            return false;
        }

        match self
            .outgoing_edges
            .get_mut(from)
            .and_then(|edges| edges.iter_mut().find(|(target, _)| *target == to))
        {
            Some(edge) => {
                edge.1 = weight;
                true
            }
            None => false,
        }
    }
}
