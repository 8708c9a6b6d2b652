use std::collections::HashSet;

use log::warn;

use crate::data_structures::PriorityItem;
use crate::graph::{Graph, Weight};
use crate::Result;

/// Result of a shortest path algorithm execution
///
/// One label per vertex, indexed by vertex ID. Unreachable vertices keep the
/// sentinel distance `W::max_value()` and no parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult<W> {
    /// Final label of each vertex
    pub labels: Vec<PriorityItem<W>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W: Weight> ShortestPathResult<W> {
    /// Distance from the source, `None` if the vertex is unreachable or unknown
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.labels
            .get(vertex)
            .filter(|label| !label.is_unreached())
            .map(|label| label.distance)
    }

    /// Predecessor on the shortest path tree
    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.labels.get(vertex).and_then(|label| label.parent)
    }

    /// Returns true if the vertex was extracted from the queue
    pub fn is_settled(&self, vertex: usize) -> bool {
        self.labels.get(vertex).map_or(false, |label| label.settled)
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices reachable from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.labels.iter().filter(|label| !label.is_unreached()).count()
    }

    /// Distances of all vertices, `None` for unreachable ones
    pub fn distances(&self) -> Vec<Option<W>> {
        (0..self.labels.len()).map(|v| self.distance(v)).collect()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices.
    ///
    /// Returns `None` when chasing parents from `target` does not end at the source.
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        if target >= result.labels.len() {
            return None;
        }

        let mut path = vec![target];
        let mut visited = HashSet::new();
        let mut current = target;

        while current != result.source {
            if !visited.insert(current) {
                warn!("Cycle detected in path reconstruction at vertex {}", current);
                return None;
            }
            current = result.parent(current)?;
            path.push(current);
        }

        path.reverse();
        Some(path)
    }
}
