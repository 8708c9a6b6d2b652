use crate::graph::{DirectedGraph, Graph, MutableGraph};
use crate::{Error, Result};
use rand::Rng;

/// Generates a simple directed graph on `n` vertices where every vertex gets an
/// out-degree drawn uniformly from `k_min..=k_max` and every edge a weight drawn
/// from `1..=max_weight`.
///
/// Targets are drawn at random, skipping self-loops and duplicates, with at most
/// `3 * n` draws per vertex. Fails if some vertex can't reach `k_min` edges.
pub fn generate_degree_bounded<R: Rng + ?Sized>(
    n: usize,
    k_min: usize,
    k_max: usize,
    max_weight: u64,
    rng: &mut R,
) -> Result<DirectedGraph<u64>> {
    if k_max < k_min {
        return Err(Error::GraphGeneration(format!(
            "k_max ({}) must be at least k_min ({})",
            k_max, k_min
        )));
    }
    if max_weight == 0 {
        return Err(Error::GraphGeneration("max_weight must be positive".to_string()));
    }
    if n > 0 && k_min >= n {
        return Err(Error::GraphGeneration(format!(
            "k_min ({}) must be smaller than the vertex count ({})",
            k_min, n
        )));
    }

    let mut graph = DirectedGraph::with_capacity(n);

    for vertex in 0..n {
        let wanted = rng.gen_range(k_min..=k_max);
        let mut out_degree = 0;

        for _ in 0..3 * n {
            if out_degree >= wanted {
                break;
            }
            let target = rng.gen_range(0..n);
            if target != vertex && !graph.has_edge(vertex, target) {
                graph.add_edge(vertex, target, rng.gen_range(1..=max_weight));
                out_degree += 1;
            }
        }

        if out_degree < k_min {
            return Err(Error::GraphGeneration(format!(
                "vertex {} got {} outgoing edges, at least {} required",
                vertex, out_degree, k_min
            )));
        }
    }

    Ok(graph)
}

/// Generates a `width` x `height` grid with 4-connectivity and unit weights
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<u64> {
    let mut graph = DirectedGraph::with_capacity(width * height);

    let index = |x: usize, y: usize| -> usize { y * width + x };

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            if x + 1 < width {
                graph.add_undirected_edge(current, index(x + 1, y), 1);
            }
            if y + 1 < height {
                graph.add_undirected_edge(current, index(x, y + 1), 1);
            }
        }
    }

    graph
}
