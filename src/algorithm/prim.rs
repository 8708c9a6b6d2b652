//! Prim's minimum spanning tree on top of [`FibonacciHeap`]
//!
//! Same extract-min / decrease-key pattern as Dijkstra, but a vertex is keyed by
//! the weight of the cheapest edge joining it to the tree built so far instead of
//! by its path length. Edges are taken as stored; build undirected inputs with
//! [`DirectedGraph::add_undirected_edge`](crate::DirectedGraph::add_undirected_edge).

use log::debug;

use crate::data_structures::{FibonacciHandle, FibonacciHeap, PriorityItem};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Spanning tree of the component containing the root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimumSpanningTree<W> {
    /// Root the tree was grown from
    pub root: usize,

    /// Sum of the connecting weights of all tree vertices
    pub total_weight: W,

    /// Per vertex: parent in the tree and weight of the edge to it
    links: Vec<Option<(usize, W)>>,

    /// Per vertex: whether it was added to the tree
    in_tree: Vec<bool>,
}

impl<W: Weight> MinimumSpanningTree<W> {
    /// Returns true if the vertex is connected to the root
    pub fn contains(&self, vertex: usize) -> bool {
        self.in_tree.get(vertex).copied().unwrap_or(false)
    }

    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.links.get(vertex).copied().flatten().map(|(parent, _)| parent)
    }

    /// Weight of the tree edge between `vertex` and its parent
    pub fn connecting_weight(&self, vertex: usize) -> Option<W> {
        self.links.get(vertex).copied().flatten().map(|(_, weight)| weight)
    }

    /// Tree edges as `(parent, child, weight)`, ordered by child
    pub fn edges(&self) -> Vec<(usize, usize, W)> {
        self.links
            .iter()
            .enumerate()
            .filter_map(|(child, link)| link.map(|(parent, weight)| (parent, child, weight)))
            .collect()
    }

    /// Number of vertices in the tree, the root included
    pub fn vertex_count(&self) -> usize {
        self.in_tree.iter().filter(|&&inside| inside).count()
    }
}

/// Grows a minimum spanning tree from `root`.
///
/// Vertices not connected to `root` are left out of the tree.
pub fn prim_minimum_spanning_tree<W, G>(graph: &G, root: usize) -> Result<MinimumSpanningTree<W>>
where
    W: Weight,
    G: Graph<W>,
{
    if !graph.has_vertex(root) {
        return Err(Error::InvalidVertex(root));
    }

    let n = graph.vertex_count();
    let mut keys: Vec<PriorityItem<W>> = (0..n).map(PriorityItem::unreached).collect();
    keys[root].distance = W::zero();

    let mut heap = FibonacciHeap::with_capacity(n);
    let mut handles: Vec<Option<FibonacciHandle>> =
        keys.iter().map(|key| Some(heap.insert(*key))).collect();

    let mut total_weight = W::zero();
    while !heap.is_empty() {
        let u = heap.extract_min()?.id;
        handles[u] = None;
        keys[u].settled = true;

        if keys[u].is_unreached() {
            continue;
        }
        total_weight = total_weight + keys[u].distance;

        for (v, weight) in graph.outgoing_edges(u) {
            if keys[v].settled || weight >= keys[v].distance {
                continue;
            }
            keys[v].distance = weight;
            keys[v].parent = Some(u);
            let handle = handles[v].ok_or(Error::OutOfRange(v))?;
            heap.decrease_key(handle, weight)?;
        }
    }

    let links = keys
        .iter()
        .map(|key| {
            key.parent
                .filter(|_| !key.is_unreached())
                .map(|parent| (parent, key.distance))
        })
        .collect();
    let in_tree: Vec<bool> = keys.iter().map(|key| !key.is_unreached()).collect();

    debug!(
        "Prim from {}: {} of {} vertices spanned",
        root,
        in_tree.iter().filter(|&&inside| inside).count(),
        n
    );

    Ok(MinimumSpanningTree {
        root,
        total_weight,
        links,
        in_tree,
    })
}
