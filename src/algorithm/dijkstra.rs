use log::debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{BinaryMinHeap, FibonacciHandle, FibonacciHeap, PriorityItem};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Priority queue used by the label-setting loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeapBackend {
    /// Array heap with an identity index
    Binary,
    /// Fibonacci heap addressed through node handles
    #[default]
    Fibonacci,
}

/// Classic Dijkstra's algorithm over a decrease-key priority queue
///
/// Every vertex is queued up front, the source at distance zero and the rest at
/// the sentinel `W::max_value()`. Edge weights must be non-negative; this is not
/// checked.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra {
    backend: HeapBackend,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance using the Fibonacci heap
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Set the priority queue backend
    pub fn with_backend(mut self, backend: HeapBackend) -> Self {
        self.backend = backend;
        self
    }

    pub fn backend(&self) -> HeapBackend {
        self.backend
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        match self.backend {
            HeapBackend::Binary => "Dijkstra (binary heap)",
            HeapBackend::Fibonacci => "Dijkstra (Fibonacci heap)",
        }
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        run_shortest_path(graph, source, self.backend)
    }
}

/// Runs Dijkstra from `source` with the chosen backend.
///
/// Heap errors can only come from a bug in the relaxation loop, never from the
/// graph, and are returned as-is.
pub fn run_shortest_path<W, G>(
    graph: &G,
    source: usize,
    backend: HeapBackend,
) -> Result<ShortestPathResult<W>>
where
    W: Weight,
    G: Graph<W>,
{
    if !graph.has_vertex(source) {
        return Err(Error::SourceNotFound);
    }

    let n = graph.vertex_count();
    debug!("Dijkstra from {} over {} vertices ({:?} heap)", source, n, backend);

    let result = match backend {
        HeapBackend::Binary => settle_all(graph, source, BinaryMinHeap::with_capacity(n))?,
        HeapBackend::Fibonacci => settle_all(graph, source, IndexedFibonacciHeap::with_capacity(n))?,
    };

    debug!(
        "Dijkstra from {} done: {} of {} vertices reachable",
        source,
        result.reachable_count(),
        n
    );
    Ok(result)
}

/// The queue operations the relaxation loop needs, addressed by vertex ID
trait LabelQueue<W> {
    fn push(&mut self, label: PriorityItem<W>) -> Result<()>;

    fn pop_min(&mut self) -> Result<PriorityItem<W>>;

    fn decrease(&mut self, vertex: usize, distance: W) -> Result<()>;

    fn is_empty(&self) -> bool;
}

impl<W: Weight> LabelQueue<W> for BinaryMinHeap<PriorityItem<W>> {
    fn push(&mut self, label: PriorityItem<W>) -> Result<()> {
        self.insert(label)
    }

    fn pop_min(&mut self) -> Result<PriorityItem<W>> {
        self.extract_min()
    }

    fn decrease(&mut self, vertex: usize, distance: W) -> Result<()> {
        self.decrease_key(vertex, distance)
    }

    fn is_empty(&self) -> bool {
        BinaryMinHeap::is_empty(self)
    }
}

/// Fibonacci heap plus the vertex -> node handle map it does not keep itself
struct IndexedFibonacciHeap<W: Weight> {
    heap: FibonacciHeap<PriorityItem<W>>,
    handles: Vec<Option<FibonacciHandle>>,
}

impl<W: Weight> IndexedFibonacciHeap<W> {
    fn with_capacity(capacity: usize) -> Self {
        IndexedFibonacciHeap {
            heap: FibonacciHeap::with_capacity(capacity),
            handles: vec![None; capacity],
        }
    }
}

impl<W: Weight> LabelQueue<W> for IndexedFibonacciHeap<W> {
    fn push(&mut self, label: PriorityItem<W>) -> Result<()> {
        let slot = self
            .handles
            .get_mut(label.id)
            .ok_or(Error::InvalidVertex(label.id))?;
        *slot = Some(self.heap.insert(label));
        Ok(())
    }

    fn pop_min(&mut self) -> Result<PriorityItem<W>> {
        let label = self.heap.extract_min()?;
        if let Some(slot) = self.handles.get_mut(label.id) {
            *slot = None;
        }
        Ok(label)
    }

    fn decrease(&mut self, vertex: usize, distance: W) -> Result<()> {
        let handle = self
            .handles
            .get(vertex)
            .copied()
            .flatten()
            .ok_or(Error::OutOfRange(vertex))?;
        self.heap.decrease_key(handle, distance)
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// Label-setting loop shared by both backends
fn settle_all<W, G, Q>(graph: &G, source: usize, mut queue: Q) -> Result<ShortestPathResult<W>>
where
    W: Weight,
    G: Graph<W>,
    Q: LabelQueue<W>,
{
    let mut labels: Vec<PriorityItem<W>> =
        (0..graph.vertex_count()).map(PriorityItem::unreached).collect();
    labels[source].distance = W::zero();

    for label in &labels {
        queue.push(*label)?;
    }

    while !queue.is_empty() {
        let u = queue.pop_min()?.id;
        labels[u].settled = true;

        // Everything left in the queue is unreachable as well.
        if labels[u].is_unreached() {
            continue;
        }
        let dist_u = labels[u].distance;

        for (v, weight) in graph.outgoing_edges(u) {
            if labels[v].settled {
                continue;
            }

            let candidate = dist_u + weight;
            if candidate < labels[v].distance {
                labels[v].distance = candidate;
                labels[v].parent = Some(u);
                queue.decrease(v, candidate)?;
            }
        }
    }

    Ok(ShortestPathResult { labels, source })
}
