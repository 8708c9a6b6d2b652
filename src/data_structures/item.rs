use std::fmt::Debug;

use crate::graph::Weight;

/// An entry that can live in one of the decrease-key heaps.
///
/// Heap order and identity are two separate questions: heaps compare entries
/// through [`HeapItem::key`] only, and address them through [`HeapItem::id`] only.
pub trait HeapItem {
    /// Ordering payload, smaller is closer to the top
    type Key: Ord + Copy + Debug;

    /// Returns the ordering payload
    fn key(&self) -> Self::Key;

    /// Overwrites the ordering payload
    fn set_key(&mut self, key: Self::Key);

    /// Returns the identity used for lookups
    fn id(&self) -> usize;
}

/// Per-vertex label of a label-setting search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityItem<W> {
    /// Vertex identity
    pub id: usize,

    /// Tentative (or final, once settled) distance from the source
    pub distance: W,

    /// Predecessor on the best known path
    pub parent: Option<usize>,

    /// Whether the vertex has been extracted and its distance fixed
    pub settled: bool,
}

impl<W> PriorityItem<W> {
    /// Creates an unsettled label without a parent
    pub fn new(id: usize, distance: W) -> Self {
        PriorityItem {
            id,
            distance,
            parent: None,
            settled: false,
        }
    }
}

impl<W: Weight> PriorityItem<W> {
    /// Creates a label at the "infinite distance" sentinel
    pub fn unreached(id: usize) -> Self {
        Self::new(id, W::max_value())
    }

    /// Returns true if the distance is still the sentinel
    pub fn is_unreached(&self) -> bool {
        self.distance == W::max_value()
    }
}

impl<W: Weight> HeapItem for PriorityItem<W> {
    type Key = W;

    fn key(&self) -> W {
        self.distance
    }

    fn set_key(&mut self, key: W) {
        self.distance = key;
    }

    fn id(&self) -> usize {
        self.id
    }
}
