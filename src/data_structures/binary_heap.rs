use std::collections::HashMap;
use std::fmt;

use crate::data_structures::HeapItem;
use crate::{Error, Result};

/// Array-backed binary min-heap with an identity index for decrease-key
#[derive(Debug, Clone)]
pub struct BinaryMinHeap<T: HeapItem> {
    /// Heap ordered storage, the minimum at position 0
    storage: Vec<T>,

    /// Identity -> position in `storage`
    positions: HashMap<usize, usize>,
}

/// Get the left child index of `index`
fn get_left(index: usize) -> usize {
    2 * index + 1
}

/// Get the right child index of `index`
fn get_right(index: usize) -> usize {
    2 * index + 2
}

/// Get the parent index of `index`
fn get_parent(index: usize) -> usize {
    (index - 1) / 2
}

impl<T: HeapItem> Default for BinaryMinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HeapItem> BinaryMinHeap<T> {
    /// Create a new empty `BinaryMinHeap`
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a new `BinaryMinHeap` with given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryMinHeap {
            storage: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Builds a heap from arbitrary items in O(n) by sifting down every inner node.
    /// Fails if two items share an identity.
    pub fn from_vec(items: Vec<T>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if positions.insert(item.id(), index).is_some() {
                return Err(Error::InvalidArgument(format!(
                    "identity {} appears more than once",
                    item.id()
                )));
            }
        }

        let mut heap = BinaryMinHeap {
            storage: items,
            positions,
        };
        for index in (0..heap.storage.len() / 2).rev() {
            heap.sift_down(index);
        }
        Ok(heap)
    }

    /// Returns the number of items in the heap
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns `true` if an item with identity `id` is queued
    pub fn contains(&self, id: usize) -> bool {
        self.positions.contains_key(&id)
    }

    /// Returns the queued item with identity `id`
    pub fn get(&self, id: usize) -> Option<&T> {
        self.positions.get(&id).map(|&index| &self.storage[index])
    }

    /// Push an item on the heap. Its identity must not be queued already.
    pub fn insert(&mut self, item: T) -> Result<()> {
        let id = item.id();
        if self.positions.contains_key(&id) {
            return Err(Error::InvalidArgument(format!(
                "identity {} is already queued",
                id
            )));
        }

        self.storage.push(item);
        let index = self.storage.len() - 1;
        self.positions.insert(id, index);
        self.sift_up(index);
        Ok(())
    }

    /// Returns the item with the smallest key
    pub fn minimum(&self) -> Result<&T> {
        self.storage.first().ok_or(Error::EmptyHeap)
    }

    /// Pop the item with the smallest key from the heap
    pub fn extract_min(&mut self) -> Result<T> {
        if self.storage.is_empty() {
            return Err(Error::EmptyHeap);
        }

        let min = self.storage.swap_remove(0);
        self.positions.remove(&min.id());
        if let Some(moved) = self.storage.first() {
            self.positions.insert(moved.id(), 0);
            self.sift_down(0);
        }
        Ok(min)
    }

    /// Lowers the key of the item with identity `id`.
    ///
    /// Fails with [`Error::OutOfRange`] if `id` is not queued and with
    /// [`Error::InvalidArgument`] if `key` is greater than the current key.
    pub fn decrease_key(&mut self, id: usize, key: T::Key) -> Result<()> {
        let index = *self.positions.get(&id).ok_or(Error::OutOfRange(id))?;
        let current = self.storage[index].key();
        if key > current {
            return Err(Error::InvalidArgument(format!(
                "new key {:?} is greater than current key {:?}",
                key, current
            )));
        }

        self.storage[index].set_key(key);
        self.sift_up(index);
        Ok(())
    }

    /// Checks heap order and the identity index
    pub fn check_invariants(&self) -> Result<()> {
        if self.positions.len() != self.storage.len() {
            return Err(Error::InvariantViolation(format!(
                "{} indexed identities for {} items",
                self.positions.len(),
                self.storage.len()
            )));
        }
        for (index, item) in self.storage.iter().enumerate() {
            if self.positions.get(&item.id()) != Some(&index) {
                return Err(Error::InvariantViolation(format!(
                    "identity {} is not indexed at position {}",
                    item.id(),
                    index
                )));
            }
            if index > 0 && item.key() < self.storage[get_parent(index)].key() {
                return Err(Error::InvariantViolation(format!(
                    "position {} is smaller than its parent",
                    index
                )));
            }
        }
        Ok(())
    }

    /// Swap two positions, keeping the identity index in step
    fn swap(&mut self, a: usize, b: usize) {
        self.storage.swap(a, b);
        self.positions.insert(self.storage[a].id(), a);
        self.positions.insert(self.storage[b].id(), b);
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = get_parent(index);
            if self.storage[index].key() >= self.storage[parent].key() {
                break;
            }
            self.swap(parent, index);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.storage.len();
        loop {
            let left = get_left(index);
            let right = get_right(index);

            let mut smallest = index;
            if left < len && self.storage[left].key() < self.storage[smallest].key() {
                smallest = left;
            }
            if right < len && self.storage[right].key() < self.storage[smallest].key() {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.swap(index, smallest);
            index = smallest;
        }
    }
}

/// Same layout as the Fibonacci heap printer: preorder, `>` per level.
impl<T: HeapItem> fmt::Display for BinaryMinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.storage.is_empty() {
            return writeln!(f, "<BLANK>");
        }

        let len = self.storage.len();
        let mut stack = vec![(0usize, 0usize)];
        while let Some((index, depth)) = stack.pop() {
            let item = &self.storage[index];
            if depth > 0 {
                write!(f, "{} ", ">".repeat(depth))?;
            }
            writeln!(f, "{:?} [{}]", item.key(), item.id())?;

            for child in [get_right(index), get_left(index)] {
                if child < len {
                    stack.push((child, depth + 1));
                }
            }
        }
        Ok(())
    }
}
