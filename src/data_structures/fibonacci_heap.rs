//! Fibonacci heap over an index arena
//!
//! The heap is a forest of heap-ordered trees. Each sibling group (the roots, or
//! the children of one node) forms a circular doubly-linked ring, and the heap
//! keeps a pointer to the root holding the smallest key.
//!
//! - `insert` and `merge` splice into the root ring in O(1)
//! - `decrease_key` is O(1) amortized: a node that breaks heap order is cut to the
//!   root ring, and marked ancestors are cut along with it (cascading cut)
//! - `extract_min` is O(log n) amortized: the children of the minimum become
//!   roots and roots of equal degree are linked until all degrees differ
//!
//! Nodes live in a slot arena owned by the heap. Sibling, parent and child links
//! are plain slot indices. A [`FibonacciHandle`] carries the slot index together
//! with the slot's generation, and the generation is bumped whenever a slot is
//! freed, so a handle to an extracted node is rejected with
//! [`Error::StaleHandle`] instead of reaching whatever reuses the slot.

use std::fmt;

use log::trace;

use crate::data_structures::HeapItem;
use crate::{Error, Result};

/// (1 + sqrt(5)) / 2, the degree of a tree of size n is at most log_phi(n)
const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Observer reference to a node inserted into a [`FibonacciHeap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FibonacciHandle {
    index: usize,
    generation: u32,
}

/// Translates handles of a heap that was merged into another one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergedHandles {
    offset: usize,
}

impl MergedHandles {
    /// Maps a handle issued by the absorbed heap to the same node in the merged heap
    pub fn remap(&self, handle: FibonacciHandle) -> FibonacciHandle {
        FibonacciHandle {
            index: handle.index + self.offset,
            generation: handle.generation,
        }
    }
}

/// Structural operation counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FibonacciStats {
    /// Roots made children of other roots during consolidation
    pub links: u64,
    /// Nodes cut from their parent to the root ring
    pub cuts: u64,
    /// Nodes marked after losing their first child
    pub marks: u64,
    /// Roots visited by consolidation
    pub consolidated_roots: u64,
}

impl FibonacciStats {
    /// Total structural work performed so far
    pub fn total_work(&self) -> u64 {
        self.links + self.cuts + self.marks + self.consolidated_roots
    }
}

#[derive(Debug)]
struct Node<T> {
    item: T,
    degree: usize,
    marked: bool,
    parent: Option<usize>,
    child: Option<usize>,
    left: usize,
    right: usize,
}

impl<T> Node<T> {
    fn relocate(&mut self, offset: usize) {
        self.left += offset;
        self.right += offset;
        self.parent = self.parent.map(|p| p + offset);
        self.child = self.child.map(|c| c + offset);
    }
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    node: Option<Node<T>>,
}

/// Mergeable priority queue with O(1) amortized decrease-key
///
/// The heap does not index its items by identity. Callers that need to address
/// an item later keep the [`FibonacciHandle`] returned by [`FibonacciHeap::insert`].
#[derive(Debug)]
pub struct FibonacciHeap<T: HeapItem> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    min_node: Option<usize>,
    num_nodes: usize,
    stats: FibonacciStats,
}

impl<T: HeapItem> Default for FibonacciHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HeapItem> FibonacciHeap<T> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new empty heap with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        FibonacciHeap {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            min_node: None,
            num_nodes: 0,
            stats: FibonacciStats::default(),
        }
    }

    /// Returns the number of items in the heap
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns true if the heap holds no items
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Returns the structural operation counters
    pub fn stats(&self) -> FibonacciStats {
        self.stats
    }

    /// Inserts an item as a new singleton root
    pub fn insert(&mut self, item: T) -> FibonacciHandle {
        let handle = self.allocate(Node {
            item,
            degree: 0,
            marked: false,
            parent: None,
            child: None,
            left: 0,
            right: 0,
        });
        let x = handle.index;

        self.splice_into_root_ring(x);
        if let Some(min) = self.min_node {
            if self.key(x) < self.key(min) {
                self.min_node = Some(x);
            }
        }
        self.num_nodes += 1;

        handle
    }

    /// Returns the item with the smallest key
    pub fn minimum(&self) -> Result<&T> {
        self.min_node
            .map(|min| &self.node(min).item)
            .ok_or(Error::EmptyHeap)
    }

    /// Returns the item behind a handle
    pub fn get(&self, handle: FibonacciHandle) -> Result<&T> {
        let x = self.resolve(handle)?;
        Ok(&self.node(x).item)
    }

    /// Returns true if the handle still refers to an item of this heap
    pub fn contains(&self, handle: FibonacciHandle) -> bool {
        self.resolve(handle).is_ok()
    }

    /// Moves every item of `other` into this heap, leaving `other` empty.
    ///
    /// Joining the two root rings is O(1). The absorbed nodes are relocated into
    /// this heap's arena, so handles issued by `other` must be passed through the
    /// returned [`MergedHandles`] before they are used with this heap.
    pub fn merge(&mut self, other: &mut FibonacciHeap<T>) -> MergedHandles {
        let offset = self.slots.len();
        let other_min = other.min_node.take().map(|min| min + offset);
        let other_count = std::mem::take(&mut other.num_nodes);

        self.free.extend(other.free.drain(..).map(|index| index + offset));
        self.slots
            .extend(std::mem::take(&mut other.slots).into_iter().map(|mut slot| {
                if let Some(node) = slot.node.as_mut() {
                    node.relocate(offset);
                }
                slot
            }));

        if let Some(other_min) = other_min {
            match self.min_node {
                None => self.min_node = Some(other_min),
                Some(min) => {
                    let last = self.node(min).left;
                    let other_last = self.node(other_min).left;
                    self.node_mut(min).left = other_last;
                    self.node_mut(other_last).right = min;
                    self.node_mut(other_min).left = last;
                    self.node_mut(last).right = other_min;

                    if self.key(other_min) < self.key(min) {
                        self.min_node = Some(other_min);
                    }
                }
            }
        }
        self.num_nodes += other_count;

        MergedHandles { offset }
    }

    /// Removes and returns the item with the smallest key.
    /// The handle of the returned item becomes stale.
    pub fn extract_min(&mut self) -> Result<T> {
        let z = self.min_node.ok_or(Error::EmptyHeap)?;

        let child = self.node_mut(z).child.take();
        if let Some(child) = child {
            for x in self.ring(child) {
                let node = self.node_mut(x);
                node.parent = None;
                node.marked = false;
                self.splice_into_root_ring(x);
            }
            self.node_mut(z).degree = 0;
        }

        self.num_nodes -= 1;
        let (left, right) = {
            let node = self.node(z);
            (node.left, node.right)
        };
        if right == z {
            self.min_node = None;
        } else {
            self.node_mut(left).right = right;
            self.node_mut(right).left = left;
            self.min_node = Some(right);
            self.consolidate();
        }

        Ok(self.release(z))
    }

    /// Lowers the key of the item behind `handle`.
    ///
    /// Fails with [`Error::InvalidArgument`] if `key` is greater than the current
    /// key. An equal key is accepted and leaves the structure unchanged.
    pub fn decrease_key(&mut self, handle: FibonacciHandle, key: T::Key) -> Result<()> {
        let x = self.resolve(handle)?;
        let current = self.key(x);
        if key > current {
            return Err(Error::InvalidArgument(format!(
                "new key {:?} is greater than current key {:?}",
                key, current
            )));
        }

        self.node_mut(x).item.set_key(key);
        let parent = self.node(x).parent;
        if let Some(parent) = parent {
            if key < self.key(parent) {
                self.cut(x, parent);
                self.cascading_cut(parent);
            }
        }
        if let Some(min) = self.min_node {
            if key < self.key(min) {
                self.min_node = Some(x);
            }
        }

        Ok(())
    }

    /// Removes the item behind `handle` regardless of its key
    pub fn delete(&mut self, handle: FibonacciHandle) -> Result<T> {
        let x = self.resolve(handle)?;

        // Same effect as lowering the key below every other key.
        let parent = self.node(x).parent;
        if let Some(parent) = parent {
            self.cut(x, parent);
            self.cascading_cut(parent);
        }
        self.min_node = Some(x);

        self.extract_min()
    }

    /// Walks the whole forest and reports the first broken structural invariant
    pub fn check_invariants(&self) -> Result<()> {
        let violation = |message: String| Err(Error::InvariantViolation(message));

        let min = match self.min_node {
            Some(min) => min,
            None if self.num_nodes == 0 => return Ok(()),
            None => return violation(format!("no minimum but {} nodes counted", self.num_nodes)),
        };
        let min_key = match self.try_node(min) {
            Some(node) if node.parent.is_none() => node.item.key(),
            Some(_) => return violation(format!("minimum {} is not a root", min)),
            None => return violation(format!("minimum {} points at a vacant slot", min)),
        };

        let mut seen = 0;
        // (first node of a ring, parent of the ring, degree the parent claims)
        let mut pending: Vec<(usize, Option<usize>, Option<usize>)> = vec![(min, None, None)];

        while let Some((start, parent, expected_degree)) = pending.pop() {
            let mut x = start;
            let mut ring_len = 0;
            loop {
                let node = match self.try_node(x) {
                    Some(node) => node,
                    None => return violation(format!("slot {} is linked but vacant", x)),
                };
                if node.parent != parent {
                    return violation(format!("node {} has parent {:?}, expected {:?}", x, node.parent, parent));
                }
                match parent {
                    None if node.marked => return violation(format!("root {} is marked", x)),
                    None if node.item.key() < min_key => {
                        return violation(format!("root {} is smaller than the minimum", x))
                    }
                    Some(p) if node.item.key() < self.key(p) => {
                        return violation(format!("node {} is smaller than its parent {}", x, p))
                    }
                    _ => {}
                }
                if self.try_node(node.right).map(|right| right.left) != Some(x) {
                    return violation(format!("ring broken at node {}", x));
                }
                if let Some(child) = node.child {
                    pending.push((child, Some(x), Some(node.degree)));
                } else if node.degree != 0 {
                    return violation(format!("node {} has degree {} but no child", x, node.degree));
                }

                seen += 1;
                ring_len += 1;
                if seen > self.num_nodes {
                    return violation(format!("more than {} nodes reachable", self.num_nodes));
                }

                x = node.right;
                if x == start {
                    break;
                }
            }
            if let Some(degree) = expected_degree {
                if degree != ring_len {
                    return violation(format!("degree {} but {} children in ring", degree, ring_len));
                }
            }
        }

        if seen != self.num_nodes {
            return violation(format!("{} nodes reachable, {} counted", seen, self.num_nodes));
        }
        Ok(())
    }

    fn consolidate(&mut self) {
        let start = match self.min_node {
            Some(start) => start,
            None => return,
        };
        let roots = self.ring(start);
        self.stats.consolidated_roots += roots.len() as u64;

        let mut by_degree: Vec<Option<usize>> = vec![None; degree_bound(self.num_nodes) + 1];
        for root in roots.iter().copied() {
            let mut x = root;
            let mut degree = self.node(x).degree;
            loop {
                if degree >= by_degree.len() {
                    by_degree.resize(degree + 1, None);
                }
                let y = match by_degree[degree].take() {
                    Some(y) => y,
                    None => break,
                };
                let (parent, child) = if self.key(y) < self.key(x) { (y, x) } else { (x, y) };
                self.link(child, parent);
                x = parent;
                degree += 1;
            }
            by_degree[degree] = Some(x);
        }

        self.min_node = None;
        let mut remaining = 0;
        for root in by_degree.into_iter().flatten() {
            self.splice_into_root_ring(root);
            if let Some(min) = self.min_node {
                if self.key(root) < self.key(min) {
                    self.min_node = Some(root);
                }
            }
            remaining += 1;
        }

        trace!(
            "consolidated {} roots into {} ({} nodes)",
            roots.len(),
            remaining,
            self.num_nodes
        );
    }

    /// Makes `child` (a root) a child of `parent` (another root)
    fn link(&mut self, child: usize, parent: usize) {
        let first_child = self.node(parent).child;
        match first_child {
            Some(first) => self.insert_before(first, child),
            None => {
                let node = self.node_mut(child);
                node.left = child;
                node.right = child;
                self.node_mut(parent).child = Some(child);
            }
        }

        let node = self.node_mut(child);
        node.parent = Some(parent);
        node.marked = false;
        self.node_mut(parent).degree += 1;
        self.stats.links += 1;
    }

    /// Detaches `x` from `parent` and moves it to the root ring
    fn cut(&mut self, x: usize, parent: usize) {
        let (left, right) = {
            let node = self.node(x);
            (node.left, node.right)
        };
        if right == x {
            self.node_mut(parent).child = None;
        } else {
            self.node_mut(left).right = right;
            self.node_mut(right).left = left;
            if self.node(parent).child == Some(x) {
                self.node_mut(parent).child = Some(right);
            }
        }
        self.node_mut(parent).degree -= 1;

        let node = self.node_mut(x);
        node.parent = None;
        node.marked = false;
        self.splice_into_root_ring(x);
        self.stats.cuts += 1;
    }

    /// Marks `start` on its first child loss, cuts it on the second, and keeps
    /// climbing while the ancestors are already marked
    fn cascading_cut(&mut self, start: usize) {
        let mut y = start;
        loop {
            let parent = match self.node(y).parent {
                Some(parent) => parent,
                None => return,
            };
            if !self.node(y).marked {
                self.node_mut(y).marked = true;
                self.stats.marks += 1;
                return;
            }
            self.cut(y, parent);
            y = parent;
        }
    }

    fn splice_into_root_ring(&mut self, x: usize) {
        match self.min_node {
            Some(min) => self.insert_before(min, x),
            None => {
                let node = self.node_mut(x);
                node.left = x;
                node.right = x;
                self.min_node = Some(x);
            }
        }
    }

    /// Links `x` into the ring of `anchor`, just left of it
    fn insert_before(&mut self, anchor: usize, x: usize) {
        let last = self.node(anchor).left;
        let node = self.node_mut(x);
        node.right = anchor;
        node.left = last;
        self.node_mut(last).right = x;
        self.node_mut(anchor).left = x;
    }

    /// Collects the ring containing `start`, beginning at `start`
    fn ring(&self, start: usize) -> Vec<usize> {
        let mut members = vec![start];
        let mut x = self.node(start).right;
        while x != start {
            members.push(x);
            x = self.node(x).right;
        }
        members
    }

    fn key(&self, x: usize) -> T::Key {
        self.node(x).item.key()
    }

    fn resolve(&self, handle: FibonacciHandle) -> Result<usize> {
        match self.slots.get(handle.index) {
            Some(slot) if slot.generation == handle.generation && slot.node.is_some() => {
                Ok(handle.index)
            }
            _ => Err(Error::StaleHandle {
                index: handle.index,
                generation: handle.generation,
            }),
        }
    }

    fn allocate(&mut self, node: Node<T>) -> FibonacciHandle {
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.node = Some(node);
                FibonacciHandle {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                FibonacciHandle {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        }
    }

    fn release(&mut self, index: usize) -> T {
        let slot = &mut self.slots[index];
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(index);
        match slot.node.take() {
            Some(node) => node.item,
            None => unreachable!("released vacant slot {}", index),
        }
    }

    fn try_node(&self, index: usize) -> Option<&Node<T>> {
        self.slots.get(index).and_then(|slot| slot.node.as_ref())
    }

    fn node(&self, index: usize) -> &Node<T> {
        match self.slots[index].node.as_ref() {
            Some(node) => node,
            None => unreachable!("slot {} is linked but vacant", index),
        }
    }

    fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        match self.slots[index].node.as_mut() {
            Some(node) => node,
            None => unreachable!("slot {} is linked but vacant", index),
        }
    }
}

fn degree_bound(num_nodes: usize) -> usize {
    if num_nodes < 2 {
        return 0;
    }
    ((num_nodes as f64).ln() / GOLDEN_RATIO.ln()).floor() as usize
}

/// One node per line in preorder, `>` repeated once per tree level:
/// `key [id] (degree)`, followed by `marked` for marked nodes.
impl<T: HeapItem> fmt::Display for FibonacciHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let min = match self.min_node {
            Some(min) => min,
            None => return writeln!(f, "<BLANK>"),
        };

        let mut stack: Vec<(usize, usize)> =
            self.ring(min).into_iter().rev().map(|root| (root, 0)).collect();
        while let Some((x, depth)) = stack.pop() {
            let node = self.node(x);
            if depth > 0 {
                write!(f, "{} ", ">".repeat(depth))?;
            }
            write!(f, "{:?} [{}] ({})", node.item.key(), node.item.id(), node.degree)?;
            if node.marked {
                write!(f, " marked")?;
            }
            writeln!(f)?;

            if let Some(child) = node.child {
                stack.extend(self.ring(child).into_iter().rev().map(|c| (c, depth + 1)));
            }
        }
        Ok(())
    }
}
