//! Array-backed indexed binary min-heap
//!
//! A binary min-heap laid out as an implicit complete tree in a `Vec`, paired
//! with a hash index from item to slot. The index makes [`contains`] O(1) and
//! lets [`change_priority`] find the item's slot without scanning the array.
//!
//! Every structural swap updates the array and the index together. All the
//! sifting in this module goes through [`ArrayHeapMinPq::swap`].
//!
//! # Time Complexity
//!
//! | Operation         | Complexity |
//! |-------------------|------------|
//! | `add`             | O(log n)   |
//! | `contains`        | O(1)       |
//! | `peek_min`        | O(1)       |
//! | `remove_min`      | O(log n)   |
//! | `change_priority` | O(log n)   |
//! | `remove`          | O(log n)   |
//!
//! # Example
//!
//! ```rust
//! use rust_seam_paths::{ArrayHeapMinPq, MinPriorityQueue};
//!
//! let mut heap = ArrayHeapMinPq::new();
//! heap.add('x', 3.0).unwrap();
//! heap.add('y', 1.0).unwrap();
//! heap.add('z', 2.0).unwrap();
//!
//! assert_eq!(heap.peek_min(), Ok(&'y'));
//! assert_eq!(heap.remove_min(), Ok('y'));
//! assert_eq!(heap.remove_min(), Ok('z'));
//! assert_eq!(heap.remove_min(), Ok('x'));
//! assert!(heap.is_empty());
//! ```
//!
//! [`contains`]: MinPriorityQueue::contains
//! [`change_priority`]: MinPriorityQueue::change_priority

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::traits::{HeapError, MinPriorityQueue};

/// An item together with its priority
#[derive(Debug, Clone, PartialEq)]
struct PriorityNode<T> {
    item: T,
    priority: f64,
}

/// An indexed binary min-heap
///
/// Items are stored once in the array and once as index keys, so `T` is
/// cloned on insertion. Prefer small copyable identities such as vertex ids.
#[derive(Debug, Clone)]
pub struct ArrayHeapMinPq<T> {
    /// Heap-ordered nodes; the children of slot `i` are `2i + 1` and `2i + 2`
    items: Vec<PriorityNode<T>>,
    /// Current slot of every item in `items`
    positions: FxHashMap<T, usize>,
}

impl<T: Clone + Eq + Hash> ArrayHeapMinPq<T> {
    /// Creates an empty heap with room for `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            positions: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Returns the current priority of `item`, if it is queued
    pub fn priority(&self, item: &T) -> Option<f64> {
        self.positions.get(item).map(|&index| self.items[index].priority)
    }

    /// Returns the lowest priority in the heap, if any
    pub fn peek_min_priority(&self) -> Option<f64> {
        self.items.first().map(|node| node.priority)
    }

    /// Removes an arbitrary item, returning its priority
    ///
    /// # Errors
    /// Returns [`HeapError::ItemNotFound`] if the item is not queued.
    pub fn remove(&mut self, item: &T) -> Result<f64, HeapError> {
        let index = *self.positions.get(item).ok_or(HeapError::ItemNotFound)?;
        let last = self.items.len() - 1;
        self.swap(index, last);

        let removed = self.items.pop().ok_or(HeapError::ItemNotFound)?;
        self.positions.remove(&removed.item);

        // The node moved into `index` came from the bottom of an unrelated
        // subtree, so it may need to travel in either direction.
        if index < self.items.len() {
            if index > 0 && self.items[index].priority < self.items[(index - 1) / 2].priority {
                self.sift_up(index);
            } else {
                self.sift_down(index);
            }
        }

        Ok(removed.priority)
    }

    /// Checks that every non-root node's priority is at least its parent's
    pub fn verify_heap_property(&self) -> bool {
        (1..self.items.len())
            .all(|index| self.items[(index - 1) / 2].priority <= self.items[index].priority)
    }

    /// Checks that the identity index agrees exactly with the array
    pub fn verify_positions(&self) -> bool {
        self.positions.len() == self.items.len()
            && self
                .items
                .iter()
                .enumerate()
                .all(|(index, node)| self.positions.get(&node.item) == Some(&index))
    }

    /// Swaps two slots and records both new positions
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.items.swap(a, b);
        if let Some(slot) = self.positions.get_mut(&self.items[a].item) {
            *slot = a;
        }
        if let Some(slot) = self.positions.get_mut(&self.items[b].item) {
            *slot = b;
        }
    }

    /// Moves the node at `index` up while its parent has a larger priority
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.items[parent].priority > self.items[index].priority {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Moves the node at `index` down while a child has a smaller priority
    ///
    /// When both children qualify, the smaller one wins; equal children
    /// resolve to the left.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            let mut child = left;
            if right < len && self.items[right].priority < self.items[left].priority {
                child = right;
            }

            if self.items[child].priority < self.items[index].priority {
                self.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }
}

impl<T: Clone + Eq + Hash> MinPriorityQueue<T> for ArrayHeapMinPq<T> {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            positions: FxHashMap::default(),
        }
    }

    fn add(&mut self, item: T, priority: f64) -> Result<(), HeapError> {
        debug_assert!(!priority.is_nan(), "heap priorities must not be NaN");
        if self.positions.contains_key(&item) {
            return Err(HeapError::DuplicateItem);
        }

        let index = self.items.len();
        self.positions.insert(item.clone(), index);
        self.items.push(PriorityNode { item, priority });
        self.sift_up(index);
        Ok(())
    }

    fn contains(&self, item: &T) -> bool {
        self.positions.contains_key(item)
    }

    fn peek_min(&self) -> Result<&T, HeapError> {
        self.items
            .first()
            .map(|node| &node.item)
            .ok_or(HeapError::EmptyHeap)
    }

    fn remove_min(&mut self) -> Result<T, HeapError> {
        if self.items.is_empty() {
            return Err(HeapError::EmptyHeap);
        }

        let last = self.items.len() - 1;
        self.swap(0, last);
        let min = self.items.pop().ok_or(HeapError::EmptyHeap)?;
        self.positions.remove(&min.item);

        if !self.items.is_empty() {
            self.sift_down(0);
        }

        Ok(min.item)
    }

    fn change_priority(&mut self, item: &T, priority: f64) -> Result<(), HeapError> {
        debug_assert!(!priority.is_nan(), "heap priorities must not be NaN");
        let index = *self.positions.get(item).ok_or(HeapError::ItemNotFound)?;

        let old = std::mem::replace(&mut self.items[index].priority, priority);
        if priority <= old {
            self.sift_up(index);
        } else {
            self.sift_down(index);
        }
        Ok(())
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T: Clone + Eq + Hash> Default for ArrayHeapMinPq<T> {
    fn default() -> Self {
        Self::new()
    }
}
