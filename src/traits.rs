//! Common traits for indexed priority queues
//!
//! This module defines the contract shared by priority queues that track their
//! items by identity:
//!
//! - [`MinPriorityQueue`]: a min-ordered queue over `(item, priority)` pairs where
//!   each item may appear at most once, so its priority can be changed later
//!   through the item itself rather than through a handle.
//!
//! Unlike `std::collections::BinaryHeap`, the priority is stored apart from the
//! item, and items are located by value. That is what graph searches such as
//! [`dijkstra`](crate::pathfinding::dijkstra) need to decrease the key of a
//! vertex they have already queued.

use std::hash::Hash;

use thiserror::Error;

/// Error type for priority queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The item is already present in the queue
    #[error("item is already present in the heap")]
    DuplicateItem,
    /// The item is not present in the queue
    #[error("item is not present in the heap")]
    ItemNotFound,
    /// The queue has no elements
    #[error("heap is empty")]
    EmptyHeap,
}

/// A min-priority queue keyed by item identity
///
/// Priorities are `f64` values and must not be NaN. Items must be hashable,
/// because implementations keep an identity index to find an item's slot in
/// O(1).
///
/// # Example
///
/// ```rust
/// use rust_seam_paths::{ArrayHeapMinPq, MinPriorityQueue};
///
/// let mut heap = ArrayHeapMinPq::new();
/// heap.add("a", 5.0).unwrap();
/// heap.add("b", 3.0).unwrap();
/// heap.add("c", 8.0).unwrap();
///
/// heap.change_priority(&"b", 10.0).unwrap();
/// assert_eq!(heap.remove_min(), Ok("a"));
/// ```
pub trait MinPriorityQueue<T: Eq + Hash> {
    /// Creates a new empty queue
    fn new() -> Self;

    /// Inserts `item` with the given priority
    ///
    /// # Errors
    /// Returns [`HeapError::DuplicateItem`] if the item is already queued.
    ///
    /// # Time Complexity
    /// O(log n)
    fn add(&mut self, item: T, priority: f64) -> Result<(), HeapError>;

    /// Returns true if `item` is currently queued
    ///
    /// # Time Complexity
    /// O(1)
    fn contains(&self, item: &T) -> bool;

    /// Returns the item with the lowest priority without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the queue is empty.
    fn peek_min(&self) -> Result<&T, HeapError>;

    /// Removes and returns the item with the lowest priority
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the queue is empty.
    ///
    /// # Time Complexity
    /// O(log n)
    fn remove_min(&mut self) -> Result<T, HeapError>;

    /// Replaces the priority of a queued item
    ///
    /// The new priority may be lower (decrease-key) or higher than the old one.
    ///
    /// # Errors
    /// Returns [`HeapError::ItemNotFound`] if the item is not queued.
    ///
    /// # Time Complexity
    /// O(log n)
    fn change_priority(&mut self, item: &T, priority: f64) -> Result<(), HeapError>;

    /// Returns the number of queued items
    fn len(&self) -> usize;

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
