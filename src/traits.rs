//! Common traits for double-ended heap data structures
//!
//! This module provides the error type shared by every heap operation and the
//! [`DoubleEndedHeap`] trait, the interface that callers and the generic test
//! suites program against.
//!
//! Unlike `std::collections::BinaryHeap`, which reports an empty heap with
//! `None`, the extremal operations here return [`HeapError::EmptyContainer`].
//! The store is a multiset over any `Ord` type, so there is no value that
//! could double as an "empty" marker. For an `Option`-returning, single-ended
//! view see [`stdlib_compat`](crate::stdlib_compat).

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// A peek or extraction was attempted on a heap holding no elements
    #[error("heap is empty")]
    EmptyContainer,
}

/// Base trait for double-ended priority queues
///
/// A double-ended heap gives logarithmic access to both its minimum and its
/// maximum element. Values are their own priorities, as with `BinaryHeap`.
///
/// # Example
///
/// ```rust
/// use rust_minmax_heap::{DoubleEndedHeap, HeapError};
/// use rust_minmax_heap::minmax::MinMaxHeap;
///
/// let mut heap = MinMaxHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek_min(), Ok(&1));
/// assert_eq!(heap.peek_max(), Ok(&3));
/// assert_eq!(heap.pop_max(), Ok(3));
/// assert_eq!(heap.pop_min(), Ok(1));
/// assert_eq!(heap.pop_min(), Ok(2));
/// assert_eq!(heap.pop_min(), Err(HeapError::EmptyContainer));
/// ```
pub trait DoubleEndedHeap<T: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts a value
    ///
    /// Equal values are all kept and extracted independently.
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, value: T);

    /// Returns the minimum value without removing it
    ///
    /// # Errors
    /// Returns `HeapError::EmptyContainer` if the heap is empty.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek_min(&self) -> Result<&T, HeapError>;

    /// Returns the maximum value without removing it
    ///
    /// # Errors
    /// Returns `HeapError::EmptyContainer` if the heap is empty.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek_max(&self) -> Result<&T, HeapError>;

    /// Removes and returns the minimum value
    ///
    /// # Errors
    /// Returns `HeapError::EmptyContainer` if the heap is empty.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop_min(&mut self) -> Result<T, HeapError>;

    /// Removes and returns the maximum value
    ///
    /// # Errors
    /// Returns `HeapError::EmptyContainer` if the heap is empty.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop_max(&mut self) -> Result<T, HeapError>;
}
