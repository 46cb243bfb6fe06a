//! Standard library compatibility layer
//!
//! Provides single-ended, `BinaryHeap`-shaped views over any
//! [`DoubleEndedHeap`].
//!
//! - [`MaxFirst`] behaves like `std::collections::BinaryHeap<T>`.
//! - [`MinFirst`] behaves like `std::collections::BinaryHeap<Reverse<T>>`,
//!   without the `Reverse` wrapper.
//!
//! Both report an empty heap with `None`, as `BinaryHeap` does, rather than
//! with [`HeapError`](crate::HeapError).
//!
//! # Example
//!
//! ```rust
//! use rust_minmax_heap::stdlib_compat::{MaxFirst, MinFirst};
//! use rust_minmax_heap::minmax::MinMaxHeap;
//!
//! let mut heap: MaxFirst<i32, MinMaxHeap<i32>> = MaxFirst::new();
//! heap.push(5);
//! heap.push(3);
//! heap.push(7);
//! assert_eq!(heap.peek(), Some(&7)); // like BinaryHeap
//! assert_eq!(heap.pop(), Some(7));
//!
//! let mut heap: MinFirst<i32, MinMaxHeap<i32>> = MinFirst::new();
//! heap.push(5);
//! heap.push(3);
//! assert_eq!(heap.pop(), Some(3));
//! ```

use std::marker::PhantomData;

use crate::traits::DoubleEndedHeap;

/// A `BinaryHeap`-like wrapper that pops the largest value first
///
/// # Type Parameters
/// - `T`: The value type, must implement `Ord`
/// - `H`: The underlying heap implementation (e.g., `MinMaxHeap<T>`)
pub struct MaxFirst<T: Ord, H: DoubleEndedHeap<T>> {
    heap: H,
    _phantom: PhantomData<T>,
}

impl<T: Ord, H: DoubleEndedHeap<T>> MaxFirst<T, H> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self {
            heap: H::new(),
            _phantom: PhantomData,
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a value onto the heap
    pub fn push(&mut self, value: T) {
        self.heap.push(value)
    }

    /// Returns a reference to the largest value, equivalent to `BinaryHeap::peek`
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek_max().ok()
    }

    /// Removes and returns the largest value, equivalent to `BinaryHeap::pop`
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop_max().ok()
    }

    /// Unwraps the underlying double-ended heap
    pub fn into_inner(self) -> H {
        self.heap
    }
}

impl<T: Ord, H: DoubleEndedHeap<T>> Default for MaxFirst<T, H> {
    fn default() -> Self {
        Self::new()
    }
}

/// A `BinaryHeap`-like wrapper that pops the smallest value first
pub struct MinFirst<T: Ord, H: DoubleEndedHeap<T>> {
    heap: H,
    _phantom: PhantomData<T>,
}

impl<T: Ord, H: DoubleEndedHeap<T>> MinFirst<T, H> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self {
            heap: H::new(),
            _phantom: PhantomData,
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a value onto the heap
    pub fn push(&mut self, value: T) {
        self.heap.push(value)
    }

    /// Returns a reference to the smallest value
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek_min().ok()
    }

    /// Removes and returns the smallest value
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop_min().ok()
    }

    /// Unwraps the underlying double-ended heap
    pub fn into_inner(self) -> H {
        self.heap
    }
}

impl<T: Ord, H: DoubleEndedHeap<T>> Default for MinFirst<T, H> {
    fn default() -> Self {
        Self::new()
    }
}
