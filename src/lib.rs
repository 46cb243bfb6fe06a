//! Min-Max Heap for Rust
//!
//! This crate provides a double-ended priority queue: a container that gives
//! O(1) access to both its minimum and its maximum and removes either in
//! O(log n) time.
//!
//! # Features
//!
//! - **Min-Max Heap**: a single array-backed complete binary tree whose levels
//!   alternate between min ordering and max ordering; O(log n) push, pop-min
//!   and pop-max; O(1) peek at either end
//! - **Typed errors**: peeking or popping an empty heap returns
//!   [`HeapError::EmptyContainer`] instead of a sentinel value
//! - **`BinaryHeap` views**: [`stdlib_compat`] wraps any [`DoubleEndedHeap`]
//!   in a single-ended, `Option`-returning API
//!
//! # Example
//!
//! ```rust
//! use rust_minmax_heap::minmax::MinMaxHeap;
//! use rust_minmax_heap::{DoubleEndedHeap, HeapError};
//!
//! let mut heap = MinMaxHeap::new();
//! heap.push(10);
//! heap.push(5);
//! heap.push(30);
//! assert_eq!(heap.peek_min(), Ok(&5));
//! assert_eq!(heap.peek_max(), Ok(&30));
//! assert_eq!(heap.pop_max(), Ok(30));
//! assert_eq!(heap.pop_min(), Ok(5));
//! assert_eq!(heap.pop_min(), Ok(10));
//! assert_eq!(heap.pop_max(), Err(HeapError::EmptyContainer));
//! ```

pub mod level;
pub mod minmax;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use minmax::MinMaxHeap;
pub use traits::{DoubleEndedHeap, HeapError};
