//! Min-Max Heap implementation
//!
//! A min-max heap is a complete binary tree stored in a `Vec` whose levels
//! alternate between two orderings: nodes on even depths (the **min levels**,
//! including the root) are no greater than anything in their subtree, and
//! nodes on odd depths (the **max levels**) are no smaller than anything in
//! their subtree. The minimum is therefore always the root and the maximum is
//! always one of the root's children.
//!
//! Repairs move values across levels as well as within them. After a push the
//! new value is compared once with its parent, which may send it up the
//! opposite level's chain, and then climbs its own level two steps at a time.
//! After a pop the value moved into the hole looks at up to six children and
//! grandchildren, promotes the best grandchild, and fixes the single parent
//! that promotion may have unbalanced.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `push`     | O(log n)   |
//! | `peek_min` | O(1)       |
//! | `peek_max` | O(1)       |
//! | `pop_min`  | O(log n)   |
//! | `pop_max`  | O(log n)   |
//!
//! # Example
//!
//! ```rust
//! use rust_minmax_heap::DoubleEndedHeap;
//! use rust_minmax_heap::minmax::MinMaxHeap;
//!
//! let mut heap = MinMaxHeap::new();
//! for value in [10, 5, 30, 3, 17, 22] {
//!     heap.push(value);
//! }
//!
//! assert_eq!(heap.peek_min(), Ok(&3));
//! assert_eq!(heap.peek_max(), Ok(&30));
//! assert_eq!(heap.pop_min(), Ok(3));
//! assert_eq!(heap.pop_max(), Ok(30));
//! assert_eq!(heap.peek_min(), Ok(&5));
//! assert_eq!(heap.peek_max(), Ok(&22));
//! assert_eq!(heap.len(), 4);
//! ```

use log::trace;

use crate::level::{self, Level};
use crate::traits::{DoubleEndedHeap, HeapError};

/// An array-backed double-ended priority queue
///
/// Stores values directly, ordered by their `Ord` implementation. Equal
/// values are kept as independent entries.
#[derive(Debug, Clone)]
pub struct MinMaxHeap<T: Ord> {
    /// Complete binary tree in level order; occupied slots are exactly `0..len`
    data: Vec<T>,
}

impl<T: Ord> DoubleEndedHeap<T> for MinMaxHeap<T> {
    fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, value: T) {
        self.data.push(value);
        self.bubble_up(self.data.len() - 1);
    }

    fn peek_min(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::EmptyContainer)
    }

    fn peek_max(&self) -> Result<&T, HeapError> {
        self.max_index()
            .map(|index| &self.data[index])
            .ok_or(HeapError::EmptyContainer)
    }

    fn pop_min(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::EmptyContainer);
        }
        Ok(self.remove_at(0))
    }

    fn pop_max(&mut self) -> Result<T, HeapError> {
        let index = self.max_index().ok_or(HeapError::EmptyContainer)?;
        Ok(self.remove_at(index))
    }
}

impl<T: Ord> MinMaxHeap<T> {
    /// Creates an empty heap with space for at least `capacity` values
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Removes every value from the heap
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterates over the stored values in storage order, which is not sorted
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap, returning its values in storage order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its values in ascending order
    ///
    /// # Time Complexity
    /// O(n log n)
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(value) = self.pop_min() {
            sorted.push(value);
        }
        sorted
    }

    /// Pushes `value` and then removes and returns the minimum
    ///
    /// Never fails, since the heap holds at least `value` when the minimum is
    /// taken. When `value` is no greater than the current minimum it is handed
    /// straight back and the heap is left untouched.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn push_pop_min(&mut self, value: T) -> T {
        if !self.data.first().is_some_and(|min| *min < value) {
            return value;
        }
        let min = std::mem::replace(&mut self.data[0], value);
        self.trickle_down(0);
        min
    }

    /// Pushes `value` and then removes and returns the maximum
    ///
    /// Never fails, since the heap holds at least `value` when the maximum is
    /// taken. When `value` is no smaller than the current maximum it is handed
    /// straight back and the heap is left untouched.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn push_pop_max(&mut self, value: T) -> T {
        let index = match self.max_index() {
            Some(index) if value < self.data[index] => index,
            _ => return value,
        };
        let max = std::mem::replace(&mut self.data[index], value);
        if index > 0 {
            // The replacement may be smaller than the root it now sits under
            if self.data[index] < self.data[0] {
                self.data.swap(index, 0);
            }
            self.trickle_down(index);
        }
        max
    }

    /// Checks the full min-max ordering
    ///
    /// Every value on a min level must be `<=` all values in its subtree and
    /// every value on a max level `>=` all values in its subtree. Equivalently,
    /// each node is checked against every one of its ancestors. This is
    /// O(n log n) and intended for tests and debugging.
    pub fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|index| {
            let value = &self.data[index];
            let mut ancestor = index;
            while ancestor > 0 {
                ancestor = level::parent(ancestor);
                let holds = match Level::of(ancestor) {
                    Level::Min => self.data[ancestor] <= *value,
                    Level::Max => self.data[ancestor] >= *value,
                };
                if !holds {
                    return false;
                }
            }
            true
        })
    }

    /// Position of the maximum, or `None` when empty
    ///
    /// The root is the maximum of a one-element heap. Otherwise the maximum is
    /// whichever of the root's children is larger.
    fn max_index(&self) -> Option<usize> {
        match self.data.len() {
            0 => None,
            1 => Some(0),
            2 => Some(1),
            _ if self.data[2] > self.data[1] => Some(2),
            _ => Some(1),
        }
    }

    /// Removes the value at `index`, refilling the hole with the last value
    fn remove_at(&mut self, index: usize) -> T {
        let removed = self.data.swap_remove(index);
        if index < self.data.len() {
            self.trickle_down(index);
        }
        removed
    }

    /// Move the value at index up to restore the ordering after a push
    fn bubble_up(&mut self, index: usize) {
        if index == 0 {
            return;
        }
        let level = Level::of(index);
        let parent = level::parent(index);
        trace!("bubble_up from index {} on {:?} level", index, level);

        // Out of order with the parent means the value belongs on the
        // parent's level, so it climbs that chain instead of its own
        if level.opposite().prefers(&self.data[index], &self.data[parent]) {
            self.data.swap(index, parent);
            self.bubble_up_level(parent, level.opposite());
        } else {
            self.bubble_up_level(index, level);
        }
    }

    /// Climb through grandparents, which share the level of `index`
    fn bubble_up_level(&mut self, mut index: usize, level: Level) {
        while let Some(grandparent) = level::grandparent(index) {
            if level.prefers(&self.data[index], &self.data[grandparent]) {
                self.data.swap(index, grandparent);
                index = grandparent;
            } else {
                break;
            }
        }
    }

    /// Move the value at index down to restore the ordering after a removal
    fn trickle_down(&mut self, index: usize) {
        let level = Level::of(index);
        trace!("trickle_down from index {} on {:?} level", index, level);
        self.trickle_down_level(index, level);
    }

    fn trickle_down_level(&mut self, mut index: usize, level: Level) {
        while let Some(best) = self.best_descendant(index, level) {
            if !level.prefers(&self.data[best], &self.data[index]) {
                return;
            }
            self.data.swap(best, index);

            if !level::is_grandchild(index, best) {
                // The child dominated its own subtree, so the demoted value fits there
                return;
            }

            // The demoted value now sits under a node of the opposite level
            let parent = level::parent(best);
            if level.opposite().prefers(&self.data[best], &self.data[parent]) {
                self.data.swap(best, parent);
            }
            index = best;
        }
    }

    /// The child or grandchild of `index` that belongs highest on `level`
    ///
    /// Returns `None` when `index` is a leaf. Ties keep the earliest candidate.
    fn best_descendant(&self, index: usize, level: Level) -> Option<usize> {
        level::descendants(index, self.data.len()).reduce(|best, candidate| {
            if level.prefers(&self.data[candidate], &self.data[best]) {
                candidate
            } else {
                best
            }
        })
    }
}

impl<T: Ord> Default for MinMaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Ord> IntoIterator for &'a MinMaxHeap<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
