//! Index arithmetic for array-backed complete binary trees
//!
//! A min-max heap stores its tree in a `Vec` with the root at index 0 and
//! the children of index `i` at `2i + 1` and `2i + 2`. Nothing here touches
//! the stored values; every function is pure arithmetic on positions.
//!
//! # Level parity
//!
//! The depth of index `i` is `floor(log2(i + 1))`: depth `d` holds exactly
//! the indices `2^d - 1 ..= 2^(d+1) - 2`. Even depths are **min levels** and
//! odd depths are **max levels**, so the parity of the bit length of `i + 1`
//! decides which ordering a node enforces over its subtree. Computing it from
//! the bit length is O(1), where walking parent links would be O(log n).

use std::cmp::Ordering;

/// Which ordering a tree level enforces over the subtrees of its nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Nodes are `<=` every node below them (even depths, including the root)
    Min,
    /// Nodes are `>=` every node below them (odd depths)
    Max,
}

impl Level {
    /// Returns the level of the node stored at `index`
    ///
    /// ```rust
    /// use rust_minmax_heap::level::Level;
    ///
    /// assert_eq!(Level::of(0), Level::Min);
    /// assert_eq!(Level::of(1), Level::Max);
    /// assert_eq!(Level::of(2), Level::Max);
    /// assert_eq!(Level::of(3), Level::Min);
    /// ```
    #[inline]
    pub fn of(index: usize) -> Level {
        if depth(index) % 2 == 0 {
            Level::Min
        } else {
            Level::Max
        }
    }

    /// The level directly above or below this one
    #[inline]
    pub fn opposite(self) -> Level {
        match self {
            Level::Min => Level::Max,
            Level::Max => Level::Min,
        }
    }

    /// Returns true if `a` belongs strictly closer to the top of a tree on
    /// this level than `b` does: `a < b` on a min level, `a > b` on a max level
    ///
    /// Equal values are never preferred, so repair passes stop on ties.
    #[inline]
    pub fn prefers<T: Ord>(self, a: &T, b: &T) -> bool {
        let wanted = match self {
            Level::Min => Ordering::Less,
            Level::Max => Ordering::Greater,
        };
        a.cmp(b) == wanted
    }
}

/// Depth of `index`, counting the root as depth 0
#[inline]
pub fn depth(index: usize) -> u32 {
    (index + 1).ilog2()
}

/// Parent of `index`
///
/// # Panics
///
/// Panics in debug builds if `index == 0`; the root has no parent.
#[inline]
pub fn parent(index: usize) -> usize {
    debug_assert!(index > 0, "root has no parent");
    (index - 1) / 2
}

/// Grandparent of `index`, or `None` for the root and its children
#[inline]
pub fn grandparent(index: usize) -> Option<usize> {
    if index >= 3 {
        Some(parent(parent(index)))
    } else {
        None
    }
}

/// Left child of `index`; the right child is the next index
///
/// Saturates instead of overflowing, so the result always compares as out of
/// range for indices whose children could not exist.
#[inline]
pub fn first_child(index: usize) -> usize {
    index.saturating_mul(2).saturating_add(1)
}

/// Returns true if `descendant` sits exactly two levels below `ancestor`
#[inline]
pub fn is_grandchild(ancestor: usize, descendant: usize) -> bool {
    grandparent(descendant) == Some(ancestor)
}

/// The children and grandchildren of `index` that lie inside `[0, len)`,
/// in array order
///
/// Children come first, so a caller that keeps the first best candidate
/// favours a child over an equal grandchild.
pub fn descendants(index: usize, len: usize) -> impl Iterator<Item = usize> {
    let child = first_child(index);
    let grandchild = first_child(child);
    let children = (0..2).map(move |offset| child.saturating_add(offset));
    let grandchildren = (0..4).map(move |offset| grandchild.saturating_add(offset));
    children.chain(grandchildren).take_while(move |&i| i < len)
}
