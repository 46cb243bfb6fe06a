//! Generic comprehensive tests for DoubleEndedHeap implementations
//!
//! These tests work with any DoubleEndedHeap implementation and stress the
//! trait interface with various edge cases and complex scenarios.

use rust_minmax_heap::minmax::MinMaxHeap;
use rust_minmax_heap::{DoubleEndedHeap, HeapError};

// Test helpers that work with any DoubleEndedHeap implementation

/// Test that empty heap behaves correctly
fn test_empty_heap<H: DoubleEndedHeap<String>>() {
    let mut heap = H::new();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek_min(), Err(HeapError::EmptyContainer));
    assert_eq!(heap.peek_max(), Err(HeapError::EmptyContainer));
    assert_eq!(heap.pop_min(), Err(HeapError::EmptyContainer));
    assert_eq!(heap.pop_max(), Err(HeapError::EmptyContainer));
}

/// Test the demonstration scenario in both extraction orders
fn test_demo_scenario<H: DoubleEndedHeap<i32>>(max_first: bool) {
    let mut heap = H::new();
    for value in [10, 5, 30, 3, 17, 22] {
        heap.push(value);
    }

    assert_eq!(heap.peek_min(), Ok(&3));
    assert_eq!(heap.peek_max(), Ok(&30));

    if max_first {
        assert_eq!(heap.pop_max(), Ok(30));
        assert_eq!(heap.pop_min(), Ok(3));
    } else {
        assert_eq!(heap.pop_min(), Ok(3));
        assert_eq!(heap.pop_max(), Ok(30));
    }

    assert_eq!(heap.peek_min(), Ok(&5));
    assert_eq!(heap.peek_max(), Ok(&22));
    assert_eq!(heap.len(), 4);
}

/// Test basic insert and pop operations with non-numeric values
fn test_basic_operations<H: DoubleEndedHeap<&'static str>>() {
    let mut heap = H::new();

    heap.push("pear");
    heap.push("apple");
    heap.push("zucchini");
    heap.push("mango");

    assert!(!heap.is_empty());
    assert_eq!(heap.len(), 4);
    assert_eq!(heap.peek_min(), Ok(&"apple"));
    assert_eq!(heap.peek_max(), Ok(&"zucchini"));

    assert_eq!(heap.pop_min(), Ok("apple"));
    assert_eq!(heap.pop_max(), Ok("zucchini"));
    assert_eq!(heap.pop_min(), Ok("mango"));
    assert_eq!(heap.pop_max(), Ok("pear"));
    assert_eq!(heap.pop_min(), Err(HeapError::EmptyContainer));
    assert!(heap.is_empty());
}

/// Test that duplicates are kept and extracted independently
fn test_duplicate_values<H: DoubleEndedHeap<i32>>() {
    let mut heap = H::new();

    heap.push(7);
    heap.push(2);
    heap.push(7);
    heap.push(2);

    assert_eq!(heap.len(), 4);
    assert_eq!(heap.pop_min(), Ok(2));
    assert_eq!(heap.pop_min(), Ok(2));
    assert_eq!(heap.peek_min(), Ok(&7));
    assert_eq!(heap.peek_max(), Ok(&7));
    assert_eq!(heap.pop_max(), Ok(7));
    assert_eq!(heap.pop_max(), Ok(7));
    assert!(heap.is_empty());
}

/// Test that all-equal contents behave like a single value at both ends
fn test_all_equal<H: DoubleEndedHeap<i32>>() {
    let mut heap = H::new();
    for _ in 0..50 {
        heap.push(5);
    }
    for remaining in (0..50).rev() {
        assert_eq!(heap.peek_min(), Ok(&5));
        assert_eq!(heap.peek_max(), Ok(&5));
        let popped = if remaining % 2 == 0 { heap.pop_min() } else { heap.pop_max() };
        assert_eq!(popped, Ok(5));
        assert_eq!(heap.len(), remaining);
    }
}

/// Test refilling a heap after it has been drained
fn test_reuse_after_drain<H: DoubleEndedHeap<i32>>() {
    let mut heap = H::new();
    for round in 0..3 {
        for i in 0..20 {
            heap.push(round * 100 + i);
        }
        assert_eq!(heap.peek_min(), Ok(&(round * 100)));
        assert_eq!(heap.peek_max(), Ok(&(round * 100 + 19)));
        while heap.pop_max().is_ok() {}
        assert!(heap.is_empty());
        assert_eq!(heap.peek_max(), Err(HeapError::EmptyContainer));
    }
}

/// Test that extremes are tracked while interleaving pushes and pops
fn test_interleaved<H: DoubleEndedHeap<i32>>() {
    let mut heap = H::new();
    let mut model = Vec::new();

    for i in 0..300 {
        let value = (i * 7919) % 211 - 105;
        heap.push(value);
        model.push(value);
        model.sort();

        match i % 5 {
            1 => {
                assert_eq!(heap.pop_min(), Ok(model.remove(0)));
            }
            3 => {
                assert_eq!(heap.pop_max(), model.pop().ok_or(HeapError::EmptyContainer));
            }
            _ => {}
        }

        assert_eq!(heap.peek_min().ok(), model.first());
        assert_eq!(heap.peek_max().ok(), model.last());
        assert_eq!(heap.len(), model.len());
    }
}

/// Test that the heap can hold values that would collide with sentinels
fn test_extreme_values<H: DoubleEndedHeap<i64>>() {
    let mut heap = H::new();
    heap.push(0);
    heap.push(i64::MIN);
    heap.push(i64::MAX);
    heap.push(-1);
    assert_eq!(heap.peek_min(), Ok(&i64::MIN));
    assert_eq!(heap.peek_max(), Ok(&i64::MAX));
    assert_eq!(heap.pop_max(), Ok(i64::MAX));
    assert_eq!(heap.pop_min(), Ok(i64::MIN));
    assert_eq!(heap.pop_min(), Ok(-1));
    assert_eq!(heap.pop_min(), Ok(0));
}

#[test]
fn test_minmax_empty_heap() {
    test_empty_heap::<MinMaxHeap<String>>();
}

#[test]
fn test_minmax_demo_scenario_min_first() {
    test_demo_scenario::<MinMaxHeap<i32>>(false);
}

#[test]
fn test_minmax_demo_scenario_max_first() {
    test_demo_scenario::<MinMaxHeap<i32>>(true);
}

#[test]
fn test_minmax_basic_operations() {
    test_basic_operations::<MinMaxHeap<&'static str>>();
}

#[test]
fn test_minmax_duplicate_values() {
    test_duplicate_values::<MinMaxHeap<i32>>();
}

#[test]
fn test_minmax_all_equal() {
    test_all_equal::<MinMaxHeap<i32>>();
}

#[test]
fn test_minmax_reuse_after_drain() {
    test_reuse_after_drain::<MinMaxHeap<i32>>();
}

#[test]
fn test_minmax_interleaved() {
    test_interleaved::<MinMaxHeap<i32>>();
}

#[test]
fn test_minmax_extreme_values() {
    test_extreme_values::<MinMaxHeap<i64>>();
}

#[test]
fn test_minmax_tuples_order_lexicographically() {
    let mut heap = MinMaxHeap::new();
    heap.push((2, "b"));
    heap.push((1, "z"));
    heap.push((2, "a"));
    heap.push((1, "a"));
    assert_eq!(heap.pop_min(), Ok((1, "a")));
    assert_eq!(heap.pop_max(), Ok((2, "b")));
    assert_eq!(heap.pop_min(), Ok((1, "z")));
    assert_eq!(heap.pop_max(), Ok((2, "a")));
}
