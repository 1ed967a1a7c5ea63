//! Stress tests that push both heap backends and both lists through long
//! operation sequences.
//!
//! The linked variants resolve every index by walking the chain, so sizes are
//! kept moderate for them.

use rust_list_heaps::array_list::ArrayList;
use rust_list_heaps::binary_heap::{ArrayMinHeap, LinkedMinHeap};
use rust_list_heaps::linked_list::LinkedList;
use rust_list_heaps::{List, MinHeap};

/// Test massive numbers of inserts and extractions
fn test_massive_operations<H: MinHeap<i32>>(n: i32) {
    let mut heap = H::new();

    for i in (0..n).rev() {
        heap.insert(i);
    }
    assert_eq!(heap.len(), n as usize);

    for i in 0..n {
        assert_eq!(heap.extract_min(), Ok(i));
    }
    assert!(heap.is_empty());
}

/// Test alternating insert and extract
fn test_alternating_ops<H: MinHeap<i32>>() {
    let mut heap = H::new();

    for i in 0..200 {
        heap.insert(i * 2);
        heap.insert(i * 2 + 1);

        assert!(heap.extract_min().is_ok());
    }
    assert_eq!(heap.len(), 200);

    let mut last = i32::MIN;
    while let Ok(value) = heap.extract_min() {
        assert!(value >= last);
        last = value;
    }
}

/// Test a pseudo-random interleaving against a sorted reference
fn test_pseudo_random<H: MinHeap<u64>>() {
    let mut heap = H::new();
    let mut reference: Vec<u64> = Vec::new();
    let mut state = 0x9E37_79B9_7F4A_7C15u64;

    for round in 0..1500 {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let value = state % 10_000;

        if round % 3 == 2 {
            reference.sort_unstable_by(|a, b| b.cmp(a));
            assert_eq!(heap.extract_min().ok(), reference.pop());
        } else {
            heap.insert(value);
            reference.push(value);
        }
    }
    assert_eq!(heap.len(), reference.len());
}

/// Test churn at both ends of a list
fn test_deque_churn<L: List<usize>>() {
    let mut list = L::new();
    for i in 0..2000 {
        if i % 2 == 0 {
            list.add_first(i);
        } else {
            list.add_last(i);
        }
        if i % 5 == 0 {
            assert!(list.remove_first().is_ok());
        }
    }
    assert_eq!(list.len(), 2000 - 400);
    while list.remove_last().is_ok() {}
    assert!(list.is_empty());
}

#[test]
fn test_massive_array_heap() {
    test_massive_operations::<ArrayMinHeap<i32>>(5000);
}

#[test]
fn test_massive_linked_heap() {
    test_massive_operations::<LinkedMinHeap<i32>>(600);
}

#[test]
fn test_alternating_array_heap() {
    test_alternating_ops::<ArrayMinHeap<i32>>();
}

#[test]
fn test_alternating_linked_heap() {
    test_alternating_ops::<LinkedMinHeap<i32>>();
}

#[test]
fn test_pseudo_random_array_heap() {
    test_pseudo_random::<ArrayMinHeap<u64>>();
}

#[test]
fn test_pseudo_random_linked_heap() {
    test_pseudo_random::<LinkedMinHeap<u64>>();
}

#[test]
fn test_deque_churn_array() {
    test_deque_churn::<ArrayList<usize>>();
}

#[test]
fn test_deque_churn_linked() {
    test_deque_churn::<LinkedList<usize>>();
}
