//! Array vs linked heap benchmarks
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_bench
//! ```
//!
//! Both heaps run the same sift-up/sift-down code; the gap between them is the
//! cost of resolving a logical index in each backing list.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_list_heaps::array_list::ArrayList;
use rust_list_heaps::binary_heap::{ArrayMinHeap, LinkedMinHeap};
use rust_list_heaps::linked_list::LinkedList;
use rust_list_heaps::{List, MinHeap};
use std::hint::black_box;

fn workload(n: usize) -> Vec<u32> {
    let mut state = 0x2545_F491u32;
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state
        })
        .collect()
}

fn push_pop<H: MinHeap<u32>>(values: &[u32]) -> u64 {
    let mut heap = H::new();
    for &v in values {
        heap.insert(v);
    }
    let mut sum = 0u64;
    while let Ok(v) = heap.extract_min() {
        sum += u64::from(v);
    }
    sum
}

fn bench_heaps(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_push_pop");
    for &n in &[64usize, 256, 1024] {
        let values = workload(n);
        group.bench_with_input(BenchmarkId::new("array", n), &values, |b, values| {
            b.iter(|| push_pop::<ArrayMinHeap<u32>>(black_box(values)))
        });
        group.bench_with_input(BenchmarkId::new("linked", n), &values, |b, values| {
            b.iter(|| push_pop::<LinkedMinHeap<u32>>(black_box(values)))
        });
    }
    group.finish();
}

fn fill_and_index<L: List<u32>>(values: &[u32]) -> u64 {
    let mut list = L::new();
    for &v in values {
        list.add_last(v);
    }
    (0..list.len())
        .filter_map(|i| list.get(i).ok())
        .map(|&v| u64::from(v))
        .sum()
}

fn bench_lists(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_fill_and_index");
    for &n in &[64usize, 1024] {
        let values = workload(n);
        group.bench_with_input(BenchmarkId::new("array", n), &values, |b, values| {
            b.iter(|| fill_and_index::<ArrayList<u32>>(black_box(values)))
        });
        group.bench_with_input(BenchmarkId::new("linked", n), &values, |b, values| {
            b.iter(|| fill_and_index::<LinkedList<u32>>(black_box(values)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_heaps, bench_lists);
criterion_main!(benches);
