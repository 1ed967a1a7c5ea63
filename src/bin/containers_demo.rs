//! Console walkthrough of every structure in the crate
//!
//! ```bash
//! cargo run --bin containers_demo
//! ```

use std::fmt::Display;

use rust_list_heaps::binary_heap::BinaryMinHeap;
use rust_list_heaps::queue::Queue;
use rust_list_heaps::stack::Stack;
use rust_list_heaps::{List, MinHeap, Result};

use rust_list_heaps::array_list::ArrayList;
use rust_list_heaps::linked_list::LinkedList;

fn stack_demo<L: List<&'static str>>(label: &str) -> Result<()> {
    println!("\n--- {label} Stack Example ---");
    let mut stack: Stack<_, L> = Stack::new();
    for fruit in ["Apple", "Banana", "Cherry"] {
        stack.push(fruit);
    }

    println!("Current top (Peek): {}", stack.peek()?);
    println!("Popping elements from the stack...");
    while !stack.is_empty() {
        println!("Popped: {}", stack.pop()?);
    }
    println!("Is the stack empty? {}", stack.is_empty());
    Ok(())
}

fn queue_demo<L: List<&'static str>>(label: &str) -> Result<()> {
    println!("\n--- {label} Queue Example ---");
    let mut queue: Queue<_, L> = Queue::new();
    for day in ["Monday", "Tuesday", "Wednesday"] {
        queue.enqueue(day);
    }

    println!("First element (Peek): {}", queue.peek()?);
    println!("Dequeuing elements...");
    while !queue.is_empty() {
        println!("Dequeued: {}", queue.dequeue()?);
    }
    println!("Is the queue empty? {}", queue.is_empty());
    Ok(())
}

fn heap_demo<T, L>(label: &str, values: &[T]) -> Result<()>
where
    T: Ord + Copy + Display,
    L: List<T>,
{
    println!("\n--- {label} MinHeap Example ---");
    let mut heap: BinaryMinHeap<T, L> = BinaryMinHeap::new();
    for &value in values {
        heap.insert(value);
        println!("Inserted: {value}");
    }

    println!("Minimum element (Peek): {}", heap.peek_min()?);
    println!("Extracting all elements in sorted order:");
    while !heap.is_empty() {
        println!("Extracted Min: {}", heap.extract_min()?);
    }
    println!("Is the MinHeap empty? {}", heap.is_empty());
    Ok(())
}

fn main() -> Result<()> {
    let numbers = [10, 5, 15, 3, 8, 20, 2];

    println!("****** ArrayList-based Implementations ******");
    stack_demo::<ArrayList<_>>("ArrayList")?;
    queue_demo::<ArrayList<_>>("ArrayList")?;
    heap_demo::<_, ArrayList<_>>("ArrayList", &numbers)?;

    println!("\n****** LinkedList-based Implementations ******");
    stack_demo::<LinkedList<_>>("LinkedList")?;
    queue_demo::<LinkedList<_>>("LinkedList")?;
    heap_demo::<_, LinkedList<_>>("LinkedList", &numbers)?;

    Ok(())
}
