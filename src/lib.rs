//! Generic containers with interchangeable array and linked storage
//!
//! This crate provides two list backends that implement one capability
//! contract, and the abstract data types built on top of them.
//!
//! # Features
//!
//! - **ArrayList**: Contiguous buffer with doubling growth; O(1) indexed access
//! - **LinkedList**: Doubly linked nodes in a slotmap arena; O(1) ends, O(n) indexing
//! - **Binary Min-Heap**: One sift-up/sift-down implementation over either list
//!   (`ArrayMinHeap`, `LinkedMinHeap`)
//! - **Stack / Queue**: LIFO and FIFO adapters over either list
//!
//! All fallible operations return [`Result`] with a [`CollectionError`], and a
//! failed call never mutates the structure.
//!
//! # Example
//!
//! ```rust
//! use rust_list_heaps::{CollectionError, MinHeap};
//! use rust_list_heaps::binary_heap::LinkedMinHeap;
//!
//! let mut heap = LinkedMinHeap::new();
//! heap.insert(5);
//! heap.insert(3);
//! assert_eq!(heap.extract_min(), Ok(3));
//! assert_eq!(heap.extract_min(), Ok(5));
//! assert_eq!(heap.extract_min(), Err(CollectionError::EmptyHeap));
//! ```

pub mod array_list;
pub mod binary_heap;
pub mod linked_list;
pub mod queue;
pub mod sort;
pub mod stack;
pub mod traits;

// Re-export the main traits for convenience
pub use traits::{CollectionError, List, MinHeap, Result};
