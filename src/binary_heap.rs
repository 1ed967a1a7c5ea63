//! Binary min-heap over any [`List`]
//!
//! The heap is a complete binary tree laid out in level order inside a list:
//! the node at logical index `i` has children at `2i + 1` and `2i + 2` and its
//! parent at `(i - 1) / 2`. The algorithm only uses the list's indexed
//! `get`/`set`/`swap` and end operations, so the same code drives both
//! backends:
//!
//! - [`ArrayMinHeap`]: over [`ArrayList`], O(1) per index resolution
//! - [`LinkedMinHeap`]: over [`LinkedList`], O(n) per index resolution in the
//!   worst case since every access walks the chain
//!
//! # Time Complexity
//!
//! | Operation     | Array heap | Linked heap  |
//! |---------------|------------|--------------|
//! | `insert`      | O(log n)   | O(n log n)   |
//! | `extract_min` | O(log n)   | O(n log n)   |
//! | `peek_min`    | O(1)       | O(1)         |
//!
//! # Example
//!
//! ```rust
//! use rust_list_heaps::MinHeap;
//! use rust_list_heaps::binary_heap::{ArrayMinHeap, LinkedMinHeap};
//!
//! let mut array = ArrayMinHeap::new();
//! let mut linked = LinkedMinHeap::new();
//! for value in [10, 5, 15, 3, 8, 20, 2] {
//!     array.insert(value);
//!     linked.insert(value);
//! }
//!
//! assert_eq!(array.into_sorted_vec(), vec![2, 3, 5, 8, 10, 15, 20]);
//! assert_eq!(linked.into_sorted_vec(), vec![2, 3, 5, 8, 10, 15, 20]);
//! ```

use std::fmt;
use std::marker::PhantomData;

use log::{error, trace};

use crate::array_list::ArrayList;
use crate::linked_list::LinkedList;
use crate::traits::{CollectionError, List, MinHeap, Result};

/// Binary min-heap backed by an array list
pub type ArrayMinHeap<T> = BinaryMinHeap<T, ArrayList<T>>;

/// Binary min-heap backed by a linked list
pub type LinkedMinHeap<T> = BinaryMinHeap<T, LinkedList<T>>;

#[inline]
fn left_child_of(index: usize) -> usize {
    2 * index + 1
}

#[inline]
fn right_child_of(index: usize) -> usize {
    2 * index + 2
}

#[inline]
fn parent_of(index: usize) -> usize {
    (index - 1) / 2
}

/// A binary min-heap whose nodes live in the list `L`
///
/// The heap has no state beyond its list.
pub struct BinaryMinHeap<T, L: List<T>> {
    elements: L,
    _phantom: PhantomData<T>,
}

impl<T: Ord, L: List<T>> MinHeap<T> for BinaryMinHeap<T, L> {
    fn new() -> Self {
        Self {
            elements: L::new(),
            _phantom: PhantomData,
        }
    }

    fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn insert(&mut self, item: T) {
        if self.elements.is_empty() {
            self.elements.add_first(item);
            return;
        }
        self.elements.add_last(item);
        if let Err(err) = self.sift_up(self.elements.len() - 1) {
            error!("sift up after insert failed: {}", err);
        }
    }

    fn peek_min(&self) -> Result<&T> {
        self.elements
            .get_first()
            .map_err(|_| CollectionError::EmptyHeap)
    }

    fn extract_min(&mut self) -> Result<T> {
        match self.elements.len() {
            0 => Err(CollectionError::EmptyHeap),
            1 => self
                .elements
                .remove_first()
                .map_err(|_| CollectionError::EmptyHeap),
            _ => {
                let last = self
                    .elements
                    .remove_last()
                    .map_err(|_| CollectionError::EmptyHeap)?;
                let min = self.elements.set(0, last)?;
                self.sift_down(0)?;
                Ok(min)
            }
        }
    }
}

impl<T: Ord, L: List<T>> BinaryMinHeap<T, L> {
    /// Creates an empty heap
    pub fn new() -> Self {
        <Self as MinHeap<T>>::new()
    }

    /// Builds a heap from an existing list by inserting its elements one by one
    pub fn with_list(list: L) -> Self
    where
        L: IntoIterator<Item = T>,
    {
        let mut heap = Self::new();
        for item in list {
            heap.insert(item);
        }
        heap
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Drains the heap, returning its elements in non-decreasing order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.elements.len());
        while let Ok(item) = self.extract_min() {
            sorted.push(item);
        }
        sorted
    }

    /// Read-only view of the backing list in level order
    pub fn as_list(&self) -> &L {
        &self.elements
    }

    /// Checks that no node is smaller than its parent
    pub fn is_valid_heap(&self) -> bool {
        (1..self.elements.len()).all(|i| !self.less(i, parent_of(i)))
    }

    /// Returns true if the element at `a` is strictly less than the one at `b`
    ///
    /// Indices outside the list never compare less.
    fn less(&self, a: usize, b: usize) -> bool {
        matches!(
            (self.elements.get(a), self.elements.get(b)),
            (Ok(x), Ok(y)) if x < y
        )
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) -> Result<()> {
        while index > 0 {
            let parent = parent_of(index);
            if !self.less(index, parent) {
                break;
            }
            self.elements.swap(index, parent)?;
            index = parent;
        }
        Ok(())
    }

    /// Move element at index down to maintain heap property
    ///
    /// Ties between equal children resolve to the left child.
    fn sift_down(&mut self, mut index: usize) -> Result<()> {
        let mut swaps = 0usize;
        loop {
            let left = left_child_of(index);
            let right = right_child_of(index);
            let mut smallest = index;

            if self.less(left, smallest) {
                smallest = left;
            }
            if self.less(right, smallest) {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.elements.swap(index, smallest)?;
            index = smallest;
            swaps += 1;
        }
        trace!("sift down settled at index {} after {} swaps", index, swaps);
        Ok(())
    }
}

impl<T: Ord, L: List<T>> Default for BinaryMinHeap<T, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, L: List<T> + Clone> Clone for BinaryMinHeap<T, L> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T, L: List<T> + fmt::Debug> fmt::Debug for BinaryMinHeap<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryMinHeap")
            .field("elements", &self.elements)
            .finish()
    }
}

impl<T: Ord, L: List<T>> FromIterator<T> for BinaryMinHeap<T, L> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord, L: List<T>> Extend<T> for BinaryMinHeap<T, L> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}
