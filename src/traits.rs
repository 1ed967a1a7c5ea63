//! Common traits for the containers and heaps in this crate
//!
//! This module provides the two contracts everything else is built on:
//!
//! - [`List`]: The uniform list capability set implemented identically by
//!   [`ArrayList`](crate::array_list::ArrayList) and
//!   [`LinkedList`](crate::linked_list::LinkedList)
//! - [`MinHeap`]: The priority structure contract implemented by
//!   [`BinaryMinHeap`](crate::binary_heap::BinaryMinHeap) over either list
//!
//! Because the heap algorithm only talks to [`List`], the same sift-up and
//! sift-down code runs over contiguous and linked storage. Only the cost of
//! resolving an index differs.

use thiserror::Error;

/// Error type for container, heap and adapter operations
///
/// Every failing operation leaves the structure it was called on unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// The index does not address a live element
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// The length of the container at the time of the call
        len: usize,
    },
    /// Attempted to read or remove an end element of an empty list
    #[error("list is empty")]
    EmptyList,
    /// Attempted to peek or extract from an empty heap
    #[error("heap is empty")]
    EmptyHeap,
    /// Attempted to pop or peek an empty stack
    #[error("stack is empty")]
    EmptyStack,
    /// Attempted to dequeue or peek an empty queue
    #[error("queue is empty")]
    EmptyQueue,
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, CollectionError>;

/// Checks `index` against `[0, len)`
#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(CollectionError::IndexOutOfRange { index, len })
    }
}

/// The list capability contract
///
/// Both backing stores implement this trait with identical observable
/// behaviour: indices are valid over `[0, len)`, positional insertion accepts
/// `[0, len]`, and a call that returns `Err` does not mutate the list.
///
/// # Example
///
/// ```rust
/// use rust_list_heaps::List;
/// use rust_list_heaps::array_list::ArrayList;
///
/// let mut list = ArrayList::new();
/// list.add_last(2);
/// list.add_first(1);
/// assert_eq!(list.get(0), Ok(&1));
/// assert_eq!(list.remove_last(), Ok(2));
/// assert_eq!(list.len(), 1);
/// ```
pub trait List<T> {
    /// Creates a new empty list
    fn new() -> Self;

    /// Returns the number of live elements
    fn len(&self) -> usize;

    /// Returns true if the list holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at `index`
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index >= len`.
    fn get(&self, index: usize) -> Result<&T>;

    /// Returns a mutable reference to the element at `index`
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index >= len`.
    fn get_mut(&mut self, index: usize) -> Result<&mut T>;

    /// Replaces the element at `index`, returning the previous one
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index >= len`.
    fn set(&mut self, index: usize, item: T) -> Result<T>;

    /// Swaps the elements at `a` and `b`
    ///
    /// # Errors
    /// `IndexOutOfRange` if either index is `>= len`.
    fn swap(&mut self, a: usize, b: usize) -> Result<()>;

    /// Inserts `item` at `index`, shifting later elements towards the back
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index > len`.
    fn insert(&mut self, index: usize, item: T) -> Result<()>;

    /// Removes and returns the element at `index`
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index >= len`.
    fn remove(&mut self, index: usize) -> Result<T>;

    /// Inserts `item` at the front
    fn add_first(&mut self, item: T);

    /// Appends `item` at the back
    fn add_last(&mut self, item: T);

    /// Removes and returns the front element
    ///
    /// # Errors
    /// `EmptyList` if the list is empty.
    fn remove_first(&mut self) -> Result<T>;

    /// Removes and returns the back element
    ///
    /// # Errors
    /// `EmptyList` if the list is empty.
    fn remove_last(&mut self) -> Result<T>;

    /// Returns the front element
    ///
    /// # Errors
    /// `EmptyList` if the list is empty.
    fn get_first(&self) -> Result<&T>;

    /// Returns the back element
    ///
    /// # Errors
    /// `EmptyList` if the list is empty.
    fn get_last(&self) -> Result<&T>;

    /// Removes every element
    fn clear(&mut self);

    /// Returns the position of the first element equal to `item`
    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Returns the position of the last element equal to `item`
    fn last_index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Returns true if some element equals `item`
    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_some()
    }

    /// Sorts the list in place using the reference bubble sort
    ///
    /// # Time Complexity
    /// O(n²) comparisons for both backends.
    fn sort(&mut self)
    where
        T: Ord;

    /// Copies the elements into a `Vec`, front to back
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone;
}

/// Min-heap contract
///
/// Unlike a priority-pair heap, elements are their own priority: the total
/// order of `T` decides which element is the minimum.
///
/// # Example
///
/// ```rust
/// use rust_list_heaps::MinHeap;
/// use rust_list_heaps::binary_heap::ArrayMinHeap;
///
/// let mut heap = ArrayMinHeap::new();
/// heap.insert(3);
/// heap.insert(1);
/// heap.insert(2);
///
/// assert_eq!(heap.peek_min(), Ok(&1));
/// assert_eq!(heap.extract_min(), Ok(1));
/// assert_eq!(heap.len(), 2);
/// ```
pub trait MinHeap<T: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) swaps; each swap costs one index resolution in the backing list.
    fn insert(&mut self, item: T);

    /// Returns the minimum element without removing it
    ///
    /// # Errors
    /// `EmptyHeap` if the heap is empty.
    fn peek_min(&self) -> Result<&T>;

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// `EmptyHeap` if the heap is empty. The heap is left untouched.
    ///
    /// # Time Complexity
    /// O(log n) swaps.
    fn extract_min(&mut self) -> Result<T>;
}
