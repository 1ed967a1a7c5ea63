//! Dynamic array container
//!
//! A contiguous, growable list. The backing buffer always has
//! `capacity >= len`; when an append would overflow it, a buffer of twice the
//! capacity is allocated and the live elements are moved across in order.
//!
//! # Time Complexity
//!
//! | Operation                | Complexity     |
//! |--------------------------|----------------|
//! | `get` / `set` / `swap`   | O(1)           |
//! | `add_last`               | O(1) amortized |
//! | `remove_last`            | O(1)           |
//! | `insert` / `remove`      | O(len - index) |
//! | `add_first` / `remove_first` | O(len)     |
//!
//! # Example
//!
//! ```rust
//! use rust_list_heaps::List;
//! use rust_list_heaps::array_list::ArrayList;
//!
//! let mut list = ArrayList::new();
//! for i in 0..12 {
//!     list.add_last(i);
//! }
//! assert_eq!(list.len(), 12);
//! assert_eq!(list.capacity(), 20);
//! assert_eq!(list.get(11), Ok(&11));
//! ```

use std::fmt;
use std::iter::Flatten;

use log::{debug, trace};

use crate::sort::bubble_sort;
use crate::traits::{check_index, CollectionError, List, Result};

/// Capacity of a freshly constructed list, and the floor for `with_capacity`
pub const DEFAULT_CAPACITY: usize = 10;

/// A growable list backed by one contiguous buffer
///
/// Slots past `size` are always `None`, so removed elements are dropped as
/// soon as they leave the list.
#[derive(Clone)]
pub struct ArrayList<T> {
    elements: Vec<Option<T>>,
    size: usize,
}

impl<T> ArrayList<T> {
    /// Creates an empty list with room for at least `capacity` elements
    ///
    /// Requests below [`DEFAULT_CAPACITY`] are rounded up to it.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(DEFAULT_CAPACITY);
        let mut elements = Vec::with_capacity(capacity);
        elements.resize_with(capacity, || None);
        Self { elements, size: 0 }
    }

    /// Number of slots in the backing buffer
    pub fn capacity(&self) -> usize {
        self.elements.len()
    }

    /// Iterates over the elements front to back
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.elements[..self.size].iter().flatten(),
        }
    }

    /// Views the live elements as a slice of slots
    fn live(&self) -> &[Option<T>] {
        &self.elements[..self.size]
    }

    /// Doubles the buffer if it is full
    fn ensure_capacity(&mut self) {
        if self.size < self.elements.len() {
            return;
        }
        let new_capacity = (self.elements.len() * 2).max(DEFAULT_CAPACITY);
        trace!(
            "growing array list buffer from {} to {} slots",
            self.elements.len(),
            new_capacity
        );
        let mut grown = Vec::with_capacity(new_capacity);
        grown.extend(self.elements.drain(..self.size));
        grown.resize_with(new_capacity, || None);
        self.elements = grown;
    }

    /// Places `item` at `index`, shifting the suffix right by one
    ///
    /// Callers guarantee `index <= size`.
    fn shift_in(&mut self, index: usize, item: T) {
        self.ensure_capacity();
        // Slot `size` is empty; rotating moves it down to `index`.
        self.elements[index..=self.size].rotate_right(1);
        self.elements[index] = Some(item);
        self.size += 1;
    }
}

impl<T> List<T> for ArrayList<T> {
    fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    fn len(&self) -> usize {
        self.size
    }

    fn get(&self, index: usize) -> Result<&T> {
        check_index(index, self.size)?;
        self.elements[index]
            .as_ref()
            .ok_or(CollectionError::IndexOutOfRange {
                index,
                len: self.size,
            })
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.size;
        check_index(index, len)?;
        self.elements[index]
            .as_mut()
            .ok_or(CollectionError::IndexOutOfRange { index, len })
    }

    fn set(&mut self, index: usize, item: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, item))
    }

    fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        check_index(a, self.size)?;
        check_index(b, self.size)?;
        self.elements.swap(a, b);
        Ok(())
    }

    fn insert(&mut self, index: usize, item: T) -> Result<()> {
        if index > self.size {
            return Err(CollectionError::IndexOutOfRange {
                index,
                len: self.size,
            });
        }
        self.shift_in(index, item);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        check_index(index, self.size)?;
        let item = self.elements[index]
            .take()
            .ok_or(CollectionError::IndexOutOfRange {
                index,
                len: self.size,
            })?;
        self.elements[index..self.size].rotate_left(1);
        self.size -= 1;
        Ok(item)
    }

    fn add_first(&mut self, item: T) {
        self.shift_in(0, item);
    }

    fn add_last(&mut self, item: T) {
        self.ensure_capacity();
        self.elements[self.size] = Some(item);
        self.size += 1;
    }

    fn remove_first(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(CollectionError::EmptyList);
        }
        self.remove(0)
    }

    fn remove_last(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(CollectionError::EmptyList);
        }
        self.remove(self.size - 1)
    }

    fn get_first(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(CollectionError::EmptyList);
        }
        self.get(0)
    }

    fn get_last(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(CollectionError::EmptyList);
        }
        self.get(self.size - 1)
    }

    fn clear(&mut self) {
        debug!("clearing array list of {} elements", self.size);
        for slot in &mut self.elements[..self.size] {
            *slot = None;
        }
        self.size = 0;
    }

    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.live()
            .iter()
            .position(|slot| slot.as_ref() == Some(item))
    }

    fn last_index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.live()
            .iter()
            .rposition(|slot| slot.as_ref() == Some(item))
    }

    fn sort(&mut self)
    where
        T: Ord,
    {
        // Live slots are all `Some`, and `None < Some` never comes into play.
        bubble_sort(&mut self.elements[..self.size]);
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        <Self as List<T>>::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = <Self as List<T>>::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add_last(item);
        }
    }
}

/// Borrowing iterator over an [`ArrayList`]
pub struct Iter<'a, T> {
    inner: Flatten<std::slice::Iter<'a, Option<T>>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over an [`ArrayList`]
pub struct IntoIter<T> {
    inner: Flatten<std::vec::IntoIter<Option<T>>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        self.elements.truncate(self.size);
        IntoIter {
            inner: self.elements.into_iter().flatten(),
        }
    }
}
