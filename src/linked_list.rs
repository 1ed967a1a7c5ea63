//! Doubly linked container
//!
//! Nodes live in a [`SlotMap`] arena and refer to each other by key, so the
//! `prev`/`next` links are plain handles rather than owning pointers. The list
//! caches the keys of its head and tail for O(1) work at either end.
//!
//! Indexed access walks from whichever end is closer to the target: from the
//! head when `index < len / 2`, otherwise from the tail.
//!
//! # Time Complexity
//!
//! | Operation                              | Complexity              |
//! |----------------------------------------|-------------------------|
//! | `add_first` / `add_last`               | O(1)                    |
//! | `remove_first` / `remove_last`         | O(1)                    |
//! | `get` / `set` / `insert` / `remove`    | O(min(index, len - index)) |
//! | `index_of` / `contains`                | O(n)                    |
//!
//! # Example
//!
//! ```rust
//! use rust_list_heaps::List;
//! use rust_list_heaps::linked_list::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.add_last("b");
//! list.add_first("a");
//! list.add_last("c");
//!
//! assert_eq!(list.get(1), Ok(&"b"));
//! assert_eq!(list.remove_first(), Ok("a"));
//! assert_eq!(list.remove_last(), Ok("c"));
//! ```

use std::fmt;

use log::{debug, trace};
use slotmap::{new_key_type, SlotMap};

use crate::traits::{check_index, CollectionError, List, Result};

new_key_type! {
    /// Arena key identifying one node of a [`LinkedList`]
    pub(crate) struct NodeKey;
}

#[derive(Clone)]
struct Node<T> {
    element: T,
    prev: Option<NodeKey>,
    next: Option<NodeKey>,
}

/// A doubly linked list over an arena of nodes
#[derive(Clone)]
pub struct LinkedList<T> {
    nodes: SlotMap<NodeKey, Node<T>>,
    head: Option<NodeKey>,
    tail: Option<NodeKey>,
}

impl<T> LinkedList<T> {
    /// Iterates over the elements front to back
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            next: self.head,
            remaining: self.nodes.len(),
        }
    }

    /// Resolves `index` to a node key, walking from the nearer end
    fn node_at(&self, index: usize) -> Result<NodeKey> {
        let len = self.nodes.len();
        check_index(index, len)?;
        let out_of_range = CollectionError::IndexOutOfRange { index, len };

        let mut cursor = if index < len / 2 { self.head } else { self.tail };
        let steps = if index < len / 2 { index } else { len - 1 - index };
        for _ in 0..steps {
            let key = cursor.ok_or(out_of_range)?;
            let node = &self.nodes[key];
            cursor = if index < len / 2 { node.next } else { node.prev };
        }
        cursor.ok_or(out_of_range)
    }

    /// Detaches `key` from its neighbours and frees it
    fn unlink(&mut self, key: NodeKey) -> Option<T> {
        let node = self.nodes.remove(key)?;
        match node.prev {
            Some(prev) => self.nodes[prev].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.nodes[next].prev = node.prev,
            None => self.tail = node.prev,
        }
        Some(node.element)
    }

    /// Links a fresh node between `prev` and `next`
    fn link_between(&mut self, element: T, prev: Option<NodeKey>, next: Option<NodeKey>) {
        let key = self.nodes.insert(Node {
            element,
            prev,
            next,
        });
        trace!("linked node {:?} ({} nodes)", key, self.nodes.len());
        match prev {
            Some(prev) => self.nodes[prev].next = Some(key),
            None => self.head = Some(key),
        }
        match next {
            Some(next) => self.nodes[next].prev = Some(key),
            None => self.tail = Some(key),
        }
    }
}

impl<T> List<T> for LinkedList<T> {
    fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: None,
            tail: None,
        }
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn get(&self, index: usize) -> Result<&T> {
        let key = self.node_at(index)?;
        Ok(&self.nodes[key].element)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let key = self.node_at(index)?;
        Ok(&mut self.nodes[key].element)
    }

    fn set(&mut self, index: usize, item: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, item))
    }

    fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let key_a = self.node_at(a)?;
        let key_b = self.node_at(b)?;
        if key_a == key_b {
            return Ok(());
        }
        if let Some([node_a, node_b]) = self.nodes.get_disjoint_mut([key_a, key_b]) {
            std::mem::swap(&mut node_a.element, &mut node_b.element);
        }
        Ok(())
    }

    fn insert(&mut self, index: usize, item: T) -> Result<()> {
        let len = self.len();
        if index == len {
            self.add_last(item);
            return Ok(());
        }
        if index > len {
            return Err(CollectionError::IndexOutOfRange { index, len });
        }
        let next = self.node_at(index)?;
        let prev = self.nodes[next].prev;
        self.link_between(item, prev, Some(next));
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        let key = self.node_at(index)?;
        self.unlink(key).ok_or(CollectionError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    fn add_first(&mut self, item: T) {
        self.link_between(item, None, self.head);
    }

    fn add_last(&mut self, item: T) {
        self.link_between(item, self.tail, None);
    }

    fn remove_first(&mut self) -> Result<T> {
        let head = self.head.ok_or(CollectionError::EmptyList)?;
        self.unlink(head).ok_or(CollectionError::EmptyList)
    }

    fn remove_last(&mut self) -> Result<T> {
        let tail = self.tail.ok_or(CollectionError::EmptyList)?;
        self.unlink(tail).ok_or(CollectionError::EmptyList)
    }

    fn get_first(&self) -> Result<&T> {
        self.head
            .and_then(|key| self.nodes.get(key))
            .map(|node| &node.element)
            .ok_or(CollectionError::EmptyList)
    }

    fn get_last(&self) -> Result<&T> {
        self.tail
            .and_then(|key| self.nodes.get(key))
            .map(|node| &node.element)
            .ok_or(CollectionError::EmptyList)
    }

    fn clear(&mut self) {
        debug!("clearing linked list of {} nodes", self.nodes.len());
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|element| element == item)
    }

    fn last_index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut index = self.len();
        let mut cursor = self.tail;
        while let Some(key) = cursor {
            index -= 1;
            let node = &self.nodes[key];
            if node.element == *item {
                return Some(index);
            }
            cursor = node.prev;
        }
        None
    }

    fn sort(&mut self)
    where
        T: Ord,
    {
        // Bubble sort over adjacent node pairs; links never change, only elements move.
        loop {
            let mut sorted = true;
            let mut cursor = self.head;
            while let Some(key) = cursor {
                let Some(next) = self.nodes[key].next else {
                    break;
                };
                if let Some([current, following]) = self.nodes.get_disjoint_mut([key, next]) {
                    if current.element > following.element {
                        std::mem::swap(&mut current.element, &mut following.element);
                        sorted = false;
                    }
                }
                cursor = Some(next);
            }
            if sorted {
                break;
            }
        }
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        <Self as List<T>>::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = <Self as List<T>>::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add_last(item);
        }
    }
}

/// Borrowing iterator over a [`LinkedList`]
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    next: Option<NodeKey>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.next?;
        let node = self.list.nodes.get(key)?;
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over a [`LinkedList`]
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.remove_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}
