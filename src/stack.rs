//! LIFO stack adapter
//!
//! A thin view over any [`List`]: `push` appends at the back, `pop` and `peek`
//! work on the back. Use [`ArrayStack`] or [`LinkedStack`] for the two
//! stock backends.
//!
//! # Example
//!
//! ```rust
//! use rust_list_heaps::stack::ArrayStack;
//!
//! let mut stack = ArrayStack::new();
//! stack.push("Apple");
//! stack.push("Banana");
//! assert_eq!(stack.peek(), Ok(&"Banana"));
//! assert_eq!(stack.pop(), Ok("Banana"));
//! assert_eq!(stack.len(), 1);
//! ```

use std::marker::PhantomData;

use crate::array_list::ArrayList;
use crate::linked_list::LinkedList;
use crate::traits::{CollectionError, List, Result};

/// Stack backed by an array list
pub type ArrayStack<T> = Stack<T, ArrayList<T>>;

/// Stack backed by a linked list
pub type LinkedStack<T> = Stack<T, LinkedList<T>>;

/// Last-in, first-out stack over the list `L`
#[derive(Debug, Clone)]
pub struct Stack<T, L: List<T>> {
    list: L,
    _phantom: PhantomData<T>,
}

impl<T, L: List<T>> Stack<T, L> {
    /// Creates an empty stack
    pub fn new() -> Self {
        Self {
            list: L::new(),
            _phantom: PhantomData,
        }
    }

    /// Pushes `item` on top
    pub fn push(&mut self, item: T) {
        self.list.add_last(item);
    }

    /// Removes and returns the top element
    ///
    /// # Errors
    /// `EmptyStack` if there is nothing to pop.
    pub fn pop(&mut self) -> Result<T> {
        self.list
            .remove_last()
            .map_err(|_| CollectionError::EmptyStack)
    }

    /// Returns the top element
    ///
    /// # Errors
    /// `EmptyStack` if the stack is empty.
    pub fn peek(&self) -> Result<&T> {
        self.list.get_last().map_err(|_| CollectionError::EmptyStack)
    }

    /// Returns true if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the number of elements on the stack
    pub fn len(&self) -> usize {
        self.list.len()
    }
}

impl<T, L: List<T>> Default for Stack<T, L> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise<L: List<&'static str>>() {
        let mut stack: Stack<_, L> = Stack::new();
        assert_eq!(stack.pop(), Err(CollectionError::EmptyStack));
        assert_eq!(stack.peek(), Err(CollectionError::EmptyStack));

        stack.push("Apple");
        stack.push("Banana");
        stack.push("Cherry");
        assert_eq!(stack.peek(), Ok(&"Cherry"));
        assert_eq!(stack.len(), 3);

        assert_eq!(stack.pop(), Ok("Cherry"));
        assert_eq!(stack.pop(), Ok("Banana"));
        assert_eq!(stack.pop(), Ok("Apple"));
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), Err(CollectionError::EmptyStack));
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_array_stack() {
        exercise::<ArrayList<_>>();
    }

    #[test]
    fn test_linked_stack() {
        exercise::<LinkedList<_>>();
    }
}
