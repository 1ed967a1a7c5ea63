//! FIFO queue adapter
//!
//! `enqueue` appends at the back of the underlying [`List`]; `dequeue` and
//! `peek` work on the front. With [`LinkedQueue`] both ends are O(1); with
//! [`ArrayQueue`] a dequeue shifts the remaining elements.

use std::marker::PhantomData;

use crate::array_list::ArrayList;
use crate::linked_list::LinkedList;
use crate::traits::{CollectionError, List, Result};

/// Queue backed by an array list
pub type ArrayQueue<T> = Queue<T, ArrayList<T>>;

/// Queue backed by a linked list
pub type LinkedQueue<T> = Queue<T, LinkedList<T>>;

/// First-in, first-out queue over the list `L`
#[derive(Debug, Clone)]
pub struct Queue<T, L: List<T>> {
    list: L,
    _phantom: PhantomData<T>,
}

impl<T, L: List<T>> Queue<T, L> {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self {
            list: L::new(),
            _phantom: PhantomData,
        }
    }

    /// Adds `item` at the back
    pub fn enqueue(&mut self, item: T) {
        self.list.add_last(item);
    }

    /// Removes and returns the front element
    ///
    /// # Errors
    /// `EmptyQueue` if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        self.list
            .remove_first()
            .map_err(|_| CollectionError::EmptyQueue)
    }

    /// Returns the front element
    ///
    /// # Errors
    /// `EmptyQueue` if the queue is empty.
    pub fn peek(&self) -> Result<&T> {
        self.list.get_first().map_err(|_| CollectionError::EmptyQueue)
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the number of queued elements
    pub fn len(&self) -> usize {
        self.list.len()
    }
}

impl<T, L: List<T>> Default for Queue<T, L> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise<L: List<&'static str>>() {
        let mut queue: Queue<_, L> = Queue::new();
        assert_eq!(queue.dequeue(), Err(CollectionError::EmptyQueue));

        queue.enqueue("Monday");
        queue.enqueue("Tuesday");
        queue.enqueue("Wednesday");
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek(), Ok(&"Monday"));

        assert_eq!(queue.dequeue(), Ok("Monday"));
        assert_eq!(queue.dequeue(), Ok("Tuesday"));
        queue.enqueue("Thursday");
        assert_eq!(queue.dequeue(), Ok("Wednesday"));
        assert_eq!(queue.dequeue(), Ok("Thursday"));
        assert!(queue.is_empty());
        assert_eq!(queue.peek(), Err(CollectionError::EmptyQueue));
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_array_queue() {
        exercise::<ArrayList<_>>();
    }

    #[test]
    fn test_linked_queue() {
        exercise::<LinkedList<_>>();
    }
}
