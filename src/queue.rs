//! A FIFO queue used to stage items for sorting.

use std::{collections::VecDeque, fmt::Debug};

use crate::error::{Error, Result};

/// A first-in, first-out queue.
///
/// Items live in a `VecDeque` ring buffer rather than in linked nodes; the
/// name follows the queue interface the sorts are written against.
#[derive(Clone, PartialEq, Eq)]
pub struct LinkedQueue<T> {
    items: VecDeque<T>,
}

impl<T> LinkedQueue<T> {
    pub fn new() -> Self {
        LinkedQueue {
            items: VecDeque::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    pub fn dequeue(&mut self) -> Result<T> {
        self.items.pop_front().ok_or(Error::QueueEmpty {
            operation: "dequeue",
        })
    }

    /// Gets the front item without removing it.
    pub fn front(&self) -> Result<&T> {
        self.items.front().ok_or(Error::QueueEmpty { operation: "front" })
    }

    /// Gets the `k`th item, counting from 1 at the front.
    pub fn nth(&self, k: usize) -> Option<&T> {
        k.checked_sub(1).and_then(|index| self.items.get(index))
    }

    /// Moves every item of `other` to the back of this queue, leaving
    /// `other` empty.
    pub fn append(&mut self, other: &mut LinkedQueue<T>) {
        self.items.append(&mut other.items);
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        LinkedQueue {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for LinkedQueue<T> {
    type Item = T;
    type IntoIter = std::collections::vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
