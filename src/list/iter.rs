use std::iter::FusedIterator;

use crate::id_vec::IdVecKey;

use super::{DList, NodeKey};

/// Iterator over the items of a [`DList`], front to back.
pub struct Iter<'a, T> {
    list: &'a DList<T>,
    cursor: Option<IdVecKey>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(list: &'a DList<T>) -> Self {
        Iter {
            list,
            cursor: list.head,
            remaining: list.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor?;
        let link = self.list.nodes.get(key)?;
        self.cursor = link.next;
        self.remaining -= 1;
        Some(&link.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over the node keys of a [`DList`], front to back.
pub struct Keys<'a, T> {
    list: &'a DList<T>,
    cursor: Option<IdVecKey>,
}

impl<'a, T> Keys<'a, T> {
    pub(super) fn new(list: &'a DList<T>) -> Self {
        Keys {
            list,
            cursor: list.head,
        }
    }
}

impl<T> Iterator for Keys<'_, T> {
    type Item = NodeKey<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor?;
        self.cursor = self.list.nodes.get(key)?.next;
        Some(self.list.node_key(key))
    }
}

/// Owning iterator over the items of a [`DList`], front to back.
pub struct IntoIter<T> {
    list: DList<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(list: DList<T>) -> Self {
        IntoIter { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
