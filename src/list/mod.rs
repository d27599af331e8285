//! An arena-backed doubly-linked list with stable node handles.
//!
//! Nodes live in a generational arena owned by the list, and callers hold
//! [`NodeKey`]s rather than references.  A key is *valid* while its node
//! belongs to the list that issued it.  Removing a node retires its key:
//! every later operation on it fails with [`Error::InvalidNode`] instead of
//! touching whatever now occupies the slot.

use std::fmt::Debug;

use crate::{
    error::{Error, Result},
    id_vec::{IdVec, IdVecKey},
    list_id::ListId,
    tracing_support::trace,
};

mod iter;
mod node_key;

pub use iter::{IntoIter, Iter, Keys};
pub use node_key::NodeKey;

struct Link<T> {
    item: T,
    prev: Option<IdVecKey>,
    next: Option<IdVecKey>,
}

/// A doubly-linked list.  Every operation is O(1) except iteration.
pub struct DList<T> {
    nodes: IdVec<Link<T>>,
    head: Option<IdVecKey>,
    tail: Option<IdVecKey>,
    id: ListId,
}

impl<T> DList<T> {
    pub fn new() -> Self {
        DList {
            nodes: IdVec::new(),
            head: None,
            tail: None,
            id: ListId::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node_key(&self, key: IdVecKey) -> NodeKey<T> {
        NodeKey::new(key, self.id)
    }

    /// Resolves `node` to its arena key, or reports `operation` as having
    /// been called on an invalid node.
    fn checked(&self, node: NodeKey<T>, operation: &'static str) -> Result<IdVecKey> {
        if node.list_id == self.id && self.nodes.contains(node.key) {
            Ok(node.key)
        } else {
            trace!(?node, operation, "rejected invalid node");
            Err(Error::InvalidNode { operation })
        }
    }

    /// Gets the link stored under `key`, reporting `operation` if the slot
    /// is empty.
    fn link(&self, key: IdVecKey, operation: &'static str) -> Result<&Link<T>> {
        self.nodes.get(key).ok_or(Error::InvalidNode { operation })
    }

    fn link_mut(&mut self, key: IdVecKey, operation: &'static str) -> Result<&mut Link<T>> {
        self.nodes.get_mut(key).ok_or(Error::InvalidNode { operation })
    }

    pub fn is_valid_node(&self, node: NodeKey<T>) -> bool {
        self.checked(node, "is_valid_node").is_ok()
    }

    pub fn front(&self) -> Option<NodeKey<T>> {
        self.head.map(|key| self.node_key(key))
    }

    pub fn back(&self) -> Option<NodeKey<T>> {
        self.tail.map(|key| self.node_key(key))
    }

    /// Inserts `item` at the front of the list and returns its node.
    pub fn insert_front(&mut self, item: T) -> NodeKey<T> {
        let key = self.nodes.insert(Link {
            item,
            prev: None,
            next: self.head,
        });
        match self.head.and_then(|head| self.nodes.get_mut(head)) {
            Some(head) => head.prev = Some(key),
            None => self.tail = Some(key),
        }
        self.head = Some(key);
        self.node_key(key)
    }

    /// Inserts `item` at the back of the list and returns its node.
    pub fn insert_back(&mut self, item: T) -> NodeKey<T> {
        let key = self.nodes.insert(Link {
            item,
            prev: self.tail,
            next: None,
        });
        match self.tail.and_then(|tail| self.nodes.get_mut(tail)) {
            Some(tail) => tail.next = Some(key),
            None => self.head = Some(key),
        }
        self.tail = Some(key);
        self.node_key(key)
    }

    /// Gets the node following `node`, or `None` if `node` is the back.
    pub fn next(&self, node: NodeKey<T>) -> Result<Option<NodeKey<T>>> {
        let key = self.checked(node, "next")?;
        Ok(self.link(key, "next")?.next.map(|next| self.node_key(next)))
    }

    /// Gets the node preceding `node`, or `None` if `node` is the front.
    pub fn prev(&self, node: NodeKey<T>) -> Result<Option<NodeKey<T>>> {
        let key = self.checked(node, "prev")?;
        Ok(self.link(key, "prev")?.prev.map(|prev| self.node_key(prev)))
    }

    pub fn item(&self, node: NodeKey<T>) -> Result<&T> {
        let key = self.checked(node, "item")?;
        Ok(&self.link(key, "item")?.item)
    }

    pub fn item_mut(&mut self, node: NodeKey<T>) -> Result<&mut T> {
        let key = self.checked(node, "item_mut")?;
        Ok(&mut self.link_mut(key, "item_mut")?.item)
    }

    /// Inserts `item` immediately after `node`.
    pub fn insert_after(&mut self, node: NodeKey<T>, item: T) -> Result<NodeKey<T>> {
        let key = self.checked(node, "insert_after")?;
        let next = self.link(key, "insert_after")?.next;
        let new_key = self.nodes.insert(Link {
            item,
            prev: Some(key),
            next,
        });
        self.link_mut(key, "insert_after")?.next = Some(new_key);
        match next {
            Some(next) => self.link_mut(next, "insert_after")?.prev = Some(new_key),
            None => self.tail = Some(new_key),
        }
        Ok(self.node_key(new_key))
    }

    /// Inserts `item` immediately before `node`.
    pub fn insert_before(&mut self, node: NodeKey<T>, item: T) -> Result<NodeKey<T>> {
        let key = self.checked(node, "insert_before")?;
        let prev = self.link(key, "insert_before")?.prev;
        let new_key = self.nodes.insert(Link {
            item,
            prev,
            next: Some(key),
        });
        self.link_mut(key, "insert_before")?.prev = Some(new_key);
        match prev {
            Some(prev) => self.link_mut(prev, "insert_before")?.next = Some(new_key),
            None => self.head = Some(new_key),
        }
        Ok(self.node_key(new_key))
    }

    /// Unlinks `node` and returns its item.  The key, and every copy of it,
    /// is invalid afterwards.
    pub fn remove(&mut self, node: NodeKey<T>) -> Result<T> {
        let key = self.checked(node, "remove")?;
        let link = self
            .nodes
            .remove(key)
            .ok_or(Error::InvalidNode { operation: "remove" })?;
        match link.prev {
            Some(prev) => self.link_mut(prev, "remove")?.next = link.next,
            None => self.head = link.next,
        }
        match link.next {
            Some(next) => self.link_mut(next, "remove")?.prev = link.prev,
            None => self.tail = link.prev,
        }
        Ok(link.item)
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let front = self.front()?;
        self.remove(front).ok()
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let back = self.back()?;
        self.remove(back).ok()
    }

    /// Removes every node.  All outstanding keys become invalid.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Gets an iterator over the items, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Gets an iterator over the node keys, front to back.
    pub fn keys(&self) -> Keys<'_, T> {
        Keys::new(self)
    }
}

impl<T> Default for DList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for DList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for DList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DList::new();
        for item in iter {
            list.insert_back(item);
        }
        list
    }
}

impl<T> IntoIterator for DList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a DList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
