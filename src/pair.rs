use std::{
    fmt::Debug,
    hash::{BuildHasher, BuildHasherDefault, DefaultHasher, Hash, Hasher},
};

/// An unordered pair of vertices that compares and hashes equal regardless of
/// element order, so `(u, v)` and `(v, u)` name the same undirected edge.
///
/// The elements are stored in the order given, which lets a graph remember
/// which endpoint "owns" a particular edge node.  A self-pair `(v, v)` hashes
/// to `hash(v) + 1` rather than `2 * hash(v)`, so it never collides with `v`
/// itself if vertices and edges ever share one table.
#[derive(Clone, Copy, Debug)]
pub struct VertexPair<T> {
    object1: T,
    object2: T,
}

fn element_code<T: Hash + ?Sized>(value: &T) -> u64 {
    BuildHasherDefault::<DefaultHasher>::default().hash_one(value)
}

impl<T> VertexPair<T> {
    pub fn new(object1: T, object2: T) -> Self {
        VertexPair { object1, object2 }
    }

    pub fn first(&self) -> &T {
        &self.object1
    }

    pub fn second(&self) -> &T {
        &self.object2
    }

    pub fn into_values(self) -> (T, T) {
        (self.object1, self.object2)
    }

    /// The same pair with its elements swapped.
    pub fn reversed(self) -> Self {
        VertexPair {
            object1: self.object2,
            object2: self.object1,
        }
    }

    /// Borrows both elements, for probing a table keyed by owned pairs.
    pub fn as_ref(&self) -> VertexPair<&T> {
        VertexPair::new(&self.object1, &self.object2)
    }
}

impl<T: Eq> VertexPair<T> {
    pub fn is_self_pair(&self) -> bool {
        self.object1 == self.object2
    }

    pub fn has_both(&self, a: &T, b: &T) -> bool {
        (self.object1 == *a && self.object2 == *b) || (self.object1 == *b && self.object2 == *a)
    }

    /// Gets the element opposite `value`, or `None` if `value` is in neither
    /// position.  For a self-pair the opposite element is `value` itself.
    pub fn other(&self, value: &T) -> Option<&T> {
        if self.object1 == *value {
            Some(&self.object2)
        } else if self.object2 == *value {
            Some(&self.object1)
        } else {
            None
        }
    }
}

impl<T: Eq> VertexPair<&T> {
    /// Compares a borrowed pair against an owned one, ignoring order.
    pub fn matches(&self, other: &VertexPair<T>) -> bool {
        other.has_both(self.object1, self.object2)
    }
}

impl<T: Eq> PartialEq for VertexPair<T> {
    fn eq(&self, other: &Self) -> bool {
        self.has_both(&other.object1, &other.object2)
    }
}

impl<T: Eq> Eq for VertexPair<T> {}

impl<T: Hash + Eq> Hash for VertexPair<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let code = if self.is_self_pair() {
            element_code(&self.object1).wrapping_add(1)
        } else {
            element_code(&self.object1).wrapping_add(element_code(&self.object2))
        };
        state.write_u64(code);
    }
}

impl<T> From<(T, T)> for VertexPair<T> {
    fn from((a, b): (T, T)) -> Self {
        VertexPair::new(a, b)
    }
}

impl<T> From<VertexPair<T>> for (T, T) {
    fn from(pair: VertexPair<T>) -> Self {
        pair.into_values()
    }
}
