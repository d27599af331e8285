/// A key/value pair stored in a [`HashTableChained`](super::HashTableChained).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    pub(super) fn new(key: K, value: V) -> Self {
        Entry { key, value }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}
