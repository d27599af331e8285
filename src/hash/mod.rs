//! A dictionary implemented as a hash table with chaining.
//!
//! Keys are hashed with a [`BuildHasher`] into a signed 32-bit hash code,
//! which the table's compression function maps to a bucket.  Each bucket is a
//! [`DList`] of entries.  Duplicate keys are allowed: every `insert` creates a
//! new entry at the front of its chain, so the most recent entry for a key is
//! the one found first.

use std::{
    fmt::Debug,
    hash::{BuildHasher, BuildHasherDefault, DefaultHasher, Hash},
    mem,
};

use crate::{list::DList, tracing_support::debug};

mod config;
mod entry;

pub use config::{DEFAULT_BUCKETS, DEFAULT_MAX_LOAD_FACTOR, HashTableConfig};
pub use entry::Entry;

/// Hasher used when none is given.  Deterministic across runs, so bucket
/// layouts are reproducible.
pub type DeterministicState = BuildHasherDefault<DefaultHasher>;

// Multiply-add-divide constants for the compression function.
const MAD_SCALE: u64 = 65_324;
const MAD_SHIFT: u64 = 576_546;
const MAD_PRIME: u64 = 16_908_799;

pub struct HashTableChained<K, V, S = DeterministicState> {
    buckets: Vec<DList<Entry<K, V>>>,
    num_entries: usize,
    config: HashTableConfig,
    hasher: S,
}

impl<K, V> HashTableChained<K, V> {
    /// Creates an empty table with [`DEFAULT_BUCKETS`] buckets.
    pub fn new() -> Self {
        Self::with_config(HashTableConfig::default())
    }

    /// Creates an empty table intended to hold roughly `size_estimate`
    /// entries before its first resize.
    pub fn with_size_estimate(size_estimate: usize) -> Self {
        Self::with_config(HashTableConfig::for_size_estimate(size_estimate))
    }

    pub fn with_config(config: HashTableConfig) -> Self {
        Self::with_config_and_hasher(config, DeterministicState::default())
    }
}

impl<K, V, S> HashTableChained<K, V, S> {
    pub fn with_config_and_hasher(config: HashTableConfig, hasher: S) -> Self {
        let config = HashTableConfig::default()
            .with_initial_buckets(config.initial_buckets)
            .with_max_load_factor(config.max_load_factor);
        HashTableChained {
            buckets: fresh_buckets(config.initial_buckets),
            num_entries: 0,
            config,
            hasher,
        }
    }

    /// Gets the number of entries.  Entries with equal keys each count.
    pub fn size(&self) -> usize {
        self.num_entries
    }

    pub fn is_empty(&self) -> bool {
        self.num_entries == 0
    }

    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.num_entries as f64 / self.buckets.len() as f64
    }

    /// Maps a hash code in `i32::MIN..=i32::MAX` to a bucket index.  Negative
    /// codes are sign-flipped before mixing, so the result never depends on
    /// how `%` treats negative operands.
    pub fn comp_function(&self, code: i32) -> usize {
        let used_code = u64::from(code.unsigned_abs());
        let mixed = (MAD_SCALE * used_code + MAD_SHIFT) % MAD_PRIME;
        (mixed % self.buckets.len() as u64) as usize
    }

    /// Removes all entries.  The bucket count is unchanged.
    pub fn make_empty(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.num_entries = 0;
    }

    /// Gets an iterator over all entries, in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry<K, V>> {
        self.buckets.iter().flat_map(DList::iter)
    }
}

impl<K, V, S> HashTableChained<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Gets the signed 32-bit hash code of `probe`: the high and low words of
    /// the 64-bit hash, xored together.
    pub fn hash_code<Q: Hash + ?Sized>(&self, probe: &Q) -> i32 {
        let hash = self.hasher.hash_one(probe);
        ((hash >> 32) ^ hash) as u32 as i32
    }

    fn bucket_for<Q: Hash + ?Sized>(&self, probe: &Q) -> usize {
        self.comp_function(self.hash_code(probe))
    }

    /// Creates a new entry for `key` and `value`.  Existing entries with the
    /// same key are kept; the new one shadows them.  May trigger a resize.
    pub fn insert(&mut self, key: K, value: V) {
        let bucket = self.bucket_for(&key);
        self.buckets[bucket].insert_front(Entry::new(key, value));
        self.num_entries += 1;
        self.resize_table();
    }

    /// Finds an entry for `key`.  If several exist, the most recently
    /// inserted is returned.
    pub fn find(&self, key: &K) -> Option<&Entry<K, V>> {
        self.find_by(key, |candidate| candidate == key)
    }

    pub fn find_mut(&mut self, key: &K) -> Option<&mut Entry<K, V>> {
        self.find_mut_by(key, |candidate| candidate == key)
    }

    /// Removes and returns an entry for `key`, the most recently inserted one
    /// if several exist.
    pub fn remove(&mut self, key: &K) -> Option<Entry<K, V>> {
        self.remove_by(key, |candidate| candidate == key)
    }

    /// Finds an entry using a probe that hashes exactly like the stored key
    /// it should match, and a predicate deciding the match.  Lets callers
    /// look up owned keys through borrowed views without building a key.
    pub fn find_by<Q: Hash + ?Sized>(
        &self,
        probe: &Q,
        mut is_match: impl FnMut(&K) -> bool,
    ) -> Option<&Entry<K, V>> {
        self.buckets[self.bucket_for(probe)]
            .iter()
            .find(|entry| is_match(entry.key()))
    }

    pub fn find_mut_by<Q: Hash + ?Sized>(
        &mut self,
        probe: &Q,
        mut is_match: impl FnMut(&K) -> bool,
    ) -> Option<&mut Entry<K, V>> {
        let bucket = self.bucket_for(probe);
        let chain = &mut self.buckets[bucket];
        let node = chain
            .keys()
            .find(|&node| chain.item(node).is_ok_and(|entry| is_match(entry.key())))?;
        chain.item_mut(node).ok()
    }

    pub fn remove_by<Q: Hash + ?Sized>(
        &mut self,
        probe: &Q,
        mut is_match: impl FnMut(&K) -> bool,
    ) -> Option<Entry<K, V>> {
        let bucket = self.bucket_for(probe);
        let chain = &mut self.buckets[bucket];
        let node = chain
            .keys()
            .find(|&node| chain.item(node).is_ok_and(|entry| is_match(entry.key())))?;
        let entry = chain.remove(node).ok()?;
        self.num_entries -= 1;
        Some(entry)
    }

    /// Doubles the bucket count and rehashes every entry if the load factor
    /// exceeds the configured maximum.  Returns whether a resize happened.
    /// Chains are drained back to front so duplicate keys keep their
    /// most-recent-first order.
    pub fn resize_table(&mut self) -> bool {
        if self.load_factor() <= self.config.max_load_factor {
            return false;
        }
        let old_buckets = self.buckets.len();
        let old = mem::replace(&mut self.buckets, fresh_buckets(old_buckets * 2));
        for mut chain in old {
            while let Some(entry) = chain.pop_back() {
                let bucket = self.bucket_for(entry.key());
                self.buckets[bucket].insert_front(entry);
            }
        }
        debug!(
            entries = self.num_entries,
            old_buckets,
            new_buckets = self.buckets.len(),
            "resized hash table"
        );
        true
    }
}

fn fresh_buckets<T>(count: usize) -> Vec<DList<T>> {
    (0..count).map(|_| DList::new()).collect()
}

impl<K, V> Default for HashTableChained<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Debug, V: Debug, S> Debug for HashTableChained<K, V, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|entry| (entry.key(), entry.value())))
            .finish()
    }
}
