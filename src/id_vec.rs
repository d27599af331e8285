use std::mem::MaybeUninit;

use bitvec::vec::BitVec;

/// A key into an `IdVec`.  A key stays valid until the value it names is
/// removed; after that the slot's generation moves on and the key is rejected
/// forever, even if the slot is reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdVecKey {
    index: usize,
    generation: u32,
}

impl IdVecKey {
    pub fn index(self) -> usize {
        self.index
    }
}

/// Slot storage that hands out stable generational keys.  Internally uses a
/// `Vec<MaybeUninit<T>>` for values, a `BitVec` to track live slots, and a
/// generation counter per slot.  Freed slots are reused in LIFO order.
pub struct IdVec<T> {
    vec: Vec<MaybeUninit<T>>,
    liveness: BitVec,
    generations: Vec<u32>,
    free: Vec<usize>,
    len: usize,
}

impl<T> IdVec<T> {
    /// Creates a new, empty IdVec.
    pub fn new() -> Self {
        IdVec {
            vec: Vec::new(),
            liveness: BitVec::new(),
            generations: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Gets the number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a new value, returning its key.
    pub fn insert(&mut self, value: T) -> IdVecKey {
        debug_assert_eq!(self.vec.len(), self.liveness.len());
        debug_assert_eq!(self.vec.len(), self.generations.len());
        self.len += 1;
        if let Some(index) = self.free.pop() {
            self.vec[index] = MaybeUninit::new(value);
            self.liveness.set(index, true);
            IdVecKey {
                index,
                generation: self.generations[index],
            }
        } else {
            let index = self.vec.len();
            self.vec.push(MaybeUninit::new(value));
            self.liveness.push(true);
            self.generations.push(0);
            IdVecKey {
                index,
                generation: 0,
            }
        }
    }

    /// Checks whether `key` names a live value.
    pub fn contains(&self, key: IdVecKey) -> bool {
        key.index < self.liveness.len()
            && self.liveness[key.index]
            && self.generations[key.index] == key.generation
    }

    /// Removes the value at the given key, returning it if it exists.
    pub fn remove(&mut self, key: IdVecKey) -> Option<T> {
        if !self.contains(key) {
            return None;
        }
        self.liveness.set(key.index, false);
        self.generations[key.index] = self.generations[key.index].wrapping_add(1);
        self.free.push(key.index);
        self.len -= 1;
        // SAFETY: The slot was live, and is now marked dead, so the value is
        // read out exactly once.
        Some(unsafe { self.vec[key.index].assume_init_read() })
    }

    /// Gets a reference to the value at the given key, if it exists.
    pub fn get(&self, key: IdVecKey) -> Option<&T> {
        if self.contains(key) {
            // SAFETY: Live slots are always initialized.
            Some(unsafe { self.vec[key.index].assume_init_ref() })
        } else {
            None
        }
    }

    /// Gets a mutable reference to the value at the given key, if it exists.
    pub fn get_mut(&mut self, key: IdVecKey) -> Option<&mut T> {
        if self.contains(key) {
            // SAFETY: Live slots are always initialized.
            Some(unsafe { self.vec[key.index].assume_init_mut() })
        } else {
            None
        }
    }

    /// Drops every live value and invalidates every outstanding key.
    /// Capacity is retained.
    pub fn clear(&mut self) {
        for index in self.liveness.iter_ones().collect::<Vec<_>>() {
            // SAFETY: `index` is live.
            unsafe { self.vec[index].assume_init_drop() };
            self.liveness.set(index, false);
            self.generations[index] = self.generations[index].wrapping_add(1);
            self.free.push(index);
        }
        self.len = 0;
    }
}

impl<T> Default for IdVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for IdVec<T> {
    fn drop(&mut self) {
        for index in self.liveness.iter_ones() {
            // SAFETY: `index` is live, and the IdVec is going away.
            unsafe { self.vec[index].assume_init_drop() };
        }
    }
}
