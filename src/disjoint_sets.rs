//! Disjoint sets (union-find) over the integers `0..n`.
//!
//! Each element's slot holds either its parent, or, for a root, the negated
//! height of its tree minus one.  `union` joins by height and `find`
//! compresses paths.

#[derive(Clone, Debug)]
pub struct DisjointSets {
    array: Vec<isize>,
}

impl DisjointSets {
    /// Creates `num_elements` singleton sets.
    pub fn new(num_elements: usize) -> Self {
        DisjointSets {
            array: vec![-1; num_elements],
        }
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Merges the sets named by two distinct roots.  The shorter tree goes
    /// under the taller one.
    ///
    /// # Panics
    ///
    /// Panics if either argument is out of range.
    pub fn union(&mut self, root1: usize, root2: usize) {
        debug_assert!(self.array[root1] < 0, "{root1} is not a root");
        debug_assert!(self.array[root2] < 0, "{root2} is not a root");
        if root1 == root2 {
            return;
        }
        if self.array[root2] < self.array[root1] {
            // root2 is taller.
            self.array[root1] = root2 as isize;
        } else {
            if self.array[root1] == self.array[root2] {
                self.array[root1] -= 1;
            }
            self.array[root2] = root1 as isize;
        }
    }

    /// Gets the root of the set containing `x`, pointing every element on the
    /// way directly at it.
    ///
    /// # Panics
    ///
    /// Panics if `x` is out of range.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.array[root] >= 0 {
            root = self.array[root] as usize;
        }
        let mut current = x;
        while current != root {
            let parent = self.array[current] as usize;
            self.array[current] = root as isize;
            current = parent;
        }
        root
    }
}
