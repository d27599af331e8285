/// Bucket count used by [`HashTableChained::new`](super::HashTableChained::new).
pub const DEFAULT_BUCKETS: usize = 5;

/// Load factor above which the table doubles its bucket count.
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.85;

/// Construction parameters for a [`HashTableChained`](super::HashTableChained).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HashTableConfig {
    pub initial_buckets: usize,
    pub max_load_factor: f64,
}

impl HashTableConfig {
    /// Sets the initial bucket count.  Zero is raised to one.
    pub fn with_initial_buckets(mut self, initial_buckets: usize) -> Self {
        self.initial_buckets = initial_buckets.max(1);
        self
    }

    /// Sets the resize threshold.  Non-positive or NaN thresholds fall back
    /// to the default.
    pub fn with_max_load_factor(mut self, max_load_factor: f64) -> Self {
        self.max_load_factor = if max_load_factor > 0.0 {
            max_load_factor
        } else {
            DEFAULT_MAX_LOAD_FACTOR
        };
        self
    }

    /// A configuration sized to hold roughly `size_estimate` entries without
    /// resizing.
    pub fn for_size_estimate(size_estimate: usize) -> Self {
        let buckets = (size_estimate as f64 / DEFAULT_MAX_LOAD_FACTOR) as usize;
        Self::default().with_initial_buckets(buckets)
    }
}

impl Default for HashTableConfig {
    fn default() -> Self {
        HashTableConfig {
            initial_buckets: DEFAULT_BUCKETS,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
        }
    }
}
