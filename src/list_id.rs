use std::sync::atomic::{AtomicUsize, Ordering};

/// A global list identifier counter.  We assume no two lists will have the
/// same identifier; wrapping around would take 2^64 list constructions, and
/// the only impact would be that a key from one list might be accepted by
/// another with the same slot and generation.
static LIST_ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A unique identifier for a list instance.  Node keys carry the identifier
/// of the list that issued them.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct ListId(usize);

impl ListId {
    /// Create a new unique list identifier.
    pub fn new() -> Self {
        ListId(LIST_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}
