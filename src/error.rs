//! Error taxonomy shared by the list, queue and graph layers.
//!
//! Absent keys are never errors: lookups on missing vertices, edges or hash
//! keys return `None` (or do nothing, for mutators).  The variants here cover
//! misuse of a container and broken internal invariants.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// An operation was given a node key whose node no longer belongs to the
    /// list (it was removed, or the key came from another list).
    #[error("{operation}() called on invalid node")]
    InvalidNode { operation: &'static str },

    /// `dequeue` or `front` was called on an empty queue.
    #[error("{operation}() called on empty queue")]
    QueueEmpty { operation: &'static str },

    /// A structural invariant of a graph does not hold.
    #[error("graph invariant violated: {0}")]
    Inconsistent(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
