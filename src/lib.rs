pub mod disjoint_sets;
pub mod error;
pub mod graph;
pub mod hash;
pub mod kruskal;
pub mod list;
pub mod pair;
pub mod queue;
pub mod sort;
pub mod tracing_support;

mod id_vec;
mod list_id;

#[cfg(test)]
mod test_util;

pub use error::{Error, Result};
pub use graph::{Neighbors, WUGraph, Weight};
pub use kruskal::{min_span_tree, min_span_tree_with_rng};
