use std::{
    fmt::{Debug, Formatter},
    hash::Hash,
};

use super::WUGraph;
use crate::{Weight, hash::HashTableChained};

struct NodeTag(usize);

impl Debug for NodeTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

struct EdgeTag(usize, usize);

impl Debug for EdgeTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (t1, t2) = if self.0 <= self.1 {
            (self.0, self.1)
        } else {
            (self.1, self.0)
        };
        write!(f, "{} -- {}", t1, t2)
    }
}

struct NodeDebug<'a, V>(&'a [V]);

impl<V: Debug> Debug for NodeDebug<'_, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.0.iter().enumerate().map(|(i, v)| (NodeTag(i), v)))
            .finish()
    }
}

struct EdgeDebug<'a>(&'a [(EdgeTag, Weight)]);

impl Debug for EdgeDebug<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.0.iter().map(|(tag, weight)| (tag, weight)))
            .finish()
    }
}

/// Formats a graph with its vertices numbered in insertion order and its
/// edges labeled by those numbers, e.g.
/// `WUGraph { nodes: {0: "a", 1: "b"}, edges: {0 -- 1: 5} }`.
pub(super) fn format_debug<V>(graph: &WUGraph<V>, f: &mut Formatter<'_>) -> std::fmt::Result
where
    V: Debug + Hash + Eq + Clone,
{
    let vertices = graph.get_vertices();
    let mut tags = HashTableChained::with_size_estimate(vertices.len());
    for (i, v) in vertices.iter().enumerate() {
        tags.insert(v, i);
    }
    let tag_of = |v: &V| tags.find(&v).map(|entry| *entry.value());
    let edges: Vec<_> = graph
        .edges()
        .into_iter()
        .filter_map(|(u, v, weight)| Some((EdgeTag(tag_of(&u)?, tag_of(&v)?), weight)))
        .collect();
    f.debug_struct("WUGraph")
        .field("nodes", &NodeDebug(&vertices))
        .field("edges", &EdgeDebug(&edges))
        .finish()
}
