//! Kruskal's minimum spanning tree algorithm.

use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::{
    Weight, WUGraph,
    disjoint_sets::DisjointSets,
    hash::HashTableChained,
    pair::VertexPair,
    queue::LinkedQueue,
    sort::quick_sort_by,
    tracing_support::{debug, info_span},
};

/// A weighted edge staged for sorting.
///
/// Two `KruskalEdge`s are equal when they join the same two vertices, in
/// either order; the weight is not compared.  Ordering by weight is
/// available through [`compare_weight`](Self::compare_weight).
#[derive(Clone, Debug)]
pub struct KruskalEdge<V> {
    pub object1: V,
    pub object2: V,
    pub weight: Weight,
}

impl<V> KruskalEdge<V> {
    pub fn new(object1: V, object2: V, weight: Weight) -> Self {
        KruskalEdge {
            object1,
            object2,
            weight,
        }
    }

    pub fn compare_weight(&self, other: &Self) -> Ordering {
        self.weight.cmp(&other.weight)
    }

    fn pair(&self) -> VertexPair<&V> {
        VertexPair::new(&self.object1, &self.object2)
    }
}

impl<V: Eq> PartialEq for KruskalEdge<V> {
    fn eq(&self, other: &Self) -> bool {
        self.pair() == other.pair()
    }
}

impl<V: Eq> Eq for KruskalEdge<V> {}

impl<V: Hash + Eq> Hash for KruskalEdge<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pair().hash(state);
    }
}

/// Computes a minimum spanning forest of `g`: a graph with the same
/// vertices and a minimum-weight subset of its edges that connects each of
/// its connected components.  `g` is not modified.
///
/// Pivots for the edge sort are drawn from a generator seeded from the
/// operating system; use [`min_span_tree_with_rng`] for reproducible runs.
pub fn min_span_tree<V>(g: &WUGraph<V>) -> WUGraph<V>
where
    V: Hash + Eq + Clone,
{
    min_span_tree_with_rng(g, &mut SmallRng::from_entropy())
}

/// Like [`min_span_tree`], drawing quicksort pivots from `rng`.
pub fn min_span_tree_with_rng<V, R>(g: &WUGraph<V>, rng: &mut R) -> WUGraph<V>
where
    V: Hash + Eq + Clone,
    R: Rng + ?Sized,
{
    let _span = info_span!("min_span_tree").entered();

    let vertices = g.get_vertices();
    let mut min_tree = WUGraph::new();
    for v in &vertices {
        min_tree.add_vertex(v.clone());
    }

    // Every non-self edge is staged once from each endpoint; the second copy
    // is rejected by the union-find check.
    let mut positions = HashTableChained::with_size_estimate(vertices.len());
    let mut all_edges = LinkedQueue::new();
    {
        let _span = info_span!("collect_edges").entered();
        for (position, v) in vertices.iter().enumerate() {
            positions.insert(v.clone(), position);
            let Some(neighbors) = g.get_neighbors(v) else {
                continue;
            };
            for (neighbor, weight) in neighbors.iter() {
                all_edges.enqueue(KruskalEdge::new(v.clone(), neighbor.clone(), weight));
            }
        }
    }
    debug!(
        vertices = vertices.len(),
        candidates = all_edges.size(),
        "collected candidate edges"
    );

    {
        let _span = info_span!("sort_edges").entered();
        quick_sort_by(&mut all_edges, rng, KruskalEdge::compare_weight);
    }

    let _span = info_span!("select_edges").entered();
    let mut sets = DisjointSets::new(all_edges.size().max(vertices.len()));
    let position_of = |v: &V| positions.find(v).map(|entry| *entry.value());
    while let Ok(edge) = all_edges.dequeue() {
        let (Some(a), Some(b)) = (position_of(&edge.object1), position_of(&edge.object2)) else {
            continue;
        };
        let (root_a, root_b) = (sets.find(a), sets.find(b));
        if root_a != root_b {
            sets.union(root_a, root_b);
            min_tree.add_edge(&edge.object1, &edge.object2, edge.weight);
        }
    }
    debug!(edges = min_tree.edge_count(), "built spanning forest");

    min_tree
}
