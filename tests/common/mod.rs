#![allow(dead_code)]

use std::hash::Hash;

use wugraph::{WUGraph, Weight};

/// Builds a graph from a vertex list and `(u, v, weight)` triples.
pub fn graph_from<V>(vertices: &[V], edges: &[(V, V, Weight)]) -> WUGraph<V>
where
    V: Hash + Eq + Clone,
{
    let mut graph = WUGraph::new();
    for v in vertices {
        graph.add_vertex(v.clone());
    }
    for (u, v, weight) in edges {
        graph.add_edge(u, v, *weight);
    }
    graph
}

/// Gets the edges of `graph` with each pair's endpoints in ascending order,
/// sorted, so graphs can be compared regardless of insertion history.
pub fn normalized_edges<V>(graph: &WUGraph<V>) -> Vec<(V, V, Weight)>
where
    V: Hash + Ord + Clone,
{
    let mut edges: Vec<_> = graph
        .edges()
        .into_iter()
        .map(|(u, v, w)| if u <= v { (u, v, w) } else { (v, u, w) })
        .collect();
    edges.sort();
    edges
}

/// A `rows` by `cols` grid where every horizontal edge weighs 1 and every
/// vertical edge weighs 2.
pub fn grid(rows: u32, cols: u32) -> WUGraph<(u32, u32)> {
    let mut graph = WUGraph::new();
    for r in 0..rows {
        for c in 0..cols {
            graph.add_vertex((r, c));
        }
    }
    for r in 0..rows {
        for c in 0..cols {
            if c + 1 < cols {
                graph.add_edge(&(r, c), &(r, c + 1), 1);
            }
            if r + 1 < rows {
                graph.add_edge(&(r, c), &(r + 1, c), 2);
            }
        }
    }
    graph
}
