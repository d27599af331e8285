//! A weighted undirected graph with O(1) vertex and edge operations.
//!
//! Vertices are application objects.  The graph keeps a list of vertex
//! nodes, in insertion order, and gives each one an adjacency list of edge
//! nodes.  Two hash tables make lookups constant time: one maps a vertex to
//! its vertex node, the other maps an unordered vertex pair to one of the
//! edge's nodes.  A non-self edge `(u, v)` is stored as two edge nodes, one
//! in each endpoint's adjacency list, that refer to each other as partners.
//! A self-edge is stored once.

#[cfg(feature = "pathfinding")]
use std::collections::HashSet;
use std::{fmt::Debug, hash::Hash};

use crate::{
    error::{Error, Result},
    hash::HashTableChained,
    list::DList,
    pair::VertexPair,
    tracing_support::{debug, error},
};

mod debug;
mod node;

use node::{EdgeRecord, EdgeRef, VertexKey, VertexRecord};

/// Edge weight.
pub type Weight = i32;

/// The neighbors of one vertex, with the weight of the edge leading to
/// each, in adjacency order.  The two lists have equal length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Neighbors<V> {
    pub neighbor_list: Vec<V>,
    pub weight_list: Vec<Weight>,
}

impl<V> Neighbors<V> {
    pub fn len(&self) -> usize {
        self.neighbor_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbor_list.is_empty()
    }

    /// Gets an iterator over `(neighbor, weight)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&V, Weight)> {
        self.neighbor_list
            .iter()
            .zip(self.weight_list.iter().copied())
    }
}

/// A weighted, undirected graph without parallel edges.  Self-edges are
/// allowed.
///
/// Queries on vertices or edges that do not exist return `None`, zero or
/// `false`, and mutators given them do nothing.
///
/// # Type Parameters
/// * `V` - The vertex type.  Vertices are compared with `Eq` and hashed
///   with `Hash`; the graph stores clones of the vertices it is given.
pub struct WUGraph<V> {
    vertex_index: HashTableChained<V, VertexKey<V>>,
    edge_index: HashTableChained<VertexPair<V>, EdgeRef<V>>,
    vertex_list: DList<VertexRecord<V>>,
}

impl<V> WUGraph<V> {
    pub fn new() -> Self {
        WUGraph {
            vertex_index: HashTableChained::new(),
            edge_index: HashTableChained::new(),
            vertex_list: DList::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_list.len()
    }

    /// Gets the number of edges.  Each undirected edge, self-edges included,
    /// counts once.
    pub fn edge_count(&self) -> usize {
        self.edge_index.size()
    }

    fn adjacency_mut(&mut self, vertex: VertexKey<V>) -> Result<&mut DList<EdgeRecord<V>>> {
        Ok(&mut self.vertex_list.item_mut(vertex)?.adjacency)
    }

    fn edge_record(&self, edge: EdgeRef<V>) -> Result<&EdgeRecord<V>> {
        self.vertex_list.item(edge.vertex)?.adjacency.item(edge.node)
    }

    fn edge_record_mut(&mut self, edge: EdgeRef<V>) -> Result<&mut EdgeRecord<V>> {
        self.adjacency_mut(edge.vertex)?.item_mut(edge.node)
    }
}

impl<V> WUGraph<V>
where
    V: Hash + Eq + Clone,
{
    fn vertex_key(&self, v: &V) -> Option<VertexKey<V>> {
        self.vertex_index.find(v).map(|entry| *entry.value())
    }

    fn edge_ref(&self, u: &V, v: &V) -> Option<EdgeRef<V>> {
        let probe = VertexPair::new(u, v);
        self.edge_index
            .find_by(&probe, |key| probe.matches(key))
            .map(|entry| *entry.value())
    }

    /// Gets a snapshot of the vertices, in insertion order.
    pub fn get_vertices(&self) -> Vec<V> {
        self.vertex_list
            .iter()
            .map(|record| record.vertex.clone())
            .collect()
    }

    /// Adds `v` as a vertex with no edges.  Does nothing if `v` is already a
    /// vertex.
    pub fn add_vertex(&mut self, v: V) {
        if self.vertex_index.find(&v).is_some() {
            return;
        }
        let key = self.vertex_list.insert_back(VertexRecord::new(v.clone()));
        self.vertex_index.insert(v, key);
        debug!(vertices = self.vertex_count(), "added vertex");
    }

    /// Removes `v` and every edge incident on it.  Does nothing if `v` is not
    /// a vertex.
    pub fn remove_vertex(&mut self, v: &V) {
        let Some(key) = self.vertex_key(v) else {
            return;
        };
        if let Err(err) = self.try_remove_vertex(key) {
            error!(%err, "remove_vertex aborted");
        }
    }

    fn try_remove_vertex(&mut self, key: VertexKey<V>) -> Result<()> {
        let mut degree = 0usize;
        while let Some(node) = self.vertex_list.item(key)?.adjacency.front() {
            self.remove_edge_nodes(EdgeRef::new(key, node))?;
            degree += 1;
        }
        let record = self.vertex_list.remove(key)?;
        self.vertex_index.remove(&record.vertex);
        debug!(
            degree,
            vertices = self.vertex_count(),
            edges = self.edge_count(),
            "removed vertex"
        );
        Ok(())
    }

    pub fn is_vertex(&self, v: &V) -> bool {
        self.vertex_index.find(v).is_some()
    }

    /// Gets the number of edges incident on `v`, or zero if `v` is not a
    /// vertex.  A self-edge counts once.
    pub fn degree(&self, v: &V) -> usize {
        self.vertex_key(v)
            .and_then(|key| self.vertex_list.item(key).ok())
            .map_or(0, |record| record.adjacency.len())
    }

    /// Gets the neighbors of `v` and the weights of the edges connecting
    /// them.  Returns `None` if `v` is not a vertex or has no edges.  A
    /// vertex with a self-edge is its own neighbor.
    pub fn get_neighbors(&self, v: &V) -> Option<Neighbors<V>> {
        let record = self.vertex_list.item(self.vertex_key(v)?).ok()?;
        if record.adjacency.is_empty() {
            return None;
        }
        self.neighbors_of(record)
            .inspect_err(|err| error!(%err, "get_neighbors failed"))
            .ok()
    }

    fn neighbors_of(&self, record: &VertexRecord<V>) -> Result<Neighbors<V>> {
        let mut neighbors = Neighbors {
            neighbor_list: Vec::with_capacity(record.adjacency.len()),
            weight_list: Vec::with_capacity(record.adjacency.len()),
        };
        for edge in &record.adjacency {
            let other = self.vertex_list.item(edge.endpoint_b)?;
            neighbors.neighbor_list.push(other.vertex.clone());
            neighbors.weight_list.push(edge.weight);
        }
        Ok(neighbors)
    }

    /// Adds an edge between `u` and `v` with the given weight, or, if the
    /// edge already exists, changes its weight.  Does nothing if either `u`
    /// or `v` is not a vertex.  `u` and `v` may be equal.
    pub fn add_edge(&mut self, u: &V, v: &V, weight: Weight) {
        if let Err(err) = self.try_add_edge(u, v, weight) {
            error!(%err, "add_edge aborted");
        }
    }

    fn try_add_edge(&mut self, u: &V, v: &V, weight: Weight) -> Result<()> {
        if let Some(edge) = self.edge_ref(u, v) {
            let record = self.edge_record_mut(edge)?;
            record.weight = weight;
            if let Some(partner) = record.partner.filter(|&partner| partner != edge) {
                self.edge_record_mut(partner)?.weight = weight;
            }
            debug!(weight, "reweighted edge");
            return Ok(());
        }
        let (Some(u_key), Some(v_key)) = (self.vertex_key(u), self.vertex_key(v)) else {
            return Ok(());
        };

        let pair = VertexPair::new(u.clone(), v.clone());
        let node = self.adjacency_mut(u_key)?.insert_back(EdgeRecord::new(
            pair.clone(),
            weight,
            u_key,
            v_key,
        ));
        let primary = EdgeRef::new(u_key, node);
        self.edge_index.insert(pair.clone(), primary);

        if u_key == v_key {
            self.edge_record_mut(primary)?.partner = Some(primary);
        } else {
            let node = self.adjacency_mut(v_key)?.insert_back(EdgeRecord::new(
                pair.reversed(),
                weight,
                v_key,
                u_key,
            ));
            let secondary = EdgeRef::new(v_key, node);
            self.edge_record_mut(primary)?.partner = Some(secondary);
            self.edge_record_mut(secondary)?.partner = Some(primary);
        }
        debug!(weight, edges = self.edge_count(), "added edge");
        Ok(())
    }

    /// Removes the edge between `u` and `v`.  Does nothing if there is no
    /// such edge.
    pub fn remove_edge(&mut self, u: &V, v: &V) {
        let Some(edge) = self.edge_ref(u, v) else {
            return;
        };
        if let Err(err) = self.remove_edge_nodes(edge) {
            error!(%err, "remove_edge aborted");
            return;
        }
        debug!(edges = self.edge_count(), "removed edge");
    }

    /// Removes the edge node at `edge`, its partner if distinct, and the
    /// edge's index entry.
    fn remove_edge_nodes(&mut self, edge: EdgeRef<V>) -> Result<()> {
        let partner = self.edge_record(edge)?.partner;
        if let Some(partner) = partner.filter(|&partner| partner != edge) {
            self.adjacency_mut(partner.vertex)?.remove(partner.node)?;
        }
        let removed = self.adjacency_mut(edge.vertex)?.remove(edge.node)?;
        let probe = removed.pair.as_ref();
        self.edge_index.remove_by(&probe, |key| probe.matches(key));
        Ok(())
    }

    pub fn is_edge(&self, u: &V, v: &V) -> bool {
        self.edge_ref(u, v).is_some()
    }

    /// Gets the weight of the edge between `u` and `v`, or `None` if there is
    /// no such edge.
    pub fn weight(&self, u: &V, v: &V) -> Option<Weight> {
        let edge = self.edge_ref(u, v)?;
        self.edge_record(edge)
            .map(|record| record.weight)
            .inspect_err(|err| error!(%err, "weight lookup failed"))
            .ok()
    }

    /// Like [`weight`](Self::weight), but zero when there is no such edge.
    pub fn weight_or_zero(&self, u: &V, v: &V) -> Weight {
        self.weight(u, v).unwrap_or(0)
    }

    /// Gets a snapshot of the edges as `(u, v, weight)` triples, one per
    /// undirected edge.  Edges are grouped by the vertex they were first
    /// added from, in vertex insertion order, and `u` is that vertex.
    pub fn edges(&self) -> Vec<(V, V, Weight)> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for vertex in self.vertex_list.keys() {
            let Ok(record) = self.vertex_list.item(vertex) else {
                continue;
            };
            for node in record.adjacency.keys() {
                let Ok(edge) = record.adjacency.item(node) else {
                    continue;
                };
                let (u, v) = (edge.pair.first(), edge.pair.second());
                if self.edge_ref(u, v) == Some(EdgeRef::new(vertex, node)) {
                    edges.push((u.clone(), v.clone(), edge.weight));
                }
            }
        }
        edges
    }

    /// Gets the sum of all edge weights.
    pub fn total_weight(&self) -> i64 {
        self.edges()
            .iter()
            .map(|&(_, _, weight)| i64::from(weight))
            .sum()
    }

    /// Partitions the vertices into connected components.
    #[cfg(feature = "pathfinding")]
    pub fn connected_components(&self) -> Vec<HashSet<V>> {
        pathfinding::prelude::connected_components(&self.get_vertices(), |v| {
            self.get_neighbors(v)
                .map(|neighbors| neighbors.neighbor_list)
                .unwrap_or_default()
        })
    }

    /// Verifies the structural invariants tying the vertex list, the
    /// adjacency lists and both indexes together.
    pub fn check_invariants(&self) -> Result<()> {
        fn fail<T>(message: &str) -> Result<T> {
            Err(Error::Inconsistent(message.to_string()))
        }

        if self.vertex_index.size() != self.vertex_list.len() {
            return fail("vertex index size differs from vertex count");
        }

        let mut edge_nodes = 0usize;
        let mut self_edges = 0usize;
        for vertex in self.vertex_list.keys() {
            let record = self.vertex_list.item(vertex)?;
            if self.vertex_key(&record.vertex) != Some(vertex) {
                return fail("vertex not indexed to its node");
            }
            for node in record.adjacency.keys() {
                let here = EdgeRef::new(vertex, node);
                let edge = record.adjacency.item(node)?;
                if edge.endpoint_a != vertex || *edge.pair.first() != record.vertex {
                    return fail("edge node not owned by its first endpoint");
                }
                let Some(partner) = edge.partner else {
                    return fail("edge node has no partner");
                };
                if edge.is_self_edge() {
                    if partner != here || !edge.pair.is_self_pair() {
                        return fail("self-edge is not its own partner");
                    }
                    self_edges += 1;
                } else {
                    if partner.vertex != edge.endpoint_b {
                        return fail("partner not in the other endpoint's adjacency list");
                    }
                    let other = self
                        .edge_record(partner)
                        .or_else(|_| fail("partner node is not live"))?;
                    if other.partner != Some(here) {
                        return fail("partners do not refer to each other");
                    }
                    if other.weight != edge.weight {
                        return fail("partner weights differ");
                    }
                    if other.endpoint_a != edge.endpoint_b || other.endpoint_b != edge.endpoint_a {
                        return fail("partner endpoints are not swapped");
                    }
                }
                if self.edge_ref(edge.pair.first(), edge.pair.second()).is_none() {
                    return fail("edge not indexed");
                }
                edge_nodes += 1;
            }
        }

        let undirected_edges = self_edges + (edge_nodes - self_edges) / 2;
        if undirected_edges != self.edge_index.size() {
            return fail("edge index size differs from edge count");
        }
        for entry in self.edge_index.iter() {
            let record = self
                .edge_record(*entry.value())
                .or_else(|_| fail("edge index refers to a removed node"))?;
            if record.pair != *entry.key() {
                return fail("edge index key differs from its node's pair");
            }
        }
        Ok(())
    }
}

impl<V> Default for WUGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for WUGraph<V>
where
    V: Hash + Eq + Clone,
{
    fn clone(&self) -> Self {
        let mut copy = WUGraph::new();
        for v in self.get_vertices() {
            copy.add_vertex(v);
        }
        for (u, v, weight) in self.edges() {
            copy.add_edge(&u, &v, weight);
        }
        copy
    }
}

impl<V> Debug for WUGraph<V>
where
    V: Debug + Hash + Eq + Clone,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        debug::format_debug(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{ArbGraph, GraphOp};
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;
    use std::collections::{HashMap, HashSet};

    fn triangle() -> WUGraph<&'static str> {
        let mut graph = WUGraph::new();
        for v in ["a", "b", "c"] {
            graph.add_vertex(v);
        }
        graph.add_edge(&"a", &"b", 1);
        graph.add_edge(&"b", &"c", 2);
        graph.add_edge(&"c", &"a", 3);
        graph
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph: WUGraph<i32> = WUGraph::new();
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.get_vertices().is_empty());
        assert!(graph.edges().is_empty());
        assert_eq!(graph.check_invariants(), Ok(()));
    }

    #[test]
    fn test_add_vertex_is_idempotent() {
        let mut graph = WUGraph::new();
        graph.add_vertex("a");
        graph.add_vertex("a");
        assert_eq!(graph.vertex_count(), 1);
        assert!(graph.is_vertex(&"a"));
        assert!(!graph.is_vertex(&"b"));
        assert_eq!(graph.get_vertices(), vec!["a"]);
    }

    #[test]
    fn test_vertices_in_insertion_order() {
        let mut graph = WUGraph::new();
        for v in [5, 3, 9, 1] {
            graph.add_vertex(v);
        }
        graph.remove_vertex(&3);
        graph.add_vertex(3);
        assert_eq!(graph.get_vertices(), vec![5, 9, 1, 3]);
    }

    #[test]
    fn test_edges_are_symmetric() {
        let graph = triangle();
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.weight(&"a", &"b"), Some(1));
        assert_eq!(graph.weight(&"b", &"a"), Some(1));
        assert!(graph.is_edge(&"a", &"c"));
        assert!(graph.is_edge(&"c", &"a"));
        assert_eq!(graph.degree(&"b"), 2);
        assert_eq!(graph.check_invariants(), Ok(()));
    }

    #[test]
    fn test_add_edge_between_non_vertices_is_noop() {
        let mut graph = WUGraph::new();
        graph.add_vertex(1);
        graph.add_edge(&1, &2, 7);
        graph.add_edge(&3, &4, 7);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.degree(&1), 0);
        assert_eq!(graph.weight(&1, &2), None);
        assert_eq!(graph.weight_or_zero(&1, &2), 0);
    }

    #[test]
    fn test_readding_edge_updates_weight() {
        let mut graph = triangle();
        graph.add_edge(&"b", &"a", 10);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.weight(&"a", &"b"), Some(10));
        let neighbors = graph.get_neighbors(&"b").unwrap();
        assert!(neighbors.iter().any(|(&v, w)| v == "a" && w == 10));
        assert_eq!(graph.check_invariants(), Ok(()));
    }

    #[test]
    fn test_self_edge_counts_once() {
        let mut graph = WUGraph::new();
        graph.add_vertex('x');
        graph.add_edge(&'x', &'x', 4);
        assert_eq!(graph.degree(&'x'), 1);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.weight(&'x', &'x'), Some(4));
        let neighbors = graph.get_neighbors(&'x').unwrap();
        assert_eq!(neighbors.neighbor_list, vec!['x']);
        assert_eq!(neighbors.weight_list, vec![4]);
        graph.add_edge(&'x', &'x', 5);
        assert_eq!(graph.weight(&'x', &'x'), Some(5));
        assert_eq!(graph.check_invariants(), Ok(()));
        graph.remove_edge(&'x', &'x');
        assert_eq!(graph.degree(&'x'), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_get_neighbors() {
        let graph = triangle();
        let neighbors = graph.get_neighbors(&"a").unwrap();
        assert_eq!(neighbors.neighbor_list, vec!["b", "c"]);
        assert_eq!(neighbors.weight_list, vec![1, 3]);
        assert_eq!(neighbors.len(), 2);

        let mut graph = graph;
        graph.add_vertex("lonely");
        assert_eq!(graph.get_neighbors(&"lonely"), None);
        assert_eq!(graph.get_neighbors(&"missing"), None);
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = triangle();
        graph.remove_edge(&"b", &"a");
        assert!(!graph.is_edge(&"a", &"b"));
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.degree(&"a"), 1);
        assert_eq!(graph.degree(&"b"), 1);
        graph.remove_edge(&"b", &"a");
        graph.remove_edge(&"a", &"zzz");
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.check_invariants(), Ok(()));
    }

    #[test]
    fn test_remove_vertex_removes_incident_edges() {
        let mut graph = triangle();
        graph.add_edge(&"a", &"a", 9);
        graph.remove_vertex(&"a");
        assert!(!graph.is_vertex(&"a"));
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.is_edge(&"a", &"b"));
        assert_eq!(graph.get_neighbors(&"c").unwrap().neighbor_list, vec!["b"]);
        assert_eq!(graph.check_invariants(), Ok(()));
        graph.remove_vertex(&"a");
        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn test_edges_and_total_weight() {
        let graph = triangle();
        let edges: HashSet<_> = graph.edges().into_iter().collect();
        assert_eq!(
            edges,
            HashSet::from([("a", "b", 1), ("b", "c", 2), ("c", "a", 3)])
        );
        assert_eq!(graph.total_weight(), 6);
    }

    #[cfg(feature = "pathfinding")]
    #[test]
    fn test_connected_components() {
        let mut graph = triangle();
        graph.add_vertex("d");
        graph.add_vertex("e");
        graph.add_edge(&"d", &"e", 1);
        graph.add_vertex("f");
        let mut components: Vec<Vec<&str>> = graph
            .connected_components()
            .into_iter()
            .map(|component| {
                let mut component: Vec<_> = component.into_iter().collect();
                component.sort();
                component
            })
            .collect();
        components.sort();
        assert_eq!(
            components,
            vec![vec!["a", "b", "c"], vec!["d", "e"], vec!["f"]]
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let graph = triangle();
        let mut copy = graph.clone();
        copy.remove_vertex(&"a");
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(copy.edge_count(), 1);
        assert_eq!(copy.check_invariants(), Ok(()));
    }

    #[test]
    fn test_debug_output() {
        let mut graph = WUGraph::new();
        graph.add_vertex("a");
        graph.add_vertex("b");
        graph.add_edge(&"b", &"a", 5);
        assert_eq!(
            format!("{:?}", graph),
            r#"WUGraph { nodes: {0: "a", 1: "b"}, edges: {0 -- 1: 5} }"#
        );
    }

    #[quickcheck]
    fn prop_invariants_hold_after_any_ops(ops: Vec<GraphOp>) -> bool {
        let mut graph = WUGraph::new();
        for op in &ops {
            op.apply(&mut graph);
            if graph.check_invariants().is_err() {
                return false;
            }
        }
        true
    }

    #[quickcheck]
    fn prop_matches_model(ops: Vec<GraphOp>) -> TestResult {
        let mut graph = WUGraph::new();
        let mut vertices: Vec<u8> = Vec::new();
        let mut edges: HashMap<(u8, u8), Weight> = HashMap::new();
        let key = |u: u8, v: u8| (u.min(v), u.max(v));
        for op in &ops {
            op.apply(&mut graph);
            match *op {
                GraphOp::AddVertex(v) => {
                    if !vertices.contains(&v) {
                        vertices.push(v);
                    }
                }
                GraphOp::RemoveVertex(v) => {
                    vertices.retain(|&x| x != v);
                    edges.retain(|&(a, b), _| a != v && b != v);
                }
                GraphOp::AddEdge(u, v, w) => {
                    if vertices.contains(&u) && vertices.contains(&v) {
                        edges.insert(key(u, v), w);
                    }
                }
                GraphOp::RemoveEdge(u, v) => {
                    edges.remove(&key(u, v));
                }
            }
        }
        if graph.get_vertices() != vertices || graph.edge_count() != edges.len() {
            return TestResult::failed();
        }
        for (&(u, v), &w) in &edges {
            if graph.weight(&u, &v) != Some(w) || graph.weight(&v, &u) != Some(w) {
                return TestResult::failed();
            }
        }
        for &v in &vertices {
            let degree = edges.keys().filter(|&&(a, b)| a == v || b == v).count();
            if graph.degree(&v) != degree {
                return TestResult::failed();
            }
        }
        TestResult::passed()
    }

    #[quickcheck]
    fn prop_neighbors_agree_with_weight(arb: ArbGraph) -> bool {
        let graph = arb.build();
        graph.get_vertices().iter().all(|v| match graph.get_neighbors(v) {
            None => graph.degree(v) == 0,
            Some(neighbors) => {
                neighbors.len() == graph.degree(v)
                    && neighbors
                        .iter()
                        .all(|(neighbor, w)| graph.weight(v, neighbor) == Some(w))
            }
        })
    }

    #[quickcheck]
    fn prop_removed_vertex_leaves_no_edges(arb: ArbGraph, victim: u8) -> TestResult {
        let mut graph = arb.build();
        let vertices = graph.get_vertices();
        if vertices.is_empty() {
            return TestResult::discard();
        }
        let victim = vertices[usize::from(victim) % vertices.len()];
        let before = graph.vertex_count();
        graph.remove_vertex(&victim);
        TestResult::from_bool(
            !graph.is_vertex(&victim)
                && graph.vertex_count() == before - 1
                && graph
                    .edges()
                    .iter()
                    .all(|&(u, v, _)| u != victim && v != victim)
                && vertices.iter().all(|v| !graph.is_edge(v, &victim))
                && graph.check_invariants().is_ok(),
        )
    }
}
