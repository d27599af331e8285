#![cfg(test)]

use std::{cell::Cell, rc::Rc};

use quickcheck::{Arbitrary, Gen};

use crate::{Weight, WUGraph};

/// Counts how many `Tracked` values it handed out have been dropped.
#[derive(Clone)]
pub struct DropCounter {
    count: Rc<Cell<usize>>,
}

impl DropCounter {
    pub fn new() -> Self {
        DropCounter {
            count: Rc::new(Cell::new(0)),
        }
    }

    pub fn drop_count(&self) -> usize {
        self.count.get()
    }

    pub fn track(&self, value: u32) -> Tracked {
        Tracked {
            value,
            count: Rc::clone(&self.count),
        }
    }
}

#[derive(Debug)]
pub struct Tracked {
    pub value: u32,
    count: Rc<Cell<usize>>,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.count.set(self.count.get() + 1);
    }
}

/// Vertices are drawn from a small domain so that random operations hit
/// existing vertices and edges often.
const VERTEX_DOMAIN: u8 = 12;

/// A single public mutation of a `WUGraph<u8>`.
#[derive(Clone, Debug)]
pub enum GraphOp {
    AddVertex(u8),
    RemoveVertex(u8),
    AddEdge(u8, u8, Weight),
    RemoveEdge(u8, u8),
}

impl GraphOp {
    pub fn apply(&self, graph: &mut WUGraph<u8>) {
        match *self {
            GraphOp::AddVertex(v) => graph.add_vertex(v),
            GraphOp::RemoveVertex(v) => graph.remove_vertex(&v),
            GraphOp::AddEdge(u, v, w) => graph.add_edge(&u, &v, w),
            GraphOp::RemoveEdge(u, v) => graph.remove_edge(&u, &v),
        }
    }
}

fn arbitrary_vertex(g: &mut Gen) -> u8 {
    u8::arbitrary(g) % VERTEX_DOMAIN
}

fn arbitrary_weight(g: &mut Gen) -> Weight {
    i32::from(i8::arbitrary(g))
}

impl Arbitrary for GraphOp {
    fn arbitrary(g: &mut Gen) -> Self {
        // Additions are weighted up so graphs do not stay empty.
        match u8::arbitrary(g) % 8 {
            0..=2 => GraphOp::AddVertex(arbitrary_vertex(g)),
            3 => GraphOp::RemoveVertex(arbitrary_vertex(g)),
            4..=6 => GraphOp::AddEdge(arbitrary_vertex(g), arbitrary_vertex(g), arbitrary_weight(g)),
            _ => GraphOp::RemoveEdge(arbitrary_vertex(g), arbitrary_vertex(g)),
        }
    }
}

/// A random graph described by its vertex set and a list of weighted edges.
/// Edges may repeat (later weights win) and may be self-edges.
#[derive(Clone, Debug)]
pub struct ArbGraph {
    pub vertices: Vec<u8>,
    pub edges: Vec<(u8, u8, Weight)>,
}

impl ArbGraph {
    pub fn build(&self) -> WUGraph<u8> {
        let mut graph = WUGraph::new();
        for &v in &self.vertices {
            graph.add_vertex(v);
        }
        for &(u, v, w) in &self.edges {
            graph.add_edge(&u, &v, w);
        }
        graph
    }
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % usize::from(VERTEX_DOMAIN) + 1;
        let vertices: Vec<u8> = (0..num_vertices as u8).collect();
        let num_edges = usize::arbitrary(g) % (num_vertices * 3 + 1);
        let edges = (0..num_edges)
            .map(|_| {
                let u = u8::arbitrary(g) % num_vertices as u8;
                let v = u8::arbitrary(g) % num_vertices as u8;
                (u, v, arbitrary_weight(g))
            })
            .collect();
        ArbGraph { vertices, edges }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let vertices = self.vertices.clone();
        Box::new(self.edges.shrink().map(move |edges| ArbGraph {
            vertices: vertices.clone(),
            edges,
        }))
    }
}
