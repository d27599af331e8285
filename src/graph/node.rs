use derivative::Derivative;

use crate::{Weight, list::DList, list::NodeKey, pair::VertexPair};

pub(crate) type VertexKey<V> = NodeKey<VertexRecord<V>>;
pub(crate) type EdgeKey<V> = NodeKey<EdgeRecord<V>>;

/// Payload of a node in the vertex list: the application's vertex and the
/// edge nodes incident on it.
pub(crate) struct VertexRecord<V> {
    pub(crate) vertex: V,
    pub(crate) adjacency: DList<EdgeRecord<V>>,
}

impl<V> VertexRecord<V> {
    pub(crate) fn new(vertex: V) -> Self {
        VertexRecord {
            vertex,
            adjacency: DList::new(),
        }
    }
}

/// Payload of a node in an adjacency list.
///
/// `pair` is ordered as seen from the owning vertex: its first element is
/// the vertex whose adjacency list holds this node.  A non-self edge has two
/// such nodes, each naming the other as `partner`; a self-edge has one node
/// that is its own partner.
pub(crate) struct EdgeRecord<V> {
    pub(crate) pair: VertexPair<V>,
    pub(crate) weight: Weight,
    pub(crate) partner: Option<EdgeRef<V>>,
    pub(crate) endpoint_a: VertexKey<V>,
    pub(crate) endpoint_b: VertexKey<V>,
}

impl<V> EdgeRecord<V> {
    pub(crate) fn new(
        pair: VertexPair<V>,
        weight: Weight,
        endpoint_a: VertexKey<V>,
        endpoint_b: VertexKey<V>,
    ) -> Self {
        EdgeRecord {
            pair,
            weight,
            partner: None,
            endpoint_a,
            endpoint_b,
        }
    }

    pub(crate) fn is_self_edge(&self) -> bool {
        self.endpoint_a == self.endpoint_b
    }
}

/// Locates an edge node: the vertex node owning the adjacency list, and the
/// node within it.
#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    Copy(bound = ""),
    Debug(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
pub(crate) struct EdgeRef<V> {
    pub(crate) vertex: VertexKey<V>,
    pub(crate) node: EdgeKey<V>,
}

impl<V> EdgeRef<V> {
    pub(crate) fn new(vertex: VertexKey<V>, node: EdgeKey<V>) -> Self {
        EdgeRef { vertex, node }
    }
}
