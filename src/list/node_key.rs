use std::{fmt::Debug, marker::PhantomData};

use derivative::Derivative;

use crate::{id_vec::IdVecKey, list_id::ListId};

/// Node handle for [`DList`](super::DList).
///
/// Contains the node's slot key and the identifier of the list that issued
/// it.  A key is only accepted by the list that issued it, and only until
/// the node is removed.
#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    Copy(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = ""),
    Hash(bound = "")
)]
pub struct NodeKey<T> {
    pub(super) key: IdVecKey,
    pub(super) list_id: ListId,
    pub(super) item: PhantomData<fn() -> T>,
}

impl<T> NodeKey<T> {
    pub(super) fn new(key: IdVecKey, list_id: ListId) -> Self {
        NodeKey {
            key,
            list_id,
            item: PhantomData,
        }
    }
}

impl<T> Debug for NodeKey<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeKey({:?}#{})", self.list_id, self.key.index())
    }
}
