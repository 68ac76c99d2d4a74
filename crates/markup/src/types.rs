//! Owned tag tree.

use crate::catalog::TagKind;

/// One parsed tag occurrence.
///
/// Children are exclusively owned and kept in document order. The tree
/// is the sole owner of every payload: nodes are never dropped
/// individually while still linked, only with the whole tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    /// Value of the `id` attribute on the opening tag; 0 when absent.
    pub id: u64,
    pub kind: TagKind,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(id: u64, kind: TagKind) -> Self {
        Self {
            id,
            kind,
            children: Vec::new(),
        }
    }
}
