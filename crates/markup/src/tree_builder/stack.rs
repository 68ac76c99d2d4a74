//! Stack of open tags used while the tree is under construction.

use crate::catalog::TagKind;

/// Entry for one currently-open tag: its arena slot plus payload kind.
///
/// Identity is index-based; the stack never owns a node and never
/// outlives the parse call that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct OpenTag {
    pub(crate) index: usize,
    pub(crate) kind: TagKind,
}

/// Deterministic push/pop stack; top = innermost open tag.
#[derive(Clone, Debug, Default)]
pub(crate) struct OpenStack {
    items: Vec<OpenTag>,
    max_depth: u32,
}

impl OpenStack {
    pub(crate) fn push(&mut self, entry: OpenTag) {
        self.items.push(entry);
        self.max_depth = self.max_depth.max(self.items.len() as u32);
    }

    pub(crate) fn pop(&mut self) -> Option<OpenTag> {
        self.items.pop()
    }

    pub(crate) fn current(&self) -> Option<OpenTag> {
        self.items.last().copied()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn max_depth(&self) -> u32 {
        self.max_depth
    }
}
