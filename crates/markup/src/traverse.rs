//! Pre-order traversal helpers over the tag tree.

use crate::types::Node;

/// Visits `root` and every descendant in pre-order: a node before its
/// children, children in document order. Each node is visited exactly
/// once (the tree is acyclic by construction).
pub fn walk<'a, F>(root: &'a Node, visit: &mut F)
where
    F: FnMut(&'a Node),
{
    visit(root);
    for child in &root.children {
        walk(child, visit);
    }
}

pub fn node_count(root: &Node) -> usize {
    let mut count = 0;
    walk(root, &mut |_| count += 1);
    count
}

pub fn find_by_id(root: &Node, id: u64) -> Option<&Node> {
    if root.id == id {
        return Some(root);
    }
    for child in &root.children {
        if let Some(found) = find_by_id(child, id) {
            return Some(found);
        }
    }
    None
}
