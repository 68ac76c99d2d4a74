//! Tree builder: consumes tag tokens and produces a single rooted tree.
//!
//! The builder owns all construction state: a node arena with index
//! child lists and the stack of open tags. Nodes live in the arena
//! while parsing is in progress and ownership moves into the final
//! tree only when the whole document has validated, so no caller ever
//! observes a half-built node and a structural failure discards
//! everything at once.
//!
//! Structural rules, enforced per token:
//! - the first tag must be `html`, and it is the only root;
//! - opening tags must resolve in the catalog;
//! - a closing tag must name the innermost open tag, and the whole
//!   parse fails on a mismatch;
//! - at end of input the document must be non-empty with no open tags
//!   remaining.

use crate::catalog::TagKind;
use crate::error::StructuralError;
use crate::tokenizer::{TagToken, TokenKind, tokenize};
use crate::types::Node;

mod stack;

use stack::{OpenStack, OpenTag};

/// Parses `text` into a single rooted tag tree.
pub fn parse(text: &str) -> Result<Node, StructuralError> {
    let mut builder = TreeBuilder::new();
    for token in tokenize(text) {
        builder.push_token(&token)?;
    }
    builder.finish()
}

#[derive(Debug)]
struct ArenaNode {
    id: u64,
    kind: TagKind,
    children: Vec<usize>,
}

/// Token-driven builder. Feed tokens in order with [`push_token`],
/// then call [`finish`] to run the end-of-stream checks and take the
/// tree.
///
/// [`push_token`]: TreeBuilder::push_token
/// [`finish`]: TreeBuilder::finish
#[derive(Debug, Default)]
pub struct TreeBuilder {
    arena: Vec<ArenaNode>,
    root: Option<usize>,
    stack: OpenStack,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_token(&mut self, token: &TagToken<'_>) -> Result<(), StructuralError> {
        // The root gate compares the name only, so a stray leading
        // close falls through to the unexpected-close arm below.
        if self.root.is_none() && token.name != TagKind::Html.name() {
            return Err(StructuralError::RootNotHtml {
                found: token.name.to_string(),
            });
        }
        if self.root.is_some() && self.stack.is_empty() {
            return Err(StructuralError::MultipleRoots {
                found: token.name.to_string(),
            });
        }

        match token.kind {
            TokenKind::Open => {
                let kind =
                    TagKind::create(token.name).ok_or_else(|| StructuralError::UnsupportedTag {
                        name: token.name.to_string(),
                    })?;
                let id = parse_id(token.id);
                let index = self.arena.len();
                self.arena.push(ArenaNode {
                    id,
                    kind,
                    children: Vec::new(),
                });

                match self.stack.current() {
                    None => {
                        log::debug!(target: "markup.tree_builder", "got root tag <{}>", kind.name());
                        self.root = Some(index);
                    }
                    Some(parent) => {
                        log::debug!(
                            target: "markup.tree_builder",
                            "got tag <{}>, child of <{}>",
                            kind.name(),
                            parent.kind.name()
                        );
                        self.arena[parent.index].children.push(index);
                    }
                }
                self.stack.push(OpenTag { index, kind });
            }
            TokenKind::Close => {
                let Some(top) = self.stack.current() else {
                    return Err(StructuralError::UnexpectedClose {
                        name: token.name.to_string(),
                    });
                };
                if token.name != top.kind.name() {
                    // The node stays linked and fully owned; the whole
                    // tree is dropped with the builder when this error
                    // propagates. No in-place payload disposal.
                    return Err(StructuralError::MismatchedClose {
                        expected: top.kind.name().to_string(),
                        found: token.name.to_string(),
                    });
                }
                self.stack.pop();
            }
        }
        Ok(())
    }

    /// End-of-stream checks, then conversion of the arena into the
    /// exclusively-owned tree.
    pub fn finish(self) -> Result<Node, StructuralError> {
        let Some(root_index) = self.root else {
            return Err(StructuralError::EmptyDocument);
        };
        if let Some(top) = self.stack.current() {
            return Err(StructuralError::UnclosedTags {
                innermost: top.kind.name().to_string(),
                open: self.stack.len(),
            });
        }
        log::debug!(
            target: "markup.tree_builder",
            "built {} node(s), max open depth {}",
            self.arena.len(),
            self.stack.max_depth()
        );
        Ok(into_tree(self.arena, root_index))
    }
}

/// Digits of the `id` attribute, defaulting to 0 when absent or
/// unparsable. Attribute identity is best-effort and never fatal.
fn parse_id(digits: &str) -> u64 {
    digits.parse().unwrap_or(0)
}

fn into_tree(mut arena: Vec<ArenaNode>, root_index: usize) -> Node {
    let mut built: Vec<Node> = Vec::with_capacity(arena.len());

    // Iterative postorder over the arena. First visit schedules the
    // node and descends; on the second visit all descendants are on
    // `built`, and the node's direct children are the last
    // `child_count` entries in document order.
    let mut stack: Vec<(usize, bool)> = vec![(root_index, false)];
    while let Some((index, visited)) = stack.pop() {
        if !visited {
            stack.push((index, true));
            // Children pushed in reverse so they are visited, and land
            // on `built`, in document order.
            for &child_index in arena[index].children.iter().rev() {
                stack.push((child_index, false));
            }
            continue;
        }

        let entry = &mut arena[index];
        let child_count = entry.children.len();
        entry.children.clear();

        let mut children = Vec::with_capacity(child_count);
        for _ in 0..child_count {
            children.push(built.pop().expect("child already built in postorder"));
        }
        children.reverse();

        built.push(Node {
            id: entry.id,
            kind: entry.kind,
            children,
        });
    }

    debug_assert_eq!(built.len(), 1, "postorder must build exactly the root");
    built.pop().expect("exactly one root node")
}
