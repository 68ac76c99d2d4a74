//! Restricted HTML-like markup: tokenizer, tree builder, renderer.
//!
//! The pipeline is `&str` → [`tokenize`] → [`TreeBuilder`] → owned
//! [`Node`] tree → [`render`]. Only the closed catalog set (`html`,
//! `meta`, `p`) is renderable; documents must satisfy the builder's
//! structural rules or parsing fails with a [`StructuralError`] and no
//! partial tree is exposed.
//!
//! [`parse`] wires the whole pipeline for the common case:
//!
//! ```
//! let tree = markup::parse("<html><p id=7></p></html>").unwrap();
//! assert_eq!(markup::node_count(&tree), 2);
//!
//! let mut out = Vec::new();
//! markup::render(&tree, &mut out).unwrap();
//! ```

mod catalog;
mod error;
mod render;
mod tokenizer;
mod traverse;
mod tree_builder;
mod types;

pub use crate::catalog::TagKind;
pub use crate::error::StructuralError;
pub use crate::render::render;
pub use crate::tokenizer::{TagToken, TokenKind, Tokenizer, tokenize};
pub use crate::traverse::{find_by_id, node_count, walk};
pub use crate::tree_builder::{TreeBuilder, parse};
pub use crate::types::Node;
