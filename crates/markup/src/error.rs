//! Structural parse errors.
//!
//! The taxonomy is closed and every variant is fatal to the parse that
//! raised it: malformed text between tags is tolerated by the
//! tokenizer, but malformed tag *structure* always aborts and no
//! partial tree escapes.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StructuralError {
    /// The first tag in the document is not `html`.
    RootNotHtml { found: String },
    /// A second top-level tag appeared after the root fully closed.
    MultipleRoots { found: String },
    /// An opening tag's name is outside the supported catalog.
    UnsupportedTag { name: String },
    /// A closing tag arrived before any tag was opened.
    UnexpectedClose { name: String },
    /// A closing tag does not name the innermost open tag.
    MismatchedClose { expected: String, found: String },
    /// The input ended with tags still open.
    UnclosedTags { innermost: String, open: usize },
    /// The input contains no tags at all.
    EmptyDocument,
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralError::RootNotHtml { found } => {
                write!(f, "first tag must be <html>, found <{found}>")
            }
            StructuralError::MultipleRoots { found } => {
                write!(f, "only one root tag is allowed, found second root <{found}>")
            }
            StructuralError::UnsupportedTag { name } => {
                write!(f, "only <html>, <meta> and <p> tags are supported, found <{name}>")
            }
            StructuralError::UnexpectedClose { name } => {
                write!(f, "closing tag </{name}> has no corresponding opening tag")
            }
            StructuralError::MismatchedClose { expected, found } => {
                write!(f, "mismatched closing tag: expected </{expected}>, found </{found}>")
            }
            StructuralError::UnclosedTags { innermost, open } => {
                write!(f, "input ended with {open} unclosed tag(s), innermost <{innermost}>")
            }
            StructuralError::EmptyDocument => write!(f, "document contains no tags"),
        }
    }
}

impl std::error::Error for StructuralError {}

#[cfg(test)]
mod tests {
    use super::StructuralError;

    #[test]
    fn display_names_the_offending_and_expected_tags() {
        let error = StructuralError::MismatchedClose {
            expected: "p".to_string(),
            found: "html".to_string(),
        };
        let message = error.to_string();
        assert!(
            message.contains("</p>") && message.contains("</html>"),
            "expected both tag names in message, got: {message}"
        );
    }
}
