//! Catalog of supported tag payloads.
//!
//! The set is closed on purpose: the renderer only understands tags it
//! has a payload for, and an unknown name inside a marker is a
//! structural failure in the tree builder, not something to guess at.
//! Adding a tag means adding a variant here plus its match arms.

/// Payload for one supported tag name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagKind {
    Html,
    Meta,
    P,
}

impl TagKind {
    /// Looks up the payload for a tag name.
    ///
    /// Names are matched exactly; case folding is a tokenizer concern
    /// and never happens here. `None` means the name is outside the
    /// supported set.
    pub fn create(name: &str) -> Option<TagKind> {
        match name {
            "html" => Some(TagKind::Html),
            "meta" => Some(TagKind::Meta),
            "p" => Some(TagKind::P),
            _ => None,
        }
    }

    /// Canonical tag name, as it appears in markup.
    pub fn name(self) -> &'static str {
        match self {
            TagKind::Html => "html",
            TagKind::Meta => "meta",
            TagKind::P => "p",
        }
    }

    /// One line of render output for a node carrying this payload.
    pub fn render_line(self) -> &'static str {
        match self {
            TagKind::Html => "html tag rendered",
            TagKind::Meta => "meta tag rendered",
            TagKind::P => "p tag rendered",
        }
    }
}
