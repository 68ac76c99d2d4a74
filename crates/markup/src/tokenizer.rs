//! Tag tokenizer for the restricted markup grammar.
//!
//! Recognized markers: `<name [id = NNN]>` and `</name [id = NNN]>`,
//! where `name` is any run of non-whitespace bytes other than `>` and
//! the optional `id` attribute carries ASCII digits. Newlines directly
//! after a marker are consumed with it.
//!
//! Tolerance rules (intentional):
//! - Text between markers is skipped silently, never tokenized.
//! - A candidate starting at `<` that does not complete the grammar is
//!   skipped, resuming the scan one byte later. Only the tree builder
//!   decides what is fatal.
//! - The `id` attribute keyword matches ASCII-case-insensitively; the
//!   tag name is captured in its original case and left to the
//!   catalog's exact matching.

use memchr::memchr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Open,
    Close,
}

/// One recognized tag marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagToken<'a> {
    pub kind: TokenKind,
    /// Tag name as captured, original case.
    pub name: &'a str,
    /// Digits of the `id` attribute; empty when absent.
    pub id: &'a str,
}

/// Lazy, single-pass token source over `input`.
///
/// The iterator is consumed by value and cannot be rewound; call
/// [`tokenize`] again to re-scan from the start.
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

pub fn tokenize(input: &str) -> Tokenizer<'_> {
    Tokenizer { input, pos: 0 }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = TagToken<'a>;

    fn next(&mut self) -> Option<TagToken<'a>> {
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() {
            let Some(rel) = memchr(b'<', &bytes[self.pos..]) else {
                self.pos = bytes.len();
                return None;
            };
            let start = self.pos + rel;
            match scan_marker(self.input, start) {
                Some((token, next_pos)) => {
                    self.pos = next_pos;
                    log::trace!(target: "markup.tokenizer", "emit token: {token:?}");
                    return Some(token);
                }
                None => {
                    // Malformed candidate: skip the `<` and keep scanning.
                    self.pos = start + 1;
                }
            }
        }
        None
    }
}

/// Attempts to match one full marker starting at the `<` at `start`.
///
/// Returns the token and the position just past it (including any
/// trailing CR/LF run), or `None` when the candidate is malformed.
fn scan_marker(input: &str, start: usize) -> Option<(TagToken<'_>, usize)> {
    let bytes = input.as_bytes();
    let len = bytes.len();
    debug_assert_eq!(bytes[start], b'<');

    let mut j = start + 1;
    let kind = if j < len && bytes[j] == b'/' {
        j += 1;
        TokenKind::Close
    } else {
        TokenKind::Open
    };

    // Tag name: non-empty run of non-whitespace bytes other than '>'.
    // Slice endpoints land on ASCII structural bytes, so they are
    // always UTF-8 char boundaries even for multi-byte name content.
    let name_start = j;
    while j < len && !bytes[j].is_ascii_whitespace() && bytes[j] != b'>' {
        j += 1;
    }
    if j == name_start {
        return None;
    }
    debug_assert!(input.is_char_boundary(name_start));
    debug_assert!(input.is_char_boundary(j));
    let name = &input[name_start..j];

    let skip_whitespace = |j: &mut usize| {
        while *j < len && bytes[*j].is_ascii_whitespace() {
            *j += 1;
        }
    };

    skip_whitespace(&mut j);
    let mut id = "";
    if j < len && bytes[j] != b'>' {
        // Whatever follows the name must be the id attribute.
        if j + 2 > len || !bytes[j..j + 2].eq_ignore_ascii_case(b"id") {
            return None;
        }
        j += 2;
        skip_whitespace(&mut j);
        if j >= len || bytes[j] != b'=' {
            return None;
        }
        j += 1;
        skip_whitespace(&mut j);
        let digits_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j == digits_start {
            return None;
        }
        id = &input[digits_start..j];
        skip_whitespace(&mut j);
    }

    if j >= len || bytes[j] != b'>' {
        return None;
    }
    j += 1;
    while j < len && (bytes[j] == b'\r' || bytes[j] == b'\n') {
        j += 1;
    }

    Some((TagToken { kind, name, id }, j))
}
