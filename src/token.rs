//! Token representation for segmented Thai text.
//!
//! A Token is one contiguous piece of the input: a dictionary word, a run
//! of Latin letters, digits or blanks, or a single un-dictionaried cluster.

use serde::{Deserialize, Serialize};

use crate::codepoint::decode;

/// How a token was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TokenKind {
    /// Dictionary word
    #[default]
    Word,
    /// Run of ASCII letters
    Latin,
    /// Run of ASCII digits, possibly with `.` and `,`
    Number,
    /// Run of spaces and tabs
    Space,
    /// Thai text not covered by the dictionary, one cluster long
    Cluster,
    /// Any other single non-Thai codepoint
    Other,
}

impl TokenKind {
    /// Convert to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Word => "WORD",
            TokenKind::Latin => "LATIN",
            TokenKind::Number => "NUM",
            TokenKind::Space => "SPACE",
            TokenKind::Cluster => "TCC",
            TokenKind::Other => "OTHER",
        }
    }
}

/// Whether a token of `kind` spelling `text` is whitespace only.
///
/// Blank runs are whitespace, and so is a lone `Other` codepoint such as
/// `\n` or U+3000.
pub fn is_whitespace(kind: TokenKind, text: &[u8]) -> bool {
    match kind {
        TokenKind::Space => true,
        TokenKind::Other => decode(text)
            .and_then(|cp| char::from_u32(cp.value))
            .is_some_and(char::is_whitespace),
        _ => false,
    }
}

/// A byte range of the input together with its kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Starting byte offset
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// How the span was produced
    pub kind: TokenKind,
}

impl Span {
    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Spans produced by the segmenter are never empty
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// A single token from the segmentation process
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The raw text of the token
    pub text: String,

    /// Starting byte offset in the original string
    pub start: usize,

    /// Length in bytes
    pub len: usize,

    /// How this token was produced
    pub kind: TokenKind,
}

impl Token {
    /// Create a token with text and position
    pub fn with_text(text: String, start: usize, len: usize, kind: TokenKind) -> Self {
        Token {
            text,
            start,
            len,
            kind,
        }
    }

    /// Check if this token came from the dictionary
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// Check if this token is whitespace only
    pub fn is_space(&self) -> bool {
        is_whitespace(self.kind, self.text.as_bytes())
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.text, self.kind.as_str())
    }
}
