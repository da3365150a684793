//! The segmenter implementing dictionary maximal matching.
//!
//! One left-to-right pass over the input. At every position the longest
//! dictionary word wins unless it strands an un-dictionaried Thai character
//! that a shorter word would have avoided. Text the dictionary does not
//! cover is cut into runs of Latin letters, digits or blanks, or into single
//! Thai Character Clusters.

use std::path::Path;

use serde::Deserialize;
use tracing::{trace, warn};

use crate::codepoint::{self, decode_at, Codepoint};
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::tcc;
use crate::token::{self, Span, Token, TokenKind};
use crate::trie::Trie;

/// Options controlling the segmenter output
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SegmentOptions {
    /// Keep whitespace-only tokens in the output
    pub keep_whitespace: bool,
    /// Stop after this many tokens. `None` means unbounded.
    pub max_tokens: Option<usize>,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        SegmentOptions {
            keep_whitespace: true,
            max_tokens: None,
        }
    }
}

/// Character classes grouped into a single token when no word applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunClass {
    Blank,
    Letter,
    Digit,
    Single,
}

impl RunClass {
    fn of(cp: u32) -> Self {
        if codepoint::is_blank(cp) {
            RunClass::Blank
        } else if codepoint::is_ascii_letter(cp) {
            RunClass::Letter
        } else if codepoint::is_ascii_digit(cp) {
            RunClass::Digit
        } else {
            RunClass::Single
        }
    }

    fn continues_with(self, cp: u32) -> bool {
        match self {
            RunClass::Blank => codepoint::is_blank(cp),
            RunClass::Letter => codepoint::is_ascii_letter(cp),
            RunClass::Digit => codepoint::is_ascii_digit(cp) || cp == '.' as u32 || cp == ',' as u32,
            RunClass::Single => false,
        }
    }

    fn kind(self) -> TokenKind {
        match self {
            RunClass::Blank => TokenKind::Space,
            RunClass::Letter => TokenKind::Latin,
            RunClass::Digit => TokenKind::Number,
            RunClass::Single => TokenKind::Other,
        }
    }
}

/// End of the dictionary word chosen at `pos`, if any word starts there
fn dictionary_match(trie: &Trie, text: &[u8], pos: usize) -> Option<usize> {
    let lengths = trie.matching_prefixes(&text[pos..]);
    let best_end = pos + *lengths.last()?;

    if best_end == text.len() || trie.has_prefix(&text[best_end..]) {
        return Some(best_end);
    }

    // The longest word runs into text no word starts with. If that text is
    // Thai, take the longest shorter word that is followed by a word.
    let stranded_thai = decode_at(text, best_end).is_some_and(|cp| cp.is_thai());
    if stranded_thai {
        let shorter = lengths.iter().rev().skip(1).map(|len| pos + len);
        for end in shorter {
            if trie.has_prefix(&text[end..]) {
                return Some(end);
            }
        }
    }

    Some(best_end)
}

/// End and kind of the run of same-class non-Thai characters at `pos`
fn non_thai_run(text: &[u8], pos: usize, first: Codepoint) -> (usize, TokenKind) {
    let class = RunClass::of(first.value);
    let mut end = pos + first.len;

    while let Some(cp) = decode_at(text, end) {
        if !class.continues_with(cp.value) {
            break;
        }
        end += cp.len;
    }

    (end, class.kind())
}

/// Segment `text` against `trie`, returning contiguous, non-empty spans
pub fn segment_spans(trie: &Trie, text: &[u8], options: &SegmentOptions) -> Vec<Span> {
    let boundaries = tcc::boundaries(text);
    let mut next_boundary = 0;
    let mut spans = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        if options.max_tokens.is_some_and(|cap| spans.len() >= cap) {
            warn!(
                cap = spans.len(),
                remaining = text.len() - pos,
                "token limit reached, output truncated"
            );
            break;
        }

        let (end, kind) = if let Some(end) = dictionary_match(trie, text, pos) {
            (end, TokenKind::Word)
        } else {
            // pos < text.len(), so there is a codepoint to decode
            let Some(cp) = decode_at(text, pos) else {
                break;
            };
            if codepoint::is_non_thai(cp.value) {
                non_thai_run(text, pos, cp)
            } else {
                while next_boundary < boundaries.len() && boundaries[next_boundary] <= pos {
                    next_boundary += 1;
                }
                let end = boundaries.get(next_boundary).copied().unwrap_or(text.len());
                (end, TokenKind::Cluster)
            }
        };

        let span = Span {
            start: pos,
            end,
            kind,
        };
        if options.keep_whitespace || !token::is_whitespace(kind, &text[pos..end]) {
            spans.push(span);
        }
        pos = end;
    }

    trace!(bytes = text.len(), tokens = spans.len(), "segmented text");
    spans
}

/// The main segmenter
#[derive(Debug, Clone)]
pub struct Segmenter {
    dict: Dictionary,
    options: SegmentOptions,
}

impl Segmenter {
    /// Create a segmenter over `dict` with default options
    pub fn new(dict: Dictionary) -> Self {
        Segmenter::with_options(dict, SegmentOptions::default())
    }

    /// Create a segmenter with explicit options
    pub fn with_options(dict: Dictionary, options: SegmentOptions) -> Self {
        Segmenter { dict, options }
    }

    /// Get the dictionary
    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// Get the options
    pub fn options(&self) -> &SegmentOptions {
        &self.options
    }

    /// Segment raw bytes into spans
    pub fn segment_spans(&self, text: &[u8]) -> Vec<Span> {
        segment_spans(self.dict.trie(), text, &self.options)
    }

    /// Segment a string into word slices
    pub fn segment<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.segment_spans(text.as_bytes())
            .into_iter()
            .map(|span| &text[span.start..span.end])
            .collect()
    }

    /// Segment possibly malformed UTF-8. Bad bytes become single-byte codepoints.
    pub fn segment_bytes<'t>(&self, text: &'t [u8]) -> Vec<&'t [u8]> {
        self.segment_spans(text)
            .into_iter()
            .map(|span| &text[span.start..span.end])
            .collect()
    }

    /// Segment a string into tokens carrying offsets and kinds
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        self.segment_spans(text.as_bytes())
            .into_iter()
            .map(|span| {
                Token::with_text(
                    text[span.start..span.end].to_string(),
                    span.start,
                    span.len(),
                    span.kind,
                )
            })
            .collect()
    }
}

/// Load a dictionary from `source` (or the built-in list), segment `text`
/// once and drop the dictionary.
pub fn segment_with_source<'t>(text: &'t str, source: Option<&Path>) -> Result<Vec<&'t str>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    let segmenter = Segmenter::new(Dictionary::load(source)?);
    Ok(segmenter.segment(text))
}
