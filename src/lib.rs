//! # newmm-rs
//!
//! A fast Thai word segmenter written in Rust.
//!
//! Text is cut by dictionary maximal matching, constrained by Thai Character
//! Cluster (TCC) boundaries, with a one-word lookahead that avoids greedy
//! matches stranding characters no dictionary word covers. This is the
//! "newmm" engine known from PyThaiNLP.
//!
//! ## Quick Start
//!
//! ```rust
//! use newmm_rs::{Dictionary, Segmenter};
//!
//! let dict = Dictionary::from_words(["ฉัน", "ไป", "โรงเรียน"]).unwrap();
//! let segmenter = Segmenter::new(dict);
//!
//! assert_eq!(segmenter.segment("ฉันไปโรงเรียน"), vec!["ฉัน", "ไป", "โรงเรียน"]);
//! ```
//!
//! ## Dictionary Files
//!
//! A dictionary file holds one word per line. [`Dictionary::load`] falls back
//! to a small built-in word list when the file can't be read, while
//! [`Dictionary::open`] reports the error instead.
//!
//! ```rust,no_run
//! use std::path::Path;
//! use newmm_rs::{Dictionary, Segmenter};
//!
//! let dict = Dictionary::load(Some(Path::new("thai_words.txt"))).unwrap();
//! let tokens = Segmenter::new(dict).tokenize("วันนี้อากาศดีมาก");
//! for token in &tokens {
//!     println!("{}", token);
//! }
//! ```
//!
//! ## Python Bindings
//!
//! This library can be compiled as a Python extension module with the
//! `python` feature.

pub mod codepoint;
pub mod dictionary;
pub mod error;
pub mod segmenter;
pub mod tcc;
pub mod token;
pub mod trie;

// Python bindings (only compiled when the "python" feature is enabled)
#[cfg(feature = "python")]
pub mod python;

// Re-export main types for convenience
pub use codepoint::{decode, Codepoint};
pub use dictionary::{Dictionary, DEFAULT_WORDS};
pub use error::{Error, Result};
pub use segmenter::{segment_with_source, SegmentOptions, Segmenter};
pub use tcc::ThaiCharClass;
pub use token::{Span, Token, TokenKind};
pub use trie::{Trie, TrieBuilder, TrieNode};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Segment `text` with the built-in dictionary
pub fn segment(text: &str) -> Result<Vec<&str>> {
    Ok(Segmenter::new(Dictionary::default_shared()?).segment(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_pipeline() {
        let dict = Dictionary::from_words(["ภาษา", "ภาษาไทย", "ไทย", "คน"]).unwrap();
        let segmenter = Segmenter::new(dict);

        let text = "คนไทย ภาษาไทย 2024";
        let tokens = segmenter.tokenize(text);

        assert_eq!(tokens[0].text, "คน");
        assert_eq!(tokens[1].text, "ไทย");
        // Longest match
        assert_eq!(tokens[3].text, "ภาษาไทย");
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Number);

        let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn test_default_segment() {
        assert_eq!(
            segment("ฉันไปโรงเรียน").unwrap(),
            vec!["ฉั", "น", "ไป", "โรง", "เรี", "ยน"]
        );
    }
}
