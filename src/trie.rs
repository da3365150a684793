//! Trie data structure for dictionary-based segmentation.
//!
//! The Trie stores words as sequences of codepoints and answers "which
//! dictionary words are prefixes of the text at this position" queries
//! during segmentation.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::codepoint::codepoints;
use crate::error::{Error, Result};

/// A node in the Trie
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    /// Children nodes, keyed by codepoint
    pub children: HashMap<u32, TrieNode>,
    /// Whether this node marks the end of a dictionary word
    pub is_end: bool,
}

impl TrieNode {
    /// Create a new empty node
    pub fn new() -> Self {
        TrieNode::default()
    }
}

/// A Trie for storing and looking up Thai words
#[derive(Debug, Default, Clone)]
pub struct Trie {
    /// The root node
    root: TrieNode,
    /// Number of distinct words in the trie
    word_count: usize,
}

fn trim_blank(mut word: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = word {
        if !first.is_ascii_whitespace() {
            break;
        }
        word = rest;
    }
    while let [rest @ .., last] = word {
        if !last.is_ascii_whitespace() {
            break;
        }
        word = rest;
    }
    word
}

impl Trie {
    /// Create a new empty Trie
    pub fn new() -> Self {
        Trie::default()
    }

    /// Get the number of words in the trie
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Check if the trie is empty
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Add a word to the trie.
    ///
    /// Surrounding whitespace is trimmed and an empty result is ignored.
    /// Returns `true` if the word was not already present.
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        self.insert_bytes(word.as_bytes())
    }

    /// Add a word given as raw (possibly malformed) UTF-8
    pub fn insert_bytes(&mut self, word: &[u8]) -> Result<bool> {
        let word = trim_blank(word);
        if word.is_empty() {
            return Ok(false);
        }

        let mut current = &mut self.root;
        for (_, cp) in codepoints(word) {
            if !current.children.contains_key(&cp.value) {
                current.children.try_reserve(1)?;
            }
            current = current.children.entry(cp.value).or_default();
        }

        if current.is_end {
            return Ok(false);
        }
        current.is_end = true;
        self.word_count += 1;
        Ok(true)
    }

    /// Insert every non-empty line of newline-delimited content.
    ///
    /// Trailing `\r` is stripped, so CRLF files load the same as LF files.
    /// Returns the number of non-empty lines seen.
    pub fn load_lines(&mut self, content: &[u8]) -> Result<usize> {
        let mut count = 0;
        for line in content.split(|&b| b == b'\n') {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            if line.is_empty() {
                continue;
            }
            self.insert_bytes(line)?;
            count += 1;
        }
        Ok(count)
    }

    /// Load a one-word-per-line dictionary file.
    ///
    /// An unreadable path is reported as [`Error::Io`]; the caller decides
    /// whether to fall back to the built-in word list.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let content = fs::read(path).map_err(|e| Error::io(path, e))?;
        self.load_lines(&content)
    }

    /// Walk the trie by one codepoint from `current` (the root when `None`),
    /// returning the next node if it exists
    pub fn walk<'a>(&'a self, cp: u32, current: Option<&'a TrieNode>) -> Option<&'a TrieNode> {
        let node = current.unwrap_or(&self.root);
        node.children.get(&cp)
    }

    /// Check if a word exists in the trie
    pub fn contains(&self, word: &str) -> bool {
        let word = trim_blank(word.as_bytes());
        let mut current = None;

        for (_, cp) in codepoints(word) {
            match self.walk(cp.value, current) {
                Some(node) => current = Some(node),
                None => return false,
            }
        }

        current.is_some_and(|node| node.is_end)
    }

    /// Byte lengths of every dictionary word that is a prefix of `text`.
    ///
    /// The walk follows a single path, so there is at most one word per
    /// length. Lengths come out shortest first.
    pub fn matching_prefixes(&self, text: &[u8]) -> Vec<usize> {
        let mut lengths = Vec::new();
        let mut current = None;

        for (at, cp) in codepoints(text) {
            let Some(node) = self.walk(cp.value, current) else {
                break;
            };
            if node.is_end {
                lengths.push(at + cp.len);
            }
            current = Some(node);
        }

        lengths
    }

    /// Whether any dictionary word is a prefix of `text`
    pub fn has_prefix(&self, text: &[u8]) -> bool {
        let mut current = None;

        for (_, cp) in codepoints(text) {
            match self.walk(cp.value, current) {
                Some(node) if node.is_end => return true,
                Some(node) => current = Some(node),
                None => return false,
            }
        }

        false
    }
}

/// Builder for loading a Trie from word lists and dictionary files
#[derive(Debug, Default)]
pub struct TrieBuilder {
    trie: Trie,
}

impl TrieBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        TrieBuilder { trie: Trie::new() }
    }

    /// Add words from an iterator
    pub fn add_words<I, S>(&mut self, words: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.trie.insert(word.as_ref())?;
        }
        Ok(self)
    }

    /// Load words from newline-delimited text
    pub fn load_lines(&mut self, content: &str) -> Result<usize> {
        self.trie.load_lines(content.as_bytes())
    }

    /// Load words from a dictionary file
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        self.trie.load_file(path)
    }

    /// The trie built so far
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Build and return the Trie
    pub fn build(self) -> Trie {
        self.trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trie_insert_and_lookup() {
        let mut trie = Trie::new();

        assert!(trie.insert("ไป").unwrap());
        assert!(trie.insert("โรงเรียน").unwrap());

        assert!(trie.contains("ไป"));
        assert!(trie.contains("โรงเรียน"));
        assert!(!trie.contains("โรง")); // Partial word
        assert!(!trie.contains("โรงเรียนดี")); // Non-existent
        assert!(!trie.contains(""));
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut trie = Trie::new();
        assert!(trie.insert("ฉัน").unwrap());
        assert!(!trie.insert("ฉัน").unwrap());
        assert!(!trie.insert("  ฉัน\r\n").unwrap());
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_insert_trims_and_skips_blank() {
        let mut trie = Trie::new();
        assert!(!trie.insert("  \t ").unwrap());
        assert!(trie.is_empty());

        trie.insert("\tมา ").unwrap();
        assert!(trie.contains("มา"));
    }

    #[test]
    fn test_trie_walk() {
        let mut trie = Trie::new();
        trie.insert("ไป").unwrap();

        trie.insert("ไปมา").unwrap();

        let first = trie.walk('ไ' as u32, None).unwrap();
        assert!(!first.is_end);

        let second = trie.walk('ป' as u32, Some(first)).unwrap();
        assert!(second.is_end);
        assert!(trie.walk('ม' as u32, Some(second)).is_some());

        // No word starts with "ป", and nothing follows "ไป" with "ก"
        assert!(trie.walk('ป' as u32, None).is_none());
        assert!(trie.walk('ก' as u32, Some(second)).is_none());

        let lengths = trie.matching_prefixes("ไปมาก".as_bytes());
        assert_eq!(lengths, vec!["ไป".len(), "ไปมา".len()]);
    }

    #[test]
    fn test_matching_prefixes() {
        let mut trie = Trie::new();
        for w in ["โรง", "โรงเรียน", "เรียน"] {
            trie.insert(w).unwrap();
        }

        let text = "โรงเรียนดี".as_bytes();
        assert_eq!(
            trie.matching_prefixes(text),
            vec!["โรง".len(), "โรงเรียน".len()]
        );
        assert!(trie.has_prefix(text));

        assert!(trie.matching_prefixes("ดี".as_bytes()).is_empty());
        assert!(!trie.has_prefix("ดี".as_bytes()));
        assert!(trie.matching_prefixes(b"").is_empty());
    }

    #[test]
    fn test_matching_prefixes_partial_word() {
        let mut trie = Trie::new();
        trie.insert("โรงเรียน").unwrap();

        // Walk reaches into the word but never hits an end node
        assert!(trie.matching_prefixes("โรงเรี".as_bytes()).is_empty());
    }

    #[test]
    fn test_load_lines_crlf() {
        let mut trie = Trie::new();
        let count = trie.load_lines("ฉัน\r\nไป\n\nโรงเรียน\r\n".as_bytes()).unwrap();

        assert_eq!(count, 3);
        assert_eq!(trie.len(), 3);
        assert!(trie.contains("ฉัน"));
        assert!(trie.contains("โรงเรียน"));
    }

    #[test]
    fn test_load_missing_file() {
        let mut trie = Trie::new();
        let err = trie.load_file("/nonexistent/dict.txt").unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_trie_builder() {
        let mut builder = TrieBuilder::new();
        builder.add_words(["ไป", "มา"]).unwrap();
        builder.load_lines("ไป\nคน\n").unwrap();
        assert_eq!(builder.trie().len(), 3);

        let trie = builder.build();
        assert!(trie.contains("คน"));
    }
}
