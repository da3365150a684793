//! Dictionary handles.
//!
//! A [`Dictionary`] owns an immutable trie behind an `Arc`, so one loaded
//! dictionary can back many segmenters (and threads) at once. Dropping the
//! last handle releases the trie.

use std::path::Path;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use crate::error::Result;
use crate::trie::{Trie, TrieBuilder};

/// Built-in word list used when no dictionary file is given or it can't be read
pub const DEFAULT_WORDS: &[&str] = &[
    "ไป", "มา", "ใน", "ที่", "และ", "หรือ", "คือ", "เป็น", "มี", "ได้",
    "จะ", "ไม่", "ของ", "กับ", "ก็", "ให้", "ถ้า", "แล้ว", "เมื่อ", "ซึ่ง",
    "นี้", "นั้น", "อยู่", "เพื่อ", "การ", "ความ", "จาก", "โดย", "อย่าง", "ถึง",
    "ว่า", "เอง", "ทุก", "แต่", "ตาม", "นัก", "ยัง", "ผล", "ผู้", "คน",
    "วัน", "ปี", "เดือน", "ครั้ง", "ตัว", "คน", "สิ่ง", "งาน", "ข้อ", "รับ",
];

static DEFAULT_DICTIONARY: OnceCell<Dictionary> = OnceCell::new();

/// A loaded, read-only dictionary
#[derive(Debug, Clone)]
pub struct Dictionary {
    trie: Arc<Trie>,
}

impl Dictionary {
    /// Wrap an already built trie
    pub fn from_trie(trie: Trie) -> Self {
        Dictionary {
            trie: Arc::new(trie),
        }
    }

    /// Build a dictionary from a list of words
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = TrieBuilder::new();
        builder.add_words(words)?;
        Ok(Dictionary::from_trie(builder.build()))
    }

    /// Build a fresh copy of the built-in dictionary
    pub fn builtin() -> Result<Self> {
        Dictionary::from_words(DEFAULT_WORDS)
    }

    /// Shared handle to the lazily built built-in dictionary.
    ///
    /// A failed build is returned and retried on the next call.
    pub fn default_shared() -> Result<Self> {
        DEFAULT_DICTIONARY
            .get_or_try_init(Dictionary::builtin)
            .cloned()
    }

    /// Load a dictionary file, failing if it cannot be read
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut builder = TrieBuilder::new();
        let lines = builder.load_file(path)?;
        let trie = builder.build();
        debug!(path = %path.display(), lines, words = trie.len(), "loaded dictionary");
        Ok(Dictionary::from_trie(trie))
    }

    /// Load a dictionary from `source`, or the built-in word list.
    ///
    /// An unreadable file falls back to the built-in list with a warning.
    /// Allocation failures are still returned.
    pub fn load(source: Option<&Path>) -> Result<Self> {
        let Some(path) = source else {
            return Dictionary::builtin();
        };

        match Dictionary::open(path) {
            Ok(dict) => Ok(dict),
            Err(e) if e.is_io() => {
                warn!(error = %e, "falling back to built-in dictionary");
                Dictionary::builtin()
            }
            Err(e) => Err(e),
        }
    }

    /// Get a reference to the trie
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Get the Arc reference to the trie (for sharing)
    pub fn trie_arc(&self) -> Arc<Trie> {
        Arc::clone(&self.trie)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Whether the dictionary holds no words
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Check if a word is in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.trie.contains(word)
    }

    /// Release this handle. The trie is freed once no other handle shares it.
    pub fn release(self) {
        drop(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_words() {
        let dict = Dictionary::builtin().unwrap();
        // "คน" appears twice in the list
        assert_eq!(dict.len(), DEFAULT_WORDS.len() - 1);
        assert!(dict.contains("ไป"));
        assert!(dict.contains("ครั้ง"));
        assert!(!dict.contains("โรงเรียน"));
    }

    #[test]
    fn test_default_shared() {
        let a = Dictionary::default_shared().unwrap();
        let b = Dictionary::default_shared().unwrap();
        assert!(Arc::ptr_eq(&a.trie_arc(), &b.trie_arc()));
        assert_eq!(a.len(), 49);
        assert_eq!(a.len(), Dictionary::builtin().unwrap().len());
        for word in DEFAULT_WORDS {
            assert!(a.contains(word), "{} missing from the shared dictionary", word);
        }
    }

    #[test]
    fn test_load_none_uses_builtin() {
        let dict = Dictionary::load(None).unwrap();
        assert_eq!(dict.len(), 49);
    }

    #[test]
    fn test_load_missing_falls_back() {
        let dict = Dictionary::load(Some(Path::new("/nonexistent/dict.txt"))).unwrap();
        assert!(dict.contains("เป็น"));
    }

    #[test]
    fn test_open_missing_fails() {
        let err = Dictionary::open("/nonexistent/dict.txt").unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_release_keeps_shared_trie() {
        let dict = Dictionary::from_words(["ไป"]).unwrap();
        let other = dict.clone();
        dict.release();
        assert!(other.contains("ไป"));
    }
}
